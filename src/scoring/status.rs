use crate::models::matches::MatchStatus;
use crate::scoring::error::ScoreError;

// scheduled -> live -> finished, nothing else
impl MatchStatus {
    pub fn can_transition_to(&self, next: MatchStatus) -> bool {
        matches!(
            (self, next),
            (MatchStatus::Scheduled, MatchStatus::Live) | (MatchStatus::Live, MatchStatus::Finished)
        )
    }

    pub fn transition_to(&self, next: MatchStatus) -> Result<MatchStatus, ScoreError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(ScoreError::InvalidTransition { from: *self, to: next })
        }
    }

    /// Point arrays may only grow while the match is being played.
    pub fn accepts_score_updates(&self) -> bool {
        *self == MatchStatus::Live
    }

    pub fn ensure_accepts_score_updates(&self) -> Result<(), ScoreError> {
        if self.accepts_score_updates() {
            Ok(())
        } else {
            Err(ScoreError::MatchClosed { status: *self })
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self == MatchStatus::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_transitions() {
        assert_eq!(MatchStatus::Scheduled.transition_to(MatchStatus::Live), Ok(MatchStatus::Live));
        assert_eq!(MatchStatus::Live.transition_to(MatchStatus::Finished), Ok(MatchStatus::Finished));
    }

    #[test]
    fn test_live_cannot_be_skipped() {
        assert_eq!(
            MatchStatus::Scheduled.transition_to(MatchStatus::Finished),
            Err(ScoreError::InvalidTransition {
                from: MatchStatus::Scheduled,
                to: MatchStatus::Finished
            })
        );
    }

    #[test]
    fn test_finished_is_terminal() {
        for next in [MatchStatus::Scheduled, MatchStatus::Live, MatchStatus::Finished] {
            assert!(MatchStatus::Finished.transition_to(next).is_err());
        }
        assert!(MatchStatus::Finished.is_terminal());
        assert!(!MatchStatus::Live.is_terminal());
    }

    #[test]
    fn test_no_backward_or_self_transitions() {
        assert!(!MatchStatus::Live.can_transition_to(MatchStatus::Scheduled));
        assert!(!MatchStatus::Live.can_transition_to(MatchStatus::Live));
        assert!(!MatchStatus::Scheduled.can_transition_to(MatchStatus::Scheduled));
    }

    #[test]
    fn test_only_live_accepts_scores() {
        assert!(MatchStatus::Live.ensure_accepts_score_updates().is_ok());
        assert_eq!(
            MatchStatus::Finished.ensure_accepts_score_updates(),
            Err(ScoreError::MatchClosed { status: MatchStatus::Finished })
        );
        assert!(MatchStatus::Scheduled.ensure_accepts_score_updates().is_err());
    }
}
