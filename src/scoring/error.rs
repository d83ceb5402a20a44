use thiserror::Error;

use crate::models::matches::MatchStatus;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The two point arrays disagree on how many sets were played.
    /// Points at a data-entry bug upstream; render "score unavailable".
    #[error("Inconsistent score data: {sets_recorded} sets recorded against {opponent_sets_recorded}")]
    InconsistentScoreData {
        sets_recorded: usize,
        opponent_sets_recorded: usize,
    },

    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition { from: MatchStatus, to: MatchStatus },

    #[error("Match is {status}, scores can only change while it is live")]
    MatchClosed { status: MatchStatus },

    #[error("Negative point total in set {set_number}")]
    NegativePoints { set_number: usize },
}
