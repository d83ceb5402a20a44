use serde::Serialize;

use crate::models::matches::{Match, MatchStatus};
use crate::scoring::derivation::{current_set_number, leading_side, set_winners, sets_won, Side};
use crate::scoring::error::ScoreError;

pub const SCORE_UNAVAILABLE: &str = "score unavailable";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetLine {
    pub set_number: i32,
    pub home_points: i32,
    pub away_points: i32,
    pub winner: Side,
}

/// Derived score as every surface renders it.
///
/// When the stored points are inconsistent the view carries no numbers at
/// all and `score_available` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreView {
    pub score_available: bool,
    pub home_sets: Option<i32>,
    pub away_sets: Option<i32>,
    pub leader: Side,
    /// Only set while the match is live
    pub current_set: Option<i32>,
    pub sets: Vec<SetLine>,
    pub summary: String,
}

impl ScoreView {
    pub fn for_match(game: &Match) -> Self {
        match Self::derive(game) {
            Ok(view) => view,
            Err(e) => {
                tracing::warn!(
                    match_id = %game.id,
                    error = %e,
                    "Rendering placeholder for match with inconsistent score data"
                );
                Self::unavailable()
            }
        }
    }

    pub fn unavailable() -> Self {
        Self {
            score_available: false,
            home_sets: None,
            away_sets: None,
            leader: Side::Tied,
            current_set: None,
            sets: Vec::new(),
            summary: SCORE_UNAVAILABLE.to_string(),
        }
    }

    pub fn derive(game: &Match) -> Result<Self, ScoreError> {
        let home = game.home_points();
        let away = game.away_points();

        let home_sets = sets_won(home, away)?;
        let away_sets = sets_won(away, home)?;
        let winners = set_winners(home, away)?;

        let sets = home
            .unwrap_or_default()
            .iter()
            .zip(away.unwrap_or_default())
            .zip(winners)
            .enumerate()
            .map(|(i, ((h, a), winner))| SetLine {
                set_number: i as i32 + 1,
                home_points: *h,
                away_points: *a,
                winner,
            })
            .collect();

        let current_set = (game.status == MatchStatus::Live).then(|| current_set_number(home));

        let summary = match (game.status, current_set) {
            (MatchStatus::Scheduled, _) => "vs".to_string(),
            (MatchStatus::Live, Some(set)) => format!("{} - {} (Set {})", home_sets, away_sets, set),
            _ => format!("{} - {}", home_sets, away_sets),
        };

        Ok(Self {
            score_available: true,
            home_sets: Some(home_sets),
            away_sets: Some(away_sets),
            leader: leading_side(home_sets, away_sets, game.status),
            current_set,
            sets,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn game(status: MatchStatus, home: Option<Vec<i32>>, away: Option<Vec<i32>>) -> Match {
        Match {
            id: Uuid::new_v4(),
            home_team_id: Uuid::new_v4(),
            away_team_id: Uuid::new_v4(),
            match_date: Utc::now(),
            status,
            score_home_sets: 0,
            score_away_sets: 0,
            score_home_points: home,
            score_away_points: away,
            venue: Some("Sporthalle Nord".into()),
            league: Some("Regionalliga".into()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_live_view_shows_current_set() {
        let view = ScoreView::for_match(&game(
            MatchStatus::Live,
            Some(vec![25, 20, 25]),
            Some(vec![20, 25, 20]),
        ));
        assert!(view.score_available);
        assert_eq!(view.home_sets, Some(2));
        assert_eq!(view.away_sets, Some(1));
        assert_eq!(view.leader, Side::Home);
        assert_eq!(view.current_set, Some(4));
        assert_eq!(view.summary, "2 - 1 (Set 4)");
        assert_eq!(view.sets.len(), 3);
        assert_eq!(
            view.sets[1],
            SetLine { set_number: 2, home_points: 20, away_points: 25, winner: Side::Away }
        );
    }

    #[test]
    fn test_scheduled_view_has_no_leader_or_set() {
        let mut scheduled = game(MatchStatus::Scheduled, None, None);
        scheduled.score_home_sets = 5;
        let view = ScoreView::for_match(&scheduled);
        assert_eq!(view.leader, Side::Tied);
        assert_eq!(view.current_set, None);
        assert_eq!(view.summary, "vs");
        assert_eq!(view.home_sets, Some(0));
    }

    #[test]
    fn test_finished_view_ignores_stale_cache() {
        let mut finished = game(
            MatchStatus::Finished,
            Some(vec![20, 25, 22, 19]),
            Some(vec![25, 23, 25, 25]),
        );
        finished.score_home_sets = 3;
        let view = ScoreView::for_match(&finished);
        assert_eq!(view.home_sets, Some(1));
        assert_eq!(view.away_sets, Some(3));
        assert_eq!(view.leader, Side::Away);
        assert_eq!(view.current_set, None);
        assert_eq!(view.summary, "1 - 3");
    }

    #[test]
    fn test_inconsistent_points_render_placeholder() {
        let view = ScoreView::for_match(&game(MatchStatus::Live, Some(vec![25, 20]), Some(vec![25])));
        assert_eq!(view, ScoreView::unavailable());
        assert_eq!(view.summary, SCORE_UNAVAILABLE);
    }

    #[test]
    fn test_derive_is_repeatable() {
        let live = game(MatchStatus::Live, Some(vec![25, 25]), Some(vec![25, 23]));
        assert_eq!(ScoreView::derive(&live), ScoreView::derive(&live));
        assert_eq!(ScoreView::derive(&live).unwrap().summary, "1 - 0 (Set 3)");
    }
}
