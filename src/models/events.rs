use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::matches::MatchStatus;
use crate::scoring::derivation::Side;

/// Messages published to subscribers of live match updates
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(tag = "event_type")]
pub enum MatchEvent {
    #[serde(rename = "match_status_changed")]
    MatchStatusChanged {
        match_id: Uuid,
        from: MatchStatus,
        to: MatchStatus,
        changed_at: DateTime<Utc>,
    },

    #[serde(rename = "live_score_update")]
    LiveScoreUpdate {
        match_id: Uuid,
        home_team_id: Uuid,
        away_team_id: Uuid,
        status: MatchStatus,
        home_sets: i32,
        away_sets: i32,
        home_points: Vec<i32>,
        away_points: Vec<i32>,
        leader: Side,
        current_set: Option<i32>,
        last_updated: DateTime<Utc>,
    },
}

impl MatchEvent {
    pub fn match_id(&self) -> Uuid {
        match self {
            MatchEvent::MatchStatusChanged { match_id, .. } => *match_id,
            MatchEvent::LiveScoreUpdate { match_id, .. } => *match_id,
        }
    }
}
