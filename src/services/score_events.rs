use std::sync::Arc;

use chrono::Utc;
use redis::AsyncCommands;
use tracing::{debug, error, warn};

use crate::models::events::MatchEvent;
use crate::models::matches::{Match, MatchStatus};
use crate::scoring::display::ScoreView;

pub const GLOBAL_CHANNEL: &str = "match:events:global";

pub fn match_channel(match_id: uuid::Uuid) -> String {
    format!("match:events:{}", match_id)
}

/// Publishes match events to redis for live score subscribers.
///
/// Publishing is best effort: a failure is logged and the write that
/// triggered it still succeeds.
#[derive(Clone, Debug)]
pub struct ScoreEvents {
    redis_client: Option<Arc<redis::Client>>,
}

impl ScoreEvents {
    pub fn new(redis_client: Option<Arc<redis::Client>>) -> Self {
        Self { redis_client }
    }

    pub async fn status_changed(&self, match_id: uuid::Uuid, from: MatchStatus, to: MatchStatus) {
        self.publish(&MatchEvent::MatchStatusChanged {
            match_id,
            from,
            to,
            changed_at: Utc::now(),
        })
        .await;
    }

    pub async fn score_updated(&self, game: &Match) {
        match live_score_event(game) {
            Some(event) => self.publish(&event).await,
            None => warn!("Skipping live score broadcast for match {}: score data unavailable", game.id),
        }
    }

    async fn publish(&self, event: &MatchEvent) {
        let Some(redis_client) = &self.redis_client else {
            return;
        };

        let message = match serde_json::to_string(event) {
            Ok(message) => message,
            Err(e) => {
                error!("Failed to serialize match event: {}", e);
                return;
            }
        };

        let mut conn = match redis_client.get_async_connection().await {
            Ok(conn) => conn,
            Err(e) => {
                error!("Failed to connect to redis for match event: {}", e);
                return;
            }
        };

        for channel in [GLOBAL_CHANNEL.to_string(), match_channel(event.match_id())] {
            let result: Result<i32, redis::RedisError> = conn.publish(channel.as_str(), message.as_str()).await;
            match result {
                Ok(receivers) => debug!("Published match event on {} to {} subscribers", channel, receivers),
                Err(e) => error!("Failed to publish match event on {}: {}", channel, e),
            }
        }
    }
}

/// Build the broadcast payload from the derived view, never the cached counts
pub fn live_score_event(game: &Match) -> Option<MatchEvent> {
    let view = ScoreView::derive(game).ok()?;
    Some(MatchEvent::LiveScoreUpdate {
        match_id: game.id,
        home_team_id: game.home_team_id,
        away_team_id: game.away_team_id,
        status: game.status,
        home_sets: view.home_sets.unwrap_or_default(),
        away_sets: view.away_sets.unwrap_or_default(),
        home_points: game.score_home_points.clone().unwrap_or_default(),
        away_points: game.score_away_points.clone().unwrap_or_default(),
        leader: view.leader,
        current_set: view.current_set,
        last_updated: game.updated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::derivation::Side;
    use uuid::Uuid;

    #[test]
    fn test_live_score_event_uses_derived_counts() {
        let game = Match {
            id: Uuid::new_v4(),
            home_team_id: Uuid::new_v4(),
            away_team_id: Uuid::new_v4(),
            match_date: Utc::now(),
            status: MatchStatus::Live,
            score_home_sets: 0,
            score_away_sets: 0,
            score_home_points: Some(vec![25, 25]),
            score_away_points: Some(vec![23, 27]),
            venue: None,
            league: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        match live_score_event(&game) {
            Some(MatchEvent::LiveScoreUpdate { home_sets, away_sets, leader, current_set, .. }) => {
                assert_eq!((home_sets, away_sets), (1, 1));
                assert_eq!(leader, Side::Tied);
                assert_eq!(current_set, Some(3));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_no_event_for_inconsistent_points() {
        let game = Match {
            id: Uuid::new_v4(),
            home_team_id: Uuid::new_v4(),
            away_team_id: Uuid::new_v4(),
            match_date: Utc::now(),
            status: MatchStatus::Live,
            score_home_sets: 0,
            score_away_sets: 0,
            score_home_points: Some(vec![25]),
            score_away_points: None,
            venue: None,
            league: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(live_score_event(&game).is_none());
    }

    #[test]
    fn test_match_channel_name() {
        let id = Uuid::nil();
        assert_eq!(match_channel(id), "match:events:00000000-0000-0000-0000-000000000000");
    }
}
