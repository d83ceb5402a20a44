pub mod match_service;
pub mod score_events;
pub mod telemetry;

pub use match_service::{MatchService, MatchServiceError};
pub use score_events::ScoreEvents;
