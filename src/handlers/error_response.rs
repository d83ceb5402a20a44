use actix_web::HttpResponse;

use crate::models::common::ApiResponse;
use crate::scoring::error::ScoreError;
use crate::services::MatchServiceError;

/// Map a service failure onto the HTTP status the admin UI expects.
///
/// Inconsistent score data is a client-side data problem (400); state
/// machine violations and lost write races are conflicts (409).
pub fn match_error_response(context: &str, error: &MatchServiceError) -> HttpResponse {
    let body = ApiResponse::<()>::error_with_message(context, error.to_string());
    match error {
        MatchServiceError::NotFound(_) | MatchServiceError::ClubNotFound(_) => {
            tracing::warn!("{}: {}", context, error);
            HttpResponse::NotFound().json(body)
        }
        MatchServiceError::Score(ScoreError::InvalidTransition { .. })
        | MatchServiceError::Score(ScoreError::MatchClosed { .. })
        | MatchServiceError::Conflict(_) => {
            tracing::warn!("{}: {}", context, error);
            HttpResponse::Conflict().json(body)
        }
        MatchServiceError::Score(ScoreError::InconsistentScoreData { .. }) => {
            // Upstream data entry bug, worth an admin's attention
            tracing::error!("{}: {}", context, error);
            HttpResponse::BadRequest().json(body)
        }
        MatchServiceError::Score(ScoreError::NegativePoints { .. })
        | MatchServiceError::Validation(_) => {
            tracing::warn!("{}: {}", context, error);
            HttpResponse::BadRequest().json(body)
        }
        MatchServiceError::Database(e) => {
            tracing::error!("{}: {}", context, e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error_with_message(context, "Database error"))
        }
    }
}
