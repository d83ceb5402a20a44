use actix_web::{web, HttpResponse, Result};
use uuid::Uuid;

use crate::handlers::error_response::match_error_response;
use crate::models::common::ApiResponse;
use crate::models::matches::MatchListQuery;
use crate::services::MatchService;

/// Match cards for the public listing pages
#[tracing::instrument(
    name = "List matches",
    skip(query, match_service),
    fields(
        query = %query
    )
)]
pub async fn list_matches(
    query: web::Query<MatchListQuery>,
    match_service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    match match_service.list_match_cards(&query).await {
        Ok(cards) => {
            tracing::info!("Successfully retrieved {} matches", cards.len());
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                format!("Retrieved {} matches", cards.len()),
                cards,
            )))
        }
        Err(e) => Ok(match_error_response("Failed to retrieve matches", &e)),
    }
}

/// Detail page for a single match
#[tracing::instrument(
    name = "Get match",
    skip(match_service),
    fields(
        match_id = %match_id
    )
)]
pub async fn get_match(
    match_id: Uuid,
    match_service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    match match_service.get_match_card(match_id).await {
        Ok(card) => Ok(HttpResponse::Ok().json(ApiResponse::success("Match retrieved", card))),
        Err(e) => Ok(match_error_response("Failed to retrieve match", &e)),
    }
}
