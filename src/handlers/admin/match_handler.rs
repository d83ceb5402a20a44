use actix_web::{web, HttpResponse, Result};
use uuid::Uuid;

use crate::handlers::error_response::match_error_response;
use crate::models::common::ApiResponse;
use crate::models::matches::{
    CreateMatchRequest, MatchListQuery, RecordSetRequest, ReplaceScoreRequest, UpdateMatchStatusRequest,
};
use crate::services::MatchService;

// POST /admin/matches
#[tracing::instrument(
    name = "Admin create match",
    skip(request, match_service),
    fields(
        home_team_id = %request.home_team_id,
        away_team_id = %request.away_team_id
    )
)]
pub async fn create_match(
    request: web::Json<CreateMatchRequest>,
    match_service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    match match_service.create_match(request.into_inner()).await {
        Ok(card) => {
            tracing::info!("Created match {}", card.id);
            Ok(HttpResponse::Created().json(ApiResponse::success("Match created successfully", card)))
        }
        Err(e) => Ok(match_error_response("Failed to create match", &e)),
    }
}

// GET /admin/matches - admin table with cached and derived scores side by side
pub async fn list_matches(
    query: web::Query<MatchListQuery>,
    match_service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    match match_service.list_admin_rows(&query).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            format!("Retrieved {} matches", rows.len()),
            rows,
        ))),
        Err(e) => Ok(match_error_response("Failed to retrieve matches", &e)),
    }
}

// PATCH /admin/matches/{id}/status
#[tracing::instrument(
    name = "Admin update match status",
    skip(path, request, match_service),
    fields(
        match_id = %path,
        status = %request.status
    )
)]
pub async fn update_status(
    path: web::Path<Uuid>,
    request: web::Json<UpdateMatchStatusRequest>,
    match_service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match match_service.change_status(match_id, request.status).await {
        Ok(card) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            format!("Match is now {}", card.status),
            card,
        ))),
        Err(e) => Ok(match_error_response("Failed to update match status", &e)),
    }
}

// POST /admin/matches/{id}/sets
#[tracing::instrument(
    name = "Admin record set",
    skip(path, request, match_service),
    fields(
        match_id = %path,
        home_points = request.home_points,
        away_points = request.away_points
    )
)]
pub async fn record_set(
    path: web::Path<Uuid>,
    request: web::Json<RecordSetRequest>,
    match_service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match match_service.record_set(match_id, request.home_points, request.away_points).await {
        Ok(card) => Ok(HttpResponse::Ok().json(ApiResponse::success("Set recorded successfully", card))),
        Err(e) => Ok(match_error_response("Failed to record set", &e)),
    }
}

// PUT /admin/matches/{id}/score
#[tracing::instrument(
    name = "Admin replace score",
    skip(path, request, match_service),
    fields(
        match_id = %path
    )
)]
pub async fn replace_score(
    path: web::Path<Uuid>,
    request: web::Json<ReplaceScoreRequest>,
    match_service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match match_service
        .replace_score(match_id, &request.home_points, &request.away_points)
        .await
    {
        Ok(card) => Ok(HttpResponse::Ok().json(ApiResponse::success("Score replaced successfully", card))),
        Err(e) => Ok(match_error_response("Failed to replace score", &e)),
    }
}

// POST /admin/matches/{id}/finalize
#[tracing::instrument(
    name = "Admin finalize match",
    skip(path, match_service),
    fields(
        match_id = %path
    )
)]
pub async fn finalize_match(
    path: web::Path<Uuid>,
    match_service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match match_service.finalize(match_id).await {
        Ok(card) => Ok(HttpResponse::Ok().json(ApiResponse::success("Match finalized", card))),
        Err(e) => Ok(match_error_response("Failed to finalize match", &e)),
    }
}

// GET /admin/matches/score-audit
pub async fn score_audit(
    match_service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    match match_service.audit_score_cache().await {
        Ok(drifted) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            format!("{} matches with inconsistent score cache", drifted.len()),
            drifted,
        ))),
        Err(e) => Ok(match_error_response("Failed to audit score cache", &e)),
    }
}
