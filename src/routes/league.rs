// src/routes/league.rs
use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::league::{club_handler, match_handler};
use crate::models::club::ClubListQuery;
use crate::models::matches::MatchListQuery;
use crate::services::MatchService;

/// List matches, filterable by status, club and league
#[get("/matches")]
pub async fn list_matches(
    query: web::Query<MatchListQuery>,
    match_service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    match_handler::list_matches(query, match_service).await
}

/// Get a single match with its derived score
#[get("/matches/{match_id}")]
pub async fn get_match(
    path: web::Path<Uuid>,
    match_service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match_handler::get_match(match_id, match_service).await
}

/// List clubs
#[get("/clubs")]
pub async fn list_clubs(
    query: web::Query<ClubListQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    club_handler::list_clubs(query, pool).await
}

/// Get club information
#[get("/clubs/{club_id}")]
pub async fn get_club(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let club_id = path.into_inner();
    club_handler::get_club(club_id, pool).await
}
