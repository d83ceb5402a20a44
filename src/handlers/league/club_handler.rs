use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::club_queries::ClubQueries;
use crate::db::helpers::{db_result, require_record};
use crate::models::club::ClubListQuery;
use crate::models::common::ApiResponse;
use crate::ok_or_return;

#[tracing::instrument(
    name = "List clubs",
    skip(query, pool),
    fields(
        search = ?query.search,
        limit = ?query.limit
    )
)]
pub async fn list_clubs(
    query: web::Query<ClubListQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let club_queries = ClubQueries::new(pool.get_ref().clone());
    let clubs = ok_or_return!(db_result(club_queries.list_clubs(&query).await));

    tracing::info!("Successfully retrieved {} clubs", clubs.len());
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        format!("Retrieved {} clubs", clubs.len()),
        clubs,
    )))
}

#[tracing::instrument(
    name = "Get club",
    skip(pool),
    fields(
        club_id = %club_id
    )
)]
pub async fn get_club(
    club_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let club_queries = ClubQueries::new(pool.get_ref().clone());
    let club = ok_or_return!(require_record(club_queries.get_club(club_id).await, "Club not found"));

    Ok(HttpResponse::Ok().json(ApiResponse::success("Club retrieved", club)))
}
