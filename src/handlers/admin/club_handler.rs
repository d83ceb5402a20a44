use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;

use crate::db::club_queries::ClubQueries;
use crate::league::validation::MatchValidator;
use crate::models::club::CreateClubRequest;
use crate::models::common::ApiResponse;

// POST /admin/clubs
#[tracing::instrument(
    name = "Admin create club",
    skip(request, pool),
    fields(
        name = %request.name
    )
)]
pub async fn create_club(
    request: web::Json<CreateClubRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let validator = MatchValidator::new();
    if let Err(e) = validator.validate_create_club(&request) {
        tracing::warn!("Rejected club: {}", e);
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string())));
    }

    let name = request.name.trim();
    let logo_url = validator.sanitize_optional(request.logo_url.as_deref());
    let club_queries = ClubQueries::new(pool.get_ref().clone());

    match club_queries.create_club(name, logo_url.as_deref()).await {
        Ok(club) => {
            tracing::info!("Created club {} ({})", club.name, club.id);
            Ok(HttpResponse::Created().json(ApiResponse::success("Club created successfully", club)))
        }
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            Ok(HttpResponse::Conflict().json(ApiResponse::<()>::error("Club name already taken")))
        }
        Err(e) => {
            tracing::error!("Failed to create club: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Failed to create club")))
        }
    }
}
