use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;
use tracing::info;

use crate::models::club::{Club, ClubListQuery};

#[derive(Debug, Clone)]
pub struct ClubQueries {
    pool: PgPool,
}

impl ClubQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_club(&self, name: &str, logo_url: Option<&str>) -> Result<Club, sqlx::Error> {
        info!("Creating club: {}", name);

        sqlx::query_as::<_, Club>(
            r#"
            INSERT INTO clubs (id, name, logo_url, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING id, name, logo_url, created_at, updated_at
            "#
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(logo_url)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn get_club(&self, club_id: Uuid) -> Result<Option<Club>, sqlx::Error> {
        sqlx::query_as::<_, Club>(
            "SELECT id, name, logo_url, created_at, updated_at FROM clubs WHERE id = $1"
        )
        .bind(club_id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn list_clubs(&self, query: &ClubListQuery) -> Result<Vec<Club>, sqlx::Error> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT id, name, logo_url, created_at, updated_at FROM clubs WHERE 1=1"
        );

        if let Some(search) = query.search.as_deref().filter(|s| !s.trim().is_empty()) {
            builder.push(" AND name ILIKE ").push_bind(format!("%{}%", search.trim()));
        }

        let limit = query.limit.unwrap_or(100).clamp(1, 500);
        builder.push(" ORDER BY name ASC LIMIT ").push_bind(limit);

        builder
            .build_query_as::<Club>()
            .fetch_all(&self.pool)
            .await
    }
}
