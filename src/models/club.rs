use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A club taking part in federation matches
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Club {
    pub id: Uuid,
    pub name: String,
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The part of a club that match cards render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubSummary {
    pub id: Uuid,
    pub name: String,
    pub logo_url: Option<String>,
}

impl From<&Club> for ClubSummary {
    fn from(club: &Club) -> Self {
        Self {
            id: club.id,
            name: club.name.clone(),
            logo_url: club.logo_url.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateClubRequest {
    pub name: String,
    pub logo_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClubListQuery {
    pub search: Option<String>,
    pub limit: Option<i64>,
}
