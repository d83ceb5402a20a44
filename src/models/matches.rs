// src/models/matches.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use std::fmt;

use crate::models::club::ClubSummary;
use crate::scoring::display::ScoreView;

/// One scheduled, live or completed contest between two clubs.
///
/// `score_home_sets`/`score_away_sets` are a cache of what the point arrays
/// say. Readers go through `ScoreView` instead of trusting them.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Match {
    pub id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub match_date: DateTime<Utc>,
    pub status: MatchStatus,
    pub score_home_sets: i32,
    pub score_away_sets: i32,
    pub score_home_points: Option<Vec<i32>>,
    pub score_away_points: Option<Vec<i32>>,
    pub venue: Option<String>,
    pub league: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Match {
    pub fn home_points(&self) -> Option<&[i32]> {
        self.score_home_points.as_deref()
    }

    pub fn away_points(&self) -> Option<&[i32]> {
        self.score_away_points.as_deref()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Finished,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::Live => "live",
            MatchStatus::Finished => "finished",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A match row joined with both clubs
#[derive(Debug, FromRow, Clone)]
pub struct MatchWithClubs {
    #[sqlx(flatten)]
    pub match_data: Match,
    pub home_club_name: String,
    pub home_club_logo_url: Option<String>,
    pub away_club_name: String,
    pub away_club_logo_url: Option<String>,
}

impl MatchWithClubs {
    pub fn home_club(&self) -> ClubSummary {
        ClubSummary {
            id: self.match_data.home_team_id,
            name: self.home_club_name.clone(),
            logo_url: self.home_club_logo_url.clone(),
        }
    }

    pub fn away_club(&self) -> ClubSummary {
        ClubSummary {
            id: self.match_data.away_team_id,
            name: self.away_club_name.clone(),
            logo_url: self.away_club_logo_url.clone(),
        }
    }
}

/// What list cards and the detail page render
#[derive(Debug, Serialize, Clone)]
pub struct MatchCard {
    pub id: Uuid,
    pub match_date: DateTime<Utc>,
    pub status: MatchStatus,
    pub venue: Option<String>,
    pub league: Option<String>,
    pub home_club: ClubSummary,
    pub away_club: ClubSummary,
    pub score: ScoreView,
}

impl From<&MatchWithClubs> for MatchCard {
    fn from(row: &MatchWithClubs) -> Self {
        let m = &row.match_data;
        Self {
            id: m.id,
            match_date: m.match_date,
            status: m.status,
            venue: m.venue.clone(),
            league: m.league.clone(),
            home_club: row.home_club(),
            away_club: row.away_club(),
            score: ScoreView::for_match(m),
        }
    }
}

/// Admin table row: the stored cache next to the derived view
#[derive(Debug, Serialize, Clone)]
pub struct AdminMatchRow {
    #[serde(flatten)]
    pub card: MatchCard,
    pub cached_home_sets: i32,
    pub cached_away_sets: i32,
    pub cache_consistent: bool,
}

// Request/Response DTOs
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateMatchRequest {
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub match_date: DateTime<Utc>,
    pub venue: Option<String>,
    pub league: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateMatchStatusRequest {
    pub status: MatchStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordSetRequest {
    pub home_points: i32,
    pub away_points: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReplaceScoreRequest {
    pub home_points: Vec<i32>,
    pub away_points: Vec<i32>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct MatchListQuery {
    pub status: Option<MatchStatus>,
    pub club_id: Option<Uuid>,
    pub league: Option<String>,
    pub limit: Option<i64>,
}

impl fmt::Display for MatchListQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "status: {:?}, club_id: {:?}, league: {:?}, limit: {:?}",
            self.status, self.club_id, self.league, self.limit
        )
    }
}
