use sqlx::PgPool;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::db::club_queries::ClubQueries;
use crate::db::match_queries::MatchQueries;
use crate::league::validation::{MatchValidator, ValidationError};
use crate::models::matches::{
    AdminMatchRow, CreateMatchRequest, Match, MatchCard, MatchListQuery, MatchStatus,
};
use crate::scoring::error::ScoreError;
use crate::scoring::recompute::{cache_drift, CacheDrift, ScoreSnapshot};
use crate::services::score_events::ScoreEvents;

#[derive(Debug, Error)]
pub enum MatchServiceError {
    #[error("Match {0} not found")]
    NotFound(Uuid),
    #[error("Club {0} not found")]
    ClubNotFound(Uuid),
    #[error("Match {0} was changed by another update, reload and retry")]
    Conflict(Uuid),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Match lifecycle and score writes.
///
/// All score writes go through `ScoreSnapshot`, so the cached set counts are
/// always recomputed from the point arrays on write.
#[derive(Debug, Clone)]
pub struct MatchService {
    match_queries: MatchQueries,
    club_queries: ClubQueries,
    events: ScoreEvents,
    sets_to_win: i32,
}

impl MatchService {
    pub fn new(pool: PgPool, events: ScoreEvents, sets_to_win: i32) -> Self {
        Self {
            match_queries: MatchQueries::new(pool.clone()),
            club_queries: ClubQueries::new(pool),
            events,
            sets_to_win,
        }
    }

    pub async fn create_match(&self, request: CreateMatchRequest) -> Result<MatchCard, MatchServiceError> {
        let validator = MatchValidator::new();
        validator.validate_create_match(&request)?;

        for club_id in [request.home_team_id, request.away_team_id] {
            if self.club_queries.get_club(club_id).await?.is_none() {
                return Err(MatchServiceError::ClubNotFound(club_id));
            }
        }

        let request = CreateMatchRequest {
            venue: validator.sanitize_optional(request.venue.as_deref()),
            league: validator.sanitize_optional(request.league.as_deref()),
            ..request
        };

        let created = self.match_queries.create_match(&request).await?;
        info!("Created match {} scheduled for {}", created.id, created.match_date);
        self.get_match_card(created.id).await
    }

    pub async fn get_match(&self, match_id: Uuid) -> Result<Match, MatchServiceError> {
        self.match_queries
            .get_match(match_id)
            .await?
            .ok_or(MatchServiceError::NotFound(match_id))
    }

    pub async fn get_match_card(&self, match_id: Uuid) -> Result<MatchCard, MatchServiceError> {
        let row = self.match_queries
            .get_match_with_clubs(match_id)
            .await?
            .ok_or(MatchServiceError::NotFound(match_id))?;
        Ok(MatchCard::from(&row))
    }

    pub async fn list_match_cards(&self, query: &MatchListQuery) -> Result<Vec<MatchCard>, MatchServiceError> {
        let rows = self.match_queries.list_matches(query).await?;
        Ok(rows.iter().map(MatchCard::from).collect())
    }

    /// Admin table rows: derived view plus the stored cache
    pub async fn list_admin_rows(&self, query: &MatchListQuery) -> Result<Vec<AdminMatchRow>, MatchServiceError> {
        let rows = self.match_queries.list_matches(query).await?;
        Ok(rows
            .iter()
            .map(|row| AdminMatchRow {
                card: MatchCard::from(row),
                cached_home_sets: row.match_data.score_home_sets,
                cached_away_sets: row.match_data.score_away_sets,
                cache_consistent: cache_drift(&row.match_data).is_none(),
            })
            .collect())
    }

    /// Move a match along scheduled -> live -> finished
    pub async fn change_status(&self, match_id: Uuid, next: MatchStatus) -> Result<MatchCard, MatchServiceError> {
        let current = self.get_match(match_id).await?;
        current.status.transition_to(next)?;

        let updated = match self.match_queries.update_status(match_id, current.status, next).await? {
            Some(updated) => updated,
            None => {
                // Someone else moved the match between our read and write
                let latest = self.get_match(match_id).await?;
                return Err(ScoreError::InvalidTransition { from: latest.status, to: next }.into());
            }
        };

        info!("Match {} is now {}", match_id, updated.status);
        self.events.status_changed(match_id, current.status, updated.status).await;
        if updated.status.is_terminal() {
            self.events.score_updated(&updated).await;
        }

        self.get_match_card(match_id).await
    }

    /// Manual admin finalization, e.g. after a forfeit
    pub async fn finalize(&self, match_id: Uuid) -> Result<MatchCard, MatchServiceError> {
        self.change_status(match_id, MatchStatus::Finished).await
    }

    /// Append one completed set. Finishes the match once a side reaches
    /// the configured number of sets.
    pub async fn record_set(
        &self,
        match_id: Uuid,
        home_points: i32,
        away_points: i32,
    ) -> Result<MatchCard, MatchServiceError> {
        let current = self.get_match(match_id).await?;
        current.status.ensure_accepts_score_updates()?;

        let snapshot = ScoreSnapshot::for_match(&current)?.with_set(home_points, away_points)?;
        if home_points == away_points {
            warn!(
                "Match {} set {} recorded as a tie ({}-{}); no set credited",
                match_id, snapshot.sets_played(), home_points, away_points
            );
        }

        self.save(current, snapshot).await
    }

    /// Replace the whole point arrays, for correcting data entry mistakes
    pub async fn replace_score(
        &self,
        match_id: Uuid,
        home_points: &[i32],
        away_points: &[i32],
    ) -> Result<MatchCard, MatchServiceError> {
        let current = self.get_match(match_id).await?;
        current.status.ensure_accepts_score_updates()?;

        let snapshot = ScoreSnapshot::from_points(Some(home_points), Some(away_points))?;
        self.save(current, snapshot).await
    }

    /// Write a snapshot computed from `current`. The write only lands if no
    /// other set was stored since `current` was read.
    async fn save(&self, current: Match, snapshot: ScoreSnapshot) -> Result<MatchCard, MatchServiceError> {
        let winner = snapshot.winner_at(self.sets_to_win);
        let finish = winner.is_some();
        let expected_sets = current.home_points().map_or(0, |points| points.len());

        let saved = self.match_queries
            .save_snapshot(current.id, expected_sets, &snapshot, finish)
            .await?;
        let updated = match saved {
            Some(updated) => updated,
            None => {
                let latest = self.get_match(current.id).await?;
                if !latest.status.accepts_score_updates() {
                    return Err(ScoreError::MatchClosed { status: latest.status }.into());
                }
                warn!(
                    "Match {} changed while saving: expected {} sets, found {}",
                    current.id,
                    expected_sets,
                    latest.home_points().map_or(0, |points| points.len())
                );
                return Err(MatchServiceError::Conflict(current.id));
            }
        };

        info!(
            "Match {} score {}-{} after {} sets",
            updated.id, snapshot.home_sets, snapshot.away_sets, snapshot.sets_played()
        );

        self.events.score_updated(&updated).await;
        if let Some(winner) = winner {
            info!("Match {} finished, winner: {:?}", updated.id, winner);
            self.events.status_changed(updated.id, current.status, updated.status).await;
        }

        self.get_match_card(updated.id).await
    }

    /// Stored matches whose cached set counts disagree with their points
    pub async fn audit_score_cache(&self) -> Result<Vec<CacheDrift>, MatchServiceError> {
        let matches = self.match_queries.list_all_for_audit().await?;
        let drifted: Vec<CacheDrift> = matches.iter().filter_map(cache_drift).collect();
        if !drifted.is_empty() {
            warn!("Score cache audit found {} inconsistent matches", drifted.len());
        }
        Ok(drifted)
    }
}
