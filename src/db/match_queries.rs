use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;
use tracing::{info, debug};

use crate::models::matches::{CreateMatchRequest, Match, MatchListQuery, MatchStatus, MatchWithClubs};
use crate::scoring::recompute::ScoreSnapshot;

const DEFAULT_LIST_LIMIT: i64 = 50;
const MAX_LIST_LIMIT: i64 = 200;

const MATCH_WITH_CLUBS_SELECT: &str = "
    SELECT
        m.id, m.home_team_id, m.away_team_id, m.match_date, m.status,
        m.score_home_sets, m.score_away_sets, m.score_home_points, m.score_away_points,
        m.venue, m.league, m.created_at, m.updated_at,
        hc.name AS home_club_name,
        hc.logo_url AS home_club_logo_url,
        ac.name AS away_club_name,
        ac.logo_url AS away_club_logo_url
    FROM matches m
    JOIN clubs hc ON m.home_team_id = hc.id
    JOIN clubs ac ON m.away_team_id = ac.id
";

#[derive(Debug, Clone)]
pub struct MatchQueries {
    pool: PgPool,
}

impl MatchQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new match in `scheduled` state with no sets played
    pub async fn create_match(&self, request: &CreateMatchRequest) -> Result<Match, sqlx::Error> {
        let match_id = Uuid::new_v4();
        info!("Creating match {}: {} vs {}", match_id, request.home_team_id, request.away_team_id);

        sqlx::query_as::<_, Match>(
            r#"
            INSERT INTO matches (
                id, home_team_id, away_team_id, match_date, status,
                score_home_sets, score_away_sets, score_home_points, score_away_points,
                venue, league, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, 0, 0, NULL, NULL, $6, $7, NOW(), NOW())
            RETURNING *
            "#
        )
        .bind(match_id)
        .bind(request.home_team_id)
        .bind(request.away_team_id)
        .bind(request.match_date)
        .bind(MatchStatus::Scheduled)
        .bind(&request.venue)
        .bind(&request.league)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn get_match(&self, match_id: Uuid) -> Result<Option<Match>, sqlx::Error> {
        sqlx::query_as::<_, Match>("SELECT * FROM matches WHERE id = $1")
            .bind(match_id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn get_match_with_clubs(&self, match_id: Uuid) -> Result<Option<MatchWithClubs>, sqlx::Error> {
        let sql = format!("{} WHERE m.id = $1", MATCH_WITH_CLUBS_SELECT);
        sqlx::query_as::<_, MatchWithClubs>(&sql)
            .bind(match_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Filtered listing, newest first
    pub async fn list_matches(&self, query: &MatchListQuery) -> Result<Vec<MatchWithClubs>, sqlx::Error> {
        debug!("Listing matches with {}", query);

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(MATCH_WITH_CLUBS_SELECT);
        builder.push(" WHERE 1=1");

        if let Some(status) = query.status {
            builder.push(" AND m.status = ").push_bind(status);
        }
        if let Some(club_id) = query.club_id {
            builder
                .push(" AND (m.home_team_id = ")
                .push_bind(club_id)
                .push(" OR m.away_team_id = ")
                .push_bind(club_id)
                .push(")");
        }
        if let Some(league) = query.league.as_deref().filter(|l| !l.trim().is_empty()) {
            builder.push(" AND m.league ILIKE ").push_bind(format!("%{}%", league.trim()));
        }

        let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT);
        builder.push(" ORDER BY m.match_date DESC LIMIT ").push_bind(limit);

        builder
            .build_query_as::<MatchWithClubs>()
            .fetch_all(&self.pool)
            .await
    }

    /// Move a match from `from` to `to`.
    ///
    /// Returns `None` when the stored status is no longer `from`.
    pub async fn update_status(
        &self,
        match_id: Uuid,
        from: MatchStatus,
        to: MatchStatus,
    ) -> Result<Option<Match>, sqlx::Error> {
        info!("Changing match {} status: {} -> {}", match_id, from, to);

        sqlx::query_as::<_, Match>(
            r#"
            UPDATE matches
            SET status = $3, updated_at = NOW()
            WHERE id = $1 AND status = $2
            RETURNING *
            "#
        )
        .bind(match_id)
        .bind(from)
        .bind(to)
        .fetch_optional(&self.pool)
        .await
    }

    /// Persist point arrays and their derived set counts in one statement.
    ///
    /// Only live matches still holding `expected_sets` recorded sets are
    /// written; `None` means the match was closed or another write got there
    /// first. With `finish` set the match also moves to `finished`.
    pub async fn save_snapshot(
        &self,
        match_id: Uuid,
        expected_sets: usize,
        snapshot: &ScoreSnapshot,
        finish: bool,
    ) -> Result<Option<Match>, sqlx::Error> {
        debug!(
            "Saving score for match {}: {}-{} after {} sets (finish: {})",
            match_id, snapshot.home_sets, snapshot.away_sets, snapshot.sets_played(), finish
        );

        sqlx::query_as::<_, Match>(
            r#"
            UPDATE matches
            SET
                score_home_points = $2,
                score_away_points = $3,
                score_home_sets = $4,
                score_away_sets = $5,
                status = CASE WHEN $6 THEN 'finished' ELSE status END,
                updated_at = NOW()
            WHERE id = $1
              AND status = 'live'
              AND COALESCE(cardinality(score_home_points), 0) = $7
            RETURNING *
            "#
        )
        .bind(match_id)
        .bind(snapshot.home_points_column())
        .bind(snapshot.away_points_column())
        .bind(snapshot.home_sets)
        .bind(snapshot.away_sets)
        .bind(finish)
        .bind(expected_sets as i32)
        .fetch_optional(&self.pool)
        .await
    }

    /// Every stored match, for cache audits
    pub async fn list_all_for_audit(&self) -> Result<Vec<Match>, sqlx::Error> {
        sqlx::query_as::<_, Match>("SELECT * FROM matches ORDER BY match_date DESC")
            .fetch_all(&self.pool)
            .await
    }
}
