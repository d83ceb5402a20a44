use serde::Serialize;
use uuid::Uuid;

use crate::models::matches::Match;
use crate::scoring::derivation::{sets_won, Side};
use crate::scoring::error::ScoreError;

/// Point arrays together with the set counts derived from them.
///
/// Every write goes through a snapshot so the cached `score_*_sets` columns
/// are never written on their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreSnapshot {
    pub home_points: Vec<i32>,
    pub away_points: Vec<i32>,
    pub home_sets: i32,
    pub away_sets: i32,
}

impl ScoreSnapshot {
    pub fn empty() -> Self {
        Self {
            home_points: Vec::new(),
            away_points: Vec::new(),
            home_sets: 0,
            away_sets: 0,
        }
    }

    pub fn from_points(
        home_points: Option<&[i32]>,
        away_points: Option<&[i32]>,
    ) -> Result<Self, ScoreError> {
        let home_sets = sets_won(home_points, away_points)?;
        let away_sets = sets_won(away_points, home_points)?;
        let home_points = home_points.unwrap_or_default().to_vec();
        let away_points = away_points.unwrap_or_default().to_vec();

        if let Some(index) = home_points
            .iter()
            .zip(&away_points)
            .position(|(h, a)| *h < 0 || *a < 0)
        {
            return Err(ScoreError::NegativePoints { set_number: index + 1 });
        }

        Ok(Self { home_points, away_points, home_sets, away_sets })
    }

    /// Snapshot of what is currently stored on the match.
    pub fn for_match(game: &Match) -> Result<Self, ScoreError> {
        Self::from_points(game.home_points(), game.away_points())
    }

    /// Append one completed set and recompute the counts.
    pub fn with_set(&self, home_points: i32, away_points: i32) -> Result<Self, ScoreError> {
        let mut home = self.home_points.clone();
        let mut away = self.away_points.clone();
        home.push(home_points);
        away.push(away_points);
        Self::from_points(Some(home.as_slice()), Some(away.as_slice()))
    }

    pub fn sets_played(&self) -> usize {
        self.home_points.len()
    }

    /// The side that has reached `sets_to_win`, if any.
    pub fn winner_at(&self, sets_to_win: i32) -> Option<Side> {
        if self.home_sets >= sets_to_win && self.home_sets > self.away_sets {
            Some(Side::Home)
        } else if self.away_sets >= sets_to_win && self.away_sets > self.home_sets {
            Some(Side::Away)
        } else {
            None
        }
    }

    /// Column values for storage; no sets played is stored as NULL.
    pub fn home_points_column(&self) -> Option<Vec<i32>> {
        (!self.home_points.is_empty()).then(|| self.home_points.clone())
    }

    pub fn away_points_column(&self) -> Option<Vec<i32>> {
        (!self.away_points.is_empty()).then(|| self.away_points.clone())
    }
}

/// A stored match whose cached set counts no longer match its point arrays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheDrift {
    pub match_id: Uuid,
    pub cached_home_sets: i32,
    pub cached_away_sets: i32,
    pub derived_home_sets: Option<i32>,
    pub derived_away_sets: Option<i32>,
    pub reason: String,
}

pub fn cache_drift(game: &Match) -> Option<CacheDrift> {
    let drift = |derived_home_sets, derived_away_sets, reason: String| CacheDrift {
        match_id: game.id,
        cached_home_sets: game.score_home_sets,
        cached_away_sets: game.score_away_sets,
        derived_home_sets,
        derived_away_sets,
        reason,
    };

    let home_sets = match sets_won(game.home_points(), game.away_points()) {
        Ok(sets) => sets,
        Err(e) => return Some(drift(None, None, e.to_string())),
    };
    let away_sets = match sets_won(game.away_points(), game.home_points()) {
        Ok(sets) => sets,
        Err(e) => return Some(drift(None, None, e.to_string())),
    };

    if home_sets == game.score_home_sets && away_sets == game.score_away_sets {
        None
    } else {
        Some(drift(
            Some(home_sets),
            Some(away_sets),
            format!(
                "cached {}-{} but points say {}-{}",
                game.score_home_sets, game.score_away_sets, home_sets, away_sets
            ),
        ))
    }
}
