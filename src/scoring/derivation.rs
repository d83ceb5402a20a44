use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::matches::MatchStatus;
use crate::scoring::error::ScoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
    Tied,
}

/// `None` means no sets have been played yet.
fn points_or_empty(points: Option<&[i32]>) -> &[i32] {
    points.unwrap_or(&[])
}

fn ensure_same_length(points: &[i32], opponent_points: &[i32]) -> Result<(), ScoreError> {
    if points.len() != opponent_points.len() {
        return Err(ScoreError::InconsistentScoreData {
            sets_recorded: points.len(),
            opponent_sets_recorded: opponent_points.len(),
        });
    }
    Ok(())
}

/// Winner of every set played so far, in order.
///
/// An equal set (e.g. 25-25) is `Side::Tied` and credits nobody.
pub fn set_winners(
    home_points: Option<&[i32]>,
    away_points: Option<&[i32]>,
) -> Result<Vec<Side>, ScoreError> {
    let home = points_or_empty(home_points);
    let away = points_or_empty(away_points);
    ensure_same_length(home, away)?;

    Ok(home
        .iter()
        .zip(away)
        .map(|(h, a)| match h.cmp(a) {
            Ordering::Greater => Side::Home,
            Ordering::Less => Side::Away,
            Ordering::Equal => Side::Tied,
        })
        .collect())
}

/// Number of sets where `points` strictly beat `opponent_points`.
pub fn sets_won(
    points: Option<&[i32]>,
    opponent_points: Option<&[i32]>,
) -> Result<i32, ScoreError> {
    let points = points_or_empty(points);
    let opponent_points = points_or_empty(opponent_points);
    ensure_same_length(points, opponent_points)?;

    let won = points
        .iter()
        .zip(opponent_points)
        .filter(|(p, o)| p > o)
        .count();
    Ok(won as i32)
}

/// The set being played right now. Only meaningful while the match is live.
pub fn current_set_number(points: Option<&[i32]>) -> i32 {
    points_or_empty(points).len() as i32 + 1
}

/// Scheduled matches never show a leader, whatever the set counts say.
pub fn leading_side(home_sets: i32, away_sets: i32, status: MatchStatus) -> Side {
    if status == MatchStatus::Scheduled {
        return Side::Tied;
    }
    match home_sets.cmp(&away_sets) {
        Ordering::Greater => Side::Home,
        Ordering::Less => Side::Away,
        Ordering::Equal => Side::Tied,
    }
}
