use proptest::prelude::*;

use volleyfed_backend::models::matches::MatchStatus;
use volleyfed_backend::scoring::{
    current_set_number, leading_side, set_winners, sets_won, ScoreError, ScoreSnapshot, Side,
};

fn pts(points: &[i32]) -> Option<&[i32]> {
    Some(points)
}

#[test]
fn test_home_wins_first_and_third_set() {
    assert_eq!(sets_won(pts(&[25, 20, 25]), pts(&[20, 25, 20])), Ok(2));
    assert_eq!(sets_won(pts(&[20, 25, 20]), pts(&[25, 20, 25])), Ok(1));
}

#[test]
fn test_all_tied_sets_credit_nobody() {
    assert_eq!(sets_won(pts(&[25, 25]), pts(&[25, 25])), Ok(0));
    assert_eq!(set_winners(pts(&[25, 25]), pts(&[25, 25])), Ok(vec![Side::Tied, Side::Tied]));
}

#[test]
fn test_current_set_number() {
    assert_eq!(current_set_number(None), 1);
    assert_eq!(current_set_number(pts(&[25, 20])), 3);
}

#[test]
fn test_leading_side() {
    assert_eq!(leading_side(2, 1, MatchStatus::Live), Side::Home);
    assert_eq!(leading_side(1, 1, MatchStatus::Live), Side::Tied);
    assert_eq!(leading_side(5, 0, MatchStatus::Scheduled), Side::Tied);
}

#[test]
fn test_mismatched_lengths_are_reported() {
    assert!(matches!(
        sets_won(pts(&[25, 20]), pts(&[25])),
        Err(ScoreError::InconsistentScoreData { .. })
    ));
    assert!(matches!(
        ScoreSnapshot::from_points(pts(&[25, 20]), pts(&[25])),
        Err(ScoreError::InconsistentScoreData { .. })
    ));
}

#[test]
fn test_full_match_progression() {
    let mut snapshot = ScoreSnapshot::empty();
    let sets = [(25, 20), (20, 25), (25, 18), (25, 22)];
    let mut winners = Vec::new();

    for (home, away) in sets {
        snapshot = snapshot.with_set(home, away).unwrap();
        winners.push(snapshot.winner_at(3));
    }

    assert_eq!(winners, vec![None, None, None, Some(Side::Home)]);
    assert_eq!((snapshot.home_sets, snapshot.away_sets), (3, 1));
    assert_eq!(current_set_number(Some(snapshot.home_points.as_slice())), 5);
}

proptest! {
    #[test]
    fn sets_won_never_exceeds_sets_played(sets in prop::collection::vec((0i32..40, 0i32..40), 0..7)) {
        let (home, away): (Vec<i32>, Vec<i32>) = sets.into_iter().unzip();
        let home_sets = sets_won(Some(home.as_slice()), Some(away.as_slice())).unwrap();
        let away_sets = sets_won(Some(away.as_slice()), Some(home.as_slice())).unwrap();
        let ties = home.iter().zip(&away).filter(|(h, a)| h == a).count() as i32;

        prop_assert!(home_sets + away_sets <= home.len() as i32);
        prop_assert_eq!(home_sets + away_sets + ties, home.len() as i32);
    }

    #[test]
    fn sets_won_is_repeatable(sets in prop::collection::vec((0i32..40, 0i32..40), 0..7)) {
        let (home, away): (Vec<i32>, Vec<i32>) = sets.into_iter().unzip();
        prop_assert_eq!(
            sets_won(Some(home.as_slice()), Some(away.as_slice())),
            sets_won(Some(home.as_slice()), Some(away.as_slice()))
        );
    }

    #[test]
    fn snapshot_cache_always_matches_points(sets in prop::collection::vec((0i32..40, 0i32..40), 0..7)) {
        let snapshot = sets
            .iter()
            .try_fold(ScoreSnapshot::empty(), |s, (h, a)| s.with_set(*h, *a))
            .unwrap();
        prop_assert_eq!(snapshot.home_sets, sets_won(Some(snapshot.home_points.as_slice()), Some(snapshot.away_points.as_slice())).unwrap());
        prop_assert_eq!(snapshot.away_sets, sets_won(Some(snapshot.away_points.as_slice()), Some(snapshot.home_points.as_slice())).unwrap());
    }

    #[test]
    fn length_mismatch_always_errors(
        home in prop::collection::vec(0i32..40, 0..7),
        away in prop::collection::vec(0i32..40, 0..7),
    ) {
        prop_assume!(home.len() != away.len());
        let is_inconsistent = matches!(
            sets_won(Some(home.as_slice()), Some(away.as_slice())),
            Err(ScoreError::InconsistentScoreData { .. })
        );
        prop_assert!(is_inconsistent);
    }

    #[test]
    fn scheduled_never_has_a_leader(home_sets in 0i32..5, away_sets in 0i32..5) {
        prop_assert_eq!(leading_side(home_sets, away_sets, MatchStatus::Scheduled), Side::Tied);
    }
}
