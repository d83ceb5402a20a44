use serde::Deserialize;

/// Best-of-N rule applied when sets are recorded. A match with
/// `sets_to_win = 3` is best of five.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScoringSettings {
    #[serde(default = "default_sets_to_win")]
    pub sets_to_win: i32,
}

fn default_sets_to_win() -> i32 {
    3
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self { sets_to_win: default_sets_to_win() }
    }
}
