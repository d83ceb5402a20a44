//! Match score derivation.
//!
//! Every surface that shows a score (list cards, the detail page, the admin
//! table, live events) goes through these functions so views never disagree.
//! Nothing in here does I/O.

pub mod derivation;
pub mod display;
pub mod error;
pub mod recompute;
pub mod status;

pub use derivation::{current_set_number, leading_side, set_winners, sets_won, Side};
pub use display::{ScoreView, SetLine};
pub use error::ScoreError;
pub use recompute::{cache_drift, CacheDrift, ScoreSnapshot};
