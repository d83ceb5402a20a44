pub mod club;
pub mod common;
pub mod events;
pub mod matches;
