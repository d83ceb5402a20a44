pub mod club_handler;
pub mod match_handler;
