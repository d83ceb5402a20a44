pub mod admin;
pub mod backend_health_handler;
pub mod error_response;
pub mod league;
