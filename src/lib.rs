use actix_web::{http, web, App, HttpServer};
use actix_web::dev::Server;
use tracing_actix_web::TracingLogger;
use sqlx::PgPool;
use std::net::TcpListener;
use std::sync::Arc;
use actix_cors::Cors;

pub mod config;
mod routes;
mod handlers;
pub mod models;
pub mod db;
pub mod league;
pub mod scoring;
pub mod services;
pub use services::telemetry;
use crate::routes::init_routes;
use crate::config::scoring::ScoringSettings;
use crate::services::{MatchService, ScoreEvents};

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    redis_client: Option<Arc<redis::Client>>,
    scoring: ScoringSettings,
    allowed_origins: Vec<String>,
) -> Result<Server, std::io::Error> {
    let match_service = MatchService::new(
        db_pool.clone(),
        ScoreEvents::new(redis_client),
        scoring.sets_to_win,
    );

    // Wrap using web::Data, which boils down to an Arc smart pointer
    let db_pool_data = web::Data::new(db_pool);
    let match_service_data = web::Data::new(match_service);

    let server = HttpServer::new( move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH"])
            .allowed_headers(vec![
                http::header::AUTHORIZATION,
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            // Get a pointer copy and attach it to the application state
            .app_data(db_pool_data.clone())
            .app_data(match_service_data.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
