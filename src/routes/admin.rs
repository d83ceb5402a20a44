use actix_web::web;

use crate::handlers::admin::{club_handler, match_handler};

// Access to /admin is restricted in front of the service, not here.
pub fn init_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            // Club management routes
            .service(
                web::resource("/clubs")
                    .route(web::post().to(club_handler::create_club))
            )

            // Match management routes
            .service(
                web::resource("/matches")
                    .route(web::get().to(match_handler::list_matches))
                    .route(web::post().to(match_handler::create_match))
            )
            .service(
                web::resource("/matches/score-audit")
                    .route(web::get().to(match_handler::score_audit))
            )
            .service(
                web::resource("/matches/{id}/status")
                    .route(web::patch().to(match_handler::update_status))
            )
            .service(
                web::resource("/matches/{id}/sets")
                    .route(web::post().to(match_handler::record_set))
            )
            .service(
                web::resource("/matches/{id}/score")
                    .route(web::put().to(match_handler::replace_score))
            )
            .service(
                web::resource("/matches/{id}/finalize")
                    .route(web::post().to(match_handler::finalize_match))
            )
    );
}
