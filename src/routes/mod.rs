use actix_web::web;

pub mod admin;
pub mod backend_health;
pub mod league;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    // Public read surfaces
    cfg.service(league::list_matches)
        .service(league::get_match)
        .service(league::list_clubs)
        .service(league::get_club);

    admin::init_admin_routes(cfg);
}
