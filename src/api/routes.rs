// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::root))
        .route("/health", web::get().to(handlers::health_check))
        .service(
            web::scope("/api")
                .route("/users", web::get().to(handlers::get_users))
                .route("/info", web::get().to(handlers::get_info)),
        );
}
