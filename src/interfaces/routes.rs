use actix_web::web;

mod json_error;
mod skills;

/// Mounts the skill collection under `/api`, matching the default base URL.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(skills::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
