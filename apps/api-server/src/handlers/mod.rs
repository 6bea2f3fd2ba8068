//! HTTP handlers and route configuration.

mod health;
mod params;
mod posts;
mod users;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/users")
                .route("", web::get().to(users::find_all))
                .route("", web::post().to(users::insert))
                .route("/{id}", web::get().to(users::find_by_id))
                .route("/{id}", web::put().to(users::update))
                .route("/{id}", web::delete().to(users::delete))
                .route("/{id}/posts", web::get().to(users::find_posts)),
        )
        .service(
            web::scope("/posts")
                // Literal paths first so they are not taken as ids
                .route("/titlesearch", web::get().to(posts::title_search))
                .route("/fullsearch", web::get().to(posts::full_search))
                .route("/{id}", web::get().to(posts::find_by_id)),
        );
}

/// Malformed JSON bodies are answered with a problem-details 400.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}
