pub mod auth;
pub mod health;
pub mod tasks;

use actix_web::web;

use crate::error::AppError;

/// Registers every route. Each task route wraps itself in `SessionMiddleware`,
/// so unknown paths and wrong methods still get the default 404 and 405.
///
/// Expects the shared state (see `AppState::configure`) to be registered on
/// the same `App`.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(health::health)
        .service(auth::register)
        .service(auth::login)
        .service(tasks::add_task)
        .service(tasks::update_task)
        .service(tasks::resolve_task)
        .service(tasks::delete_task)
        .service(tasks::get_tasks)
        .service(tasks::get_task)
        .service(tasks::get_archive);
}

/// Undecodable JSON bodies are reported as malformed requests.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::MalformedRequest(err.to_string()).into())
}

/// A non-numeric `{id}` segment is a malformed request rather than a missing route.
fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::MalformedRequest(format!("invalid id: {}", err)).into())
}
