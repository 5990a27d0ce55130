use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};
use log::{error, info, warn};
use std::io;

use tasklane::{config::Config, routes, AppState, MemoryStore};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        error!("invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    if config.session_secret.is_none() {
        warn!("SESSION_SECRET is not set: session cookies carry the bare username and can be forged");
    }

    let state = AppState::new(MemoryStore::new(), &config).map_err(|e| {
        error!("failed to initialise services: {}", e);
        io::Error::new(io::ErrorKind::Other, e)
    })?;

    info!("Starting tasklane server at {}", config.server_url());
    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(|cfg| state.configure(cfg))
            .configure(routes::config)
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
