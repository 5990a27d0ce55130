use actix_web::web;

use crate::auth::SessionCodec;
use crate::config::Config;
use crate::error::AppError;
use crate::services::{AuthService, TaskService};
use crate::store::MemoryStore;

/// Everything the handlers and the session middleware pull out of app data.
///
/// Built once at startup and cloned into every worker's `App`; all clones
/// share the same store.
#[derive(Clone)]
pub struct AppState {
    pub auth: web::Data<AuthService>,
    pub tasks: web::Data<TaskService>,
    pub sessions: web::Data<SessionCodec>,
    pub store: web::Data<MemoryStore>,
}

impl AppState {
    pub fn new(store: MemoryStore, config: &Config) -> Result<Self, AppError> {
        let sessions = SessionCodec::from_secret(config.session_secret.clone());
        let auth = AuthService::new(store.clone(), sessions.clone(), config.bcrypt_cost)?;

        Ok(Self {
            auth: web::Data::new(auth),
            tasks: web::Data::new(TaskService::new(store.clone())),
            sessions: web::Data::new(sessions),
            store: web::Data::new(store),
        })
    }

    /// Registers the shared state as app data.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.auth.clone())
            .app_data(self.tasks.clone())
            .app_data(self.sessions.clone())
            .app_data(self.store.clone());
    }
}
