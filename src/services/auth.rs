use actix_web::web;
use log::{info, warn};
use std::sync::Arc;

use crate::auth::{hash_password, verify_password, LoginRequest, RegisterRequest, SessionCodec};
use crate::error::AppError;
use crate::models::User;
use crate::store::MemoryStore;

/// Account registration and credential checks.
///
/// bcrypt is slow on purpose, so hashing and verification run on the blocking
/// thread pool rather than on the request worker.
#[derive(Clone)]
pub struct AuthService {
    store: MemoryStore,
    sessions: SessionCodec,
    cost: u32,
    // Verified against when the username is unknown, so both failure paths cost the same.
    dummy_hash: Arc<str>,
}

impl AuthService {
    /// Fails only if `cost` is outside bcrypt's accepted range.
    pub fn new(store: MemoryStore, sessions: SessionCodec, cost: u32) -> Result<Self, AppError> {
        let dummy_hash = hash_password("not-a-real-password", cost)?;
        Ok(Self {
            store,
            sessions,
            cost,
            dummy_hash: dummy_hash.into(),
        })
    }

    /// Stores a new account with a hashed password.
    ///
    /// Returns `AppError::AccountExists` when the username is taken; the
    /// existing account is left untouched.
    pub async fn register(&self, request: RegisterRequest) -> Result<(), AppError> {
        let RegisterRequest { username, password } = request;
        let cost = self.cost;
        let password_hash = web::block(move || hash_password(&password, cost)).await??;

        self.store
            .register(User::new(username.clone(), password_hash))
            .await
            .map_err(|e| {
                info!("registration for {} refused: {}", username, e);
                AppError::from(e)
            })
    }

    /// Checks credentials and issues a session token for the username.
    ///
    /// Unknown users and wrong passwords fail identically with
    /// `AppError::InvalidCredentials`.
    pub async fn login(&self, request: LoginRequest) -> Result<String, AppError> {
        let LoginRequest { username, password } = request;

        let (stored_hash, known) = match self.store.get_user(&username).await {
            Ok(user) => (user.password_hash, true),
            Err(_) => (self.dummy_hash.to_string(), false),
        };

        let matches = web::block(move || verify_password(&password, &stored_hash)).await??;
        if !(known && matches) {
            warn!("failed login attempt for {}", username);
            return Err(AppError::InvalidCredentials);
        }

        info!("user {} logged in", username);
        self.sessions.issue(&username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn service(sessions: SessionCodec) -> (AuthService, MemoryStore) {
        let store = MemoryStore::new();
        let service = AuthService::new(store.clone(), sessions, 4).unwrap();
        (service, store)
    }

    fn register(username: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    fn login(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_rejects_invalid_cost() {
        assert!(AuthService::new(MemoryStore::new(), SessionCodec::Plain, 99).is_err());
    }

    #[actix_rt::test]
    async fn test_register_stores_hash_not_password() {
        let (service, store) = service(SessionCodec::Plain);
        service.register(register("alice", "pw1")).await.unwrap();

        let user = store.get_user("alice").await.unwrap();
        assert_ne!(user.password_hash, "pw1");
        assert!(verify_password("pw1", &user.password_hash).unwrap());
    }

    #[actix_rt::test]
    async fn test_register_conflict_keeps_first_password() {
        let (service, store) = service(SessionCodec::Plain);
        service.register(register("alice", "first")).await.unwrap();
        let first_hash = store.get_user("alice").await.unwrap().password_hash;

        let second = service.register(register("alice", "second")).await;
        assert_eq!(second, Err(AppError::AccountExists));
        assert_eq!(store.get_user("alice").await.unwrap().password_hash, first_hash);
        assert_eq!(service.login(login("alice", "first")).await, Ok("alice".to_string()));
    }

    #[actix_rt::test]
    async fn test_login_failures_are_indistinguishable() {
        let (service, _) = service(SessionCodec::Plain);
        service.register(register("alice", "correct")).await.unwrap();

        let wrong_password = service.login(login("alice", "incorrect")).await.unwrap_err();
        let unknown_user = service.login(login("mallory", "correct")).await.unwrap_err();

        assert_eq!(wrong_password, AppError::InvalidCredentials);
        assert_eq!(wrong_password, unknown_user);
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[actix_rt::test]
    async fn test_login_issues_signed_session() {
        let codec = SessionCodec::from_secret(Some("s3cret".to_string()));
        let (service, _) = service(codec.clone());
        service.register(register("alice", "pw")).await.unwrap();

        let token = service.login(login("alice", "pw")).await.unwrap();
        assert_ne!(token, "alice");
        assert_eq!(codec.resolve(&token).unwrap(), "alice");
    }
}
