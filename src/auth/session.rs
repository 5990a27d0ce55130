use crate::error::AppError;
use actix_web::cookie::Cookie;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the cookie that carries the session.
pub const SESSION_COOKIE: &str = "user_session";

/// Claims of a signed session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// The username the session belongs to.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: usize,
}

/// Turns a username into a session cookie value and back.
///
/// `Plain` stores the username itself. Anyone can forge such a cookie, so
/// `Signed` wraps the username in an HS256 token instead. Neither mode expires
/// sessions.
#[derive(Clone)]
pub enum SessionCodec {
    Plain,
    Signed { secret: String },
}

impl fmt::Debug for SessionCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionCodec::Plain => write!(f, "SessionCodec::Plain"),
            SessionCodec::Signed { .. } => write!(f, "SessionCodec::Signed {{ .. }}"),
        }
    }
}

impl SessionCodec {
    /// Signed when a secret is configured, plain otherwise.
    pub fn from_secret(secret: Option<String>) -> Self {
        match secret {
            Some(secret) if !secret.is_empty() => SessionCodec::Signed { secret },
            _ => SessionCodec::Plain,
        }
    }

    /// Produces the cookie value for `username`.
    pub fn issue(&self, username: &str) -> Result<String, AppError> {
        match self {
            SessionCodec::Plain => Ok(username.to_string()),
            SessionCodec::Signed { secret } => {
                let claims = Claims {
                    sub: username.to_string(),
                    iat: chrono::Utc::now().timestamp() as usize,
                };
                encode(
                    &Header::new(Algorithm::HS256),
                    &claims,
                    &EncodingKey::from_secret(secret.as_bytes()),
                )
                .map_err(|e| {
                    AppError::InternalServerError(format!("Failed to issue session: {}", e))
                })
            }
        }
    }

    /// Recovers the username from a cookie value.
    ///
    /// Returns `AppError::Unauthorized` for an empty value or, in signed mode,
    /// for anything that does not verify against the secret.
    pub fn resolve(&self, token: &str) -> Result<String, AppError> {
        if token.is_empty() {
            return Err(AppError::Unauthorized("missing user cookie".into()));
        }
        match self {
            SessionCodec::Plain => Ok(token.to_string()),
            SessionCodec::Signed { secret } => {
                let mut validation = Validation::new(Algorithm::HS256);
                validation.validate_exp = false;
                validation.required_spec_claims.clear();

                let claims =
                    decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)?
                        .claims;
                if claims.sub.is_empty() {
                    return Err(AppError::Unauthorized("missing user cookie".into()));
                }
                Ok(claims.sub)
            }
        }
    }
}

/// Builds the `Set-Cookie` value handed out on login.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .finish()
}
