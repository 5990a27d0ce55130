pub mod extractors;
pub mod middleware;
pub mod password;
pub mod session;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub use extractors::AuthenticatedUser;
pub use middleware::SessionMiddleware;
pub use password::{hash_password, verify_password};
pub use session::{session_cookie, SessionCodec, SESSION_COOKIE};

lazy_static! {
    // The username travels as a cookie value, so keep it to cookie-safe characters.
    static ref USERNAME_REGEX: regex::Regex = regex::Regex::new(r"^[a-zA-Z0-9_.-]+$").unwrap();
}

/// Represents the payload for a new account registration.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username.
    /// Must be between 1 and 64 characters: letters, digits, `_`, `.` or `-`.
    #[validate(
        length(min = 1, max = 64),
        regex(
            path = "USERNAME_REGEX",
            message = "Username may only contain letters, digits, underscores, dots or hyphens"
        )
    )]
    pub username: String,
    /// Password for the new account. Must not be empty.
    #[validate(length(min = 1))]
    pub password: String,
}

/// Represents the payload for a login request.
///
/// Not validated: anything that does not match an account is simply rejected
/// as invalid credentials.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
