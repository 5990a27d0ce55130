//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the application.
//! Every failure a request can hit ends up as one of its variants, and each variant
//! maps to exactly one HTTP status code.
//!
//! `AppError` implements `actix_web::error::ResponseError`, answering with a terse
//! `text/plain` body. It also provides `From` implementations for the store's
//! `StoreError` and for the crate errors the services touch (`bcrypt`, `validator`,
//! `jsonwebtoken`, the blocking thread pool), so handlers can simply use `?`.

use actix_web::{
    error::{BlockingError, ResponseError},
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use std::fmt;
use validator::ValidationErrors;

use crate::store::StoreError;

/// Represents all possible errors that can occur within the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The username is already registered (HTTP 409).
    AccountExists,
    /// Unknown user or wrong password (HTTP 401).
    ///
    /// Deliberately carries no detail: both cases must look identical to the caller.
    InvalidCredentials,
    /// No task with that id exists in the caller's own list (HTTP 404).
    TaskNotFound,
    /// The request body or path could not be decoded or failed validation (HTTP 400).
    MalformedRequest(String),
    /// The session cookie is missing or unusable (HTTP 401).
    Unauthorized(String),
    /// An unexpected server-side error (HTTP 500).
    InternalServerError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::AccountExists => write!(f, "account already exists"),
            AppError::InvalidCredentials => write!(f, "invalid credentials"),
            AppError::TaskNotFound => write!(f, "task not found"),
            AppError::MalformedRequest(msg) => write!(f, "invalid request: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "unauthorized: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "internal server error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Converts `AppError` variants into plain-text `HttpResponse` objects.
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::AccountExists => StatusCode::CONFLICT,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::TaskNotFound => StatusCode::NOT_FOUND,
            AppError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }
}

/// Store failures pass through unchanged in meaning.
impl From<StoreError> for AppError {
    fn from(error: StoreError) -> AppError {
        match error {
            StoreError::AccountExists => AppError::AccountExists,
            StoreError::InvalidCredentials => AppError::InvalidCredentials,
            StoreError::TaskNotFound => AppError::TaskNotFound,
        }
    }
}

/// Converts `validator::ValidationErrors` into `AppError::MalformedRequest`.
impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::MalformedRequest(error.to_string())
    }
}

/// A session token that fails to decode is treated as no session at all.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        AppError::Unauthorized(format!("invalid session: {}", error))
    }
}

/// Converts `bcrypt::BcryptError` into `AppError::InternalServerError`.
impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::InternalServerError(error.to_string())
    }
}

/// The blocking pool was shut down or the closure panicked.
impl From<BlockingError> for AppError {
    fn from(error: BlockingError) -> AppError {
        AppError::InternalServerError(error.to_string())
    }
}
