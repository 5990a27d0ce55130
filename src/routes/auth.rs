use crate::{
    auth::{session_cookie, LoginRequest, RegisterRequest},
    error::AppError,
    services::AuthService,
};
use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

/// Register a new account
///
/// ## Responses:
/// - `201 Created`: the account exists now.
/// - `400 Bad Request`: malformed body or a username/password that fails validation.
/// - `409 Conflict`: the username is taken.
#[post("/register")]
pub async fn register(
    auth: web::Data<AuthService>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    register_data.validate()?;
    auth.register(register_data.into_inner()).await?;

    Ok(HttpResponse::Created().finish())
}

/// Log in
///
/// On success the session is handed back as the `user_session` cookie.
///
/// ## Responses:
/// - `200 OK`: with `Set-Cookie`.
/// - `400 Bad Request`: malformed body.
/// - `401 Unauthorized`: unknown user or wrong password, indistinguishably.
#[post("/login")]
pub async fn login(
    auth: web::Data<AuthService>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let token = auth.login(login_data.into_inner()).await?;

    Ok(HttpResponse::Ok().cookie(session_cookie(token)).finish())
}
