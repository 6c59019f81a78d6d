//! Authentication routes: register, login, and the current-user probe.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use taskforge_auth::{hash_password, verify_password};
use taskforge_core::PublicUser;
use taskforge_store::UserRepo;

use crate::errors::ApiError;
use crate::extract::CurrentUser;
use crate::server::AppState;

/// Body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Unique login name.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Plaintext password, hashed before storage.
    pub password: String,
}

/// Form body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Response for a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Signed bearer token.
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
    /// The authenticated user's public profile.
    pub user: PublicUser,
}

/// `POST /auth/register` — create a user account.
///
/// Returns 201 with the public profile, or 400 when the username is
/// already registered. The unique index catches the race where two
/// registrations pass the pre-insert lookup concurrently.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<PublicUser>), ApiError> {
    let conn = state.pool.get()?;

    if UserRepo::get_by_username(&conn, &req.username)?.is_some() {
        return Err(ApiError::Conflict("Username already registered".into()));
    }

    let password_hash = hash_password(&req.password)?;
    let user = UserRepo::create(&conn, &req.username, &req.name, &password_hash)?;
    info!(username = %user.username, "registered user");

    Ok((StatusCode::CREATED, Json(PublicUser::from(user))))
}

/// `POST /auth/login` — exchange form credentials for a bearer token.
///
/// Unknown username and wrong password produce the same 401 so the
/// response does not reveal which half was wrong.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<LoginResponse>, ApiError> {
    let conn = state.pool.get()?;

    let user = UserRepo::get_by_username(&conn, &form.username)?
        .filter(|u| verify_password(&form.password, &u.password_hash))
        .ok_or_else(|| ApiError::Unauthorized("Incorrect username or password".into()))?;

    let access_token = state.tokens.issue(&user.username)?;
    info!(username = %user.username, "login succeeded");

    Ok(Json(LoginResponse {
        access_token,
        token_type: "bearer".into(),
        user: PublicUser::from(user),
    }))
}

/// `GET /auth/me` — the public profile behind the presented token.
pub async fn me(CurrentUser(user): CurrentUser) -> Json<PublicUser> {
    Json(PublicUser::from(user))
}
