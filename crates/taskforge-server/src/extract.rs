//! Request extractors.
//!
//! [`CurrentUser`] resolves the bearer token on the request to a full
//! [`User`] record. Handlers that take it are authenticated by
//! construction; any failure short-circuits with a 401 and the
//! `WWW-Authenticate: Bearer` challenge.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use taskforge_core::User;
use taskforge_store::UserRepo;

use crate::errors::ApiError;
use crate::server::AppState;

/// The authenticated user for the current request.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Not authenticated".into()))?;
        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Not authenticated".into()))?;

        let username = state.tokens.verify(token)?;

        // The token subject is the username; the user row must still exist.
        let conn = state.pool.get()?;
        let user = UserRepo::get_by_username(&conn, &username)?
            .ok_or_else(|| ApiError::Unauthorized("Could not validate credentials".into()))?;
        Ok(Self(user))
    }
}
