//! API error type and HTTP status mapping.
//!
//! [`ApiError`] is the single error type route handlers return. Every
//! variant maps to a status code and a `{"detail": "…"}` body. Internal
//! errors are logged in full but surface to the client as a generic
//! message — file paths and SQL never leave the process.
//!
//! Ownership violations are deliberately reported as [`ApiError::NotFound`]
//! so other users' item IDs cannot be probed.

use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use taskforge_auth::AuthError;
use taskforge_store::StoreError;

/// Errors surfaced to API clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input (short title, oversized page limit).
    #[error("{0}")]
    Validation(String),

    /// Duplicate unique value (username already registered).
    #[error("{0}")]
    Conflict(String),

    /// Missing or invalid credentials.
    #[error("{0}")]
    Unauthorized(String),

    /// Resource absent — or owned by someone else; the two are
    /// indistinguishable by design.
    #[error("{0}")]
    NotFound(String),

    /// Unexpected failure; full detail is logged, not returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Not-found error with the standard item message.
    #[must_use]
    pub fn item_not_found() -> Self {
        Self::NotFound("Item not found".into())
    }

    /// The HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing detail message, sanitized for internal errors.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Internal(_) => "Internal server error".into(),
            Self::Validation(msg)
            | Self::Conflict(msg)
            | Self::Unauthorized(msg)
            | Self::NotFound(msg) => msg.clone(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(v) => Self::Validation(v.to_string()),
            StoreError::UsernameTaken(_) => Self::Conflict("Username already registered".into()),
            StoreError::Sqlite(_) | StoreError::Pool(_) | StoreError::Migration { .. } => {
                Self::Internal(err.to_string())
            }
        }
    }
}

impl From<r2d2::Error> for ApiError {
    fn from(err: r2d2::Error) -> Self {
        Self::Internal(format!("connection pool error: {err}"))
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidToken(_) => {
                Self::Unauthorized("Could not validate credentials".into())
            }
            AuthError::Hash(_) | AuthError::TokenEncoding(_) => Self::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(detail) = &self {
            error!(detail, "request failed with internal error");
        }

        let status = self.status();
        let body = Json(json!({ "detail": self.detail() }));
        let mut response = (status, body).into_response();
        if status == StatusCode::UNAUTHORIZED {
            let _ = response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use taskforge_core::ValidationError;

    #[test]
    fn validation_maps_to_400() {
        assert_eq!(
            ApiError::Validation("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn conflict_maps_to_400() {
        assert_eq!(
            ApiError::Conflict("taken".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn unauthorized_maps_to_401_with_challenge() {
        let response = ApiError::Unauthorized("nope".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(ApiError::item_not_found().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_detail_is_sanitized() {
        let err = ApiError::Internal("sqlite error at /var/db/tasks.db: disk full".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail(), "Internal server error");
        assert!(!err.detail().contains("/var"));
    }

    #[test]
    fn store_validation_converts() {
        let err: ApiError = StoreError::Validation(ValidationError::TitleTooShort).into();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(err.detail().contains("at least 5 characters"));
    }

    #[test]
    fn store_username_taken_converts_to_conflict() {
        let err: ApiError = StoreError::UsernameTaken("alice".into()).into();
        assert!(matches!(err, ApiError::Conflict(_)));
        assert_eq!(err.detail(), "Username already registered");
    }

    #[test]
    fn store_sqlite_converts_to_internal() {
        let err: ApiError = StoreError::Sqlite(rusqlite::Error::QueryReturnedNoRows).into();
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[test]
    fn auth_invalid_token_converts_to_unauthorized() {
        let err: ApiError = AuthError::InvalidToken("expired".into()).into();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }
}
