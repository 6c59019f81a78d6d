//! Error types for credential handling.

use thiserror::Error;

/// Errors that can occur while hashing passwords or handling tokens.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Password hashing failed (argon2 parameter or encoding problem).
    #[error("password hash error: {0}")]
    Hash(String),

    /// Token could not be issued.
    #[error("token encoding error: {0}")]
    TokenEncoding(String),

    /// Token failed verification (malformed, bad signature, or expired).
    #[error("invalid token: {0}")]
    InvalidToken(String),
}

/// Convenience type alias for auth results.
pub type Result<T> = std::result::Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_error_display() {
        let err = AuthError::Hash("salt too short".into());
        assert_eq!(err.to_string(), "password hash error: salt too short");
    }

    #[test]
    fn invalid_token_display() {
        let err = AuthError::InvalidToken("ExpiredSignature".into());
        assert!(err.to_string().starts_with("invalid token"));
    }
}
