//! Error types for the persistence layer.
//!
//! [`StoreError`] is the primary error type returned by all store
//! operations. Variants stay close to the failure modes callers actually
//! branch on: validation failures become 400s, username conflicts 400s,
//! everything else is fatal to the request.

use taskforge_core::ValidationError;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `SQLite` database error.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// Schema migration failed.
    #[error("migration error: {message}")]
    Migration {
        /// Describes which migration failed and why.
        message: String,
    },

    /// Input violated a validation rule before reaching the database.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The username unique index rejected an insert.
    #[error("username already taken: {0}")]
    UsernameTaken(String),
}

/// Convenience type alias for store results.
pub type Result<T> = std::result::Result<T, StoreError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_error_display() {
        let err = StoreError::Sqlite(rusqlite::Error::QueryReturnedNoRows);
        assert!(err.to_string().contains("sqlite error"));
    }

    #[test]
    fn migration_error_display() {
        let err = StoreError::Migration {
            message: "v001 failed: syntax error".into(),
        };
        assert_eq!(err.to_string(), "migration error: v001 failed: syntax error");
    }

    #[test]
    fn validation_error_converts() {
        let err: StoreError = ValidationError::TitleTooShort.into();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(err.to_string().contains("at least 5 characters"));
    }

    #[test]
    fn username_taken_display() {
        let err = StoreError::UsernameTaken("alice".into());
        assert_eq!(err.to_string(), "username already taken: alice");
    }

    #[test]
    fn from_rusqlite_error() {
        let err: StoreError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, StoreError::Sqlite(_)));
    }
}
