//! User repository — registration-time identity records.
//!
//! Users are created once at registration and never mutated or deleted.
//! Username uniqueness is enforced by the `idx_users_username` unique index;
//! a constraint violation on insert surfaces as
//! [`StoreError::UsernameTaken`] so concurrent duplicate registrations
//! resolve the same way as the pre-insert lookup.

use rusqlite::{Connection, OptionalExtension, params};
use uuid::Uuid;

use taskforge_core::User;

use crate::errors::{Result, StoreError};

/// User repository — stateless, every method takes `&Connection`.
pub struct UserRepo;

impl UserRepo {
    /// Create a new user.
    pub fn create(
        conn: &Connection,
        username: &str,
        name: &str,
        password_hash: &str,
    ) -> Result<User> {
        let id = format!("usr_{}", Uuid::now_v7());

        let inserted = conn.execute(
            "INSERT INTO users (id, username, name, password_hash) VALUES (?1, ?2, ?3, ?4)",
            params![id, username, name, password_hash],
        );
        match inserted {
            Ok(_) => Ok(User {
                id,
                username: username.to_string(),
                name: name.to_string(),
                password_hash: password_hash.to_string(),
            }),
            Err(e) if is_constraint_violation(&e) => {
                Err(StoreError::UsernameTaken(username.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Look up a user by unique username. Absence is not an error.
    pub fn get_by_username(conn: &Connection, username: &str) -> Result<Option<User>> {
        let row = conn
            .query_row(
                "SELECT id, username, name, password_hash FROM users WHERE username = ?1",
                params![username],
                Self::map_row,
            )
            .optional()?;
        Ok(row)
    }

    /// Look up a user by ID.
    pub fn get_by_id(conn: &Connection, id: &str) -> Result<Option<User>> {
        let row = conn
            .query_row(
                "SELECT id, username, name, password_hash FROM users WHERE id = ?1",
                params![id],
                Self::map_row,
            )
            .optional()?;
        Ok(row)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
        Ok(User {
            id: row.get(0)?,
            username: row.get(1)?,
            name: row.get(2)?,
            password_hash: row.get(3)?,
        })
    }
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
