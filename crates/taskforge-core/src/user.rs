//! User identity types.
//!
//! [`User`] is the full stored record including the password hash and is
//! never serialized outward. [`PublicUser`] is the wire-safe subset returned
//! by the API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered user as stored in the database.
///
/// Deliberately not `Serialize` — handlers convert to [`PublicUser`] before
/// responding so the password hash cannot leak.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    /// Stable surrogate ID (`usr_<uuidv7>`).
    pub id: String,
    /// Unique login name.
    pub username: String,
    /// Display name, free text.
    pub name: String,
    /// Opaque password hash (argon2id PHC string).
    pub password_hash: String,
}

impl fmt::Debug for User {
    // Redact the hash from debug output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("name", &self.name)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// The public subset of a user returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    /// Stable surrogate ID.
    pub id: String,
    /// Unique login name.
    pub username: String,
    /// Display name.
    pub name: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
        }
    }
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            name: user.name.clone(),
        }
    }
}
