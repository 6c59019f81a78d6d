//! # taskforge-auth
//!
//! Credential handling for the taskforge backend:
//!
//! - [`password`] — argon2id hashing and verification
//! - [`token`] — HS256 bearer tokens carrying the username as subject
//!
//! Neither module touches the database; callers pair them with the
//! identity store.

#![deny(unsafe_code)]

pub mod errors;
pub mod password;
pub mod token;

pub use errors::{AuthError, Result};
pub use password::{hash_password, verify_password};
pub use token::{Claims, TokenService};
