//! # taskforge-store
//!
//! `SQLite` persistence layer for the taskforge backend:
//!
//! - [`connection`] — r2d2 connection pool with WAL and foreign keys
//! - [`migrations`] — versioned schema migrations embedded at compile time
//! - [`repositories`] — stateless repositories over `&Connection`
//!   ([`UserRepo`], [`ItemRepo`])

#![deny(unsafe_code)]

pub mod connection;
pub mod errors;
pub mod migrations;
pub mod repositories;

pub use connection::{ConnectionConfig, ConnectionPool, PooledConnection, new_file, new_in_memory};
pub use errors::{Result, StoreError};
pub use migrations::run_migrations;
pub use repositories::item::{CreateItemOptions, ItemRepo, ListItemsOptions};
pub use repositories::user::UserRepo;
