//! # taskforge-server
//!
//! Axum HTTP API for the taskforge backend:
//!
//! - Bearer-token authentication via the [`extract::CurrentUser`] extractor
//! - `/auth` registration, login, and identity routes
//! - `/items` ownership-scoped CRUD with soft-delete lifecycle
//! - Typed [`errors::ApiError`] with HTTP status mapping
//! - Health check and immutable [`config::AppConfig`]

#![deny(unsafe_code)]

pub mod config;
pub mod errors;
pub mod extract;
pub mod health;
pub mod routes;
pub mod server;

pub use config::AppConfig;
pub use errors::ApiError;
pub use server::{ApiServer, AppState};
