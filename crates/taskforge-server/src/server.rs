//! HTTP server assembly: shared state, router construction, and layers.

use std::sync::Arc;
use std::time::Instant;

use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use taskforge_auth::TokenService;
use taskforge_store::ConnectionPool;

use crate::config::AppConfig;
use crate::health::health_check;
use crate::routes::{auth, items};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool.
    pub pool: ConnectionPool,
    /// Token issuance and verification.
    pub tokens: Arc<TokenService>,
    /// Server start time, for the health check.
    pub start_time: Instant,
}

/// The taskforge API server.
///
/// Owns the configuration and shared state; [`Self::router`] produces the
/// complete route tree, ready to serve or to drive directly in tests.
pub struct ApiServer {
    config: AppConfig,
    state: AppState,
}

impl ApiServer {
    /// Assemble a server from config and an already-migrated pool.
    #[must_use]
    pub fn new(config: AppConfig, pool: ConnectionPool) -> Self {
        let tokens = Arc::new(TokenService::new(
            &config.secret_key,
            config.token_expire_minutes,
        ));
        let state = AppState {
            pool,
            tokens,
            start_time: Instant::now(),
        };
        Self { config, state }
    }

    /// The server's configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Build the full application router.
    #[must_use]
    pub fn router(&self) -> Router {
        let start_time = self.state.start_time;
        Router::new()
            .route("/", get(welcome))
            .route(
                "/health",
                get(move || async move { Json(health_check(start_time)) }),
            )
            .route("/auth/register", post(auth::register))
            .route("/auth/login", post(auth::login))
            .route("/auth/me", get(auth::me))
            .route(
                "/items",
                post(items::create_item)
                    .get(items::list_items)
                    .delete(items::soft_delete_items_bulk),
            )
            .route(
                "/items/bulk/permanent",
                delete(items::permanent_delete_items_bulk),
            )
            .route(
                "/items/{id}",
                get(items::get_item)
                    .patch(items::update_item)
                    .delete(items::soft_delete_item),
            )
            .route("/items/{id}/restore", patch(items::restore_item))
            .route(
                "/items/{id}/permanent",
                delete(items::permanent_delete_item),
            )
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }
}

/// `GET /` — landing route.
async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Task Management API" }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
