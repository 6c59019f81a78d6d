//! Application configuration.
//!
//! An [`AppConfig`] is built once at process start — compiled defaults,
//! then environment variable overrides — and passed into the server.
//! Nothing reads the environment after startup.

use serde::{Deserialize, Serialize};

/// Configuration for the taskforge server.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Host to bind (default `"127.0.0.1"`).
    pub host: String,
    /// Port to bind (default `0` for auto-assign).
    pub port: u16,
    /// Path to the `SQLite` database file; `None` means the binary's
    /// default location.
    pub db_path: Option<String>,
    /// Shared secret for signing access tokens.
    pub secret_key: String,
    /// Access token lifetime in minutes.
    pub token_expire_minutes: i64,
}

/// Development-only fallback secret. Override with `TASKFORGE_SECRET_KEY`
/// in any real deployment.
pub const DEV_SECRET_KEY: &str = "taskforge-insecure-dev-secret";

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 0,
            db_path: None,
            secret_key: DEV_SECRET_KEY.into(),
            token_expire_minutes: 30,
        }
    }
}

impl AppConfig {
    /// Load defaults and apply environment variable overrides.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::default();
        apply_env_overrides(&mut config);
        config
    }

    /// True when the config still carries the compiled-in dev secret.
    #[must_use]
    pub fn uses_dev_secret(&self) -> bool {
        self.secret_key == DEV_SECRET_KEY
    }
}

/// Apply environment variable overrides to a loaded config.
///
/// Invalid values are silently ignored (fall back to defaults).
pub fn apply_env_overrides(config: &mut AppConfig) {
    if let Some(v) = read_env_string("TASKFORGE_HOST") {
        config.host = v;
    }
    if let Some(v) = read_env_u16("TASKFORGE_PORT") {
        config.port = v;
    }
    if let Some(v) = read_env_string("TASKFORGE_DB_PATH") {
        config.db_path = Some(v);
    }
    if let Some(v) = read_env_string("TASKFORGE_SECRET_KEY") {
        config.secret_key = v;
    }
    if let Some(v) = read_env_i64("TASKFORGE_TOKEN_EXPIRE_MINUTES", 1, 60 * 24 * 30) {
        config.token_expire_minutes = v;
    }
}

// ── Pure parsing functions (testable without env vars) ──────────────────────

/// Parse a u16, rejecting anything out of range.
pub fn parse_u16(val: &str) -> Option<u16> {
    val.trim().parse().ok()
}

/// Parse an i64 within `[min, max]`.
pub fn parse_i64_in_range(val: &str, min: i64, max: i64) -> Option<i64> {
    let parsed: i64 = val.trim().parse().ok()?;
    (min..=max).contains(&parsed).then_some(parsed)
}

fn read_env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn read_env_u16(key: &str) -> Option<u16> {
    std::env::var(key).ok().and_then(|v| parse_u16(&v))
}

fn read_env_i64(key: &str, min: i64, max: i64) -> Option<i64> {
    std::env::var(key)
        .ok()
        .and_then(|v| parse_i64_in_range(&v, min, max))
}
