//! Environment-driven configuration for the server.
use std::env;

use tracing::warn;

use crate::db::init::database_url;

/// Fallback secret, only acceptable for local development.
pub const DEV_SECRET_KEY: &str = "dev-secret-change-me";

/// Runtime configuration, resolved once at start-up.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server listens on.
    pub port: u16,
    /// sqlx connection string.
    pub database_url: String,
    /// Secret keying the hashing of session tokens at rest.
    pub secret_key: String,
}

impl Config {
    /// Resolve configuration from the environment.
    ///
    /// `SECRET_KEY` falls back to a development value with a logged
    /// warning; every other value has a safe default.
    #[must_use]
    pub fn load(port: u16) -> Self {
        let secret_key = env::var("SECRET_KEY").unwrap_or_else(|_| {
            warn!("SECRET_KEY not set, using a development secret");
            DEV_SECRET_KEY.into()
        });
        Self {
            port,
            database_url: database_url(),
            secret_key,
        }
    }
}
