//! Database connection and schema bootstrap.
use crate::db::{Db as _, DatabaseConnection};
use std::env;

/// Default connection string, a `SQLite` file in the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://sips.sqlite3?mode=rwc";

/// Connection string for the database, from the `DATABASE_URL` environment
/// variable, falling back to a local `SQLite` file.
#[must_use]
pub fn database_url() -> String {
    env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into())
}

/// Connects to a database and applies migrations.
/// We use `SQLite` by default, but we can override this by setting the `DATABASE_URL` environment variable.
///
/// # Errors
/// Errors if connection to database fails.
/// Connections can fail if the database is not running, or if the database URL is invalid.
pub async fn connect(db_url: &str) -> anyhow::Result<DatabaseConnection> {
    let connection = DatabaseConnection::connect(db_url).await?;
    tracing::info!("Connected to database");
    sqlx::migrate!("./migrations/sqlite")
        .run(&connection.pool)
        .await?;
    Ok(connection)
}
