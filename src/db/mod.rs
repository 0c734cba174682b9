//! Database related module.
use async_trait::async_trait;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::ConnectOptions;
use sqlx::SqlitePool;
use tracing::instrument;

/// Database initialization.
pub mod init;
/// Models for the database.
pub mod models;

#[async_trait]
/// Generic Database
pub trait Db {
    /// Connects to a database.
    ///
    /// # Errors
    /// Errors if connection to database fails.
    async fn connect(url: &str) -> anyhow::Result<DatabaseConnection>;
}

/// Type of database connection.
#[derive(Debug, Clone)]
pub enum DatabaseKind {
    /// Sqlite database.
    Sqlite,
}

/// Database connection.
#[derive(Debug, Clone)]
pub struct DatabaseConnection {
    /// Database connection pool.
    pub pool: SqlitePool,
    /// Type of database connection.
    pub kind: DatabaseKind,
}

#[async_trait]
impl Db for DatabaseConnection {
    /// Connects to a database.
    ///
    /// # Errors
    /// Errors if connection to database fails.
    #[instrument(level = "trace")]
    async fn connect(db_url: &str) -> anyhow::Result<Self> {
        let kind = match db_url {
            url if url.starts_with("sqlite://") => DatabaseKind::Sqlite,
            _ => anyhow::bail!("Unsupported database URL: {}", db_url),
        };
        let options = SqliteConnectOptions::from_str(db_url)?.disable_statement_logging();
        let pool = SqlitePoolOptions::new()
            .max_connections(50)
            .connect_with(options)
            .await?;

        Ok(Self { pool, kind })
    }
}
