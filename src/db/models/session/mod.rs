use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod manager;

/// Trait for managing login sessions.
#[async_trait]
pub trait Manager {
    /// Record a new session for a user.
    async fn create_session(
        &self,
        user_id: i64,
        token_hash: &str,
        created_at: &str,
    ) -> anyhow::Result<()>;
    /// Find the session matching a token hash.
    async fn find_session_by_token_hash(
        &self,
        token_hash: &str,
    ) -> anyhow::Result<Option<Session>>;
    /// Delete the session matching a token hash. Logging out.
    async fn delete_session_by_token_hash(&self, token_hash: &str) -> anyhow::Result<()>;
}

#[derive(sqlx::FromRow, Deserialize, Serialize, Debug)]
/// Model for a login session.
///
/// The bearer token itself never touches the database; only a keyed
/// hash of it is stored, so a leaked database does not leak live sessions.
pub struct Session {
    /// Unique session identifier.
    pub id: i64,
    /// The user this session belongs to.
    pub user_id: i64,
    /// Keyed hash of the bearer token.
    pub token_hash: String,
    /// When the session was opened, RFC 3339.
    pub created_at: String,
}
