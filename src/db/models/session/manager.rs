//! Manager for the session model.
use crate::db::{DatabaseConnection, DatabaseKind};
use async_trait::async_trait;

use super::Session;

#[async_trait]
impl super::Manager for DatabaseConnection {
    /// Record a new session for a user.
    ///
    /// # Errors
    /// Errors if the session cannot be inserted into the database.
    async fn create_session(
        &self,
        user_id: i64,
        token_hash: &str,
        created_at: &str,
    ) -> anyhow::Result<()> {
        let statement = "
            INSERT INTO session ( user_id, token_hash, created_at )
            VALUES ( $1, $2, $3 )
        ";
        match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query(statement)
                    .bind(user_id)
                    .bind(token_hash)
                    .bind(created_at)
                    .execute(&mut *connection)
                    .await?;
            }
        }
        Ok(())
    }

    /// Find the session matching a token hash.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn find_session_by_token_hash(
        &self,
        token_hash: &str,
    ) -> anyhow::Result<Option<Session>> {
        let statement = "
            SELECT *
            FROM session
            WHERE token_hash = $1
        ";
        let row = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query_as::<_, Session>(statement)
                    .bind(token_hash)
                    .fetch_optional(&mut *connection)
                    .await?
            }
        };
        Ok(row)
    }

    /// Delete the session matching a token hash. Logging out.
    ///
    /// # Errors
    /// Errors if the session cannot be deleted.
    async fn delete_session_by_token_hash(&self, token_hash: &str) -> anyhow::Result<()> {
        let statement = "
            DELETE FROM session
            WHERE token_hash = $1
        ";
        match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query(statement)
                    .bind(token_hash)
                    .execute(&mut *connection)
                    .await?;
            }
        }
        Ok(())
    }
}
