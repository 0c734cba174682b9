//! Manager for the saved_place model.
use crate::db::{DatabaseConnection, DatabaseKind};
use async_trait::async_trait;

use crate::db::models::cafe::Cafe;

#[async_trait]
impl super::Manager for DatabaseConnection {
    /// Save a cafe for a user. Saving the same cafe twice is a no-op.
    ///
    /// # Errors
    /// Errors if the saved place cannot be inserted into the database.
    async fn save_place(
        &self,
        user_id: i64,
        cafe_id: i64,
        created_at: &str,
    ) -> anyhow::Result<()> {
        let statement = "
            INSERT OR IGNORE INTO saved_place ( user_id, cafe_id, created_at )
            VALUES ( $1, $2, $3 )
        ";
        match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query(statement)
                    .bind(user_id)
                    .bind(cafe_id)
                    .bind(created_at)
                    .execute(&mut *connection)
                    .await?;
            }
        }
        Ok(())
    }

    /// Remove a cafe from a user's saved list.
    ///
    /// # Errors
    /// Errors if the saved place cannot be deleted.
    async fn unsave_place(&self, user_id: i64, cafe_id: i64) -> anyhow::Result<()> {
        let statement = "
            DELETE FROM saved_place
            WHERE user_id = $1 AND cafe_id = $2
        ";
        match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query(statement)
                    .bind(user_id)
                    .bind(cafe_id)
                    .execute(&mut *connection)
                    .await?;
            }
        }
        Ok(())
    }

    /// Find the cafes a user has saved, most recently saved first.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn find_saved_cafes(&self, user_id: i64) -> anyhow::Result<Vec<Cafe>> {
        let statement = "
            SELECT cafe.*
            FROM cafe
            JOIN saved_place ON saved_place.cafe_id = cafe.id
            WHERE saved_place.user_id = $1
            ORDER BY saved_place.id DESC
        ";
        let rows = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query_as::<_, Cafe>(statement)
                    .bind(user_id)
                    .fetch_all(&mut *connection)
                    .await?
            }
        };
        Ok(rows)
    }
}
