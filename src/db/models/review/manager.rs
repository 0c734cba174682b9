//! Manager for the review model.
use crate::db::{DatabaseConnection, DatabaseKind};
use async_trait::async_trait;

use super::Review;

#[async_trait]
impl super::Manager for DatabaseConnection {
    /// Create a new review of a cafe.
    ///
    /// # Errors
    /// Errors if the review cannot be inserted into the database.
    async fn create_review(
        &self,
        cafe_id: i64,
        user_id: i64,
        username: &str,
        rating: i64,
        text: &str,
        created_at: &str,
    ) -> anyhow::Result<Review> {
        let statement = "
            INSERT INTO review ( cafe_id, user_id, username, rating, text, created_at )
            VALUES ( $1, $2, $3, $4, $5, $6 )
        ";
        let id = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query(statement)
                    .bind(cafe_id)
                    .bind(user_id)
                    .bind(username)
                    .bind(rating)
                    .bind(text)
                    .bind(created_at)
                    .execute(&mut *connection)
                    .await?
                    .last_insert_rowid()
            }
        };
        self.find_review_by_id(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("review vanished right after insert"))
    }

    /// Find a review by id.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn find_review_by_id(&self, review_id: i64) -> anyhow::Result<Option<Review>> {
        let statement = "
            SELECT *
            FROM review
            WHERE id = $1
        ";
        let row = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query_as::<_, Review>(statement)
                    .bind(review_id)
                    .fetch_optional(&mut *connection)
                    .await?
            }
        };
        Ok(row)
    }

    /// Find all reviews of a cafe, newest first.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn find_reviews_by_cafe(&self, cafe_id: i64) -> anyhow::Result<Vec<Review>> {
        let statement = "
            SELECT *
            FROM review
            WHERE cafe_id = $1
            ORDER BY id DESC
        ";
        let rows = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query_as::<_, Review>(statement)
                    .bind(cafe_id)
                    .fetch_all(&mut *connection)
                    .await?
            }
        };
        Ok(rows)
    }

    /// Replace the rating and text of a review.
    ///
    /// # Errors
    /// Errors if the review cannot be updated.
    async fn update_review(&self, review_id: i64, rating: i64, text: &str) -> anyhow::Result<()> {
        let statement = "
            UPDATE review
            SET rating = $1, text = $2
            WHERE id = $3
        ";
        match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query(statement)
                    .bind(rating)
                    .bind(text)
                    .bind(review_id)
                    .execute(&mut *connection)
                    .await?;
            }
        }
        Ok(())
    }

    /// Delete a review.
    ///
    /// # Errors
    /// Errors if the review cannot be deleted.
    async fn delete_review(&self, review_id: i64) -> anyhow::Result<()> {
        let statement = "
            DELETE FROM review
            WHERE id = $1
        ";
        match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query(statement)
                    .bind(review_id)
                    .execute(&mut *connection)
                    .await?;
            }
        }
        Ok(())
    }
}
