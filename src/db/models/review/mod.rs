use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod manager;

/// Lowest rating a review may carry.
pub const MIN_RATING: i64 = 1;
/// Highest rating a review may carry.
pub const MAX_RATING: i64 = 5;

/// Trait for managing reviews.
#[async_trait]
pub trait Manager {
    /// Create a new review of a cafe.
    async fn create_review(
        &self,
        cafe_id: i64,
        user_id: i64,
        username: &str,
        rating: i64,
        text: &str,
        created_at: &str,
    ) -> anyhow::Result<Review>;
    /// Find a review by id.
    async fn find_review_by_id(&self, review_id: i64) -> anyhow::Result<Option<Review>>;
    /// Find all reviews of a cafe, newest first.
    async fn find_reviews_by_cafe(&self, cafe_id: i64) -> anyhow::Result<Vec<Review>>;
    /// Replace the rating and text of a review.
    async fn update_review(&self, review_id: i64, rating: i64, text: &str) -> anyhow::Result<()>;
    /// Delete a review.
    async fn delete_review(&self, review_id: i64) -> anyhow::Result<()>;
}

#[derive(sqlx::FromRow, Deserialize, Serialize, Debug, Clone)]
/// Model for a cafe review.
pub struct Review {
    /// Unique review identifier.
    pub id: i64,
    /// The cafe being reviewed.
    pub cafe_id: i64,
    /// The author of the review.
    pub user_id: i64,
    /// Snapshot of the author's username at posting time.
    pub username: String,
    /// Star rating, 1 through 5.
    pub rating: i64,
    /// Body of the review.
    pub text: String,
    /// When the review was posted, RFC 3339.
    pub created_at: String,
}
