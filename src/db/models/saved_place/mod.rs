use async_trait::async_trait;

use super::cafe::Cafe;

pub mod manager;

/// Trait for managing a user's saved cafes.
#[async_trait]
pub trait Manager {
    /// Save a cafe for a user. Saving the same cafe twice is a no-op.
    async fn save_place(&self, user_id: i64, cafe_id: i64, created_at: &str)
        -> anyhow::Result<()>;
    /// Remove a cafe from a user's saved list.
    async fn unsave_place(&self, user_id: i64, cafe_id: i64) -> anyhow::Result<()>;
    /// Find the cafes a user has saved, most recently saved first.
    async fn find_saved_cafes(&self, user_id: i64) -> anyhow::Result<Vec<Cafe>>;
}
