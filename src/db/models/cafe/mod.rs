use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod manager;

/// Trait for managing cafes.
#[async_trait]
pub trait Manager {
    /// Create a new cafe listing owned by a user.
    async fn create_cafe(&self, owner_id: i64, cafe: &NewCafe, created_at: &str)
        -> anyhow::Result<Cafe>;
    /// Find all cafes, oldest first.
    async fn find_all_cafes(&self) -> anyhow::Result<Vec<Cafe>>;
    /// Find a cafe by id.
    async fn find_cafe_by_id(&self, cafe_id: i64) -> anyhow::Result<Option<Cafe>>;
    /// Find cafes whose name contains the query, case-insensitively.
    async fn find_cafes_by_name_fragment(&self, fragment: &str) -> anyhow::Result<Vec<Cafe>>;
}

#[derive(sqlx::FromRow, Deserialize, Serialize, Debug, Clone)]
/// Model for a cafe listing.
pub struct Cafe {
    /// Unique cafe identifier.
    pub id: i64,
    /// The owner who listed the cafe.
    pub owner_id: Option<i64>,
    /// Name of the cafe.
    pub name: String,
    /// Street address.
    pub address: Option<String>,
    /// NYC neighborhood, e.g. "Greenpoint".
    pub neighborhood: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// When the listing was created, RFC 3339.
    pub created_at: String,
}

/// Fields accepted when listing a new cafe.
#[derive(Deserialize, Serialize, Debug)]
pub struct NewCafe {
    /// Name of the cafe.
    pub name: String,
    /// Street address.
    pub address: Option<String>,
    /// NYC neighborhood.
    pub neighborhood: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
}
