use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod manager;

/// Role for users running a cafe.
pub const ROLE_OWNER: &str = "owner";
/// Role for users browsing and reviewing cafes.
pub const ROLE_CUSTOMER: &str = "customer";

/// Trait for managing users.
#[async_trait]
pub trait Manager {
    /// Create a new user with a hashed password and no role yet.
    async fn create_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
        created_at: &str,
    ) -> anyhow::Result<User>;
    /// Find a user by id.
    async fn find_user_by_id(&self, user_id: i64) -> anyhow::Result<Option<User>>;
    /// Find a user by email.
    async fn find_user_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
    /// Find a user by username.
    async fn find_user_by_username(&self, username: &str) -> anyhow::Result<Option<User>>;
    /// Set the role of a user.
    async fn update_user_set_role(&self, user_id: i64, role: &str) -> anyhow::Result<()>;
    /// Update the profile fields of a user.
    async fn update_user_profile(&self, user_id: i64, profile: &Profile) -> anyhow::Result<()>;
}

#[derive(sqlx::FromRow, Deserialize, Serialize, Debug, Clone)]
/// Model for a user account.
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Unique display name.
    pub username: String,
    /// Unique email address, stored lowercase.
    pub email: String,
    /// Salted hash of the user's password. Never serialized into responses.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Optional contact phone number.
    pub phone: Option<String>,
    /// Either `customer` or `owner`. `None` until the user picks one
    /// right after signing up.
    pub role: Option<String>,
    /// Shop address, for owners.
    pub shop_location: Option<String>,
    /// Opening hours, for owners.
    pub operation_hours: Option<String>,
    /// When the account was created, RFC 3339.
    pub created_at: String,
}

impl User {
    /// Whether this user has chosen the shop owner role.
    #[must_use]
    pub fn is_owner(&self) -> bool {
        self.role.as_deref() == Some(ROLE_OWNER)
    }
}

/// Profile fields a user may update about themselves.
#[derive(Deserialize, Serialize, Debug)]
pub struct Profile {
    /// New display name.
    pub username: String,
    /// New contact phone number.
    pub phone: Option<String>,
    /// Shop address. Only applied for owners.
    pub shop_location: Option<String>,
    /// Opening hours. Only applied for owners.
    pub operation_hours: Option<String>,
}
