//! Manager for the user model.
use crate::db::{DatabaseConnection, DatabaseKind};
use async_trait::async_trait;

use super::{Profile, User};

#[async_trait]
impl super::Manager for DatabaseConnection {
    /// Create a new user with a hashed password and no role yet.
    ///
    /// # Errors
    /// Errors if the user cannot be inserted, e.g. when the username or
    /// email is already taken.
    async fn create_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
        created_at: &str,
    ) -> anyhow::Result<User> {
        let statement = "
            INSERT INTO user ( username, email, password_hash, created_at )
            VALUES ( $1, $2, $3, $4 )
        ";
        match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query(statement)
                    .bind(username)
                    .bind(email)
                    .bind(password_hash)
                    .bind(created_at)
                    .execute(&mut *connection)
                    .await?;
            }
        }
        self.find_user_by_email(email)
            .await?
            .ok_or_else(|| anyhow::anyhow!("user vanished right after insert"))
    }

    /// Find a user by id.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn find_user_by_id(&self, user_id: i64) -> anyhow::Result<Option<User>> {
        let statement = "
            SELECT *
            FROM user
            WHERE id = $1
        ";
        let row = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query_as::<_, User>(statement)
                    .bind(user_id)
                    .fetch_optional(&mut *connection)
                    .await?
            }
        };
        Ok(row)
    }

    /// Find a user by email.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn find_user_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let statement = "
            SELECT *
            FROM user
            WHERE email = $1
        ";
        let row = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query_as::<_, User>(statement)
                    .bind(email)
                    .fetch_optional(&mut *connection)
                    .await?
            }
        };
        Ok(row)
    }

    /// Find a user by username.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn find_user_by_username(&self, username: &str) -> anyhow::Result<Option<User>> {
        let statement = "
            SELECT *
            FROM user
            WHERE username = $1
        ";
        let row = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query_as::<_, User>(statement)
                    .bind(username)
                    .fetch_optional(&mut *connection)
                    .await?
            }
        };
        Ok(row)
    }

    /// Set the role of a user.
    ///
    /// # Errors
    /// Errors if the user cannot be updated.
    async fn update_user_set_role(&self, user_id: i64, role: &str) -> anyhow::Result<()> {
        let statement = "
            UPDATE user
            SET role = $1
            WHERE id = $2
        ";
        match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query(statement)
                    .bind(role)
                    .bind(user_id)
                    .execute(&mut *connection)
                    .await?;
            }
        }
        Ok(())
    }

    /// Update the profile fields of a user. Shop fields passed as `None`
    /// are left untouched.
    ///
    /// # Errors
    /// Errors if the user cannot be updated.
    async fn update_user_profile(&self, user_id: i64, profile: &Profile) -> anyhow::Result<()> {
        let statement = "
            UPDATE user
            SET username = $1,
                phone = $2,
                shop_location = COALESCE($3, shop_location),
                operation_hours = COALESCE($4, operation_hours)
            WHERE id = $5
        ";
        match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query(statement)
                    .bind(&profile.username)
                    .bind(&profile.phone)
                    .bind(&profile.shop_location)
                    .bind(&profile.operation_hours)
                    .bind(user_id)
                    .execute(&mut *connection)
                    .await?;
            }
        }
        Ok(())
    }
}
