//! Manager for the cafe model.
use crate::db::{DatabaseConnection, DatabaseKind};
use async_trait::async_trait;

use super::{Cafe, NewCafe};

#[async_trait]
impl super::Manager for DatabaseConnection {
    /// Create a new cafe listing owned by a user.
    ///
    /// # Errors
    /// Errors if the cafe cannot be inserted into the database.
    async fn create_cafe(
        &self,
        owner_id: i64,
        cafe: &NewCafe,
        created_at: &str,
    ) -> anyhow::Result<Cafe> {
        let statement = "
            INSERT INTO cafe ( owner_id, name, address, neighborhood, description, created_at )
            VALUES ( $1, $2, $3, $4, $5, $6 )
        ";
        let id = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query(statement)
                    .bind(owner_id)
                    .bind(&cafe.name)
                    .bind(&cafe.address)
                    .bind(&cafe.neighborhood)
                    .bind(&cafe.description)
                    .bind(created_at)
                    .execute(&mut *connection)
                    .await?
                    .last_insert_rowid()
            }
        };
        self.find_cafe_by_id(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("cafe vanished right after insert"))
    }

    /// Find all cafes, oldest first.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn find_all_cafes(&self) -> anyhow::Result<Vec<Cafe>> {
        let statement = "
            SELECT *
            FROM cafe
            ORDER BY id ASC
        ";
        let rows = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query_as::<_, Cafe>(statement)
                    .fetch_all(&mut *connection)
                    .await?
            }
        };
        Ok(rows)
    }

    /// Find a cafe by id.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn find_cafe_by_id(&self, cafe_id: i64) -> anyhow::Result<Option<Cafe>> {
        let statement = "
            SELECT *
            FROM cafe
            WHERE id = $1
        ";
        let row = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query_as::<_, Cafe>(statement)
                    .bind(cafe_id)
                    .fetch_optional(&mut *connection)
                    .await?
            }
        };
        Ok(row)
    }

    /// Find cafes whose name contains the query, case-insensitively.
    ///
    /// `LIKE` is case-insensitive for ASCII in `SQLite`, which matches the
    /// original behavior of a case-insensitive name regex. The fragment is
    /// escaped so `%` and `_` in a query match themselves, not wildcards.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn find_cafes_by_name_fragment(&self, fragment: &str) -> anyhow::Result<Vec<Cafe>> {
        let statement = "
            SELECT *
            FROM cafe
            WHERE name LIKE '%' || $1 || '%' ESCAPE '\\'
            ORDER BY name ASC
        ";
        let rows = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query_as::<_, Cafe>(statement)
                    .bind(escape_like(fragment))
                    .fetch_all(&mut *connection)
                    .await?
            }
        };
        Ok(rows)
    }
}

/// Backslash-escape the `LIKE` wildcards in a search fragment.
fn escape_like(fragment: &str) -> String {
    fragment
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn test_escape_like_when_wildcards_expect_escaped() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("flat_white"), "flat\\_white");
        assert_eq!(escape_like(r"back\slash"), r"back\\slash");
    }

    #[test]
    fn test_escape_like_when_plain_expect_unchanged() {
        assert_eq!(escape_like("blue bottle"), "blue bottle");
    }
}

