//! Repository for the `categories` table.

use sqlx::SqliteExecutor;
use stockroom_core::types::DbId;

use crate::models::category::Category;

/// Column list for `categories` queries.
const COLUMNS: &str = "id, name";

/// Provides data access for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories, ordered by id.
    pub async fn list(
        executor: impl SqliteExecutor<'_>,
    ) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id");
        sqlx::query_as::<_, Category>(&query)
            .fetch_all(executor)
            .await
    }

    /// Fetch a single category by id.
    pub async fn find_by_id(
        executor: impl SqliteExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = ?1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Fetch a category by exact (case-sensitive) name, for uniqueness
    /// checks at create and rename time.
    pub async fn find_by_name(
        executor: impl SqliteExecutor<'_>,
        name: &str,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE name = ?1");
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_optional(executor)
            .await
    }

    /// Insert a new category, returning the stored row.
    pub async fn insert(
        executor: impl SqliteExecutor<'_>,
        name: &str,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name) VALUES (?1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_one(executor)
            .await
    }

    /// Rename a category.
    pub async fn rename(
        executor: impl SqliteExecutor<'_>,
        id: DbId,
        name: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE categories SET name = ?1 WHERE id = ?2")
            .bind(name)
            .bind(id)
            .execute(executor)
            .await
            .map(|_| ())
    }

    /// Delete a category by id. Returns the number of rows removed.
    pub async fn delete(
        executor: impl SqliteExecutor<'_>,
        id: DbId,
    ) -> Result<u64, sqlx::Error> {
        sqlx::query("DELETE FROM categories WHERE id = ?1")
            .bind(id)
            .execute(executor)
            .await
            .map(|result| result.rows_affected())
    }
}
