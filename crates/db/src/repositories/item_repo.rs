//! Repository for the `inventory_items` table.

use sqlx::SqliteExecutor;
use stockroom_core::types::DbId;

use crate::models::item::{Item, ItemSummary, ItemWithCategory};

/// Column list for `inventory_items` queries.
const COLUMNS: &str = "id, name, quantity, category_id";

/// Provides data access for inventory items.
pub struct ItemRepo;

impl ItemRepo {
    /// List all items joined with their category's name, ordered by id.
    ///
    /// `min_quantity` filters to `quantity >= min_quantity` when present.
    pub async fn list(
        executor: impl SqliteExecutor<'_>,
        min_quantity: Option<i64>,
    ) -> Result<Vec<ItemWithCategory>, sqlx::Error> {
        const BASE: &str = "\
            SELECT i.id, i.name, i.quantity, c.name AS category \
            FROM inventory_items i \
            LEFT JOIN categories c ON c.id = i.category_id";

        match min_quantity {
            Some(min) => {
                let query = format!("{BASE} WHERE i.quantity >= ?1 ORDER BY i.id");
                sqlx::query_as::<_, ItemWithCategory>(&query)
                    .bind(min)
                    .fetch_all(executor)
                    .await
            }
            None => {
                let query = format!("{BASE} ORDER BY i.id");
                sqlx::query_as::<_, ItemWithCategory>(&query)
                    .fetch_all(executor)
                    .await
            }
        }
    }

    /// Fetch a single item by id.
    pub async fn find_by_id(
        executor: impl SqliteExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventory_items WHERE id = ?1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Insert a new item, returning the stored row.
    pub async fn insert(
        executor: impl SqliteExecutor<'_>,
        name: &str,
        quantity: i64,
        category_id: Option<DbId>,
    ) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO inventory_items (name, quantity, category_id) \
             VALUES (?1, ?2, ?3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(name)
            .bind(quantity)
            .bind(category_id)
            .fetch_one(executor)
            .await
    }

    /// Persist all mutable fields of `item` (the caller has already
    /// merged the requested changes into the row).
    pub async fn update(
        executor: impl SqliteExecutor<'_>,
        item: &Item,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE inventory_items \
             SET name = ?1, quantity = ?2, category_id = ?3 \
             WHERE id = ?4",
        )
        .bind(&item.name)
        .bind(item.quantity)
        .bind(item.category_id)
        .bind(item.id)
        .execute(executor)
        .await
        .map(|_| ())
    }

    /// Delete an item by id. Returns the number of rows removed.
    pub async fn delete(
        executor: impl SqliteExecutor<'_>,
        id: DbId,
    ) -> Result<u64, sqlx::Error> {
        sqlx::query("DELETE FROM inventory_items WHERE id = ?1")
            .bind(id)
            .execute(executor)
            .await
            .map(|result| result.rows_affected())
    }

    /// List the items belonging to one category, ordered by id.
    pub async fn list_by_category(
        executor: impl SqliteExecutor<'_>,
        category_id: DbId,
    ) -> Result<Vec<ItemSummary>, sqlx::Error> {
        sqlx::query_as::<_, ItemSummary>(
            "SELECT id, name, quantity FROM inventory_items \
             WHERE category_id = ?1 ORDER BY id",
        )
        .bind(category_id)
        .fetch_all(executor)
        .await
    }

    /// Count the items referencing one category.
    pub async fn count_by_category(
        executor: impl SqliteExecutor<'_>,
        category_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM inventory_items WHERE category_id = ?1",
        )
        .bind(category_id)
        .fetch_one(executor)
        .await
    }
}
