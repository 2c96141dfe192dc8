//! Inventory item models and DTOs.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use stockroom_core::types::DbId;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `inventory_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Item {
    pub id: DbId,
    pub name: String,
    pub quantity: i64,
    pub category_id: Option<DbId>,
}

/// An item joined with its category's name, as returned by the
/// inventory listing. `category` is `null` for uncategorized items.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ItemWithCategory {
    pub id: DbId,
    pub name: String,
    pub quantity: i64,
    pub category: Option<String>,
}

/// The per-item shape nested inside a category listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ItemSummary {
    pub id: DbId,
    pub name: String,
    pub quantity: i64,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating an item. `name` and `quantity` are required by the
/// API but optional here so their absence maps to a 400, not a
/// deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItem {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub category_id: Option<DbId>,
}

/// DTO for a partial item update. Absent fields are left untouched.
///
/// `category_id` is a double `Option`: the outer level distinguishes an
/// absent key (no change) from an explicit `"category_id": null`
/// (clear the category).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    #[serde(default, deserialize_with = "double_option")]
    pub category_id: Option<Option<DbId>>,
}

/// Deserialize a present-but-possibly-null field into `Some(inner)`,
/// so that `#[serde(default)]` (`None`) marks the key as absent.
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<DbId>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<DbId>::deserialize(deserializer).map(Some)
}
