//! Category models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stockroom_core::types::DbId;

use crate::models::item::ItemSummary;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}

/// A category with its dependent items, as returned by the category
/// listing. The items collection is derived by query, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryWithItems {
    pub id: DbId,
    pub name: String,
    pub items: Vec<ItemSummary>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a category. `name` is required by the API but
/// optional here so its absence maps to a 400.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: Option<String>,
}

/// DTO for renaming a category.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
}
