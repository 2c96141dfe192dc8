//! Handlers for inventory item CRUD.
//!
//! Mutating handlers run their reads and writes inside one transaction
//! per request; validation failures return before anything is written,
//! dropping (and thereby rolling back) the transaction.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use serde::Deserialize;

use stockroom_core::error::CoreError;
use stockroom_core::inventory::{self, ChangedField};
use stockroom_core::types::DbId;
use stockroom_db::models::item::{CreateItem, UpdateItem};
use stockroom_db::repositories::{CategoryRepo, ItemRepo};

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query parameters for listing inventory items.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub min_quantity: Option<i64>,
}

// ---------------------------------------------------------------------------
// GET /inventory
// ---------------------------------------------------------------------------

/// List all items, optionally filtered to `quantity >= min_quantity`.
///
/// Each item carries the referenced category's name (`null` when
/// uncategorized).
pub async fn list_items(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let items = ItemRepo::list(&state.pool, params.min_quantity).await?;
    tracing::debug!(count = items.len(), "Listed inventory items");
    Ok(Json(items))
}

// ---------------------------------------------------------------------------
// POST /inventory
// ---------------------------------------------------------------------------

/// Create a new item. `category_id` is optional and defaults to
/// uncategorized; when present it must reference an existing category.
pub async fn create_item(
    State(state): State<AppState>,
    Json(input): Json<CreateItem>,
) -> AppResult<impl IntoResponse> {
    let name = input
        .name
        .ok_or_else(|| CoreError::Validation("Name is required".to_string()))?;
    let quantity = input
        .quantity
        .ok_or_else(|| CoreError::Validation("Quantity is required".to_string()))?;

    inventory::validate_name(&name)?;
    inventory::validate_quantity(quantity)?;

    let mut tx = state.pool.begin().await?;

    if let Some(category_id) = input.category_id {
        ensure_category_exists(&mut tx, category_id).await?;
    }

    let item = ItemRepo::insert(&mut *tx, &name, quantity, input.category_id).await?;
    tx.commit().await?;

    tracing::info!(id = item.id, name = %item.name, "Inventory item created");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Item added")),
    ))
}

// ---------------------------------------------------------------------------
// PUT /inventory/{id}
// ---------------------------------------------------------------------------

/// Apply a partial update to an item.
///
/// Each present field is validated, then compared against the stored
/// value; only differing fields are applied and reported. The check
/// order (quantity, name, category) is also the report order. A request
/// that changes nothing responds "No changes made" and writes nothing.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateItem>,
) -> AppResult<impl IntoResponse> {
    let mut tx = state.pool.begin().await?;

    let mut item = ItemRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Item" })?;

    let mut changed = Vec::new();

    if let Some(quantity) = input.quantity {
        inventory::validate_quantity(quantity)?;
        if quantity != item.quantity {
            item.quantity = quantity;
            changed.push(ChangedField::Quantity);
        }
    }

    if let Some(name) = input.name {
        inventory::validate_name(&name)?;
        if name != item.name {
            item.name = name;
            changed.push(ChangedField::Name);
        }
    }

    if let Some(category_id) = input.category_id {
        // Explicit null clears the category; a non-null id must exist.
        if let Some(target) = category_id {
            ensure_category_exists(&mut tx, target).await?;
        }
        if category_id != item.category_id {
            item.category_id = category_id;
            changed.push(ChangedField::Category);
        }
    }

    if changed.is_empty() {
        return Ok(Json(MessageResponse::new(inventory::NO_CHANGES_MESSAGE)));
    }

    ItemRepo::update(&mut *tx, &item).await?;
    tx.commit().await?;

    tracing::info!(id = item.id, fields = ?changed, "Inventory item updated");
    Ok(Json(MessageResponse::new(inventory::update_message(
        &changed,
    ))))
}

// ---------------------------------------------------------------------------
// DELETE /inventory/{id}
// ---------------------------------------------------------------------------

/// Delete an item by id.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ItemRepo::delete(&state.pool, id).await?;
    if deleted == 0 {
        return Err(CoreError::NotFound { entity: "Item" }.into());
    }

    tracing::info!(id, "Inventory item deleted");
    Ok(Json(MessageResponse::new("Item deleted")))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a category exists within the current transaction.
async fn ensure_category_exists(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    id: DbId,
) -> AppResult<()> {
    CategoryRepo::find_by_id(&mut **tx, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Category" })?;
    Ok(())
}
