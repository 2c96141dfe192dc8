//! Handlers for category CRUD.
//!
//! Category names are unique (case-sensitive exact match). Deleting a
//! category that still has items is refused outright; the caller must
//! reassign or delete those items first. The items collection returned
//! by the listing is derived by query on the foreign key.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use stockroom_core::error::CoreError;
use stockroom_core::inventory;
use stockroom_core::types::DbId;
use stockroom_db::models::category::{CategoryWithItems, CreateCategory, UpdateCategory};
use stockroom_db::repositories::{CategoryRepo, ItemRepo};

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /categories
// ---------------------------------------------------------------------------

/// List all categories with their nested items.
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;

    let mut listing = Vec::with_capacity(categories.len());
    for category in categories {
        let items = ItemRepo::list_by_category(&state.pool, category.id).await?;
        listing.push(CategoryWithItems {
            id: category.id,
            name: category.name,
            items,
        });
    }

    tracing::debug!(count = listing.len(), "Listed categories");
    Ok(Json(listing))
}

// ---------------------------------------------------------------------------
// POST /categories
// ---------------------------------------------------------------------------

/// Create a new category with a unique name.
pub async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    let name = input
        .name
        .ok_or_else(|| CoreError::Validation("Name is required".to_string()))?;
    inventory::validate_name(&name)?;

    let mut tx = state.pool.begin().await?;

    if CategoryRepo::find_by_name(&mut *tx, &name).await?.is_some() {
        return Err(CoreError::Conflict("Category already exists".to_string()).into());
    }

    let category = CategoryRepo::insert(&mut *tx, &name).await?;
    tx.commit().await?;

    tracing::info!(id = category.id, name = %category.name, "Category created");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Category added")),
    ))
}

// ---------------------------------------------------------------------------
// PUT /categories/{id}
// ---------------------------------------------------------------------------

/// Rename a category.
///
/// Renaming to the current name is a "No changes made" success; renaming
/// to another category's name is refused.
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    let name = input
        .name
        .ok_or_else(|| CoreError::Validation("Name is required".to_string()))?;
    inventory::validate_name(&name)?;

    let mut tx = state.pool.begin().await?;

    let category = CategoryRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Category" })?;

    if name == category.name {
        return Ok(Json(MessageResponse::new(inventory::NO_CHANGES_MESSAGE)));
    }

    // Unequal to the current name, so any hit here is a different category.
    if CategoryRepo::find_by_name(&mut *tx, &name).await?.is_some() {
        return Err(CoreError::Conflict("Category already exists".to_string()).into());
    }

    CategoryRepo::rename(&mut *tx, id, &name).await?;
    tx.commit().await?;

    tracing::info!(id, name = %name, "Category renamed");
    Ok(Json(MessageResponse::new("Category updated")))
}

// ---------------------------------------------------------------------------
// DELETE /categories/{id}
// ---------------------------------------------------------------------------

/// Delete a category, refusing while any item still references it.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut tx = state.pool.begin().await?;

    CategoryRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Category" })?;

    let dependents = ItemRepo::count_by_category(&mut *tx, id).await?;
    if dependents > 0 {
        return Err(CoreError::Conflict(
            "Cannot delete a category that still has items".to_string(),
        )
        .into());
    }

    CategoryRepo::delete(&mut *tx, id).await?;
    tx.commit().await?;

    tracing::info!(id, "Category deleted");
    Ok(Json(MessageResponse::new("Category deleted")))
}
