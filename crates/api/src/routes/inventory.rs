//! Route definitions for inventory items, mounted at `/inventory`.
//!
//! ```text
//! GET    /      -> list_items
//! POST   /      -> create_item
//! PUT    /{id}  -> update_item
//! DELETE /{id}  -> delete_item
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::inventory;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(inventory::list_items).post(inventory::create_item))
        .route(
            "/{id}",
            put(inventory::update_item).delete(inventory::delete_item),
        )
}
