pub mod categories;
pub mod health;
pub mod inventory;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /inventory          GET (list, ?min_quantity=), POST (create)
/// /inventory/{id}     PUT (partial update), DELETE
///
/// /categories         GET (list with nested items), POST (create)
/// /categories/{id}    PUT (rename), DELETE (refused while items remain)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/inventory", inventory::router())
        .nest("/categories", categories::router())
}
