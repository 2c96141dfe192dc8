//! Route definitions for categories, mounted at `/categories`.
//!
//! ```text
//! GET    /      -> list_categories
//! POST   /      -> create_category
//! PUT    /{id}  -> update_category
//! DELETE /{id}  -> delete_category
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/{id}",
            put(categories::update_category).delete(categories::delete_category),
        )
}
