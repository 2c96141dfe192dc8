//! HTTP-level integration tests for the inventory item endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Create + list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_item_then_list(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/inventory",
        serde_json::json!({"name": "Flour", "quantity": 10}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Item added");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/inventory").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Flour");
    assert_eq!(items[0]["quantity"], 10);
    assert!(items[0]["category"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_is_empty_initially(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/inventory").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_filters_on_min_quantity(pool: SqlitePool) {
    for (name, quantity) in [("Milk", 4), ("Flour", 10), ("Salt", 25)] {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/api/inventory",
            serde_json::json!({"name": name, "quantity": quantity}),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/inventory?min_quantity=10").await;

    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Flour");
    assert_eq!(items[1]["name"], "Salt");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_item_with_category_lists_category_name(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/categories", serde_json::json!({"name": "Baking"})).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/inventory",
        serde_json::json!({"name": "Flour", "quantity": 10, "category_id": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/inventory").await).await;
    assert_eq!(json[0]["category"], "Baking");
}

// ---------------------------------------------------------------------------
// Create: validation failures
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_item_without_name_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/inventory", serde_json::json!({"quantity": 3})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Name is required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_item_without_quantity_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/inventory", serde_json::json!({"name": "Flour"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Quantity is required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_item_with_negative_quantity_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/inventory",
        serde_json::json!({"name": "Flour", "quantity": -1}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Quantity cannot be negative"
    );

    // Nothing persisted.
    let app = common::build_test_app(pool);
    assert_eq!(
        body_json(get(app, "/api/inventory").await).await,
        serde_json::json!([])
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_item_with_unknown_category_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/inventory",
        serde_json::json!({"name": "Flour", "quantity": 10, "category_id": 999}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Category not found");

    // Nothing persisted.
    let app = common::build_test_app(pool);
    assert_eq!(
        body_json(get(app, "/api/inventory").await).await,
        serde_json::json!([])
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_item_with_empty_name_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/inventory",
        serde_json::json!({"name": "", "quantity": 3}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Name cannot be empty");
}

// ---------------------------------------------------------------------------
// Partial update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_nonexistent_item_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/inventory/999",
        serde_json::json!({"quantity": 5}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Item not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_with_negative_quantity_returns_400_and_leaves_item_unchanged(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/inventory",
        serde_json::json!({"name": "Flour", "quantity": 10}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/inventory/1",
        serde_json::json!({"quantity": -5}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Quantity cannot be negative"
    );

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/inventory").await).await;
    assert_eq!(json[0]["quantity"], 10);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_with_equal_values_reports_no_changes(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/inventory",
        serde_json::json!({"name": "Flour", "quantity": 10}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/inventory/1",
        serde_json::json!({"name": "Flour", "quantity": 10}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "No changes made");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_with_empty_body_reports_no_changes(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/inventory",
        serde_json::json!({"name": "Flour", "quantity": 10}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/inventory/1", serde_json::json!({})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "No changes made");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn clearing_category_on_uncategorized_item_reports_no_changes(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/inventory",
        serde_json::json!({"name": "Flour", "quantity": 10}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/inventory/1",
        serde_json::json!({"category_id": null}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "No changes made");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_message_names_changed_fields_in_order(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/inventory",
        serde_json::json!({"name": "Flour", "quantity": 10}),
    )
    .await;

    // Only quantity changes.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/inventory/1",
        serde_json::json!({"name": "Flour", "quantity": 12}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Quantity updated");

    // Quantity and name change; order is quantity first even though the
    // body keys name first.
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/inventory/1",
        serde_json::json!({"name": "Bread flour", "quantity": 8}),
    )
    .await;
    assert_eq!(
        body_json(response).await["message"],
        "Quantity and name updated"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_all_three_fields(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/categories", serde_json::json!({"name": "Baking"})).await;
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/inventory",
        serde_json::json!({"name": "Flour", "quantity": 10}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/inventory/1",
        serde_json::json!({"name": "Bread flour", "quantity": 8, "category_id": 1}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Quantity and name and category updated"
    );

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/inventory").await).await;
    assert_eq!(json[0]["name"], "Bread flour");
    assert_eq!(json[0]["quantity"], 8);
    assert_eq!(json[0]["category"], "Baking");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_clears_category_with_explicit_null(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/categories", serde_json::json!({"name": "Baking"})).await;
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/inventory",
        serde_json::json!({"name": "Flour", "quantity": 10, "category_id": 1}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/inventory/1",
        serde_json::json!({"category_id": null}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Category updated");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/inventory").await).await;
    assert!(json[0]["category"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_to_unknown_category_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/inventory",
        serde_json::json!({"name": "Flour", "quantity": 10}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/inventory/1",
        serde_json::json!({"category_id": 999}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Category not found");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_item(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/inventory",
        serde_json::json!({"name": "Flour", "quantity": 10}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/api/inventory/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Item deleted");

    // A second delete finds nothing.
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/inventory/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Item not found");
}
