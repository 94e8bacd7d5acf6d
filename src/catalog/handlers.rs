//! REST handlers for browsing the product listing

use super::models::{Product, ProductCategory};
use crate::session::state::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

/// Creates routes for catalog lookups
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product))
        .route("/products/category/:category", get(list_by_category))
}

/// Endpoint: GET /products
async fn list_products(State(state): State<SharedState>) -> Json<Vec<Product>> {
    Json(state.catalog.all().to_vec())
}

/// Endpoint: GET /products/:id
async fn get_product(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, StatusCode> {
    state
        .catalog
        .get(id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Endpoint: GET /products/category/:category
async fn list_by_category(
    State(state): State<SharedState>,
    Path(category): Path<ProductCategory>,
) -> Json<Vec<Product>> {
    Json(
        state
            .catalog
            .by_category(category)
            .into_iter()
            .cloned()
            .collect(),
    )
}
