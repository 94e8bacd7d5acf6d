//! Wishlist wire models

use crate::catalog::models::Product;
use serde::{Deserialize, Serialize};

/// Input for the toggle endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleWishlistInput {
    pub product_id: i64,
}

/// Wishlist snapshot returned to the widget
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistView {
    pub items: Vec<Product>,
    pub count: usize,
}

/// Result of a toggle: whether the net effect was an add
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleWishlistResponse {
    pub added: bool,
    pub count: usize,
}
