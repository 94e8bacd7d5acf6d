//! Shopping Cart Domain Models

use crate::catalog::models::Product;
use crate::hamper::models::CustomHamper;
use serde::{Deserialize, Serialize};

/// Returns the default quantity (1) for cart items
fn default_quantity() -> u32 {
    1
}

/// A purchasable row in the cart: a plain product or a finalized hamper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product id; for hampers, a numeric id derived from the hamper id
    pub product_id: i64,

    /// Display name of the row
    pub product_name: String,

    /// Unit price. For hampers this is the fully computed hamper price.
    pub price: f64,

    /// Quantity of this item (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Set when the row is a composed hamper
    #[serde(default)]
    pub is_hamper: bool,

    /// Present iff `is_hamper`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hamper_details: Option<CustomHamper>,
}

impl CartItem {
    /// Cart row for a catalog product. Quantity is clamped to at least 1.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
            price: product.price,
            quantity: quantity.max(1),
            image_url: product.image_url.clone(),
            is_hamper: false,
            hamper_details: None,
        }
    }
}

/// Input for adding a catalog product to the cart
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemInput {
    pub product_id: i64,

    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// Input for quantity adjustment
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuantityInput {
    pub product_id: i64,
    pub quantity: u32,
}

/// Input for row removal
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveItemInput {
    pub product_id: i64,
}

/// Cart snapshot returned to the widget: rows plus derived totals.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub item_count: u32,
    pub total_amount: f64,
}
