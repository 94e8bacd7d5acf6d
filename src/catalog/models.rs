//! Product Catalog Domain Models

use serde::{Deserialize, Serialize};

/// Fixed category tags a product can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductCategory {
    Bestseller,
    Birthday,
    Anniversary,
    ForHim,
    ForHer,
    Personalized,
    NewArrival,
}

/// A catalog entry. Immutable once listed; the stores only ever read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable, unique product identifier
    pub id: i64,

    /// Display name
    pub name: String,

    /// Optional long description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Unit price (non-negative)
    pub price: f64,

    /// Pre-discount price, when the listing shows a markdown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,

    /// Optional product image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Optional category tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ProductCategory>,
}
