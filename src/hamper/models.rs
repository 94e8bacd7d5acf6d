//! Custom Hamper Domain Models
//!
//! Sizes and wrap tiers are fixed, ordered enumerations with published
//! metadata. Lookups go through the config tables keyed by the enum value.

use crate::catalog::models::Product;
use serde::{Deserialize, Serialize};

/// Name a freshly started hamper carries until the user renames it.
pub const DEFAULT_HAMPER_NAME: &str = "My Custom Hamper";

/// Available hamper sizes, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HamperSize {
    Small,
    Medium,
    Large,
}

/// Available gift wrap tiers, plainest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GiftWrapTier {
    Basic,
    Premium,
    Luxury,
}

/// Per-size configuration: item cap, base price and display metadata.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HamperConfig {
    pub size: HamperSize,
    pub max_items: usize,
    /// Price for the hamper basket & basic wrapping
    pub base_price: f64,
    pub label: &'static str,
    pub description: &'static str,
}

/// Per-tier configuration: price and display metadata.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftWrapConfig {
    pub tier: GiftWrapTier,
    pub price: f64,
    pub label: &'static str,
    pub features: &'static [&'static str],
}

/// Hamper size configurations
pub static HAMPER_SIZES: [HamperConfig; 3] = [
    HamperConfig {
        size: HamperSize::Small,
        max_items: 3,
        base_price: 99.0,
        label: "Small Hamper",
        description: "Perfect for a thoughtful gesture (Up to 3 items)",
    },
    HamperConfig {
        size: HamperSize::Medium,
        max_items: 5,
        base_price: 149.0,
        label: "Medium Hamper",
        description: "Great for special occasions (Up to 5 items)",
    },
    HamperConfig {
        size: HamperSize::Large,
        max_items: 8,
        base_price: 249.0,
        label: "Large Hamper",
        description: "Ultimate luxury collection (Up to 8 items)",
    },
];

/// Gift wrap tier configurations
pub static GIFT_WRAP_TIERS: [GiftWrapConfig; 3] = [
    GiftWrapConfig {
        tier: GiftWrapTier::Basic,
        price: 0.0,
        label: "Basic Wrapping",
        features: &["Standard gift wrap", "Greeting card", "Ribbon"],
    },
    GiftWrapConfig {
        tier: GiftWrapTier::Premium,
        price: 99.0,
        label: "Premium Wrapping",
        features: &["Designer gift wrap", "Premium card", "Satin ribbon", "Gift tag"],
    },
    GiftWrapConfig {
        tier: GiftWrapTier::Luxury,
        price: 199.0,
        label: "Luxury Wrapping",
        features: &[
            "Luxury gift box",
            "Handmade card",
            "Silk ribbon",
            "Personalized tags",
            "Decorative elements",
        ],
    },
];

/// Config row for a size. Falls back to the small row, which also serves as
/// the default when no hamper is in progress.
pub fn hamper_config(size: HamperSize) -> &'static HamperConfig {
    HAMPER_SIZES
        .iter()
        .find(|c| c.size == size)
        .unwrap_or(&HAMPER_SIZES[0])
}

/// Config row for a wrap tier. Falls back to the basic row.
pub fn gift_wrap_config(tier: GiftWrapTier) -> &'static GiftWrapConfig {
    GIFT_WRAP_TIERS
        .iter()
        .find(|c| c.tier == tier)
        .unwrap_or(&GIFT_WRAP_TIERS[0])
}

/// Snapshot of a product placed inside a hamper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HamperItem {
    pub product_id: i64,
    pub product_name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<&Product> for HamperItem {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
        }
    }
}

/// Input for starting a fresh hamper
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartHamperInput {
    #[serde(default)]
    pub size: Option<HamperSize>,
}

/// Input referencing a product inside the hamper
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HamperItemInput {
    pub product_id: i64,
}

/// Input for changing the hamper size
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeHamperInput {
    pub size: HamperSize,
}

/// Input for changing the wrap tier
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftWrapInput {
    pub tier: GiftWrapTier,
}

/// Customization fields; absent fields are left untouched
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomizeHamperInput {
    #[serde(default)]
    pub hamper_name: Option<String>,

    #[serde(default)]
    pub gift_message: Option<String>,

    #[serde(default)]
    pub recipient_name: Option<String>,
}

/// Builder workspace snapshot: the hamper plus every derived figure and the
/// published config tables.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HamperView {
    pub hamper: Option<CustomHamper>,
    pub item_count: usize,
    pub max_items: usize,
    pub is_full: bool,
    pub can_add_more: bool,
    pub total_items_price: f64,
    pub hamper_base_price: f64,
    pub gift_wrap_price: f64,
    pub total_price: f64,
    pub sizes: Vec<HamperConfig>,
    pub gift_wrap_tiers: Vec<GiftWrapConfig>,
}

/// Result of an item add: the workspace plus whether the add went through.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddHamperItemResponse {
    pub added: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(flatten)]
    pub view: HamperView,
}

/// A work-in-progress or finalized hamper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomHamper {
    /// Unique identifier for the hamper
    pub id: String,
    pub hamper_name: String,
    pub size: HamperSize,
    pub items: Vec<HamperItem>,
    pub gift_wrap_tier: GiftWrapTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
    /// Creation time, epoch milliseconds
    pub created_at: u64,
}
