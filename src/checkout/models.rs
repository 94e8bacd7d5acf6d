//! Checkout Domain Models and Coupon Rules

use crate::cart::models::CartItem;
use serde::{Deserialize, Serialize};

fn default_payment_method() -> String {
    "cod".to_string()
}

/// Contact and delivery details captured on the checkout page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub address: String,

    /// Payment method; cash-on-delivery unless the widget says otherwise
    #[serde(default = "default_payment_method")]
    pub payment_method: String,
}

impl Default for ShippingInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            payment_method: default_payment_method(),
        }
    }
}

/// A coupon code with its percent-off and minimum-subtotal gate.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponRule {
    pub code: &'static str,
    pub percent: u32,
    pub min_subtotal: f64,
}

/// Known coupon codes. Lookups are case-insensitive; codes outside this
/// table have no minimum gate and resolve to 0% (rejected as invalid when
/// applied).
pub static COUPON_RULES: [CouponRule; 3] = [
    CouponRule {
        code: "flat30",
        percent: 30,
        min_subtotal: 2999.0,
    },
    CouponRule {
        code: "flat15",
        percent: 15,
        min_subtotal: 1999.0,
    },
    CouponRule {
        code: "flat10",
        percent: 10,
        min_subtotal: 999.0,
    },
];

/// Rule for a code, matched case-insensitively.
pub fn coupon_rule(code: &str) -> Option<&'static CouponRule> {
    let normalized = code.to_lowercase();
    COUPON_RULES.iter().find(|r| r.code == normalized)
}

/// Input for toggling an item in or out of the purchase selection
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleSelectionInput {
    pub product_id: i64,
}

/// Input for applying a coupon code
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyCouponInput {
    #[serde(default)]
    pub code: String,
}

/// Checkout snapshot returned to the widget: rows, selection and the full
/// derived monetary pipeline.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutView {
    pub items: Vec<CartItem>,
    pub selected_ids: Vec<i64>,
    pub item_count: u32,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total: f64,
    pub discount_percent: u32,
    pub discount_amount: f64,
    pub payable_total: f64,
    pub applied_coupon: String,
    pub coupon_message: String,
    pub submitted: bool,
}
