//! Order submission collaborator
//!
//! Recording an order is fire-and-forget: the checkout flow does not depend
//! on its result.

use super::models::ShippingInfo;

/// Hands the submitted order off to the recording backend.
pub fn record_order(info: &ShippingInfo) {
    println!(
        "Order submitted: {} / {} ({})",
        info.name, info.address, info.payment_method
    );
}
