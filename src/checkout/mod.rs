//! Checkout Module
//!
//! Selection-aware pricing over a snapshot of the cart:
//! - Wire models (shipping info, coupon inputs, checkout view)
//! - The coupon rule table
//! - CheckoutSession: selection set, derived monetary pipeline, coupon state
//!   machine and order submission
//! - REST handlers for the checkout page

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

pub use handlers::routes;
pub use models::{coupon_rule, ShippingInfo, COUPON_RULES};
pub use state::CheckoutSession;
