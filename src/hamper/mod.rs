//! Custom Gift Hamper Module
//!
//! Everything for composing products into a single purchasable hamper:
//! - Domain models (sizes, wrap tiers, config tables, the hamper itself)
//! - The builder state machine with derived pricing
//! - Id/timestamp helpers
//! - REST handlers for the builder workspace

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

pub use handlers::routes;
pub use models::{
    gift_wrap_config, hamper_config, CustomHamper, GiftWrapTier, HamperItem, HamperSize,
    GIFT_WRAP_TIERS, HAMPER_SIZES,
};
pub use state::HamperBuilder;
