//! Gifting Storefront Library
//!
//! The reactive commerce state engine behind a gifting storefront: a shopping
//! cart, a custom gift-hamper builder, a wishlist and a checkout pricing
//! engine, all built on a shared signal/computed primitive and exposed to the
//! widget over a thin REST surface.

// Reactive primitive
pub mod signals;

// Domain modules
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod hamper;
pub mod wishlist;

// Session & infrastructure
pub mod router;
pub mod session;
