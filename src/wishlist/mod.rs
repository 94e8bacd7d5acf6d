//! Wishlist Module
//!
//! Saved products with set semantics: toggle is the main entry point, add is
//! idempotent, and removal by id is a silent no-op when absent.

pub mod handlers;
pub mod models;
pub mod state;

pub use handlers::routes;
pub use state::WishlistStore;
