//! Product Catalog Module
//!
//! Read-only product listing for the storefront:
//! - Domain models (Product, category tags)
//! - Catalog state with id/category lookups
//! - REST handlers for browsing the listing

pub mod handlers;
pub mod models;
pub mod state;

pub use handlers::routes;
pub use models::{Product, ProductCategory};
pub use state::ProductCatalog;
