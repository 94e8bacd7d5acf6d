//! Wishlist State
//!
//! A set-like collection of saved products keyed by product id, kept in
//! stable insertion order for display.

use crate::catalog::models::Product;
use crate::signals::{Computed, ReadonlySignal, Signal};

/// Saved products with toggle semantics.
#[derive(Clone)]
pub struct WishlistStore {
    items: Signal<Vec<Product>>,
    count: Computed<usize>,
}

impl Default for WishlistStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WishlistStore {
    /// Creates an empty wishlist.
    pub fn new() -> Self {
        let items: Signal<Vec<Product>> = Signal::new(Vec::new());

        let count = {
            let items = items.clone();
            Computed::new(vec![items.watch()], move || items.with(|v| v.len()))
        };

        Self { items, count }
    }

    /// Read-only view for display collaborators.
    pub fn wishlist(&self) -> ReadonlySignal<Vec<Product>> {
        self.items.as_readonly()
    }

    /// Saved products, in insertion order.
    pub fn items(&self) -> Vec<Product> {
        self.items.get()
    }

    /// Saves a product. No-op when the id is already present.
    pub fn add_to_wishlist(&self, product: &Product) {
        if self.is_in_wishlist(product.id) {
            return;
        }
        let product = product.clone();
        self.items.update(|v| v.push(product));
    }

    /// Removes a saved product by id. No-op when absent.
    pub fn remove_from_wishlist(&self, product_id: i64) {
        self.items.update(|v| v.retain(|p| p.id != product_id));
    }

    /// Flips membership. Returns `true` when the product ended up added,
    /// `false` when it was removed.
    pub fn toggle_wishlist(&self, product: &Product) -> bool {
        if self.is_in_wishlist(product.id) {
            self.remove_from_wishlist(product.id);
            false
        } else {
            self.add_to_wishlist(product);
            true
        }
    }

    pub fn is_in_wishlist(&self, product_id: i64) -> bool {
        self.items.with(|v| v.iter().any(|p| p.id == product_id))
    }

    pub fn clear_wishlist(&self) {
        self.items.set(Vec::new());
    }

    /// Number of saved products.
    pub fn count(&self) -> usize {
        self.count.get()
    }
}
