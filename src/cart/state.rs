//! Shopping Cart State
//!
//! The cart store: an ordered collection of purchasable rows with derived
//! totals. Every operation is total over the current state: absent ids are
//! silent no-ops, never errors.

use super::helpers::derive_hamper_numeric_id;
use super::models::CartItem;
use crate::hamper::models::CustomHamper;
use crate::signals::{Computed, ReadonlySignal, Signal};

/// Ordered collection of cart rows with derived count and total.
#[derive(Clone)]
pub struct CartStore {
    items: Signal<Vec<CartItem>>,
    item_count: Computed<u32>,
    total_amount: Computed<f64>,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    /// Creates an empty cart.
    pub fn new() -> Self {
        let items: Signal<Vec<CartItem>> = Signal::new(Vec::new());

        let item_count = {
            let items = items.clone();
            Computed::new(vec![items.watch()], move || {
                items.with(|rows| rows.iter().map(|i| i.quantity).sum())
            })
        };

        let total_amount = {
            let items = items.clone();
            Computed::new(vec![items.watch()], move || {
                items.with(|rows| {
                    rows.iter()
                        .map(|i| i.price * i.quantity as f64)
                        .sum()
                })
            })
        };

        Self {
            items,
            item_count,
            total_amount,
        }
    }

    /// Current rows, in insertion order.
    pub fn items(&self) -> Vec<CartItem> {
        self.items.get()
    }

    /// Read-only view for display collaborators.
    pub fn items_signal(&self) -> ReadonlySignal<Vec<CartItem>> {
        self.items.as_readonly()
    }

    /// Adds a row, aggregating the quantity into an existing row with the
    /// same product id so the cart never holds duplicate ids.
    pub fn add_item(&self, item: CartItem) {
        self.items.update(|rows| {
            if let Some(existing) = rows.iter_mut().find(|i| i.product_id == item.product_id) {
                existing.quantity += item.quantity;
            } else {
                rows.push(item);
            }
        });
    }

    /// Sets the quantity of a row, clamped to a minimum of 1. No-op when the
    /// id is absent.
    pub fn update_quantity(&self, product_id: i64, quantity: u32) {
        self.items.update(|rows| {
            if let Some(item) = rows.iter_mut().find(|i| i.product_id == product_id) {
                item.quantity = quantity.max(1);
            }
        });
    }

    /// Removes the row with the given id. No-op when absent.
    pub fn remove_item(&self, product_id: i64) {
        self.items.update(|rows| {
            rows.retain(|i| i.product_id != product_id);
        });
    }

    /// Absorbs a finalized hamper as a single row priced at `total_price`.
    pub fn add_hamper(&self, hamper: &CustomHamper, total_price: f64) {
        let item = CartItem {
            product_id: derive_hamper_numeric_id(&hamper.id),
            product_name: hamper.hamper_name.clone(),
            price: total_price,
            quantity: 1,
            image_url: None,
            is_hamper: true,
            hamper_details: Some(hamper.clone()),
        };
        self.add_item(item);
    }

    /// Empties the cart.
    pub fn clear_cart(&self) {
        self.items.set(Vec::new());
    }

    /// Sum of quantities over all rows.
    pub fn item_count(&self) -> u32 {
        self.item_count.get()
    }

    /// Sum of price × quantity over all rows.
    pub fn total_amount(&self) -> f64 {
        self.total_amount.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::Product;
    use crate::hamper::models::{GiftWrapTier, HamperSize};

    fn product(id: i64, price: f64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            description: None,
            price,
            original_price: None,
            image_url: None,
            category: None,
        }
    }

    fn row(id: i64, price: f64, quantity: u32) -> CartItem {
        CartItem::from_product(&product(id, price), quantity)
    }

    #[test]
    fn totals_follow_every_mutation() {
        let cart = CartStore::new();
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_amount(), 0.0);

        cart.add_item(row(1, 500.0, 2));
        assert_eq!(cart.total_amount(), 1000.0);

        cart.add_item(row(2, 300.0, 1));
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total_amount(), 1300.0);

        cart.update_quantity(1, 1);
        assert_eq!(cart.total_amount(), 800.0);

        cart.remove_item(2);
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_amount(), 500.0);
    }

    #[test]
    fn adding_an_existing_product_merges_quantities() {
        let cart = CartStore::new();
        cart.add_item(row(7, 250.0, 1));
        cart.add_item(row(7, 250.0, 2));

        let items = cart.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 3);
        assert_eq!(cart.total_amount(), 750.0);
    }

    #[test]
    fn quantity_updates_clamp_to_one() {
        let cart = CartStore::new();
        cart.add_item(row(1, 100.0, 5));

        cart.update_quantity(1, 0);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn absent_ids_are_silent_noops() {
        let cart = CartStore::new();
        cart.add_item(row(1, 100.0, 1));

        cart.update_quantity(99, 4);
        cart.remove_item(99);

        let items = cart.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 1);
        assert_eq!(cart.total_amount(), 100.0);
    }

    #[test]
    fn a_finalized_hamper_becomes_a_single_priced_row() {
        let cart = CartStore::new();
        let hamper = CustomHamper {
            id: "hamper-1722000000123-a3f9c2d41".into(),
            hamper_name: "For Ana".into(),
            size: HamperSize::Small,
            items: Vec::new(),
            gift_wrap_tier: GiftWrapTier::Luxury,
            gift_message: None,
            recipient_name: None,
            created_at: 1722000000123,
        };

        cart.add_hamper(&hamper, 448.0);

        let items = cart.items();
        assert_eq!(items.len(), 1);
        let row = &items[0];
        assert_eq!(row.product_id, 1722000000123);
        assert!(row.is_hamper);
        assert_eq!(row.quantity, 1);
        assert_eq!(row.price, 448.0);
        assert_eq!(row.hamper_details.as_ref().unwrap().id, hamper.id);
        assert_eq!(cart.total_amount(), 448.0);
    }

    #[test]
    fn clear_cart_empties_everything() {
        let cart = CartStore::new();
        cart.add_item(row(1, 100.0, 2));
        cart.add_item(row(2, 50.0, 1));

        cart.clear_cart();

        assert!(cart.items().is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_amount(), 0.0);
    }
}
