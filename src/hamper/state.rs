//! Hamper Builder State
//!
//! A state machine over a single optional `CustomHamper`. All pricing and
//! capacity figures are computed views over the current hamper signal, so a
//! read immediately after any mutation reflects the committed state.

use super::helpers::{generate_hamper_id, now_millis};
use super::models::{
    gift_wrap_config, hamper_config, CustomHamper, GiftWrapTier, HamperItem, HamperSize,
    DEFAULT_HAMPER_NAME,
};
use crate::catalog::models::Product;
use crate::signals::{Computed, ReadonlySignal, Signal};

/// Builder for the hamper currently being composed.
#[derive(Clone)]
pub struct HamperBuilder {
    current: Signal<Option<CustomHamper>>,
    item_count: Computed<usize>,
    max_items: Computed<usize>,
    is_full: Computed<bool>,
    total_items_price: Computed<f64>,
    hamper_base_price: Computed<f64>,
    gift_wrap_price: Computed<f64>,
    total_price: Computed<f64>,
}

impl Default for HamperBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HamperBuilder {
    /// Creates a builder with no hamper in progress.
    pub fn new() -> Self {
        let current: Signal<Option<CustomHamper>> = Signal::new(None);

        let item_count = {
            let current = current.clone();
            Computed::new(vec![current.watch()], move || {
                current.with(|h| h.as_ref().map(|h| h.items.len()).unwrap_or(0))
            })
        };

        let max_items = {
            let current = current.clone();
            Computed::new(vec![current.watch()], move || {
                let size = current.with(|h| h.as_ref().map(|h| h.size));
                hamper_config(size.unwrap_or(HamperSize::Small)).max_items
            })
        };

        let is_full = {
            let count = item_count.clone();
            let cap = max_items.clone();
            Computed::new(vec![current.watch()], move || count.get() >= cap.get())
        };

        let total_items_price = {
            let current = current.clone();
            Computed::new(vec![current.watch()], move || {
                current.with(|h| {
                    h.as_ref()
                        .map(|h| h.items.iter().map(|item| item.price).sum())
                        .unwrap_or(0.0)
                })
            })
        };

        let hamper_base_price = {
            let current = current.clone();
            Computed::new(vec![current.watch()], move || {
                let size = current.with(|h| h.as_ref().map(|h| h.size));
                hamper_config(size.unwrap_or(HamperSize::Small)).base_price
            })
        };

        let gift_wrap_price = {
            let current = current.clone();
            Computed::new(vec![current.watch()], move || {
                let tier = current.with(|h| h.as_ref().map(|h| h.gift_wrap_tier));
                gift_wrap_config(tier.unwrap_or(GiftWrapTier::Basic)).price
            })
        };

        let total_price = {
            let items = total_items_price.clone();
            let base = hamper_base_price.clone();
            let wrap = gift_wrap_price.clone();
            Computed::new(vec![current.watch()], move || {
                items.get() + base.get() + wrap.get()
            })
        };

        Self {
            current,
            item_count,
            max_items,
            is_full,
            total_items_price,
            hamper_base_price,
            gift_wrap_price,
            total_price,
        }
    }

    /// The hamper being built, if any.
    pub fn hamper(&self) -> Option<CustomHamper> {
        self.current.get()
    }

    /// Read-only view for display collaborators.
    pub fn hamper_signal(&self) -> ReadonlySignal<Option<CustomHamper>> {
        self.current.as_readonly()
    }

    /// Items currently in the hamper.
    pub fn items(&self) -> Vec<HamperItem> {
        self.current
            .with(|h| h.as_ref().map(|h| h.items.clone()).unwrap_or_default())
    }

    pub fn item_count(&self) -> usize {
        self.item_count.get()
    }

    /// Item cap for the current size (small cap when nothing is in progress).
    pub fn max_items(&self) -> usize {
        self.max_items.get()
    }

    pub fn is_full(&self) -> bool {
        self.is_full.get()
    }

    pub fn can_add_more(&self) -> bool {
        !self.is_full.get()
    }

    /// Sum of the prices of the items inside the hamper.
    pub fn total_items_price(&self) -> f64 {
        self.total_items_price.get()
    }

    /// Base price for the current size.
    pub fn hamper_base_price(&self) -> f64 {
        self.hamper_base_price.get()
    }

    /// Price of the selected wrap tier.
    pub fn gift_wrap_price(&self) -> f64 {
        self.gift_wrap_price.get()
    }

    /// Items + base + wrap.
    pub fn total_price(&self) -> f64 {
        self.total_price.get()
    }

    /// Initialize a new hamper, overwriting any work in progress.
    pub fn start_new_hamper(&self, size: HamperSize) {
        self.current.set(Some(CustomHamper {
            id: generate_hamper_id(),
            hamper_name: DEFAULT_HAMPER_NAME.to_string(),
            size,
            items: Vec::new(),
            gift_wrap_tier: GiftWrapTier::Basic,
            gift_message: None,
            recipient_name: None,
            created_at: now_millis(),
        }));
    }

    /// Add a product to the hamper.
    ///
    /// Starts a medium hamper first when none is in progress. Returns `false`
    /// when the hamper is full or the product is already inside.
    pub fn add_item_to_hamper(&self, product: &Product) -> bool {
        if self.current.with(|h| h.is_none()) {
            self.start_new_hamper(HamperSize::Medium);
        }

        if self.is_full() {
            return false;
        }
        if self.is_product_in_hamper(product.id) {
            return false;
        }

        let item = HamperItem::from(product);
        self.current.update(|h| {
            if let Some(hamper) = h {
                hamper.items.push(item);
            }
        });
        true
    }

    /// Remove an item from the hamper. No-op when the id is absent.
    pub fn remove_item_from_hamper(&self, product_id: i64) {
        self.current.update(|h| {
            if let Some(hamper) = h {
                hamper.items.retain(|item| item.product_id != product_id);
            }
        });
    }

    /// Update hamper size. Items beyond the new cap are dropped, keeping the
    /// earliest-added ones.
    pub fn update_hamper_size(&self, size: HamperSize) {
        self.current.update(|h| {
            if let Some(hamper) = h {
                hamper.size = size;
                hamper.items.truncate(hamper_config(size).max_items);
            }
        });
    }

    /// Update gift wrap tier.
    pub fn update_gift_wrap(&self, tier: GiftWrapTier) {
        self.current.update(|h| {
            if let Some(hamper) = h {
                hamper.gift_wrap_tier = tier;
            }
        });
    }

    /// Update hamper name.
    pub fn update_hamper_name(&self, name: impl Into<String>) {
        let name = name.into();
        self.current.update(|h| {
            if let Some(hamper) = h {
                hamper.hamper_name = name;
            }
        });
    }

    /// Update gift message. A blank message clears the field.
    pub fn update_gift_message(&self, message: impl Into<String>) {
        let message = non_blank(message.into());
        self.current.update(|h| {
            if let Some(hamper) = h {
                hamper.gift_message = message;
            }
        });
    }

    /// Update recipient name. A blank name clears the field.
    pub fn update_recipient_name(&self, name: impl Into<String>) {
        let name = non_blank(name.into());
        self.current.update(|h| {
            if let Some(hamper) = h {
                hamper.recipient_name = name;
            }
        });
    }

    /// Clear the current hamper (nothing in progress afterwards).
    pub fn clear_hamper(&self) {
        self.current.set(None);
    }

    /// Check if a product is in the hamper.
    pub fn is_product_in_hamper(&self, product_id: i64) -> bool {
        self.current.with(|h| {
            h.as_ref()
                .map(|h| h.items.iter().any(|item| item.product_id == product_id))
                .unwrap_or(false)
        })
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::Product;

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

    #[test]
    fn small_hamper_caps_at_three_items() {
        let builder = HamperBuilder::new();
        builder.start_new_hamper(HamperSize::Small);

        assert!(builder.add_item_to_hamper(&product(1, 100.0)));
        assert!(builder.add_item_to_hamper(&product(2, 100.0)));
        assert!(builder.add_item_to_hamper(&product(3, 100.0)));
        assert!(builder.is_full());

        assert!(!builder.add_item_to_hamper(&product(4, 100.0)));
        assert_eq!(builder.item_count(), 3);
    }

    #[test]
    fn duplicate_product_is_rejected_without_growing_the_hamper() {
        let builder = HamperBuilder::new();
        builder.start_new_hamper(HamperSize::Medium);

        assert!(builder.add_item_to_hamper(&product(7, 250.0)));
        assert!(!builder.add_item_to_hamper(&product(7, 250.0)));
        assert_eq!(builder.item_count(), 1);
    }

    #[test]
    fn adding_with_no_hamper_in_progress_starts_a_medium_one() {
        let builder = HamperBuilder::new();
        assert!(builder.hamper().is_none());

        assert!(builder.add_item_to_hamper(&product(1, 100.0)));

        let hamper = builder.hamper().unwrap();
        assert_eq!(hamper.size, HamperSize::Medium);
        assert_eq!(hamper.items.len(), 1);
        assert_eq!(hamper.hamper_name, DEFAULT_HAMPER_NAME);
    }

    #[test]
    fn resizing_down_truncates_keeping_insertion_order() {
        let builder = HamperBuilder::new();
        builder.start_new_hamper(HamperSize::Large);
        for id in 1..=6 {
            assert!(builder.add_item_to_hamper(&product(id, 50.0)));
        }

        builder.update_hamper_size(HamperSize::Small);

        let items = builder.items();
        assert_eq!(items.len(), 3);
        let ids: Vec<i64> = items.iter().map(|i| i.product_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(builder.is_full());
    }

    #[test]
    fn pricing_sums_items_base_and_wrap() {
        let builder = HamperBuilder::new();
        builder.start_new_hamper(HamperSize::Large);
        builder.update_gift_wrap(GiftWrapTier::Luxury);

        // Empty large hamper with luxury wrap: 249 + 199.
        assert_eq!(builder.total_price(), 448.0);

        builder.add_item_to_hamper(&product(1, 300.0));
        builder.add_item_to_hamper(&product(2, 200.0));
        assert_eq!(builder.total_items_price(), 500.0);
        assert_eq!(builder.total_price(), 948.0);
    }

    #[test]
    fn pricing_falls_back_to_small_and_basic_with_no_hamper() {
        let builder = HamperBuilder::new();

        assert_eq!(builder.max_items(), 3);
        assert_eq!(builder.hamper_base_price(), 99.0);
        assert_eq!(builder.gift_wrap_price(), 0.0);
        assert_eq!(builder.total_price(), 99.0);
        assert!(builder.items().is_empty());
    }

    #[test]
    fn field_updates_require_a_hamper_in_progress() {
        let builder = HamperBuilder::new();
        builder.update_hamper_name("Should not exist");
        builder.update_gift_wrap(GiftWrapTier::Luxury);
        assert!(builder.hamper().is_none());

        builder.start_new_hamper(HamperSize::Medium);
        builder.update_hamper_name("For Ana");
        builder.update_gift_message("Happy birthday!");
        builder.update_recipient_name("  ");

        let hamper = builder.hamper().unwrap();
        assert_eq!(hamper.hamper_name, "For Ana");
        assert_eq!(hamper.gift_message.as_deref(), Some("Happy birthday!"));
        assert_eq!(hamper.recipient_name, None);
    }

    #[test]
    fn clear_is_distinct_from_start_new() {
        let builder = HamperBuilder::new();
        builder.start_new_hamper(HamperSize::Medium);
        assert!(builder.hamper().is_some());

        builder.clear_hamper();
        assert!(builder.hamper().is_none());

        builder.start_new_hamper(HamperSize::Small);
        let fresh = builder.hamper().unwrap();
        assert!(fresh.items.is_empty());
        assert_eq!(fresh.size, HamperSize::Small);
    }

    #[test]
    fn remove_item_is_a_silent_noop_for_absent_ids() {
        let builder = HamperBuilder::new();
        builder.start_new_hamper(HamperSize::Medium);
        builder.add_item_to_hamper(&product(1, 100.0));

        builder.remove_item_from_hamper(42);
        assert_eq!(builder.item_count(), 1);

        builder.remove_item_from_hamper(1);
        assert_eq!(builder.item_count(), 0);
    }
}
