//! Checkout Session State
//!
//! Works over a snapshot of the cart taken at checkout entry. Every monetary
//! figure is derived from the snapshot, the selection set and the applied
//! discount; nothing is stored precomputed. The pipeline is evaluated in a
//! fixed order: item count, subtotal, delivery fee, total, discount,
//! payable total.

use std::collections::HashSet;

use super::helpers::record_order;
use super::models::{coupon_rule, ShippingInfo};
use crate::cart::models::CartItem;
use crate::cart::state::CartStore;
use crate::signals::{Computed, Signal};

/// Flat delivery fee charged whenever at least one row is selected.
const DELIVERY_FEE: f64 = 49.0;

fn selected_rows(items: &Signal<Vec<CartItem>>, selected: &Signal<HashSet<i64>>) -> Vec<CartItem> {
    let chosen = selected.get();
    items.with(|rows| {
        rows.iter()
            .filter(|i| chosen.contains(&i.product_id))
            .cloned()
            .collect()
    })
}

/// Pricing and submission state for one checkout attempt.
#[derive(Clone)]
pub struct CheckoutSession {
    items: Signal<Vec<CartItem>>,
    selected: Signal<HashSet<i64>>,
    selected_coupon: Signal<String>,
    coupon_input: Signal<String>,
    applied_coupon: Signal<String>,
    coupon_message: Signal<String>,
    discount_percent: Signal<u32>,
    submitted: Signal<bool>,
    item_count: Computed<u32>,
    subtotal: Computed<f64>,
    delivery_fee: Computed<f64>,
    total: Computed<f64>,
    discount_amount: Computed<f64>,
    payable_total: Computed<f64>,
}

impl CheckoutSession {
    /// Starts a checkout over a snapshot of the cart. Every row starts out
    /// selected.
    pub fn new(snapshot: Vec<CartItem>) -> Self {
        let initial_selection: HashSet<i64> = snapshot.iter().map(|i| i.product_id).collect();

        let items: Signal<Vec<CartItem>> = Signal::new(snapshot);
        let selected: Signal<HashSet<i64>> = Signal::new(initial_selection);
        let discount_percent: Signal<u32> = Signal::new(0);

        let item_count = {
            let items = items.clone();
            let selected = selected.clone();
            Computed::new(vec![items.watch(), selected.watch()], move || {
                selected_rows(&items, &selected)
                    .iter()
                    .map(|i| i.quantity)
                    .sum()
            })
        };

        let subtotal: Computed<f64> = {
            let items = items.clone();
            let selected = selected.clone();
            Computed::new(vec![items.watch(), selected.watch()], move || {
                selected_rows(&items, &selected)
                    .iter()
                    .map(|i| i.price * i.quantity as f64)
                    .sum()
            })
        };

        let delivery_fee = {
            let items = items.clone();
            let selected = selected.clone();
            Computed::new(vec![items.watch(), selected.watch()], move || {
                if selected_rows(&items, &selected).is_empty() {
                    0.0
                } else {
                    DELIVERY_FEE
                }
            })
        };

        let total = {
            let subtotal = subtotal.clone();
            let delivery_fee = delivery_fee.clone();
            Computed::new(vec![items.watch(), selected.watch()], move || {
                subtotal.get() + delivery_fee.get()
            })
        };

        let discount_amount = {
            let subtotal = subtotal.clone();
            let percent = discount_percent.clone();
            Computed::new(
                vec![items.watch(), selected.watch(), discount_percent.watch()],
                move || (subtotal.get() * percent.get() as f64 / 100.0).round(),
            )
        };

        let payable_total = {
            let total = total.clone();
            let discount_amount = discount_amount.clone();
            Computed::new(
                vec![items.watch(), selected.watch(), discount_percent.watch()],
                move || (total.get() - discount_amount.get()).max(0.0),
            )
        };

        Self {
            items,
            selected,
            selected_coupon: Signal::new(String::new()),
            coupon_input: Signal::new(String::new()),
            applied_coupon: Signal::new(String::new()),
            coupon_message: Signal::new(String::new()),
            discount_percent,
            submitted: Signal::new(false),
            item_count,
            subtotal,
            delivery_fee,
            total,
            discount_amount,
            payable_total,
        }
    }

    // -------------------------------------------------------------------------
    // Snapshot & selection
    // -------------------------------------------------------------------------

    /// The cart snapshot this checkout works over.
    pub fn items(&self) -> Vec<CartItem> {
        self.items.get()
    }

    /// Product ids currently marked for purchase, ascending.
    pub fn selected_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.selected.with(|s| s.iter().copied().collect());
        ids.sort_unstable();
        ids
    }

    pub fn is_item_selected(&self, product_id: i64) -> bool {
        self.selected.with(|s| s.contains(&product_id))
    }

    /// Flips a product in or out of the purchase selection.
    pub fn toggle_item_selection(&self, product_id: i64) {
        self.selected.update(|s| {
            if !s.remove(&product_id) {
                s.insert(product_id);
            }
        });
    }

    /// Snapshot rows currently selected for purchase.
    pub fn selected_items(&self) -> Vec<CartItem> {
        selected_rows(&self.items, &self.selected)
    }

    /// Re-reads the snapshot from the cart after a passthrough mutation.
    pub fn refresh_items(&self, cart: &CartStore) {
        self.items.set(cart.items());
    }

    // -------------------------------------------------------------------------
    // Cart passthrough operations
    // -------------------------------------------------------------------------

    /// Bumps a row's quantity in the cart and refreshes the snapshot.
    pub fn increase_quantity(&self, cart: &CartStore, product_id: i64) {
        let current = self.row_quantity(product_id);
        if let Some(quantity) = current {
            cart.update_quantity(product_id, quantity + 1);
            self.refresh_items(cart);
        }
    }

    /// Lowers a row's quantity; at 1 the row is removed instead.
    pub fn decrease_quantity(&self, cart: &CartStore, product_id: i64) {
        let current = self.row_quantity(product_id);
        if let Some(quantity) = current {
            if quantity <= 1 {
                self.remove_item(cart, product_id);
            } else {
                cart.update_quantity(product_id, quantity - 1);
                self.refresh_items(cart);
            }
        }
    }

    /// Removes a row from the cart and refreshes the snapshot.
    pub fn remove_item(&self, cart: &CartStore, product_id: i64) {
        cart.remove_item(product_id);
        self.refresh_items(cart);
    }

    fn row_quantity(&self, product_id: i64) -> Option<u32> {
        self.items.with(|rows| {
            rows.iter()
                .find(|i| i.product_id == product_id)
                .map(|i| i.quantity)
        })
    }

    // -------------------------------------------------------------------------
    // Derived monetary pipeline
    // -------------------------------------------------------------------------

    /// Sum of quantities over selected rows.
    pub fn item_count(&self) -> u32 {
        self.item_count.get()
    }

    /// Sum of price × quantity over selected rows.
    pub fn subtotal(&self) -> f64 {
        self.subtotal.get()
    }

    /// Flat fee when anything is selected, zero otherwise.
    pub fn delivery_fee(&self) -> f64 {
        self.delivery_fee.get()
    }

    pub fn total(&self) -> f64 {
        self.total.get()
    }

    /// Rounded percent-off of the selected subtotal.
    pub fn discount_amount(&self) -> f64 {
        self.discount_amount.get()
    }

    /// Total minus discount, floored at zero.
    pub fn payable_total(&self) -> f64 {
        self.payable_total.get()
    }

    // -------------------------------------------------------------------------
    // Coupon state machine
    // -------------------------------------------------------------------------

    /// Code the user picked from the coupon list.
    pub fn set_selected_coupon(&self, code: impl Into<String>) {
        self.selected_coupon.set(code.into());
    }

    /// Free-text code the user typed.
    pub fn set_coupon_input(&self, code: impl Into<String>) {
        self.coupon_input.set(code.into());
    }

    /// The code that would be applied: the picked one, else the typed one.
    pub fn pending_coupon(&self) -> String {
        let picked = self.selected_coupon.get();
        let code = if picked.is_empty() {
            self.coupon_input.get()
        } else {
            picked
        };
        code.trim().to_string()
    }

    /// Amount still missing before the pending code's gate opens. Zero for
    /// codes without a predefined minimum.
    pub fn coupon_shortfall(&self) -> f64 {
        match coupon_rule(&self.pending_coupon()) {
            Some(rule) => (rule.min_subtotal - self.subtotal()).max(0.0),
            None => 0.0,
        }
    }

    /// Whether the pending code passes its minimum-subtotal gate. Codes
    /// outside the rule table have no gate and pass (they are rejected as
    /// invalid later, when the percent resolves to zero).
    pub fn is_coupon_eligible(&self) -> bool {
        let code = self.pending_coupon();
        if code.is_empty() {
            return false;
        }
        match coupon_rule(&code) {
            Some(rule) => self.subtotal() >= rule.min_subtotal,
            None => true,
        }
    }

    fn eligible_discount(&self, code: &str) -> u32 {
        match coupon_rule(code) {
            Some(rule) if self.subtotal() >= rule.min_subtotal => rule.percent,
            _ => 0,
        }
    }

    /// Validates the pending code against the current selected subtotal and
    /// applies or rejects it. Returns the user-facing message.
    ///
    /// Eligibility is only ever evaluated here: changing the selection after
    /// a coupon was applied leaves the discount in place until the next
    /// explicit apply.
    pub fn apply_coupon(&self) -> String {
        let code = self.pending_coupon();
        if code.is_empty() {
            return self.set_coupon_message("Select or enter a coupon to apply.");
        }

        if !self.is_coupon_eligible() {
            let shortfall = self.coupon_shortfall();
            let message = if shortfall > 0.0 {
                format!("Add ₹{} more to use this coupon.", shortfall)
            } else {
                "This coupon is not applicable for the current cart value.".to_string()
            };
            return self.set_coupon_message(message);
        }

        let percent = self.eligible_discount(&code);
        if percent == 0 {
            self.applied_coupon.set(String::new());
            self.discount_percent.set(0);
            return self.set_coupon_message("This coupon is invalid for this cart.");
        }

        let applied = code.to_uppercase();
        self.applied_coupon.set(applied.clone());
        self.discount_percent.set(percent);
        self.set_coupon_message(format!("Applied {} for {}% off.", applied, percent))
    }

    fn set_coupon_message(&self, message: impl Into<String>) -> String {
        let message = message.into();
        self.coupon_message.set(message.clone());
        message
    }

    pub fn applied_coupon(&self) -> String {
        self.applied_coupon.get()
    }

    pub fn coupon_message(&self) -> String {
        self.coupon_message.get()
    }

    pub fn discount_percent(&self) -> u32 {
        self.discount_percent.get()
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Terminal display state: set once an order went through.
    pub fn submitted(&self) -> bool {
        self.submitted.get()
    }

    /// Submits the selected rows as an order.
    ///
    /// With nothing selected this blocks with a validation message and no
    /// state change. On success the order collaborator is notified, exactly
    /// the selected rows leave the cart, the snapshot is cleared and the
    /// session becomes terminal.
    pub fn submit_order(&self, cart: &CartStore, info: &ShippingInfo) -> Result<(), String> {
        let selected = self.selected_items();
        if selected.is_empty() {
            return Err("Please select at least one item to checkout".to_string());
        }

        record_order(info);

        for item in &selected {
            cart.remove_item(item.product_id);
        }
        self.items.set(Vec::new());
        self.submitted.set(true);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::Product;
    use crate::cart::models::CartItem;

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

    /// Cart with A: 500 × 2 and B: 300 × 1.
    fn seeded_cart() -> CartStore {
        let cart = CartStore::new();
        cart.add_item(row(1, 500.0, 2));
        cart.add_item(row(2, 300.0, 1));
        cart
    }

    #[test]
    fn all_rows_start_selected() {
        let session = CheckoutSession::new(seeded_cart().items());

        assert!(session.is_item_selected(1));
        assert!(session.is_item_selected(2));
        assert_eq!(session.selected_ids(), vec![1, 2]);
        assert_eq!(session.selected_items().len(), 2);
    }

    #[test]
    fn pipeline_over_the_seeded_cart() {
        let session = CheckoutSession::new(seeded_cart().items());

        assert_eq!(session.item_count(), 3);
        assert_eq!(session.subtotal(), 1300.0);
        assert_eq!(session.delivery_fee(), 49.0);
        assert_eq!(session.total(), 1349.0);
        assert_eq!(session.discount_amount(), 0.0);
        assert_eq!(session.payable_total(), 1349.0);
    }

    #[test]
    fn deselecting_everything_drops_the_delivery_fee() {
        let session = CheckoutSession::new(seeded_cart().items());
        session.toggle_item_selection(1);
        session.toggle_item_selection(2);

        assert_eq!(session.item_count(), 0);
        assert_eq!(session.subtotal(), 0.0);
        assert_eq!(session.delivery_fee(), 0.0);
        assert_eq!(session.total(), 0.0);
    }

    #[test]
    fn selection_changes_reprice_immediately() {
        let session = CheckoutSession::new(seeded_cart().items());

        session.toggle_item_selection(1);
        assert_eq!(session.subtotal(), 300.0);

        session.toggle_item_selection(1);
        assert_eq!(session.subtotal(), 1300.0);
    }

    #[test]
    fn flat10_on_the_seeded_cart() {
        let session = CheckoutSession::new(seeded_cart().items());
        session.set_coupon_input("flat10");

        let message = session.apply_coupon();

        assert_eq!(message, "Applied FLAT10 for 10% off.");
        assert_eq!(session.applied_coupon(), "FLAT10");
        assert_eq!(session.discount_percent(), 10);
        assert_eq!(session.discount_amount(), 130.0);
        assert_eq!(session.payable_total(), 1219.0);
    }

    #[test]
    fn flat10_gate_is_inclusive_at_999() {
        let session = CheckoutSession::new(vec![row(1, 999.0, 1)]);
        session.set_coupon_input("FLAT10");

        session.apply_coupon();

        assert_eq!(session.discount_percent(), 10);
        assert_eq!(session.discount_amount(), 100.0);
    }

    #[test]
    fn one_unit_short_reports_the_shortfall() {
        let session = CheckoutSession::new(vec![row(1, 998.0, 1)]);
        session.set_coupon_input("flat10");

        let message = session.apply_coupon();

        assert_eq!(session.coupon_shortfall(), 1.0);
        assert_eq!(message, "Add ₹1 more to use this coupon.");
        assert_eq!(session.discount_percent(), 0);
    }

    #[test]
    fn empty_code_asks_for_a_coupon() {
        let session = CheckoutSession::new(seeded_cart().items());

        let message = session.apply_coupon();

        assert_eq!(message, "Select or enter a coupon to apply.");
        assert_eq!(session.coupon_message(), message);
    }

    #[test]
    fn unknown_code_is_invalid_and_clears_a_previous_discount() {
        let session = CheckoutSession::new(seeded_cart().items());

        session.set_coupon_input("flat10");
        session.apply_coupon();
        assert_eq!(session.discount_percent(), 10);

        session.set_coupon_input("BOGUS99");
        let message = session.apply_coupon();

        assert_eq!(message, "This coupon is invalid for this cart.");
        assert_eq!(session.discount_percent(), 0);
        assert_eq!(session.applied_coupon(), "");
    }

    #[test]
    fn selection_change_keeps_the_discount_until_the_next_apply() {
        let session = CheckoutSession::new(seeded_cart().items());
        session.set_coupon_input("flat10");
        session.apply_coupon();

        // Deselect the expensive row: subtotal 300, well under the gate.
        session.toggle_item_selection(1);
        assert_eq!(session.discount_percent(), 10);
        assert_eq!(session.discount_amount(), 30.0);

        // Only an explicit re-apply re-validates the gate.
        let message = session.apply_coupon();
        assert_eq!(message, "Add ₹699 more to use this coupon.");
    }

    #[test]
    fn picked_coupon_wins_over_typed_input() {
        let session = CheckoutSession::new(seeded_cart().items());
        session.set_coupon_input("flat30");
        session.set_selected_coupon("flat10");

        assert_eq!(session.pending_coupon(), "flat10");
    }

    #[test]
    fn quantity_passthrough_keeps_snapshot_and_cart_in_step() {
        let cart = seeded_cart();
        let session = CheckoutSession::new(cart.items());

        session.increase_quantity(&cart, 2);
        assert_eq!(cart.items()[1].quantity, 2);
        assert_eq!(session.subtotal(), 1600.0);

        session.decrease_quantity(&cart, 2);
        assert_eq!(session.subtotal(), 1300.0);

        // At quantity 1 a decrease removes the row entirely.
        session.decrease_quantity(&cart, 2);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(session.subtotal(), 1000.0);
    }

    #[test]
    fn submit_with_nothing_selected_blocks_without_state_change() {
        let cart = seeded_cart();
        let session = CheckoutSession::new(cart.items());
        session.toggle_item_selection(1);
        session.toggle_item_selection(2);

        let result = session.submit_order(&cart, &ShippingInfo::default());

        assert_eq!(
            result,
            Err("Please select at least one item to checkout".to_string())
        );
        assert!(!session.submitted());
        assert_eq!(cart.items().len(), 2);
        assert_eq!(session.items().len(), 2);
    }

    #[test]
    fn submit_removes_exactly_the_selected_rows() {
        let cart = seeded_cart();
        let session = CheckoutSession::new(cart.items());
        session.toggle_item_selection(2);

        let result = session.submit_order(&cart, &ShippingInfo::default());
        assert!(result.is_ok());

        // Only the unselected row survives in the cart.
        let remaining = cart.items();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].product_id, 2);

        assert!(session.submitted());
        assert!(session.items().is_empty());
    }
}
