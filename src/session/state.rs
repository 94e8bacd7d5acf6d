//! Session and Application State
//!
//! `SessionState` is the context object owning one user's stores; nothing in
//! the engine is process-global. `AppState` maps session ids to their state
//! and carries the read-only catalog.

use std::sync::{Arc, RwLock};

use crate::cart::state::CartStore;
use crate::catalog::state::ProductCatalog;
use crate::checkout::state::CheckoutSession;
use crate::hamper::models::HamperSize;
use crate::hamper::state::HamperBuilder;
use crate::wishlist::state::WishlistStore;
use dashmap::mapref::one::Ref;
use dashmap::DashMap;

/// Shared application state that can be safely passed between handlers
pub type SharedState = Arc<AppState>;

/// Per-session stores: one cart, wishlist and hamper workspace, plus the
/// checkout in flight, if any.
pub struct SessionState {
    pub cart: CartStore,
    pub wishlist: WishlistStore,
    pub hamper: HamperBuilder,
    checkout: RwLock<Option<CheckoutSession>>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Fresh stores for a new session.
    pub fn new() -> Self {
        Self {
            cart: CartStore::new(),
            wishlist: WishlistStore::new(),
            hamper: HamperBuilder::new(),
            checkout: RwLock::new(None),
        }
    }

    /// Starts a checkout over a snapshot of the current cart, replacing any
    /// earlier attempt.
    pub fn begin_checkout(&self) -> CheckoutSession {
        let session = CheckoutSession::new(self.cart.items());
        *self.checkout.write().unwrap() = Some(session.clone());
        session
    }

    /// The checkout in flight, if one was started.
    pub fn checkout(&self) -> Option<CheckoutSession> {
        self.checkout.read().unwrap().clone()
    }

    /// Finalizes the hamper workspace into a cart row.
    ///
    /// Applies any last customization edits, prices the hamper, hands it to
    /// the cart, then reseeds the workspace with a fresh medium hamper.
    /// Returns the success message, or the validation message when there is
    /// nothing to add.
    pub fn add_hamper_to_cart(
        &self,
        hamper_name: Option<String>,
        gift_message: Option<String>,
        recipient_name: Option<String>,
    ) -> Result<String, String> {
        const EMPTY_HAMPER: &str = "Please add at least one item to your hamper.";

        match self.hamper.hamper() {
            Some(h) if !h.items.is_empty() => {}
            _ => return Err(EMPTY_HAMPER.to_string()),
        }

        if let Some(name) = hamper_name {
            self.hamper.update_hamper_name(name);
        }
        if let Some(message) = gift_message {
            self.hamper.update_gift_message(message);
        }
        if let Some(name) = recipient_name {
            self.hamper.update_recipient_name(name);
        }

        let updated = match self.hamper.hamper() {
            Some(h) => h,
            None => return Err(EMPTY_HAMPER.to_string()),
        };
        let total_price = self.hamper.total_price();

        self.cart.add_hamper(&updated, total_price);
        let message = format!("{} added to cart!", updated.hamper_name);

        // Clear the workspace and reseed it for the next composition.
        self.hamper.clear_hamper();
        self.hamper.start_new_hamper(HamperSize::Medium);

        Ok(message)
    }
}

/// Core application state: all sessions plus the catalog.
pub struct AppState {
    /// In-memory storage for sessions, keyed by session id.
    /// DashMap allows concurrent access without external Mutexes.
    pub sessions: DashMap<String, SessionState>,

    /// Read-only storefront listing.
    pub catalog: ProductCatalog,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates state with no sessions and the built-in listing.
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
            catalog: ProductCatalog::storefront_listing(),
        }
    }

    /// The state for a session id, created on first use.
    pub fn session(&self, session_id: &str) -> Ref<'_, String, SessionState> {
        self.sessions
            .entry(session_id.to_string())
            .or_default()
            .downgrade()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::Product;
    use crate::hamper::models::GiftWrapTier;

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
    fn sessions_are_isolated_from_each_other() {
        let state = AppState::new();

        state
            .session("alpha")
            .cart
            .add_item(crate::cart::models::CartItem::from_product(&product(1, 100.0), 1));

        assert_eq!(state.session("alpha").cart.item_count(), 1);
        assert_eq!(state.session("beta").cart.item_count(), 0);
    }

    #[test]
    fn finalizing_a_hamper_moves_it_into_the_cart_and_reseeds() {
        let session = SessionState::new();
        session.hamper.start_new_hamper(HamperSize::Small);
        session.hamper.update_gift_wrap(GiftWrapTier::Luxury);
        assert!(session.hamper.add_item_to_hamper(&product(1, 300.0)));

        let message = session
            .add_hamper_to_cart(Some("For Dad".into()), None, None)
            .unwrap();
        assert_eq!(message, "For Dad added to cart!");

        // 300 items + 99 base + 199 wrap.
        let rows = session.cart.items();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_hamper);
        assert_eq!(rows[0].price, 598.0);
        assert_eq!(rows[0].product_name, "For Dad");

        // Workspace reseeded with a fresh default hamper.
        let fresh = session.hamper.hamper().unwrap();
        assert_eq!(fresh.size, HamperSize::Medium);
        assert!(fresh.items.is_empty());
    }

    #[test]
    fn an_empty_hamper_cannot_be_added_to_the_cart() {
        let session = SessionState::new();
        session.hamper.start_new_hamper(HamperSize::Medium);

        let result = session.add_hamper_to_cart(None, None, None);

        assert!(result.is_err());
        assert!(session.cart.items().is_empty());
        // The workspace is left untouched.
        assert!(session.hamper.hamper().is_some());
    }

    #[test]
    fn begin_checkout_snapshots_the_cart() {
        let session = SessionState::new();
        session
            .cart
            .add_item(crate::cart::models::CartItem::from_product(&product(1, 500.0), 2));

        let checkout = session.begin_checkout();
        assert_eq!(checkout.subtotal(), 1000.0);

        // The stored handle observes the same checkout.
        session.checkout().unwrap().toggle_item_selection(1);
        assert_eq!(checkout.subtotal(), 0.0);
    }
}
