//! Session Module
//!
//! One `SessionState` per user session bundles the cart, wishlist, hamper
//! builder and the optional in-flight checkout. `AppState` owns the session
//! map and the catalog; cookie helpers resolve the session id.

pub mod helpers;
pub mod state;

pub use helpers::{attach_session_cookie, resolve_session_id, with_session_cookie, SESSION_COOKIE};
pub use state::{AppState, SessionState, SharedState};
