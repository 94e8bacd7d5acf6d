//! REST API handlers for shopping cart operations

use super::models::{AddCartItemInput, CartItem, CartView, RemoveItemInput, UpdateQuantityInput};
use super::state::CartStore;
use crate::session::helpers::{resolve_session_id, with_session_cookie};
use crate::session::state::SharedState;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart", get(view_cart))
        .route("/cart/items", post(add_item))
        .route("/cart/update_quantity", post(update_quantity))
        .route("/cart/remove", post(remove_item))
        .route("/cart/clear", post(clear_cart))
}

/// Cart rows plus derived totals, for the widget.
pub(crate) fn cart_view(cart: &CartStore) -> CartView {
    CartView {
        items: cart.items(),
        item_count: cart.item_count(),
        total_amount: cart.total_amount(),
    }
}

/// Endpoint: GET /cart
async fn view_cart(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);
    let view = cart_view(&state.session(&session_id).cart);

    with_session_cookie(Json(view).into_response(), &session_id, is_new_session)
}

/// Endpoint: POST /cart/items
/// Adds a catalog product to the cart (merging into an existing row).
async fn add_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<AddCartItemInput>,
) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let product = match state.catalog.get(payload.product_id) {
        Some(product) => product.clone(),
        None => {
            return (
                StatusCode::NOT_FOUND,
                format!("Unknown product: {}", payload.product_id),
            )
                .into_response();
        }
    };

    let view = {
        let session = state.session(&session_id);
        session
            .cart
            .add_item(CartItem::from_product(&product, payload.quantity));
        cart_view(&session.cart)
    };

    with_session_cookie(Json(view).into_response(), &session_id, is_new_session)
}

/// Endpoint: POST /cart/update_quantity
async fn update_quantity(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateQuantityInput>,
) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let view = {
        let session = state.session(&session_id);
        session
            .cart
            .update_quantity(payload.product_id, payload.quantity);
        cart_view(&session.cart)
    };

    with_session_cookie(Json(view).into_response(), &session_id, is_new_session)
}

/// Endpoint: POST /cart/remove
async fn remove_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<RemoveItemInput>,
) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let view = {
        let session = state.session(&session_id);
        session.cart.remove_item(payload.product_id);
        cart_view(&session.cart)
    };

    with_session_cookie(Json(view).into_response(), &session_id, is_new_session)
}

/// Endpoint: POST /cart/clear
async fn clear_cart(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let view = {
        let session = state.session(&session_id);
        session.cart.clear_cart();
        cart_view(&session.cart)
    };

    with_session_cookie(Json(view).into_response(), &session_id, is_new_session)
}
