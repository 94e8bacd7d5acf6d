//! REST API handlers for wishlist operations

use super::models::{ToggleWishlistInput, ToggleWishlistResponse, WishlistView};
use crate::session::helpers::{resolve_session_id, with_session_cookie};
use crate::session::state::SharedState;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Creates routes for wishlist operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/wishlist", get(view_wishlist))
        .route("/wishlist/toggle", post(toggle_wishlist))
        .route("/wishlist/clear", post(clear_wishlist))
}

/// Endpoint: GET /wishlist
async fn view_wishlist(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let view = {
        let session = state.session(&session_id);
        WishlistView {
            items: session.wishlist.items(),
            count: session.wishlist.count(),
        }
    };

    with_session_cookie(Json(view).into_response(), &session_id, is_new_session)
}

/// Endpoint: POST /wishlist/toggle
/// Flips a product's membership; reports whether it ended up added.
async fn toggle_wishlist(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<ToggleWishlistInput>,
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

    let response = {
        let session = state.session(&session_id);
        ToggleWishlistResponse {
            added: session.wishlist.toggle_wishlist(&product),
            count: session.wishlist.count(),
        }
    };

    with_session_cookie(Json(response).into_response(), &session_id, is_new_session)
}

/// Endpoint: POST /wishlist/clear
async fn clear_wishlist(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let view = {
        let session = state.session(&session_id);
        session.wishlist.clear_wishlist();
        WishlistView {
            items: Vec::new(),
            count: 0,
        }
    };

    with_session_cookie(Json(view).into_response(), &session_id, is_new_session)
}
