//! REST API handlers for the hamper builder workspace

use super::models::{
    AddHamperItemResponse, CustomizeHamperInput, GiftWrapInput, HamperItemInput, HamperSize,
    HamperView, ResizeHamperInput, StartHamperInput, GIFT_WRAP_TIERS, HAMPER_SIZES,
};
use super::state::HamperBuilder;
use crate::session::helpers::{resolve_session_id, with_session_cookie};
use crate::session::state::SharedState;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Creates routes for hamper builder operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/hamper", get(view_hamper))
        .route("/hamper/start", post(start_hamper))
        .route("/hamper/items", post(add_item))
        .route("/hamper/remove_item", post(remove_item))
        .route("/hamper/size", post(resize))
        .route("/hamper/wrap", post(set_gift_wrap))
        .route("/hamper/customize", post(customize))
        .route("/hamper/add_to_cart", post(add_to_cart))
        .route("/hamper/clear", post(clear_hamper))
}

/// Workspace snapshot plus the published size/wrap tables.
pub(crate) fn hamper_view(builder: &HamperBuilder) -> HamperView {
    HamperView {
        hamper: builder.hamper(),
        item_count: builder.item_count(),
        max_items: builder.max_items(),
        is_full: builder.is_full(),
        can_add_more: builder.can_add_more(),
        total_items_price: builder.total_items_price(),
        hamper_base_price: builder.hamper_base_price(),
        gift_wrap_price: builder.gift_wrap_price(),
        total_price: builder.total_price(),
        sizes: HAMPER_SIZES.to_vec(),
        gift_wrap_tiers: GIFT_WRAP_TIERS.to_vec(),
    }
}

/// Endpoint: GET /hamper
async fn view_hamper(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);
    let view = hamper_view(&state.session(&session_id).hamper);

    with_session_cookie(Json(view).into_response(), &session_id, is_new_session)
}

/// Endpoint: POST /hamper/start
/// Starts a fresh hamper (medium unless a size is given), discarding any
/// work in progress.
async fn start_hamper(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<StartHamperInput>,
) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let view = {
        let session = state.session(&session_id);
        session
            .hamper
            .start_new_hamper(payload.size.unwrap_or(HamperSize::Medium));
        hamper_view(&session.hamper)
    };

    with_session_cookie(Json(view).into_response(), &session_id, is_new_session)
}

/// Endpoint: POST /hamper/items
/// Adds a catalog product to the hamper; reports a full or duplicate
/// workspace instead of failing the request.
async fn add_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<HamperItemInput>,
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
        let added = session.hamper.add_item_to_hamper(&product);

        let message = if !added && session.hamper.is_full() {
            Some("Hamper is full! Please remove an item or choose a larger size.".to_string())
        } else if !added {
            Some("This item is already in your hamper.".to_string())
        } else {
            None
        };

        AddHamperItemResponse {
            added,
            message,
            view: hamper_view(&session.hamper),
        }
    };

    with_session_cookie(Json(response).into_response(), &session_id, is_new_session)
}

/// Endpoint: POST /hamper/remove_item
async fn remove_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<HamperItemInput>,
) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let view = {
        let session = state.session(&session_id);
        session.hamper.remove_item_from_hamper(payload.product_id);
        hamper_view(&session.hamper)
    };

    with_session_cookie(Json(view).into_response(), &session_id, is_new_session)
}

/// Endpoint: POST /hamper/size
async fn resize(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<ResizeHamperInput>,
) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let view = {
        let session = state.session(&session_id);
        session.hamper.update_hamper_size(payload.size);
        hamper_view(&session.hamper)
    };

    with_session_cookie(Json(view).into_response(), &session_id, is_new_session)
}

/// Endpoint: POST /hamper/wrap
async fn set_gift_wrap(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<GiftWrapInput>,
) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let view = {
        let session = state.session(&session_id);
        session.hamper.update_gift_wrap(payload.tier);
        hamper_view(&session.hamper)
    };

    with_session_cookie(Json(view).into_response(), &session_id, is_new_session)
}

/// Endpoint: POST /hamper/customize
async fn customize(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<CustomizeHamperInput>,
) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let view = {
        let session = state.session(&session_id);
        if let Some(name) = payload.hamper_name {
            session.hamper.update_hamper_name(name);
        }
        if let Some(message) = payload.gift_message {
            session.hamper.update_gift_message(message);
        }
        if let Some(name) = payload.recipient_name {
            session.hamper.update_recipient_name(name);
        }
        hamper_view(&session.hamper)
    };

    with_session_cookie(Json(view).into_response(), &session_id, is_new_session)
}

/// Endpoint: POST /hamper/add_to_cart
/// Finalizes the workspace into a cart row and reseeds it.
async fn add_to_cart(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<CustomizeHamperInput>,
) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let result = {
        let session = state.session(&session_id);
        session.add_hamper_to_cart(
            payload.hamper_name,
            payload.gift_message,
            payload.recipient_name,
        )
    };

    let response = match result {
        Ok(message) => {
            println!("HAMPER CHECKOUT: {}", message);
            let session = state.session(&session_id);
            Json(serde_json::json!({
                "status": "added",
                "message": message,
                "cart": crate::cart::handlers::cart_view(&session.cart),
                "hamper": hamper_view(&session.hamper),
            }))
            .into_response()
        }
        Err(message) => (StatusCode::BAD_REQUEST, message).into_response(),
    };

    with_session_cookie(response, &session_id, is_new_session)
}

/// Endpoint: POST /hamper/clear
async fn clear_hamper(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let view = {
        let session = state.session(&session_id);
        session.hamper.clear_hamper();
        hamper_view(&session.hamper)
    };

    with_session_cookie(Json(view).into_response(), &session_id, is_new_session)
}
