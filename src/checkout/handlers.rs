//! REST API handlers for the checkout page

use super::models::{ApplyCouponInput, CheckoutView, ShippingInfo, ToggleSelectionInput};
use super::state::CheckoutSession;
use crate::session::helpers::{resolve_session_id, with_session_cookie};
use crate::session::state::SharedState;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Creates routes for checkout operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/checkout", get(view_checkout))
        .route("/checkout/begin", post(begin_checkout))
        .route("/checkout/toggle_item", post(toggle_item))
        .route("/checkout/coupon", post(apply_coupon))
        .route("/checkout/submit", post(submit_order))
}

/// Snapshot, selection and the full derived pipeline, for the widget.
pub(crate) fn checkout_view(session: &CheckoutSession) -> CheckoutView {
    CheckoutView {
        items: session.items(),
        selected_ids: session.selected_ids(),
        item_count: session.item_count(),
        subtotal: session.subtotal(),
        delivery_fee: session.delivery_fee(),
        total: session.total(),
        discount_percent: session.discount_percent(),
        discount_amount: session.discount_amount(),
        payable_total: session.payable_total(),
        applied_coupon: session.applied_coupon(),
        coupon_message: session.coupon_message(),
        submitted: session.submitted(),
    }
}

fn no_checkout() -> Response {
    (StatusCode::NOT_FOUND, "No checkout in progress").into_response()
}

/// Endpoint: POST /checkout/begin
/// Snapshots the cart into a fresh checkout session.
async fn begin_checkout(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let view = {
        let session = state.session(&session_id);
        checkout_view(&session.begin_checkout())
    };

    with_session_cookie(Json(view).into_response(), &session_id, is_new_session)
}

/// Endpoint: GET /checkout
async fn view_checkout(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let response = match state.session(&session_id).checkout() {
        Some(checkout) => Json(checkout_view(&checkout)).into_response(),
        None => no_checkout(),
    };

    with_session_cookie(response, &session_id, is_new_session)
}

/// Endpoint: POST /checkout/toggle_item
async fn toggle_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<ToggleSelectionInput>,
) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let response = match state.session(&session_id).checkout() {
        Some(checkout) => {
            checkout.toggle_item_selection(payload.product_id);
            Json(checkout_view(&checkout)).into_response()
        }
        None => no_checkout(),
    };

    with_session_cookie(response, &session_id, is_new_session)
}

/// Endpoint: POST /checkout/coupon
/// Applies a coupon code; the outcome message rides back on the view.
async fn apply_coupon(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<ApplyCouponInput>,
) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let response = match state.session(&session_id).checkout() {
        Some(checkout) => {
            checkout.set_coupon_input(payload.code);
            checkout.apply_coupon();
            Json(checkout_view(&checkout)).into_response()
        }
        None => no_checkout(),
    };

    with_session_cookie(response, &session_id, is_new_session)
}

/// Endpoint: POST /checkout/submit
/// Submits the selected rows; the cart keeps only the unselected ones.
async fn submit_order(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<ShippingInfo>,
) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let response = {
        let session = state.session(&session_id);
        match session.checkout() {
            Some(checkout) => match checkout.submit_order(&session.cart, &payload) {
                Ok(()) => Json(checkout_view(&checkout)).into_response(),
                Err(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            },
            None => no_checkout(),
        }
    };

    with_session_cookie(response, &session_id, is_new_session)
}
