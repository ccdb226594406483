//! Cart route handlers.
//!
//! The session stores only the backend-issued cart token; every mutation
//! round-trips to the backend and the response replaces the local mirror.
//! The source of truth is always the next network response.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use kawane_core::{CartItemId, ProductId};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::api::types::Cart;
use crate::error::{AppError, Result};
use crate::models::session_keys;
use crate::state::AppState;

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the cart token from the session.
async fn get_cart_token(session: &Session) -> Option<String> {
    session
        .get::<String>(session_keys::CART_TOKEN)
        .await
        .ok()
        .flatten()
}

/// Set the cart token in the session.
async fn set_cart_token(
    session: &Session,
    token: &str,
) -> std::result::Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CART_TOKEN, token).await
}

// =============================================================================
// Request / Response Types
// =============================================================================

/// Add to cart request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    pub quantity: Option<u32>,
}

/// Update cart line request body.
///
/// `quantity` is signed so that zero and below reach the handler, which
/// removes the line instead of forwarding a non-positive quantity.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartRequest {
    pub item_id: CartItemId,
    pub quantity: i64,
}

/// Remove from cart request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartRequest {
    pub item_id: CartItemId,
}

/// Cart count badge payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCount {
    pub count: u32,
}

// =============================================================================
// Handlers
// =============================================================================

/// Current cart.
///
/// A session without a backend cart (or whose cart the backend no longer
/// knows) renders as empty rather than an error.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Json<Cart> {
    let cart = match get_cart_token(&session).await {
        Some(token) => match state.api().get_cart(&token).await {
            Ok(cart) => cart,
            Err(e) => {
                tracing::warn!("Failed to fetch cart: {e}");
                Cart::empty()
            }
        },
        None => Cart::empty(),
    };

    Json(cart)
}

/// Add an item to the cart.
///
/// Creates a new backend cart if the session doesn't hold one yet and saves
/// the returned token.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<Cart>> {
    let quantity = request.quantity.unwrap_or(1);
    if quantity == 0 {
        return Err(AppError::BadRequest(
            "quantity must be at least 1".to_string(),
        ));
    }

    let token = get_cart_token(&session).await;
    let cart = state
        .api()
        .add_to_cart(token.as_deref(), &request.product_id, quantity)
        .await?;

    set_cart_token(&session, &cart.token).await?;

    Ok(Json(cart))
}

/// Update a cart line's quantity.
///
/// A quantity of zero or below removes the line; the backend never sees a
/// non-positive quantity.
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<UpdateCartRequest>,
) -> Result<Json<Cart>> {
    let Some(token) = get_cart_token(&session).await else {
        return Ok(Json(Cart::empty()));
    };

    let cart = if request.quantity <= 0 {
        state.api().remove_cart_item(&token, &request.item_id).await?
    } else {
        let quantity = u32::try_from(request.quantity)
            .map_err(|_| AppError::BadRequest("quantity out of range".to_string()))?;
        state
            .api()
            .update_cart_item(&token, &request.item_id, quantity)
            .await?
    };

    Ok(Json(cart))
}

/// Remove a line from the cart.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<RemoveFromCartRequest>,
) -> Result<Json<Cart>> {
    let Some(token) = get_cart_token(&session).await else {
        return Ok(Json(Cart::empty()));
    };

    let cart = state.api().remove_cart_item(&token, &request.item_id).await?;
    Ok(Json(cart))
}

/// Empty the cart.
#[instrument(skip(state, session))]
pub async fn clear(State(state): State<AppState>, session: Session) -> Result<impl IntoResponse> {
    if let Some(token) = get_cart_token(&session).await {
        state.api().clear_cart(&token).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Cart count badge.
#[instrument(skip(state, session))]
pub async fn count(State(state): State<AppState>, session: Session) -> Json<CartCount> {
    let count = match get_cart_token(&session).await {
        Some(token) => state
            .api()
            .get_cart(&token)
            .await
            .map(|cart| cart.item_count)
            .unwrap_or(0),
        None => 0,
    };

    Json(CartCount { count })
}
