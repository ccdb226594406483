//! Order history and tracking route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use kawane_core::Email;
use serde::Deserialize;
use tracing::instrument;

use crate::api::types::{Order, OrderSummary, TrackedOrder};
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// Order history for the logged-in user.
#[instrument(skip(state, auth))]
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
) -> Result<Json<Vec<OrderSummary>>> {
    let orders = state.api().my_orders(&auth.token).await?;
    Ok(Json(orders))
}

/// Order detail for the logged-in user.
#[instrument(skip(state, auth))]
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    Path(order_number): Path<String>,
) -> Result<Json<Order>> {
    let order = state.api().my_order(&auth.token, &order_number).await?;
    Ok(Json(order))
}

/// Cancel an order.
///
/// The cancel affordance only exists while the order has not entered
/// fulfillment; anything else is rejected locally without a backend call.
#[instrument(skip(state, auth))]
pub async fn cancel(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    Path(order_number): Path<String>,
) -> Result<Json<Order>> {
    let order = state.api().my_order(&auth.token, &order_number).await?;

    if !order.status.is_cancellable() {
        return Err(AppError::Conflict(format!(
            "order {order_number} can no longer be cancelled ({})",
            order.status.label()
        )));
    }

    let cancelled = state.api().cancel_order(&auth.token, &order_number).await?;
    tracing::info!(order_number = %order_number, "Order cancelled by customer");

    Ok(Json(cancelled))
}

/// Public tracking request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRequest {
    pub order_number: String,
    pub email: String,
}

/// Track an order publicly by order number + the email used at checkout.
#[instrument(skip(state, request))]
pub async fn track(
    State(state): State<AppState>,
    Json(request): Json<TrackRequest>,
) -> Result<Json<TrackedOrder>> {
    let order_number = request.order_number.trim();
    if order_number.is_empty() {
        return Err(AppError::BadRequest("order number is required".to_string()));
    }

    let email = Email::parse(&request.email)
        .map_err(|e| AppError::BadRequest(format!("invalid email: {e}")))?;

    let tracked = state.api().track_order(order_number, email.as_str()).await?;
    Ok(Json(tracked))
}
