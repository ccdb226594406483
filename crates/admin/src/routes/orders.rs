//! Order route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::Response,
};
use kawane_core::{OrderId, OrderStatus, PaymentStatus};
use serde::Deserialize;
use tracing::instrument;

use crate::api::types::{AdminOrder, OrderFilter, Page};
use crate::error::{AppError, Result};
use crate::middleware::RequireStaff;
use crate::services::export::{CsvBuilder, csv_response};
use crate::state::AppState;

/// How many orders a CSV export covers at most.
const EXPORT_LIMIT: u32 = 500;

/// Query parameters accepted by the order list.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub q: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl From<ListQuery> for OrderFilter {
    fn from(query: ListQuery) -> Self {
        Self {
            status: query.status,
            payment_status: query.payment_status,
            query: query.q,
            page: query.page,
            per_page: query.per_page,
        }
    }
}

/// Order list with filters.
#[instrument(skip(state, _staff))]
pub async fn index(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<AdminOrder>>> {
    let page = state.api().list_orders(&OrderFilter::from(query)).await?;
    Ok(Json(page))
}

/// Order detail.
#[instrument(skip(state, _staff))]
pub async fn show(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<String>,
) -> Result<Json<AdminOrder>> {
    let order = state.api().get_order(&OrderId::new(id)).await?;
    Ok(Json(order))
}

/// Status transition request body.
#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: OrderStatus,
}

/// Move an order to a new lifecycle status.
#[instrument(skip(state, staff))]
pub async fn update_status(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<String>,
    Json(request): Json<StatusUpdateRequest>,
) -> Result<Json<AdminOrder>> {
    let order_id = OrderId::new(id);
    let order = state
        .api()
        .update_order_status(&order_id, request.status)
        .await?;

    tracing::info!(
        order_id = %order_id,
        status = ?request.status,
        staff = %staff.staff.name,
        "Order status updated"
    );
    state.notifications().refresh_now();

    Ok(Json(order))
}

/// Payment status request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusRequest {
    pub payment_status: PaymentStatus,
}

/// Set an order's payment status (WhatsApp-manual confirmations, refunds).
#[instrument(skip(state, staff))]
pub async fn update_payment_status(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<String>,
    Json(request): Json<PaymentStatusRequest>,
) -> Result<Json<AdminOrder>> {
    let order_id = OrderId::new(id);
    let order = state
        .api()
        .update_payment_status(&order_id, request.payment_status)
        .await?;

    tracing::info!(
        order_id = %order_id,
        payment_status = ?request.payment_status,
        staff = %staff.staff.name,
        "Payment status updated"
    );

    Ok(Json(order))
}

/// Cancel an order on behalf of staff.
///
/// Gated locally on `is_cancellable`, matching the affordance the order
/// screens show.
#[instrument(skip(state, staff))]
pub async fn cancel(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<String>,
) -> Result<Json<AdminOrder>> {
    let order_id = OrderId::new(id);
    let order = state.api().get_order(&order_id).await?;

    if !order.status.is_cancellable() {
        return Err(AppError::Conflict(format!(
            "order {} can no longer be cancelled ({})",
            order.order_number,
            order.status.label()
        )));
    }

    let cancelled = state.api().cancel_order(&order_id).await?;
    tracing::info!(
        order_id = %order_id,
        staff = %staff.staff.name,
        "Order cancelled by staff"
    );

    Ok(Json(cancelled))
}

/// CSV export of the (filtered) order list.
///
/// Returns 204 when the filter matches nothing.
#[instrument(skip(state, _staff))]
pub async fn export_csv(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(query): Query<ListQuery>,
) -> Result<Response> {
    let filter = OrderFilter {
        page: Some(1),
        per_page: Some(EXPORT_LIMIT),
        ..OrderFilter::from(query)
    };
    let page = state.api().list_orders(&filter).await?;

    let mut csv = CsvBuilder::new(&[
        "Order",
        "Date",
        "Customer",
        "Email",
        "Status",
        "Payment",
        "Items",
        "Total (IDR)",
    ]);
    for order in &page.items {
        csv.push_row(&[
            order.order_number.clone(),
            order.created_at.format("%Y-%m-%d %H:%M").to_string(),
            order.customer.name.clone(),
            order.customer.email.clone(),
            order.status.label().to_string(),
            format!("{:?}", order.payment_status),
            order.items.len().to_string(),
            order.total_amount.amount().to_string(),
        ]);
    }

    Ok(csv_response("orders.csv", csv))
}
