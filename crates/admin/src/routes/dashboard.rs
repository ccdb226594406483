//! Dashboard route handler.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::api::types::{InventoryItem, OrderFilter, SalesSummary};
use crate::error::Result;
use crate::middleware::RequireStaff;
use crate::services::NotificationSnapshot;
use crate::state::AppState;

/// Trailing window the dashboard summarizes.
const SUMMARY_DAYS: u32 = 30;

/// Everything the dashboard renders.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPayload {
    pub sales: SalesSummary,
    pub pending_order_count: u64,
    pub low_stock: Vec<InventoryItem>,
    pub notifications: NotificationSnapshot,
}

/// Assemble the dashboard payload.
#[instrument(skip(state, _staff))]
pub async fn show(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> Result<Json<DashboardPayload>> {
    let pending_filter = OrderFilter {
        status: Some(kawane_core::OrderStatus::Pending),
        per_page: Some(1),
        ..Default::default()
    };

    let (sales, pending, low_stock) = tokio::try_join!(
        state.api().sales_summary(SUMMARY_DAYS),
        state.api().list_orders(&pending_filter),
        state.api().low_stock(None),
    )?;

    let pending_order_count = pending.total;

    Ok(Json(DashboardPayload {
        sales,
        pending_order_count,
        low_stock,
        notifications: state.notifications().snapshot(),
    }))
}
