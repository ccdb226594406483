//! Inventory route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use kawane_core::ProductId;
use serde::Deserialize;
use tracing::instrument;

use crate::api::types::{InventoryItem, ListParams, Page, StockAdjustment};
use crate::error::{AppError, Result};
use crate::middleware::RequireStaff;
use crate::state::AppState;

/// Query parameters accepted by the inventory list.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub q: Option<String>,
}

/// Stock level list.
#[instrument(skip(state, _staff))]
pub async fn index(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<InventoryItem>>> {
    let params = ListParams {
        page: query.page,
        per_page: query.per_page,
        query: query.q,
    };
    let page = state.api().list_inventory(&params).await?;
    Ok(Json(page))
}

/// Low-stock report query parameters.
#[derive(Debug, Deserialize)]
pub struct LowStockQuery {
    pub threshold: Option<u32>,
}

/// Rows at or below their low-stock threshold.
#[instrument(skip(state, _staff))]
pub async fn low_stock(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(query): Query<LowStockQuery>,
) -> Result<Json<Vec<InventoryItem>>> {
    let items = state.api().low_stock(query.threshold).await?;
    Ok(Json(items))
}

/// Manual stock adjustment request body.
#[derive(Debug, Deserialize)]
pub struct AdjustRequest {
    pub delta: i64,
    pub reason: String,
}

/// Apply a manual stock adjustment.
///
/// A deduction larger than the current stock is rejected locally; the
/// backend enforces the same rule, but the round-trip is wasted on an
/// adjustment that can never succeed.
#[instrument(skip(state, staff))]
pub async fn adjust(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<String>,
    Json(request): Json<AdjustRequest>,
) -> Result<Json<InventoryItem>> {
    if request.delta == 0 {
        return Err(AppError::BadRequest("delta must be non-zero".to_string()));
    }
    if request.reason.trim().is_empty() {
        return Err(AppError::BadRequest("reason is required".to_string()));
    }

    let product_id = ProductId::new(id);

    if request.delta < 0 {
        let current = state.api().get_product(&product_id).await?;
        let deduction = request.delta.unsigned_abs();
        if deduction > u64::from(current.stock) {
            return Err(AppError::Conflict(format!(
                "cannot deduct {} units, only {} in stock",
                deduction, current.stock
            )));
        }
    }

    let adjustment = StockAdjustment {
        delta: request.delta,
        reason: request.reason.trim().to_string(),
    };
    let item = state.api().adjust_stock(&product_id, &adjustment).await?;

    tracing::info!(
        product_id = %product_id,
        delta = request.delta,
        staff = %staff.staff.name,
        "Stock adjusted"
    );

    Ok(Json(item))
}
