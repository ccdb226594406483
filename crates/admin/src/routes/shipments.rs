//! Shipment route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use kawane_core::{OrderId, ShipmentId, ShipmentStatus};
use serde::Deserialize;
use tracing::instrument;

use crate::api::types::{ListParams, NewShipment, Page, Shipment};
use crate::error::{AppError, Result};
use crate::middleware::RequireStaff;
use crate::state::AppState;

/// Query parameters accepted by the shipment list.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub q: Option<String>,
}

/// Shipment list.
#[instrument(skip(state, _staff))]
pub async fn index(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Shipment>>> {
    let params = ListParams {
        page: query.page,
        per_page: query.per_page,
        query: query.q,
    };
    let page = state.api().list_shipments(&params).await?;
    Ok(Json(page))
}

/// Shipment detail.
#[instrument(skip(state, _staff))]
pub async fn show(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<String>,
) -> Result<Json<Shipment>> {
    let shipment = state.api().get_shipment(&ShipmentId::new(id)).await?;
    Ok(Json(shipment))
}

/// Shipment creation request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    pub order_id: OrderId,
    pub courier: String,
    pub tracking_number: String,
}

/// Create a shipment for an order.
///
/// The backend moves the order to Shipped; orders that are not Paid or
/// Processing are rejected there.
#[instrument(skip(state, staff, request))]
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(request): Json<CreateRequest>,
) -> Result<(StatusCode, Json<Shipment>)> {
    if request.courier.trim().is_empty() {
        return Err(AppError::BadRequest("courier is required".to_string()));
    }
    if request.tracking_number.trim().is_empty() {
        return Err(AppError::BadRequest(
            "tracking number is required".to_string(),
        ));
    }

    let shipment = state
        .api()
        .create_shipment(&NewShipment {
            order_id: request.order_id,
            courier: request.courier.trim().to_string(),
            tracking_number: request.tracking_number.trim().to_string(),
        })
        .await?;

    tracing::info!(
        shipment_id = %shipment.id,
        order_id = %shipment.order_id,
        staff = %staff.staff.name,
        "Shipment created"
    );

    Ok((StatusCode::CREATED, Json(shipment)))
}

/// Courier status update request body.
#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: ShipmentStatus,
}

/// Update a shipment's courier status.
#[instrument(skip(state, _staff))]
pub async fn update_status(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<String>,
    Json(request): Json<StatusRequest>,
) -> Result<Json<Shipment>> {
    let shipment = state
        .api()
        .update_shipment_status(&ShipmentId::new(id), request.status)
        .await?;
    Ok(Json(shipment))
}
