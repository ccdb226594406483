//! Deal route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use kawane_core::DealId;
use serde::Deserialize;
use tracing::instrument;

use crate::api::types::deal::validate_new_deal;
use crate::api::types::{AdminDeal, DealUpdate, ListParams, NewDeal, Page};
use crate::error::{AppError, Result};
use crate::middleware::{RequireAdmin, RequireStaff};
use crate::state::AppState;

/// Query parameters accepted by the deal list.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub q: Option<String>,
}

/// Deal list.
#[instrument(skip(state, _staff))]
pub async fn index(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<AdminDeal>>> {
    let params = ListParams {
        page: query.page,
        per_page: query.per_page,
        query: query.q,
    };
    let page = state.api().list_deals(&params).await?;
    Ok(Json(page))
}

/// Create a deal.
///
/// Percentage values and the date range are validated locally before the
/// backend sees the payload.
#[instrument(skip(state, staff, deal))]
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(deal): Json<NewDeal>,
) -> Result<(StatusCode, Json<AdminDeal>)> {
    validate_new_deal(&deal).map_err(AppError::BadRequest)?;

    let created = state.api().create_deal(&deal).await?;
    tracing::info!(
        deal_id = %created.id,
        staff = %staff.staff.name,
        "Deal created"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// Apply a partial update to a deal.
#[instrument(skip(state, staff, update))]
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<String>,
    Json(update): Json<DealUpdate>,
) -> Result<Json<AdminDeal>> {
    if let (Some(starts), Some(ends)) = (update.starts_at, update.ends_at)
        && ends <= starts
    {
        return Err(AppError::BadRequest(
            "deal must end after it starts".to_string(),
        ));
    }

    let deal_id = DealId::new(id);
    let updated = state.api().update_deal(&deal_id, &update).await?;
    tracing::info!(deal_id = %deal_id, staff = %staff.staff.name, "Deal updated");

    Ok(Json(updated))
}

/// Delete a deal (Admin role only).
#[instrument(skip(state, admin))]
pub async fn destroy(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let deal_id = DealId::new(id);
    state.api().delete_deal(&deal_id).await?;
    tracing::info!(deal_id = %deal_id, staff = %admin.staff.name, "Deal deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Activate a deal.
#[instrument(skip(state, _staff))]
pub async fn activate(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<String>,
) -> Result<Json<AdminDeal>> {
    let deal = state.api().set_deal_active(&DealId::new(id), true).await?;
    Ok(Json(deal))
}

/// Deactivate a deal.
#[instrument(skip(state, _staff))]
pub async fn deactivate(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<String>,
) -> Result<Json<AdminDeal>> {
    let deal = state.api().set_deal_active(&DealId::new(id), false).await?;
    Ok(Json(deal))
}
