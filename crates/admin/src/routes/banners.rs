//! Banner route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use kawane_core::BannerId;
use serde::Deserialize;
use tracing::instrument;

use crate::api::types::{AdminBanner, BannerUpdate, NewBanner};
use crate::error::{AppError, Result};
use crate::middleware::{RequireAdmin, RequireStaff};
use crate::state::AppState;

/// Banner list, ordered by position.
#[instrument(skip(state, _staff))]
pub async fn index(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> Result<Json<Vec<AdminBanner>>> {
    let banners = state.api().list_banners().await?;
    Ok(Json(banners))
}

/// Create a banner.
#[instrument(skip(state, staff, banner))]
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(banner): Json<NewBanner>,
) -> Result<(StatusCode, Json<AdminBanner>)> {
    if banner.title.trim().is_empty() {
        return Err(AppError::BadRequest("title is required".to_string()));
    }
    if banner.image_url.trim().is_empty() {
        return Err(AppError::BadRequest("image URL is required".to_string()));
    }

    let created = state.api().create_banner(&banner).await?;
    tracing::info!(
        banner_id = %created.id,
        staff = %staff.staff.name,
        "Banner created"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// Apply a partial update to a banner.
#[instrument(skip(state, _staff, update))]
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<String>,
    Json(update): Json<BannerUpdate>,
) -> Result<Json<AdminBanner>> {
    let banner = state
        .api()
        .update_banner(&BannerId::new(id), &update)
        .await?;
    Ok(Json(banner))
}

/// Delete a banner (Admin role only).
#[instrument(skip(state, admin))]
pub async fn destroy(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let banner_id = BannerId::new(id);
    state.api().delete_banner(&banner_id).await?;
    tracing::info!(
        banner_id = %banner_id,
        staff = %admin.staff.name,
        "Banner deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}

/// Reorder request body.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub ids: Vec<BannerId>,
}

/// Reorder banners to match the given ID sequence.
#[instrument(skip(state, _staff, request))]
pub async fn reorder(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(request): Json<ReorderRequest>,
) -> Result<Json<Vec<AdminBanner>>> {
    if request.ids.is_empty() {
        return Err(AppError::BadRequest("ids must not be empty".to_string()));
    }

    let banners = state.api().reorder_banners(&request.ids).await?;
    Ok(Json(banners))
}
