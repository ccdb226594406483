//! Lookbook route handlers.
//!
//! The lookbook is a curated, ordered photo set; reordering is the main
//! operation staff perform here.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use kawane_core::LookbookPhotoId;
use serde::Deserialize;
use tracing::instrument;

use crate::api::types::{AdminLookbookPhoto, LookbookPhotoUpdate, NewLookbookPhoto};
use crate::error::{AppError, Result};
use crate::middleware::{RequireAdmin, RequireStaff};
use crate::state::AppState;

/// Lookbook photos in curated order.
#[instrument(skip(state, _staff))]
pub async fn index(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> Result<Json<Vec<AdminLookbookPhoto>>> {
    let photos = state.api().list_lookbook().await?;
    Ok(Json(photos))
}

/// Add a photo to the lookbook.
#[instrument(skip(state, staff, photo))]
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(photo): Json<NewLookbookPhoto>,
) -> Result<(StatusCode, Json<AdminLookbookPhoto>)> {
    if photo.image_url.trim().is_empty() {
        return Err(AppError::BadRequest("image URL is required".to_string()));
    }

    let created = state.api().create_lookbook_photo(&photo).await?;
    tracing::info!(
        photo_id = %created.id,
        staff = %staff.staff.name,
        "Lookbook photo added"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// Apply a partial update to a lookbook photo.
#[instrument(skip(state, _staff, update))]
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<String>,
    Json(update): Json<LookbookPhotoUpdate>,
) -> Result<Json<AdminLookbookPhoto>> {
    let photo = state
        .api()
        .update_lookbook_photo(&LookbookPhotoId::new(id), &update)
        .await?;
    Ok(Json(photo))
}

/// Remove a photo from the lookbook (Admin role only).
#[instrument(skip(state, admin))]
pub async fn destroy(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let photo_id = LookbookPhotoId::new(id);
    state.api().delete_lookbook_photo(&photo_id).await?;
    tracing::info!(
        photo_id = %photo_id,
        staff = %admin.staff.name,
        "Lookbook photo removed"
    );

    Ok(StatusCode::NO_CONTENT)
}

/// Reorder request body.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub ids: Vec<LookbookPhotoId>,
}

/// Reorder the lookbook to match the given ID sequence.
#[instrument(skip(state, _staff, request))]
pub async fn reorder(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(request): Json<ReorderRequest>,
) -> Result<Json<Vec<AdminLookbookPhoto>>> {
    if request.ids.is_empty() {
        return Err(AppError::BadRequest("ids must not be empty".to_string()));
    }

    let photos = state.api().reorder_lookbook(&request.ids).await?;
    Ok(Json(photos))
}
