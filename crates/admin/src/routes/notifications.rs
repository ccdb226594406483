//! Notification route handlers.
//!
//! The badge endpoint serves from the poller's snapshot; list and mark-read
//! endpoints go to the backend, and mutations nudge the poller so the badge
//! catches up immediately instead of on the next tick.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use kawane_core::NotificationId;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::api::types::{ListParams, Notification, Page};
use crate::error::Result;
use crate::middleware::RequireStaff;
use crate::state::AppState;

/// Query parameters accepted by the notification list.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Notification list, newest first.
#[instrument(skip(state, _staff))]
pub async fn index(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Notification>>> {
    let params = ListParams {
        page: query.page,
        per_page: query.per_page,
        query: None,
    };
    let page = state.api().list_notifications(&params).await?;
    Ok(Json(page))
}

/// Badge payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgePayload {
    pub unread: u64,
}

/// Unread badge, served from the poller snapshot (no backend round-trip).
#[instrument(skip(state, _staff))]
pub async fn badge(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> Json<BadgePayload> {
    Json(BadgePayload {
        unread: state.notifications().unread_count(),
    })
}

/// Mark one notification read.
#[instrument(skip(state, _staff))]
pub async fn mark_read(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<String>,
) -> Result<Json<Notification>> {
    let notification = state
        .api()
        .mark_notification_read(&NotificationId::new(id))
        .await?;

    state.notifications().refresh_now();

    Ok(Json(notification))
}

/// Marked-count payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkedAllPayload {
    pub marked: u64,
}

/// Mark every notification read.
#[instrument(skip(state, _staff))]
pub async fn mark_all_read(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> Result<Json<MarkedAllPayload>> {
    let marked = state.api().mark_all_notifications_read().await?;

    state.notifications().refresh_now();

    Ok(Json(MarkedAllPayload { marked }))
}
