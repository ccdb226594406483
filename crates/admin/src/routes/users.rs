//! User management route handlers (Admin role only).

use axum::{
    Json,
    extract::{Path, Query, State},
};
use kawane_core::{UserId, UserRole};
use serde::Deserialize;
use tracing::instrument;

use crate::api::types::{AdminUser, ListParams, Page};
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Query parameters accepted by the user list.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub q: Option<String>,
}

/// User list.
#[instrument(skip(state, _admin))]
pub async fn index(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<AdminUser>>> {
    let params = ListParams {
        page: query.page,
        per_page: query.per_page,
        query: query.q,
    };
    let page = state.api().list_users(&params).await?;
    Ok(Json(page))
}

/// User detail.
#[instrument(skip(state, _admin))]
pub async fn show(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<AdminUser>> {
    let user = state.api().get_user(&UserId::new(id)).await?;
    Ok(Json(user))
}

/// Role change request body.
#[derive(Debug, Deserialize)]
pub struct RoleRequest {
    pub role: UserRole,
}

/// Change a user's role.
///
/// Admins cannot demote themselves - that would lock the last admin out of
/// this very screen.
#[instrument(skip(state, admin))]
pub async fn update_role(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<String>,
    Json(request): Json<RoleRequest>,
) -> Result<Json<AdminUser>> {
    let user_id = UserId::new(id);

    if user_id == admin.staff.id && request.role != UserRole::Admin {
        return Err(AppError::Conflict(
            "you cannot remove your own admin role".to_string(),
        ));
    }

    let user = state.api().update_user_role(&user_id, request.role).await?;
    tracing::info!(
        user_id = %user_id,
        role = %request.role,
        staff = %admin.staff.name,
        "User role changed"
    );

    Ok(Json(user))
}

/// Verification flag request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub is_verified: bool,
}

/// Set a user's verification flag.
#[instrument(skip(state, admin))]
pub async fn set_verified(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<String>,
    Json(request): Json<VerifyRequest>,
) -> Result<Json<AdminUser>> {
    let user_id = UserId::new(id);
    let user = state
        .api()
        .set_user_verified(&user_id, request.is_verified)
        .await?;

    tracing::info!(
        user_id = %user_id,
        verified = request.is_verified,
        staff = %admin.staff.name,
        "User verification flag changed"
    );

    Ok(Json(user))
}
