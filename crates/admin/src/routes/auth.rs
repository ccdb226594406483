//! Staff authentication route handlers.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::{clear_current_staff, set_current_staff};
use crate::models::{CurrentStaff, session_keys};
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Response for a successful login.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub staff: CurrentStaff,
}

/// Exchange staff credentials for a back-office session.
///
/// Customer accounts are rejected with 403 even when the credentials are
/// valid - the role tiers gate access to every back-office page.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<LoginForm>,
) -> Result<Json<SessionResponse>> {
    let email = form.email.trim().to_lowercase();
    if email.is_empty() || form.password.is_empty() {
        return Err(AppError::BadRequest(
            "email and password are required".to_string(),
        ));
    }

    let auth = state.api().login(&email, &form.password).await?;

    if !auth.user.role.can_access_admin() {
        tracing::warn!(user_id = %auth.user.id, "Customer account attempted back-office login");
        return Err(AppError::Forbidden(
            "this account has no back-office access".to_string(),
        ));
    }

    let staff = CurrentStaff {
        id: auth.user.id.clone(),
        name: auth.user.name.clone(),
        email: auth.user.email.clone(),
        role: auth.user.role,
    };

    // Rotate the session ID on privilege change (fixation protection)
    session.cycle_id().await?;
    set_current_staff(&session, &staff, &auth.token).await?;

    tracing::info!(staff_id = %staff.id, role = %staff.role, "Staff logged in");

    Ok(Json(SessionResponse { staff }))
}

/// Destroy the staff session.
#[instrument(skip(state, session))]
pub async fn logout(State(state): State<AppState>, session: Session) -> Result<impl IntoResponse> {
    if let Some(token) = session
        .get::<String>(session_keys::STAFF_TOKEN)
        .await
        .ok()
        .flatten()
        && let Err(e) = state.api().logout(&token).await
    {
        // Best-effort revocation; the session is destroyed regardless
        tracing::warn!("Backend logout failed: {e}");
    }

    clear_current_staff(&session).await?;

    Ok(StatusCode::NO_CONTENT)
}
