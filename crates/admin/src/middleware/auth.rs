//! Authentication extractors for the admin panel.
//!
//! Two tiers mirror the backend role model: `RequireStaff` admits Staff and
//! Admin roles, `RequireAdmin` admits Admin only (user management and
//! destructive CRUD).

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tower_sessions::Session;

use crate::models::{CurrentStaff, session_keys};

/// An authenticated back-office session: the staff mirror plus the bearer
/// token used for user-attributed backend calls.
#[derive(Debug, Clone)]
pub struct StaffSession {
    pub staff: CurrentStaff,
    pub token: String,
}

/// Extractor that requires a logged-in staff member (Staff or Admin role).
///
/// # Example
///
/// ```rust,ignore
/// async fn orders(RequireStaff(session): RequireStaff) -> impl IntoResponse {
///     format!("orders viewed by {}", session.staff.name)
/// }
/// ```
pub struct RequireStaff(pub StaffSession);

/// Extractor that requires the Admin role.
pub struct RequireAdmin(pub StaffSession);

/// Rejection returned when back-office authentication fails.
pub enum StaffAuthRejection {
    /// No valid staff session.
    Unauthorized,
    /// Staff session present but lacking the required role.
    Forbidden,
}

impl IntoResponse for StaffAuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": { "message": "Staff login required" } })),
            )
                .into_response(),
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                Json(json!({ "error": { "message": "Only admins can access this resource" } })),
            )
                .into_response(),
        }
    }
}

/// Pull the staff session out of the request, if present.
async fn staff_session(parts: &Parts) -> Option<StaffSession> {
    let session = parts.extensions.get::<Session>()?;

    let staff: CurrentStaff = session
        .get(session_keys::CURRENT_STAFF)
        .await
        .ok()
        .flatten()?;
    let token: String = session
        .get(session_keys::STAFF_TOKEN)
        .await
        .ok()
        .flatten()?;

    Some(StaffSession { staff, token })
}

impl<S> FromRequestParts<S> for RequireStaff
where
    S: Send + Sync,
{
    type Rejection = StaffAuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = staff_session(parts)
            .await
            .ok_or(StaffAuthRejection::Unauthorized)?;

        // Session role should always pass this; the check guards against a
        // role downgrade that happened after login.
        if !session.staff.role.can_access_admin() {
            return Err(StaffAuthRejection::Forbidden);
        }

        Ok(Self(session))
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = StaffAuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = staff_session(parts)
            .await
            .ok_or(StaffAuthRejection::Unauthorized)?;

        if !session.staff.role.can_manage_users() {
            return Err(StaffAuthRejection::Forbidden);
        }

        Ok(Self(session))
    }
}

/// Store the logged-in staff member and bearer token in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_staff(
    session: &Session,
    staff: &CurrentStaff,
    token: &str,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_STAFF, staff).await?;
    session.insert(session_keys::STAFF_TOKEN, token).await
}

/// Clear the logged-in staff member from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_staff(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentStaff>(session_keys::CURRENT_STAFF)
        .await?;
    session.remove::<String>(session_keys::STAFF_TOKEN).await?;
    Ok(())
}
