//! Authentication route handlers.
//!
//! Credentials are exchanged with the backend for a bearer token; the token
//! and a compact user mirror live in the session until logout.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use kawane_core::Email;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::api::types::RegisterRequest;
use crate::error::{AppError, Result, clear_sentry_user, set_sentry_user};
use crate::middleware::{clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response for successful login/register/refresh.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: CurrentUser,
}

/// Minimum password length enforced before the backend sees the request.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Create a new customer account and log it in.
#[instrument(skip(state, session, form))]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<RegisterForm>,
) -> Result<Json<SessionResponse>> {
    if form.name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }
    if form.password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    let email = Email::parse(&form.email)
        .map_err(|e| AppError::BadRequest(format!("invalid email: {e}")))?;

    let auth = state
        .api()
        .register(&RegisterRequest {
            name: form.name.trim().to_string(),
            email,
            password: form.password,
        })
        .await?;

    establish_session(&session, &auth.user, &auth.token).await?;

    Ok(Json(SessionResponse {
        user: CurrentUser::from(&auth.user),
    }))
}

/// Exchange credentials for a session.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<LoginForm>,
) -> Result<Json<SessionResponse>> {
    let email = Email::parse(&form.email)
        .map_err(|e| AppError::BadRequest(format!("invalid email: {e}")))?;

    let auth = state.api().login(email.as_str(), &form.password).await?;

    establish_session(&session, &auth.user, &auth.token).await?;
    tracing::info!(user_id = %auth.user.id, "User logged in");

    Ok(Json(SessionResponse {
        user: CurrentUser::from(&auth.user),
    }))
}

/// Destroy the session and revoke the token server-side.
#[instrument(skip(state, session))]
pub async fn logout(State(state): State<AppState>, session: Session) -> Result<impl IntoResponse> {
    if let Some(token) = session
        .get::<String>(crate::models::session_keys::AUTH_TOKEN)
        .await
        .ok()
        .flatten()
        && let Err(e) = state.api().logout(&token).await
    {
        // Best-effort revocation; the session is destroyed regardless
        tracing::warn!("Backend logout failed: {e}");
    }

    clear_current_user(&session).await?;
    clear_sentry_user();

    Ok(StatusCode::NO_CONTENT)
}

/// Refresh the bearer token held in the session.
#[instrument(skip(state, session))]
pub async fn refresh(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<SessionResponse>> {
    let token: String = session
        .get(crate::models::session_keys::AUTH_TOKEN)
        .await
        .ok()
        .flatten()
        .ok_or_else(|| AppError::Unauthorized("no active session".to_string()))?;

    let auth = state.api().refresh(&token).await?;
    establish_session(&session, &auth.user, &auth.token).await?;

    Ok(Json(SessionResponse {
        user: CurrentUser::from(&auth.user),
    }))
}

/// Store the authenticated user in the session and tag Sentry.
async fn establish_session(
    session: &Session,
    user: &crate::api::types::User,
    token: &str,
) -> Result<()> {
    // Rotate the session ID on privilege change (fixation protection)
    session.cycle_id().await?;

    let current = CurrentUser::from(user);
    set_current_user(session, &current, token).await?;
    set_sentry_user(&user.id, Some(user.email.as_str()));

    Ok(())
}
