//! Account route handlers.

use axum::{Json, extract::State};
use tower_sessions::Session;
use tracing::instrument;

use crate::api::types::User;
use crate::error::Result;
use crate::middleware::{RequireAuth, set_current_user};
use crate::models::CurrentUser;
use crate::state::AppState;

/// Current user profile, fetched fresh from the backend.
///
/// The session mirror is refreshed from the response so role or
/// verification changes propagate without re-login.
#[instrument(skip(state, session, auth))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(auth): RequireAuth,
) -> Result<Json<User>> {
    let user = state.api().me(&auth.token).await?;

    let refreshed = CurrentUser::from(&user);
    set_current_user(&session, &refreshed, &auth.token).await?;

    Ok(Json(user))
}
