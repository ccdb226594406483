//! Authentication extractors for the storefront.
//!
//! The session stores the backend-issued bearer token plus a compact user
//! mirror. These extractors pull both out for handlers that need them.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tower_sessions::Session;

use crate::models::{CurrentUser, session_keys};

/// An authenticated storefront session: the user mirror plus the bearer
/// token used for user-scoped backend calls.
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub user: CurrentUser,
    pub token: String,
}

/// Extractor that requires a logged-in user.
///
/// Returns 401 with a JSON error envelope when the session has no user.
///
/// # Example
///
/// ```rust,ignore
/// async fn orders(RequireAuth(auth): RequireAuth) -> impl IntoResponse {
///     format!("orders for {}", auth.user.name)
/// }
/// ```
pub struct RequireAuth(pub Authenticated);

/// Rejection returned when authentication is required but missing.
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": { "message": "Please log in to continue" } })),
        )
            .into_response()
    }
}

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts.extensions.get::<Session>().ok_or(AuthRejection)?;

        let user: CurrentUser = session
            .get(session_keys::CURRENT_USER)
            .await
            .ok()
            .flatten()
            .ok_or(AuthRejection)?;

        let token: String = session
            .get(session_keys::AUTH_TOKEN)
            .await
            .ok()
            .flatten()
            .ok_or(AuthRejection)?;

        Ok(Self(Authenticated { user, token }))
    }
}

/// Extractor that optionally gets the current user.
///
/// Unlike `RequireAuth`, this does not reject the request when no user is
/// logged in.
pub struct OptionalAuth(pub Option<Authenticated>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(session) = parts.extensions.get::<Session>() else {
            return Ok(Self(None));
        };

        let user: Option<CurrentUser> = session
            .get(session_keys::CURRENT_USER)
            .await
            .ok()
            .flatten();
        let token: Option<String> = session.get(session_keys::AUTH_TOKEN).await.ok().flatten();

        Ok(Self(match (user, token) {
            (Some(user), Some(token)) => Some(Authenticated { user, token }),
            _ => None,
        }))
    }
}

/// Store the logged-in user and bearer token in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
    token: &str,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_USER, user).await?;
    session.insert(session_keys::AUTH_TOKEN, token).await
}

/// Clear the logged-in user and bearer token from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove::<CurrentUser>(session_keys::CURRENT_USER).await?;
    session.remove::<String>(session_keys::AUTH_TOKEN).await?;
    Ok(())
}
