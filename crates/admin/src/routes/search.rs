//! Global search route handler.
//!
//! The aggregator debounces rapid queries and discards superseded
//! responses; a superseded submission answers 204 so the palette simply
//! waits for the surviving request.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequireStaff;
use crate::services::{SearchBuckets, SearchOutcome};
use crate::state::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<u32>,
}

/// Grouped search response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    #[serde(flatten)]
    pub buckets: SearchBuckets,
}

/// Global search across orders, products, users, and notifications.
#[instrument(skip(state, _staff))]
pub async fn global(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(query): Query<SearchQuery>,
) -> Result<Response> {
    match state.search().query(&query.q, query.limit).await {
        SearchOutcome::Results(buckets) => Ok(Json(SearchResponse {
            query: query.q.trim().to_string(),
            buckets,
        })
        .into_response()),
        SearchOutcome::Superseded => Ok(StatusCode::NO_CONTENT.into_response()),
        // The palette renders the message inline next to the input
        SearchOutcome::Failed(message) => Ok((
            StatusCode::BAD_GATEWAY,
            Json(serde_json::json!({ "error": { "message": message } })),
        )
            .into_response()),
    }
}
