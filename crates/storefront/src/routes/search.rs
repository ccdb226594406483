//! Storefront product search route handler.
//!
//! A thin proxy over the backend search endpoint; the admin panel's global
//! search aggregator lives in the admin binary.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::api::types::Product;
use crate::error::Result;
use crate::state::AppState;

/// Default and maximum result counts.
const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<u32>,
}

/// Search results payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    pub products: Vec<Product>,
}

/// Search products by free text.
///
/// An empty or whitespace query short-circuits to empty results without a
/// backend call.
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>> {
    let q = query.q.trim().to_string();
    if q.is_empty() {
        return Ok(Json(SearchResponse {
            query: q,
            products: Vec::new(),
        }));
    }

    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let products = state.api().search_products(&q, limit).await?;

    Ok(Json(SearchResponse { query: q, products }))
}
