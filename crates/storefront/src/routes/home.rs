//! Home payload route handler.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::api::types::{Banner, Deal, LookbookPhoto, Product};
use crate::api::{ProductListParams, types::ProductSort};
use crate::error::Result;
use crate::state::AppState;

/// How many featured products the homepage shows.
const FEATURED_COUNT: u32 = 8;

/// Everything the storefront homepage renders.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePayload {
    pub banners: Vec<Banner>,
    pub lookbook: Vec<LookbookPhoto>,
    pub deals: Vec<Deal>,
    pub featured: Vec<Product>,
}

/// Assemble the home payload.
///
/// Banners and lookbook photos keep their backend-curated order.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<Json<HomePayload>> {
    let featured_params = ProductListParams {
        per_page: Some(FEATURED_COUNT),
        sort: ProductSort::Newest,
        ..Default::default()
    };

    let (banners, lookbook, deals, featured) = tokio::try_join!(
        state.api().get_banners(),
        state.api().get_lookbook(),
        state.api().get_active_deals(),
        state.api().get_products(&featured_params),
    )?;

    Ok(Json(HomePayload {
        banners,
        lookbook,
        deals,
        featured: featured.items,
    }))
}
