//! Product catalog route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use kawane_core::ProductId;
use serde::Deserialize;
use tracing::instrument;

use crate::api::ProductListParams;
use crate::api::types::{Category, Product, ProductPage, ProductSort};
use crate::error::Result;
use crate::state::AppState;

/// Maximum page size the storefront will request from the backend.
const MAX_PER_PAGE: u32 = 48;

/// Query parameters accepted by the product listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub category: Option<String>,
    pub sort: Option<String>,
    pub q: Option<String>,
}

impl From<ListQuery> for ProductListParams {
    fn from(query: ListQuery) -> Self {
        Self {
            page: query.page,
            per_page: query.per_page.map(|n| n.clamp(1, MAX_PER_PAGE)),
            category: query.category.filter(|c| !c.is_empty()),
            sort: query.sort.as_deref().map(ProductSort::parse).unwrap_or_default(),
            query: query.q.filter(|q| !q.trim().is_empty()),
        }
    }
}

/// Paged product listing.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ProductPage>> {
    let params = ProductListParams::from(query);
    let page = state.api().get_products(&params).await?;
    Ok(Json(page))
}

/// Product detail.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let product = state.api().get_product(&ProductId::new(id)).await?;
    Ok(Json(product))
}

/// Category list.
#[instrument(skip(state))]
pub async fn categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = state.api().get_categories().await?;
    Ok(Json(categories))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_clamps_page_size() {
        let query = ListQuery {
            page: Some(1),
            per_page: Some(500),
            category: None,
            sort: None,
            q: None,
        };
        let params = ProductListParams::from(query);
        assert_eq!(params.per_page, Some(MAX_PER_PAGE));
    }

    #[test]
    fn test_list_query_drops_blank_filters() {
        let query = ListQuery {
            page: None,
            per_page: None,
            category: Some(String::new()),
            sort: Some("price_desc".to_string()),
            q: Some("   ".to_string()),
        };
        let params = ProductListParams::from(query);
        assert!(params.category.is_none());
        assert!(params.query.is_none());
        assert_eq!(params.sort, ProductSort::PriceDesc);
    }
}
