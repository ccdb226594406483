//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use kawane_core::ProductId;
use serde::Deserialize;
use tracing::instrument;

use crate::api::types::{AdminProduct, ListParams, NewProduct, Page, ProductUpdate};
use crate::error::{AppError, Result};
use crate::middleware::{RequireAdmin, RequireStaff};
use crate::services::export::{CsvBuilder, csv_response};
use crate::state::AppState;

/// How many products a CSV export covers at most.
const EXPORT_LIMIT: u32 = 1000;

/// Query parameters accepted by list endpoints.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub q: Option<String>,
}

impl From<ListQuery> for ListParams {
    fn from(query: ListQuery) -> Self {
        Self {
            page: query.page,
            per_page: query.per_page,
            query: query.q,
        }
    }
}

/// Product list.
#[instrument(skip(state, _staff))]
pub async fn index(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<AdminProduct>>> {
    let page = state.api().list_products(&ListParams::from(query)).await?;
    Ok(Json(page))
}

/// Product detail.
#[instrument(skip(state, _staff))]
pub async fn show(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<String>,
) -> Result<Json<AdminProduct>> {
    let product = state.api().get_product(&ProductId::new(id)).await?;
    Ok(Json(product))
}

/// Create a product.
#[instrument(skip(state, staff, product))]
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(product): Json<NewProduct>,
) -> Result<(StatusCode, Json<AdminProduct>)> {
    if product.name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }
    if product.price.is_zero() {
        return Err(AppError::BadRequest("price must be positive".to_string()));
    }

    let created = state.api().create_product(&product).await?;
    tracing::info!(
        product_id = %created.id,
        staff = %staff.staff.name,
        "Product created"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// Apply a partial update to a product.
#[instrument(skip(state, staff, update))]
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<String>,
    Json(update): Json<ProductUpdate>,
) -> Result<Json<AdminProduct>> {
    if update.is_noop() {
        return Err(AppError::BadRequest("no fields to update".to_string()));
    }

    let product_id = ProductId::new(id);
    let updated = state.api().update_product(&product_id, &update).await?;
    tracing::info!(
        product_id = %product_id,
        staff = %staff.staff.name,
        "Product updated"
    );

    Ok(Json(updated))
}

/// Delete a product (Admin role only).
#[instrument(skip(state, admin))]
pub async fn destroy(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let product_id = ProductId::new(id);
    state.api().delete_product(&product_id).await?;
    tracing::info!(
        product_id = %product_id,
        staff = %admin.staff.name,
        "Product deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}

/// CSV export of the product list.
///
/// Returns 204 when there is nothing to export.
#[instrument(skip(state, _staff))]
pub async fn export_csv(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(query): Query<ListQuery>,
) -> Result<Response> {
    let params = ListParams {
        page: Some(1),
        per_page: Some(EXPORT_LIMIT),
        query: query.q,
    };
    let page = state.api().list_products(&params).await?;

    let mut csv = CsvBuilder::new(&[
        "ID",
        "Name",
        "Category",
        "Price (IDR)",
        "Stock",
        "Published",
    ]);
    for product in &page.items {
        csv.push_row(&[
            product.id.to_string(),
            product.name.clone(),
            product.category_name.clone().unwrap_or_default(),
            product.price.amount().to_string(),
            product.stock.to_string(),
            product.is_published.to_string(),
        ]);
    }

    Ok(csv_response("products.csv", csv))
}
