//! Analytics route handlers.

use axum::{
    Json,
    extract::{Query, State},
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::api::types::{DailyRevenue, SalesSummary};
use crate::error::Result;
use crate::middleware::RequireStaff;
use crate::services::export::{CsvBuilder, csv_response};
use crate::state::AppState;

/// Default and maximum trailing windows.
const DEFAULT_DAYS: u32 = 30;
const MAX_DAYS: u32 = 365;

/// Analytics query parameters.
#[derive(Debug, Deserialize)]
pub struct AnalyticsQuery {
    pub days: Option<u32>,
}

impl AnalyticsQuery {
    fn days(&self) -> u32 {
        self.days.unwrap_or(DEFAULT_DAYS).clamp(1, MAX_DAYS)
    }
}

/// Analytics payload: summary plus per-day revenue rows.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsPayload {
    pub days: u32,
    pub summary: SalesSummary,
    pub daily: Vec<DailyRevenue>,
}

/// Sales summary and daily revenue for the trailing window.
#[instrument(skip(state, _staff))]
pub async fn show(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(query): Query<AnalyticsQuery>,
) -> Result<Json<AnalyticsPayload>> {
    let days = query.days();

    let (summary, daily) = tokio::try_join!(
        state.api().sales_summary(days),
        state.api().daily_revenue(days),
    )?;

    Ok(Json(AnalyticsPayload {
        days,
        summary,
        daily,
    }))
}

/// CSV export of daily revenue.
///
/// Returns 204 when the window holds no data.
#[instrument(skip(state, _staff))]
pub async fn export_csv(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(query): Query<AnalyticsQuery>,
) -> Result<Response> {
    let days = query.days();
    let daily = state.api().daily_revenue(days).await?;

    let mut csv = CsvBuilder::new(&["Date", "Orders", "Revenue (IDR)"]);
    for row in &daily {
        csv.push_row(&[
            row.date.to_string(),
            row.order_count.to_string(),
            row.revenue.amount().to_string(),
        ]);
    }

    Ok(csv_response(&format!("revenue-{days}d.csv"), csv))
}
