//! Analytics types.

use chrono::NaiveDate;
use kawane_core::Price;
use serde::{Deserialize, Serialize};

/// Aggregate sales figures for a date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub total_revenue: Price,
    pub order_count: u64,
    pub paid_order_count: u64,
    pub average_order_value: Price,
    pub new_customer_count: u64,
}

/// One day of revenue, row-per-day for charts and CSV export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub order_count: u64,
    pub revenue: Price,
}
