//! Inventory types.

use chrono::{DateTime, Utc};
use kawane_core::ProductId;
use serde::{Deserialize, Serialize};

/// Stock level row for the inventory screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub product_id: ProductId,
    pub product_name: String,
    #[serde(default)]
    pub sku: Option<String>,
    pub stock: u32,
    /// Below this the row shows up on the low-stock report.
    pub low_stock_threshold: u32,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Whether this row belongs on the low-stock report.
    #[must_use]
    pub const fn is_low_stock(&self) -> bool {
        self.stock <= self.low_stock_threshold
    }
}

/// A manual stock adjustment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAdjustment {
    /// Signed change; negative values deduct stock.
    pub delta: i64,
    /// Why the adjustment happened (stock take, damage, correction).
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_is_low_stock() {
        let item = InventoryItem {
            product_id: ProductId::new("ckp1"),
            product_name: "Linen shirt".to_string(),
            sku: None,
            stock: 3,
            low_stock_threshold: 5,
            updated_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).single().expect("valid"),
        };
        assert!(item.is_low_stock());

        let healthy = InventoryItem { stock: 12, ..item };
        assert!(!healthy.is_low_stock());
    }
}
