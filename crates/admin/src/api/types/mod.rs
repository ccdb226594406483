//! Wire types for the Kawane backend admin endpoints.
//!
//! Everything here is a transient mirror of backend state; the backend owns
//! all transitions and validation, these types only shape the JSON.

pub mod analytics;
pub mod content;
pub mod deal;
pub mod inventory;
pub mod notification;
pub mod order;
pub mod product;
pub mod search;
pub mod shipment;
pub mod user;

pub use analytics::{DailyRevenue, SalesSummary};
pub use content::{
    AdminBanner, AdminLookbookPhoto, BannerUpdate, LookbookPhotoUpdate, NewBanner,
    NewLookbookPhoto,
};
pub use deal::{AdminDeal, DealUpdate, NewDeal};
pub use inventory::{InventoryItem, StockAdjustment};
pub use notification::Notification;
pub use order::{AdminOrder, AdminOrderItem, CustomerRef, OrderFilter, ShippingAddress};
pub use product::{AdminProduct, NewProduct, ProductUpdate};
pub use search::{SearchHit, SearchHitKind};
pub use shipment::{NewShipment, Shipment};
pub use user::AdminUser;

use serde::{Deserialize, Serialize};

/// One page of a backend list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
}

impl<T> Page<T> {
    /// An empty first page.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            per_page: 0,
        }
    }

    /// Whether the page carries no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Common list-endpoint query parameters.
#[derive(Debug, Default, Clone)]
pub struct ListParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub query: Option<String>,
}

impl ListParams {
    /// Render as backend query parameters.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("perPage", per_page.to_string()));
        }
        if let Some(q) = self.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            query.push(("q", q.to_string()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_skips_blank_query() {
        let params = ListParams {
            page: Some(2),
            per_page: None,
            query: Some("   ".to_string()),
        };
        let query = params.to_query();
        assert_eq!(query, vec![("page", "2".to_string())]);
    }

    #[test]
    fn test_empty_page() {
        let page: Page<u8> = Page::empty();
        assert!(page.is_empty());
        assert_eq!(page.total, 0);
    }
}
