//! Admin order types.

use chrono::{DateTime, Utc};
use kawane_core::{
    OrderId, OrderStatus, PaymentMethod, PaymentStatus, Price, ProductId, UserId,
};
use serde::{Deserialize, Serialize};

use super::shipment::Shipment;

/// An order as seen from the back-office.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOrder {
    pub id: OrderId,
    pub order_number: String,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
    pub customer: CustomerRef,
    pub items: Vec<AdminOrderItem>,
    pub shipping_address: ShippingAddress,
    pub subtotal: Price,
    pub shipping_fee: Price,
    pub total_amount: Price,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub shipment: Option<Shipment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Compact customer reference carried on orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRef {
    #[serde(default)]
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
}

/// A purchased line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Price,
    pub line_total: Price,
}

/// Shipping destination captured at checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub recipient_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
}

/// Filters accepted by the order list endpoint.
#[derive(Debug, Default, Clone)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub query: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Render an enum's serde wire name (e.g. `OUT_FOR_DELIVERY`) for a query string.
fn wire_name<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(String::from))
        .unwrap_or_default()
}

impl OrderFilter {
    /// Render as backend query parameters.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(status) = self.status {
            query.push(("status", wire_name(&status)));
        }
        if let Some(payment) = self.payment_status {
            query.push(("paymentStatus", wire_name(&payment)));
        }
        if let Some(q) = self.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            query.push(("q", q.to_string()));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("perPage", per_page.to_string()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_filter_query() {
        let filter = OrderFilter {
            status: Some(OrderStatus::Pending),
            payment_status: None,
            query: Some("KWN-2025".to_string()),
            page: Some(1),
            per_page: None,
        };
        let query = filter.to_query();
        assert!(query.contains(&("status", "PENDING".to_string())));
        assert!(query.contains(&("q", "KWN-2025".to_string())));
        assert!(!query.iter().any(|(k, _)| *k == "paymentStatus"));
    }
}
