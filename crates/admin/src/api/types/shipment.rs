//! Shipment types.

use chrono::{DateTime, Utc};
use kawane_core::{OrderId, ShipmentId, ShipmentStatus};
use serde::{Deserialize, Serialize};

/// A shipment attached to an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub id: ShipmentId,
    pub order_id: OrderId,
    pub order_number: String,
    pub courier: String,
    pub tracking_number: String,
    pub status: ShipmentStatus,
    #[serde(default)]
    pub shipped_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub delivered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a shipment for an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShipment {
    pub order_id: OrderId,
    pub courier: String,
    pub tracking_number: String,
}
