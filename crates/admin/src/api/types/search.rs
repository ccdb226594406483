//! Global search wire types.

use serde::{Deserialize, Serialize};

/// What kind of entity a search hit refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchHitKind {
    Order,
    Product,
    User,
    Notification,
}

/// One row of the flat result list returned by the backend search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SearchHitKind,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Back-office URL the hit links to.
    pub url: String,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_search_hit_deserializes_backend_shape() {
        let json = serde_json::json!({
            "id": "cko42",
            "type": "ORDER",
            "title": "KWN-2025-0042",
            "description": "2 items - Rp 650.000",
            "url": "/orders/cko42",
            "metadata": { "status": "PAID" }
        });

        let hit: SearchHit = serde_json::from_value(json).unwrap();
        assert_eq!(hit.kind, SearchHitKind::Order);
        assert_eq!(hit.title, "KWN-2025-0042");
    }
}
