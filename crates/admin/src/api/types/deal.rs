//! Deal types.

use chrono::{DateTime, Utc};
use kawane_core::{DealId, DealType, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A discount campaign as seen from the back-office.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDeal {
    pub id: DealId,
    pub title: String,
    #[serde(rename = "type")]
    pub deal_type: DealType,
    /// Percentage (0-100) for percentage/flash deals, rupiah for fixed.
    pub value: Decimal,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub is_active: bool,
    #[serde(default)]
    pub product_ids: Vec<ProductId>,
}

/// Payload for creating a deal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeal {
    pub title: String,
    #[serde(rename = "type")]
    pub deal_type: DealType,
    pub value: Decimal,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(default)]
    pub product_ids: Vec<ProductId>,
}

/// Partial update payload for a deal; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_ids: Option<Vec<ProductId>>,
}

/// Validate a new deal before it reaches the backend.
///
/// Percentage and flash-sale values must sit in `(0, 100]`; fixed amounts
/// must be positive; the date range must be ordered.
///
/// # Errors
///
/// Returns a human-readable rejection message.
pub fn validate_new_deal(deal: &NewDeal) -> Result<(), String> {
    if deal.title.trim().is_empty() {
        return Err("title is required".to_string());
    }

    match deal.deal_type {
        DealType::Percentage | DealType::FlashSale => {
            if deal.value <= Decimal::ZERO || deal.value > Decimal::from(100) {
                return Err(format!(
                    "percentage value must be between 0 and 100 (got {})",
                    deal.value
                ));
            }
        }
        DealType::FixedAmount => {
            if deal.value <= Decimal::ZERO {
                return Err("fixed discount must be positive".to_string());
            }
        }
    }

    if deal.ends_at <= deal.starts_at {
        return Err("deal must end after it starts".to_string());
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn base_deal() -> NewDeal {
        NewDeal {
            title: "Flash Friday".to_string(),
            deal_type: DealType::FlashSale,
            value: Decimal::from(40),
            starts_at: Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap(),
            ends_at: Utc.with_ymd_and_hms(2025, 8, 2, 0, 0, 0).unwrap(),
            product_ids: vec![ProductId::new("ckp1")],
        }
    }

    #[test]
    fn test_valid_deal_passes() {
        assert!(validate_new_deal(&base_deal()).is_ok());
    }

    #[test]
    fn test_percentage_out_of_range_rejected() {
        let mut deal = base_deal();
        deal.value = Decimal::from(120);
        assert!(validate_new_deal(&deal).is_err());

        deal.value = Decimal::ZERO;
        assert!(validate_new_deal(&deal).is_err());
    }

    #[test]
    fn test_inverted_date_range_rejected() {
        let mut deal = base_deal();
        deal.ends_at = deal.starts_at;
        assert!(validate_new_deal(&deal).is_err());
    }

    #[test]
    fn test_fixed_amount_must_be_positive() {
        let mut deal = base_deal();
        deal.deal_type = DealType::FixedAmount;
        deal.value = Decimal::from(-5000);
        assert!(validate_new_deal(&deal).is_err());

        deal.value = Decimal::from(50_000);
        assert!(validate_new_deal(&deal).is_ok());
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut deal = base_deal();
        deal.title = "  ".to_string();
        assert!(validate_new_deal(&deal).is_err());
    }
}
