//! Integration tests for order affordance gating and deal pricing.

use chrono::{TimeZone, Utc};
use kawane_core::{OrderStatus, Price, UserRole};
use rust_decimal::Decimal;

use kawane_admin::api::types::deal::{NewDeal, validate_new_deal};
use kawane_core::DealType;

// =============================================================================
// Cancel Affordance
// =============================================================================

#[test]
fn test_cancel_only_offered_before_fulfillment() {
    let cancellable = [
        OrderStatus::Checkout,
        OrderStatus::Pending,
        OrderStatus::Processing,
    ];
    let locked = [
        OrderStatus::Paid,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
        OrderStatus::Refunded,
    ];

    for status in cancellable {
        assert!(status.is_cancellable(), "{status:?} should be cancellable");
    }
    for status in locked {
        assert!(!status.is_cancellable(), "{status:?} should be locked");
    }
}

// =============================================================================
// Role Tiers
// =============================================================================

#[test]
fn test_back_office_role_tiers() {
    assert!(!UserRole::Customer.can_access_admin());
    assert!(UserRole::Staff.can_access_admin());
    assert!(UserRole::Admin.can_access_admin());

    // Only the Admin tier manages users and destructive CRUD
    assert!(!UserRole::Customer.can_manage_users());
    assert!(!UserRole::Staff.can_manage_users());
    assert!(UserRole::Admin.can_manage_users());
}

// =============================================================================
// Deal Pricing
// =============================================================================

#[test]
fn test_percentage_deal_discounts_display_price() {
    let price = Price::from_rupiah(400_000);
    assert_eq!(
        price.apply_percentage(Decimal::from(25)),
        Price::from_rupiah(300_000)
    );
}

#[test]
fn test_fixed_deal_never_goes_negative() {
    let price = Price::from_rupiah(100_000);
    assert_eq!(
        price.apply_fixed(Price::from_rupiah(250_000)),
        Price::zero()
    );
}

#[test]
fn test_deal_validation_contract() {
    let deal = NewDeal {
        title: "Payday Sale".to_string(),
        deal_type: DealType::Percentage,
        value: Decimal::from(30),
        starts_at: Utc.with_ymd_and_hms(2025, 8, 25, 0, 0, 0).single().expect("valid"),
        ends_at: Utc.with_ymd_and_hms(2025, 8, 28, 0, 0, 0).single().expect("valid"),
        product_ids: Vec::new(),
    };
    assert!(validate_new_deal(&deal).is_ok());

    let mut bad_value = deal.clone();
    bad_value.value = Decimal::from(150);
    assert!(validate_new_deal(&bad_value).is_err());

    let mut bad_range = deal;
    bad_range.ends_at = bad_range.starts_at;
    assert!(validate_new_deal(&bad_range).is_err());
}
