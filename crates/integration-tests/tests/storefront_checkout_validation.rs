//! Integration tests for the checkout validation contract.
//!
//! Submitting the checkout form with any shipping field empty must block
//! submission before anything reaches the backend.

use kawane_core::PaymentMethod;
use kawane_storefront::error::AppError;
use kawane_storefront::routes::checkout::{CheckoutForm, validate_checkout};

fn valid_form() -> CheckoutForm {
    serde_json::from_value(serde_json::json!({
        "recipientName": "Dewi Lestari",
        "phone": "+62 812-0001-1122",
        "email": "dewi@kawane.studio",
        "address": "Jl. Kenanga 5",
        "city": "Bandung",
        "province": "Jawa Barat",
        "postalCode": "40115",
        "paymentMethod": "MIDTRANS"
    }))
    .expect("valid form json")
}

#[test]
fn test_complete_form_passes() {
    let request = validate_checkout(valid_form()).expect("valid form");
    assert_eq!(request.recipient_name, "Dewi Lestari");
    assert_eq!(request.payment_method, PaymentMethod::Midtrans);
}

#[test]
fn test_each_missing_shipping_field_blocks_submission() {
    let fields = [
        "recipientName",
        "phone",
        "email",
        "address",
        "city",
        "province",
        "postalCode",
    ];

    for field in fields {
        let mut json = serde_json::json!({
            "recipientName": "Dewi Lestari",
            "phone": "+62 812-0001-1122",
            "email": "dewi@kawane.studio",
            "address": "Jl. Kenanga 5",
            "city": "Bandung",
            "province": "Jawa Barat",
            "postalCode": "40115",
            "paymentMethod": "WHATSAPP_MANUAL"
        });
        json[field] = serde_json::Value::String(String::new());

        let form: CheckoutForm = serde_json::from_value(json).expect("form json");
        match validate_checkout(form) {
            Err(AppError::Validation(missing)) => {
                assert_eq!(missing, vec![field.to_string()], "field: {field}");
            }
            other => panic!("{field}: expected validation error, got {other:?}"),
        }
    }
}

#[test]
fn test_all_fields_missing_lists_every_field() {
    let form: CheckoutForm = serde_json::from_value(serde_json::json!({
        "paymentMethod": "MIDTRANS"
    }))
    .expect("form json");

    match validate_checkout(form) {
        Err(AppError::Validation(missing)) => assert_eq!(missing.len(), 7),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_malformed_contact_details_rejected() {
    let mut form = valid_form();
    form.phone = "call me".to_string();
    assert!(matches!(
        validate_checkout(form),
        Err(AppError::BadRequest(_))
    ));

    let mut form = valid_form();
    form.email = "not-an-email".to_string();
    assert!(matches!(
        validate_checkout(form),
        Err(AppError::BadRequest(_))
    ));
}
