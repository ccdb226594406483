//! Checkout route handler.
//!
//! Shipping fields are validated before anything reaches the backend: a
//! submission with any empty field is rejected with the list of missing
//! fields, mirroring the storefront form contract.

use axum::{Json, extract::State};
use kawane_core::{Email, PaymentMethod};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::api::types::{CheckoutRequest, CheckoutResponse};
use crate::error::{AppError, Result};
use crate::middleware::OptionalAuth;
use crate::models::session_keys;
use crate::state::AppState;

/// Checkout form submission.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    #[serde(default)]
    pub recipient_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub postal_code: String,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Validate a checkout form into a backend request.
///
/// # Errors
///
/// Returns `AppError::Validation` naming every empty shipping field, or
/// `AppError::BadRequest` for malformed phone/email values.
pub fn validate_checkout(form: CheckoutForm) -> Result<CheckoutRequest> {
    let mut missing = Vec::new();

    let required = [
        ("recipientName", form.recipient_name.trim()),
        ("phone", form.phone.trim()),
        ("email", form.email.trim()),
        ("address", form.address.trim()),
        ("city", form.city.trim()),
        ("province", form.province.trim()),
        ("postalCode", form.postal_code.trim()),
    ];
    for (field, value) in required {
        if value.is_empty() {
            missing.push(field.to_string());
        }
    }

    if !missing.is_empty() {
        return Err(AppError::Validation(missing));
    }

    let phone = form.phone.trim();
    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || c == '+' || c == '-' || c == ' ')
    {
        return Err(AppError::BadRequest(
            "phone may only contain digits, spaces, + and -".to_string(),
        ));
    }

    let email = Email::parse(&form.email)
        .map_err(|e| AppError::BadRequest(format!("invalid email: {e}")))?;

    Ok(CheckoutRequest {
        recipient_name: form.recipient_name.trim().to_string(),
        phone: phone.to_string(),
        email,
        address: form.address.trim().to_string(),
        city: form.city.trim().to_string(),
        province: form.province.trim().to_string(),
        postal_code: form.postal_code.trim().to_string(),
        payment_method: form.payment_method,
        notes: form.notes.filter(|n| !n.trim().is_empty()),
    })
}

/// Submit a checkout.
///
/// Requires a cart in the session; the cart token is dropped from the
/// session once the backend accepts the order.
#[instrument(skip(state, session, auth, form))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    OptionalAuth(auth): OptionalAuth,
    Json(form): Json<CheckoutForm>,
) -> Result<Json<CheckoutResponse>> {
    let Some(cart_token) = session
        .get::<String>(session_keys::CART_TOKEN)
        .await
        .ok()
        .flatten()
    else {
        return Err(AppError::BadRequest("your cart is empty".to_string()));
    };

    let request = validate_checkout(form)?;

    let bearer = auth.map(|a| a.token);
    let response = state
        .api()
        .checkout(&cart_token, bearer.as_deref(), &request)
        .await?;

    // The backend consumed the cart; forget its token
    session.remove::<String>(session_keys::CART_TOKEN).await?;

    tracing::info!(order_number = %response.order_number, "Checkout completed");

    Ok(Json(response))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            recipient_name: "Dewi Lestari".to_string(),
            phone: "+62 812-0001-1122".to_string(),
            email: "dewi@kawane.studio".to_string(),
            address: "Jl. Kenanga 5".to_string(),
            city: "Bandung".to_string(),
            province: "Jawa Barat".to_string(),
            postal_code: "40115".to_string(),
            payment_method: PaymentMethod::Midtrans,
            notes: None,
        }
    }

    #[test]
    fn test_valid_form_passes() {
        let request = validate_checkout(valid_form()).unwrap();
        assert_eq!(request.city, "Bandung");
        assert_eq!(request.email.as_str(), "dewi@kawane.studio");
    }

    #[test]
    fn test_empty_field_blocks_submission() {
        let form = CheckoutForm {
            city: String::new(),
            ..valid_form()
        };
        match validate_checkout(form) {
            Err(AppError::Validation(fields)) => assert_eq!(fields, vec!["city"]),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_whitespace_only_field_blocks_submission() {
        let form = CheckoutForm {
            address: "   ".to_string(),
            postal_code: "\t".to_string(),
            ..valid_form()
        };
        match validate_checkout(form) {
            Err(AppError::Validation(fields)) => {
                assert_eq!(fields, vec!["address", "postalCode"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_phone_rejected() {
        let form = CheckoutForm {
            phone: "call me maybe".to_string(),
            ..valid_form()
        };
        assert!(matches!(
            validate_checkout(form),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_bad_email_rejected() {
        let form = CheckoutForm {
            email: "dewi-at-kawane".to_string(),
            ..valid_form()
        };
        assert!(matches!(
            validate_checkout(form),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_blank_notes_dropped() {
        let form = CheckoutForm {
            notes: Some("  ".to_string()),
            ..valid_form()
        };
        let request = validate_checkout(form).unwrap();
        assert!(request.notes.is_none());
    }
}
