//! Wire types for the Kawane backend storefront endpoints.
//!
//! Every struct here is a transient mirror of backend state: created and
//! mutated on the backend, deserialized on fetch, discarded on the next
//! response. The backend speaks camelCase JSON; status enums use their
//! SCREAMING_SNAKE_CASE wire form from `kawane-core`.

use chrono::{DateTime, Utc};
use kawane_core::{
    BannerId, CartItemId, CategoryId, DealId, DealType, Email, LookbookPhotoId, OrderId,
    OrderStatus, PaymentMethod, PaymentStatus, Price, ProductId, ShipmentStatus, UserId, UserRole,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog
// =============================================================================

/// A product as shown on the storefront.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub price: Price,
    pub stock: u32,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// Deal currently attached to this product, if any.
    #[serde(default)]
    pub deal: Option<Deal>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Whether the product can currently be added to a cart.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.stock > 0
    }

    /// Price after applying the attached deal, if it is live.
    #[must_use]
    pub fn effective_price(&self, now: DateTime<Utc>) -> Price {
        match &self.deal {
            Some(deal) if deal.is_live(now) => deal.apply(self.price),
            _ => self.price,
        }
    }
}

/// A product image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
}

/// A time-boxed discount campaign attachable to products.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: DealId,
    pub title: String,
    #[serde(rename = "type")]
    pub deal_type: DealType,
    /// Percentage (0-100) for percentage/flash deals, rupiah for fixed.
    pub value: Decimal,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub is_active: bool,
}

impl Deal {
    /// Whether the deal applies at `now`.
    #[must_use]
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.starts_at <= now && now <= self.ends_at
    }

    /// Apply this deal to a list price.
    #[must_use]
    pub fn apply(&self, price: Price) -> Price {
        match self.deal_type {
            DealType::Percentage | DealType::FlashSale => price.apply_percentage(self.value),
            DealType::FixedAmount => price.apply_fixed(Price::new(self.value)),
        }
    }
}

/// One page of products.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
}

impl ProductPage {
    /// Number of pages for the current page size.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.per_page))
    }
}

/// Sort order for product listings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    Name,
}

impl ProductSort {
    /// Parse from a URL parameter value.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "price_asc" => Self::PriceAsc,
            "price_desc" => Self::PriceDesc,
            "name" => Self::Name,
            _ => Self::Newest,
        }
    }

    /// Convert to the backend query parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::Name => "name",
        }
    }
}

/// A homepage hero banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: BannerId,
    pub title: String,
    pub image_url: String,
    #[serde(default)]
    pub link_url: Option<String>,
    pub position: u32,
    pub is_active: bool,
}

/// A curated lookbook photo shown on the homepage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookbookPhoto {
    pub id: LookbookPhotoId,
    #[serde(default)]
    pub title: Option<String>,
    pub image_url: String,
    pub position: u32,
}

// =============================================================================
// Cart
// =============================================================================

/// Server-side cart, mirrored per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Opaque cart token issued by the backend; stored in the session.
    pub token: String,
    pub items: Vec<CartItem>,
    pub subtotal: Price,
    pub item_count: u32,
}

impl Cart {
    /// An empty cart placeholder for sessions without a backend cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            token: String::new(),
            items: Vec::new(),
            subtotal: Price::zero(),
            item_count: 0,
        }
    }
}

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    pub product: CartProduct,
    pub quantity: u32,
    pub line_total: Price,
}

/// Slim product reference carried on cart lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub image_url: Option<String>,
    pub stock: u32,
}

// =============================================================================
// Checkout & Orders
// =============================================================================

/// Checkout submission sent to the backend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub recipient_name: String,
    pub phone: String,
    pub email: Email,
    pub address: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// What the backend returns after a successful checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub order_number: String,
    pub total_amount: Price,
    pub payment: PaymentInstruction,
}

/// Payment handle: Midtrans redirect or WhatsApp deep link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum PaymentInstruction {
    Midtrans { redirect_url: String },
    Whatsapp { whatsapp_url: String },
}

/// Compact order row for the account order list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: OrderId,
    pub order_number: String,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub total_amount: Price,
    pub item_count: u32,
    pub created_at: DateTime<Utc>,
}

/// Full order detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub order_number: String,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
    pub items: Vec<OrderItem>,
    pub shipping_address: ShippingAddress,
    pub subtotal: Price,
    pub shipping_fee: Price,
    pub total_amount: Price,
    #[serde(default)]
    pub shipment: Option<ShipmentInfo>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A purchased line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
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

/// Courier handoff details attached to an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentInfo {
    pub courier: String,
    pub tracking_number: String,
    pub status: ShipmentStatus,
}

/// Public order-tracking payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedOrder {
    pub order_number: String,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub timeline: Vec<TrackingEvent>,
    #[serde(default)]
    pub shipment: Option<ShipmentInfo>,
}

/// One entry of the order status timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
    pub status: OrderStatus,
    pub at: DateTime<Utc>,
    #[serde(default)]
    pub note: Option<String>,
}

// =============================================================================
// Auth
// =============================================================================

/// A logged-in user as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub role: UserRole,
    pub is_verified: bool,
}

/// Bearer token + user returned by login/register/refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

/// Registration submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: Email,
    pub password: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_deal(deal_type: DealType, value: i64, active: bool) -> Deal {
        Deal {
            id: DealId::new("ckd1"),
            title: "Mid-year sale".to_string(),
            deal_type,
            value: Decimal::from(value),
            starts_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
            ends_at: Utc.with_ymd_and_hms(2025, 6, 30, 23, 59, 59).unwrap(),
            is_active: active,
        }
    }

    fn sample_product(deal: Option<Deal>) -> Product {
        Product {
            id: ProductId::new("ckp1"),
            name: "Linen shirt".to_string(),
            slug: "linen-shirt".to_string(),
            description: String::new(),
            price: Price::from_rupiah(400_000),
            stock: 5,
            category: None,
            images: Vec::new(),
            deal,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_effective_price_with_live_percentage_deal() {
        let product = sample_product(Some(sample_deal(DealType::Percentage, 25, true)));
        let during = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(product.effective_price(during), Price::from_rupiah(300_000));
    }

    #[test]
    fn test_effective_price_outside_deal_window() {
        let product = sample_product(Some(sample_deal(DealType::Percentage, 25, true)));
        let after = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        assert_eq!(product.effective_price(after), Price::from_rupiah(400_000));
    }

    #[test]
    fn test_effective_price_inactive_deal() {
        let product = sample_product(Some(sample_deal(DealType::FixedAmount, 50_000, false)));
        let during = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(product.effective_price(during), Price::from_rupiah(400_000));
    }

    #[test]
    fn test_fixed_amount_deal_apply() {
        let deal = sample_deal(DealType::FixedAmount, 150_000, true);
        assert_eq!(
            deal.apply(Price::from_rupiah(400_000)),
            Price::from_rupiah(250_000)
        );
        // Discount larger than the price floors at zero
        assert_eq!(deal.apply(Price::from_rupiah(100_000)), Price::zero());
    }

    #[test]
    fn test_product_page_total_pages() {
        let page = ProductPage {
            items: Vec::new(),
            total: 41,
            page: 1,
            per_page: 12,
        };
        assert_eq!(page.total_pages(), 4);
    }

    #[test]
    fn test_product_sort_round_trip() {
        assert_eq!(ProductSort::parse("price_asc"), ProductSort::PriceAsc);
        assert_eq!(ProductSort::parse("garbage"), ProductSort::Newest);
        assert_eq!(ProductSort::PriceDesc.as_str(), "price_desc");
    }

    #[test]
    fn test_order_deserializes_backend_shape() {
        let json = serde_json::json!({
            "id": "cko1",
            "orderNumber": "KWN-2025-0001",
            "status": "PROCESSING",
            "paymentStatus": "PAID",
            "paymentMethod": "MIDTRANS",
            "items": [{
                "productId": "ckp1",
                "name": "Linen shirt",
                "quantity": 2,
                "unitPrice": "400000",
                "lineTotal": "800000"
            }],
            "shippingAddress": {
                "recipientName": "Dewi",
                "phone": "+62812000111",
                "address": "Jl. Kenanga 5",
                "city": "Bandung",
                "province": "Jawa Barat",
                "postalCode": "40115"
            },
            "subtotal": "800000",
            "shippingFee": "25000",
            "totalAmount": "825000",
            "createdAt": "2025-06-10T03:00:00Z",
            "updatedAt": "2025-06-11T03:00:00Z"
        });

        let order: Order = serde_json::from_value(json).unwrap();
        assert_eq!(order.order_number, "KWN-2025-0001");
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.total_amount, Price::from_rupiah(825_000));
        assert!(order.shipment.is_none());
    }

    #[test]
    fn test_payment_instruction_untagged() {
        let midtrans: PaymentInstruction =
            serde_json::from_value(serde_json::json!({"redirectUrl": "https://pay.example/x"}))
                .unwrap();
        assert!(matches!(midtrans, PaymentInstruction::Midtrans { .. }));

        let wa: PaymentInstruction =
            serde_json::from_value(serde_json::json!({"whatsappUrl": "https://wa.me/62812"}))
                .unwrap();
        assert!(matches!(wa, PaymentInstruction::Whatsapp { .. }));
    }
}
