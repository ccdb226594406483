//! Status enums for various entities.
//!
//! All enums mirror the Kawane backend wire format (SCREAMING_SNAKE_CASE
//! unless noted). The backend owns every state transition; these types only
//! gate which affordances the client surfaces.

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order created but checkout not completed.
    #[default]
    Checkout,
    /// Awaiting payment.
    Pending,
    /// Payment confirmed.
    Paid,
    /// Being prepared for shipment.
    Processing,
    /// Handed to the courier.
    Shipped,
    /// Courier reports delivery.
    Delivered,
    /// Buyer confirmed receipt.
    Completed,
    /// Cancelled by buyer or staff.
    Cancelled,
    /// Payment returned.
    Refunded,
}

impl OrderStatus {
    /// Whether a cancel affordance may be shown for this order.
    ///
    /// Matches the backend rule: only orders that have not entered
    /// fulfillment can be cancelled.
    #[must_use]
    pub const fn is_cancellable(self) -> bool {
        matches!(self, Self::Checkout | Self::Pending | Self::Processing)
    }

    /// Whether the order has reached a terminal state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled | Self::Refunded)
    }

    /// Human-readable label for list views.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Checkout => "Checkout",
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Refunded => "Refunded",
        }
    }
}

/// Payment status, tracked separately from the order lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Pending,
    Paid,
    Failed,
    Expired,
    Refunded,
}

/// How the buyer pays for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Automated gateway; checkout returns a redirect URL.
    Midtrans,
    /// Order confirmation happens out-of-band via WhatsApp.
    WhatsappManual,
}

/// Authorization tier for a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    Customer,
    /// Back-office access to store operations.
    Staff,
    /// Full back-office access including user management.
    Admin,
}

impl UserRole {
    /// Whether this role may log into the back-office at all.
    #[must_use]
    pub const fn can_access_admin(self) -> bool {
        matches!(self, Self::Staff | Self::Admin)
    }

    /// Whether this role may manage other users and destructive operations.
    #[must_use]
    pub const fn can_manage_users(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "CUSTOMER"),
            Self::Staff => write!(f, "STAFF"),
            Self::Admin => write!(f, "ADMIN"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CUSTOMER" | "customer" => Ok(Self::Customer),
            "STAFF" | "staff" => Ok(Self::Staff),
            "ADMIN" | "admin" => Ok(Self::Admin),
            _ => Err(format!("invalid user role: {s}")),
        }
    }
}

/// Kind of discount a deal applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DealType {
    /// Percentage off the list price.
    Percentage,
    /// Fixed rupiah amount off the list price.
    FixedAmount,
    /// Time-boxed percentage deal with a countdown on the storefront.
    FlashSale,
}

/// Category of an admin notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    OrderCreated,
    PaymentReceived,
    LowStock,
    UserRegistered,
    System,
}

/// Priority of an admin notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationPriority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

/// Shipment progress as reported by the courier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentStatus {
    #[default]
    Preparing,
    InTransit,
    OutForDelivery,
    Delivered,
    Returned,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cancellable_statuses() {
        assert!(OrderStatus::Checkout.is_cancellable());
        assert!(OrderStatus::Pending.is_cancellable());
        assert!(OrderStatus::Processing.is_cancellable());

        assert!(!OrderStatus::Paid.is_cancellable());
        assert!(!OrderStatus::Shipped.is_cancellable());
        assert!(!OrderStatus::Delivered.is_cancellable());
        assert!(!OrderStatus::Completed.is_cancellable());
        assert!(!OrderStatus::Cancelled.is_cancellable());
        assert!(!OrderStatus::Refunded.is_cancellable());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(OrderStatus::Refunded.is_terminal());
        assert!(!OrderStatus::Shipped.is_terminal());
    }

    #[test]
    fn test_order_status_wire_format() {
        let json = serde_json::to_string(&OrderStatus::Processing).unwrap();
        assert_eq!(json, "\"PROCESSING\"");

        let back: OrderStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(back, OrderStatus::Cancelled);
    }

    #[test]
    fn test_role_permissions() {
        assert!(!UserRole::Customer.can_access_admin());
        assert!(UserRole::Staff.can_access_admin());
        assert!(UserRole::Admin.can_access_admin());

        assert!(!UserRole::Staff.can_manage_users());
        assert!(UserRole::Admin.can_manage_users());
    }

    #[test]
    fn test_role_round_trip() {
        for role in [UserRole::Customer, UserRole::Staff, UserRole::Admin] {
            let parsed: UserRole = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
        assert!("OWNER".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_payment_method_wire_format() {
        let json = serde_json::to_string(&PaymentMethod::WhatsappManual).unwrap();
        assert_eq!(json, "\"WHATSAPP_MANUAL\"");
    }

    #[test]
    fn test_priority_ordering() {
        assert!(NotificationPriority::Urgent > NotificationPriority::High);
        assert!(NotificationPriority::High > NotificationPriority::Normal);
        assert!(NotificationPriority::Normal > NotificationPriority::Low);
    }
}
