//! Type-safe price representation using decimal arithmetic.
//!
//! All Kawane prices are in Indonesian rupiah (IDR). The backend sends
//! amounts as decimal strings (`"1250000"`), which is also how
//! `rust_decimal::Decimal` serializes, so the wrapper is serde-transparent.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price in Indonesian rupiah.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero rupiah.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole-rupiah amount.
    #[must_use]
    pub fn from_rupiah(amount: i64) -> Self {
        Self(Decimal::from(amount))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether this price is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Multiply by a line quantity, returning `None` on overflow.
    #[must_use]
    pub fn checked_mul_quantity(&self, quantity: u32) -> Option<Self> {
        self.0.checked_mul(Decimal::from(quantity)).map(Self)
    }

    /// Sum with another price, returning `None` on overflow.
    #[must_use]
    pub fn checked_add(&self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Apply a percentage discount (`value` in percent, e.g. `25` for 25% off).
    ///
    /// Values outside `(0, 100]` leave the price unchanged; the backend
    /// validates deal values, this is the last line of defense for display.
    #[must_use]
    pub fn apply_percentage(&self, value: Decimal) -> Self {
        if value <= Decimal::ZERO || value > Decimal::from(100) {
            return *self;
        }
        let factor = (Decimal::from(100) - value) / Decimal::from(100);
        Self((self.0 * factor).round_dp(0))
    }

    /// Apply a fixed-amount discount, flooring at zero.
    #[must_use]
    pub fn apply_fixed(&self, discount: Self) -> Self {
        if discount.0 >= self.0 {
            Self::zero()
        } else {
            Self(self.0 - discount.0)
        }
    }

    /// Format for display (e.g., `Rp 1.250.000`).
    ///
    /// Rupiah amounts are whole numbers; fractional parts are rounded away.
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self.0.round_dp(0);
        let raw = rounded.abs().to_string();
        let digits: &str = raw.split('.').next().unwrap_or("0");

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
        let chars: Vec<char> = digits.chars().collect();
        for (i, c) in chars.iter().enumerate() {
            if i > 0 && (chars.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(*c);
        }

        if rounded.is_sign_negative() && !rounded.is_zero() {
            format!("-Rp {grouped}")
        } else {
            format!("Rp {grouped}")
        }
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_grouping() {
        assert_eq!(Price::from_rupiah(0).display(), "Rp 0");
        assert_eq!(Price::from_rupiah(999).display(), "Rp 999");
        assert_eq!(Price::from_rupiah(1_000).display(), "Rp 1.000");
        assert_eq!(Price::from_rupiah(1_250_000).display(), "Rp 1.250.000");
        assert_eq!(Price::from_rupiah(-45_500).display(), "-Rp 45.500");
    }

    #[test]
    fn test_checked_mul_quantity() {
        let unit = Price::from_rupiah(150_000);
        let line = unit.checked_mul_quantity(3).unwrap();
        assert_eq!(line, Price::from_rupiah(450_000));
    }

    #[test]
    fn test_apply_percentage() {
        let price = Price::from_rupiah(200_000);
        assert_eq!(
            price.apply_percentage(Decimal::from(25)),
            Price::from_rupiah(150_000)
        );
        // Out-of-range values are a no-op
        assert_eq!(price.apply_percentage(Decimal::from(0)), price);
        assert_eq!(price.apply_percentage(Decimal::from(101)), price);
    }

    #[test]
    fn test_apply_fixed_floors_at_zero() {
        let price = Price::from_rupiah(50_000);
        assert_eq!(
            price.apply_fixed(Price::from_rupiah(20_000)),
            Price::from_rupiah(30_000)
        );
        assert_eq!(
            price.apply_fixed(Price::from_rupiah(80_000)),
            Price::zero()
        );
    }

    #[test]
    fn test_serde_as_decimal_string() {
        let price = Price::from_rupiah(1_250_000);
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"1250000\"");

        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
    }
}
