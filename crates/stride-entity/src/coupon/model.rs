//! Discount coupon entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

/// A discount coupon.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    /// Unique coupon identifier.
    pub id: Uuid,
    /// Redemption code (unique).
    pub code: String,
    /// Discount kind (serialized as `type` on the wire).
    #[serde(rename = "type")]
    pub kind: CouponKind,
    /// Percentage (0–100) or fixed amount, depending on `kind`.
    pub value: f64,
    /// Minimum cart total required for redemption.
    pub min_purchase: f64,
    /// Expiry; never expires when absent.
    pub expiry_date: Option<DateTime<Utc>>,
    /// Whether the coupon is currently redeemable.
    pub is_active: bool,
    /// Number of recorded redemptions.
    pub usage_count: i32,
    /// When the coupon was created.
    pub created_at: DateTime<Utc>,
    /// When the coupon was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Discount kind: a percentage of the cart total or a fixed amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "coupon_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CouponKind {
    /// `value` percent off the cart total.
    Percentage,
    /// `value` units off the cart total.
    Fixed,
}

impl fmt::Display for CouponKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percentage => write!(f, "percentage"),
            Self::Fixed => write!(f, "fixed"),
        }
    }
}

impl Coupon {
    /// Compute the discount this coupon grants on the given cart total,
    /// capped at the cart total itself.
    pub fn discount_for(&self, cart_total: f64) -> f64 {
        let discount = match self.kind {
            CouponKind::Percentage => cart_total * self.value / 100.0,
            CouponKind::Fixed => self.value,
        };
        discount.min(cart_total)
    }
}

/// Data required to create a new coupon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCoupon {
    /// Redemption code.
    pub code: String,
    /// Discount kind (accepted as `type` on the wire).
    #[serde(rename = "type")]
    pub kind: CouponKind,
    /// Percentage or fixed amount.
    pub value: f64,
    /// Minimum cart total.
    pub min_purchase: Option<f64>,
    /// Expiry date.
    pub expiry_date: Option<DateTime<Utc>>,
    /// Redeemable flag; defaults to true.
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coupon(kind: CouponKind, value: f64) -> Coupon {
        let now = Utc::now();
        Coupon {
            id: Uuid::new_v4(),
            code: "SAVE".to_string(),
            kind,
            value,
            min_purchase: 0.0,
            expiry_date: None,
            is_active: true,
            usage_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_percentage_discount() {
        assert_eq!(
            coupon(CouponKind::Percentage, 10.0).discount_for(200.0),
            20.0
        );
    }

    #[test]
    fn test_fixed_discount_capped_at_total() {
        assert_eq!(coupon(CouponKind::Fixed, 50.0).discount_for(200.0), 50.0);
        assert_eq!(coupon(CouponKind::Fixed, 500.0).discount_for(200.0), 200.0);
    }
}
