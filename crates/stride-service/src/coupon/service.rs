//! Coupon operations — CRUD plus checkout-time validation.

use std::sync::Arc;

use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use stride_core::error::AppError;
use stride_database::store::{CouponStore, SecurityLogStore};
use stride_entity::coupon::{Coupon, NewCoupon};
use stride_entity::security::{NewSecurityEvent, Outcome, Severity, event};

/// A validated coupon with its computed discount.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponQuote {
    /// Discount amount, capped at the cart total.
    pub discount: f64,
    /// The matched coupon.
    pub coupon: Coupon,
}

/// Handles coupon management and redemption checks.
#[derive(Clone)]
pub struct CouponService {
    /// Coupon persistence.
    coupons: Arc<dyn CouponStore>,
    /// Security event log.
    security_log: Arc<dyn SecurityLogStore>,
}

impl CouponService {
    /// Creates a new coupon service.
    pub fn new(coupons: Arc<dyn CouponStore>, security_log: Arc<dyn SecurityLogStore>) -> Self {
        Self {
            coupons,
            security_log,
        }
    }

    /// Lists all coupons, newest first.
    pub async fn list(&self) -> Result<Vec<Coupon>, AppError> {
        self.coupons.find_all().await
    }

    /// Creates a coupon.
    pub async fn create(&self, actor_email: &str, data: &NewCoupon) -> Result<Coupon, AppError> {
        let coupon = self.coupons.create(data).await?;

        self.record(NewSecurityEvent {
            event: event::COUPON_CREATE.to_string(),
            user_email: actor_email.to_string(),
            ip_address: None,
            details: Some(format!("Created coupon: {}", coupon.code)),
            severity: Severity::Low,
            outcome: Outcome::Success,
        })
        .await;

        Ok(coupon)
    }

    /// Deletes a coupon.
    pub async fn delete(&self, actor_email: &str, id: Uuid) -> Result<(), AppError> {
        let coupon = self
            .coupons
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Coupon not found"))?;

        self.coupons.delete(id).await?;

        self.record(NewSecurityEvent {
            event: event::COUPON_DELETE.to_string(),
            user_email: actor_email.to_string(),
            ip_address: None,
            details: Some(format!("Deleted coupon: {}", coupon.code)),
            severity: Severity::Medium,
            outcome: Outcome::Success,
        })
        .await;

        Ok(())
    }

    /// Validates a coupon code against a cart total.
    ///
    /// Checks the active flag, the expiry date, and the minimum
    /// purchase, then computes the discount capped at the cart total.
    pub async fn validate(&self, code: &str, cart_total: f64) -> Result<CouponQuote, AppError> {
        let coupon = self
            .coupons
            .find_active_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Invalid coupon code"))?;

        if matches!(coupon.expiry_date, Some(expiry) if expiry < Utc::now()) {
            return Err(AppError::policy("Coupon has expired"));
        }

        if cart_total < coupon.min_purchase {
            return Err(AppError::policy(format!(
                "Minimum purchase of {} required",
                coupon.min_purchase
            )));
        }

        let discount = coupon.discount_for(cart_total);
        Ok(CouponQuote { discount, coupon })
    }

    /// Best-effort security-event write.
    async fn record(&self, event: NewSecurityEvent) {
        if let Err(e) = self.security_log.append(&event).await {
            warn!(error = %e, "Failed to write security event");
        }
    }
}
