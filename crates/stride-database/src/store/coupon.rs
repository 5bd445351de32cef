//! Coupon store trait.

use async_trait::async_trait;
use uuid::Uuid;

use stride_core::result::AppResult;
use stride_entity::coupon::{Coupon, NewCoupon};

/// Persistence operations for discount coupons.
#[async_trait]
pub trait CouponStore: Send + Sync {
    /// Create a new coupon. Fails with a conflict on a duplicate code.
    async fn create(&self, data: &NewCoupon) -> AppResult<Coupon>;

    /// Find a coupon by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Coupon>>;

    /// Find an active coupon by its code.
    async fn find_active_by_code(&self, code: &str) -> AppResult<Option<Coupon>>;

    /// List all coupons, newest first.
    async fn find_all(&self) -> AppResult<Vec<Coupon>>;

    /// Delete a coupon. Returns whether a row existed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}
