//! In-memory coupon store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use stride_core::error::AppError;
use stride_core::result::AppResult;
use stride_entity::coupon::{Coupon, NewCoupon};

use crate::store::CouponStore;

/// Coupon store held in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryCouponStore {
    coupons: Arc<RwLock<HashMap<Uuid, Coupon>>>,
}

impl MemoryCouponStore {
    /// Create an empty coupon store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CouponStore for MemoryCouponStore {
    async fn create(&self, data: &NewCoupon) -> AppResult<Coupon> {
        let mut coupons = self.coupons.write().await;

        if coupons.values().any(|c| c.code == data.code) {
            return Err(AppError::conflict(format!(
                "Coupon '{}' already exists",
                data.code
            )));
        }

        let now = Utc::now();
        let coupon = Coupon {
            id: Uuid::new_v4(),
            code: data.code.clone(),
            kind: data.kind,
            value: data.value,
            min_purchase: data.min_purchase.unwrap_or(0.0),
            expiry_date: data.expiry_date,
            is_active: data.is_active.unwrap_or(true),
            usage_count: 0,
            created_at: now,
            updated_at: now,
        };
        coupons.insert(coupon.id, coupon.clone());
        Ok(coupon)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Coupon>> {
        Ok(self.coupons.read().await.get(&id).cloned())
    }

    async fn find_active_by_code(&self, code: &str) -> AppResult<Option<Coupon>> {
        Ok(self
            .coupons
            .read()
            .await
            .values()
            .find(|c| c.code == code && c.is_active)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Coupon>> {
        let mut coupons: Vec<Coupon> = self.coupons.read().await.values().cloned().collect();
        coupons.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(coupons)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.coupons.write().await.remove(&id).is_some())
    }
}
