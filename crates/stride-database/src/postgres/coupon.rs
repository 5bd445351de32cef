//! PostgreSQL coupon store.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use stride_core::error::{AppError, ErrorKind};
use stride_core::result::AppResult;
use stride_entity::coupon::{Coupon, NewCoupon};

use crate::store::CouponStore;

/// Coupon store backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgCouponStore {
    pool: PgPool,
}

impl PgCouponStore {
    /// Create a new coupon store on the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CouponStore for PgCouponStore {
    async fn create(&self, data: &NewCoupon) -> AppResult<Coupon> {
        sqlx::query_as::<_, Coupon>(
            "INSERT INTO coupons (code, kind, value, min_purchase, expiry_date, is_active) \
             VALUES ($1, $2, $3, COALESCE($4, 0), $5, COALESCE($6, TRUE)) \
             RETURNING *",
        )
        .bind(&data.code)
        .bind(data.kind)
        .bind(data.value)
        .bind(data.min_purchase)
        .bind(data.expiry_date)
        .bind(data.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("coupons_code_key") => {
                AppError::conflict(format!("Coupon '{}' already exists", data.code))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create coupon", e),
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Coupon>> {
        sqlx::query_as::<_, Coupon>("SELECT * FROM coupons WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find coupon", e))
    }

    async fn find_active_by_code(&self, code: &str) -> AppResult<Option<Coupon>> {
        sqlx::query_as::<_, Coupon>("SELECT * FROM coupons WHERE code = $1 AND is_active = TRUE")
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find coupon by code", e)
            })
    }

    async fn find_all(&self) -> AppResult<Vec<Coupon>> {
        sqlx::query_as::<_, Coupon>("SELECT * FROM coupons ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list coupons", e))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM coupons WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete coupon", e))?;

        Ok(result.rows_affected() > 0)
    }
}
