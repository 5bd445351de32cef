//! PostgreSQL order store.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use stride_core::error::{AppError, ErrorKind};
use stride_core::result::AppResult;
use stride_entity::order::{NewOrder, Order};

use crate::store::OrderStore;

/// Order store backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    /// Create a new order store on the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn create(&self, data: &NewOrder) -> AppResult<Order> {
        let date = data.date.unwrap_or_else(|| Utc::now().date_naive());
        let status = data.status.clone().unwrap_or_else(|| "Processing".to_string());

        sqlx::query_as::<_, Order>(
            "INSERT INTO orders (customer, date, amount, status, items) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.customer)
        .bind(date)
        .bind(data.amount)
        .bind(status)
        .bind(Json(data.items.clone()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create order", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Order>> {
        sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find order", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Order>> {
        sqlx::query_as::<_, Order>("SELECT * FROM orders ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list orders", e))
    }

    async fn update_status(&self, id: Uuid, status: &str) -> AppResult<Order> {
        sqlx::query_as::<_, Order>(
            "UPDATE orders SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update order", e))?
        .ok_or_else(|| AppError::not_found("Order not found"))
    }
}
