//! In-memory order store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use tokio::sync::RwLock;
use uuid::Uuid;

use stride_core::error::AppError;
use stride_core::result::AppResult;
use stride_entity::order::{NewOrder, Order};

use crate::store::OrderStore;

/// Order store held in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryOrderStore {
    orders: Arc<RwLock<HashMap<Uuid, Order>>>,
}

impl MemoryOrderStore {
    /// Create an empty order store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn create(&self, data: &NewOrder) -> AppResult<Order> {
        let mut orders = self.orders.write().await;
        let now = Utc::now();
        let order = Order {
            id: Uuid::new_v4(),
            customer: data.customer.clone(),
            date: data.date.unwrap_or_else(|| now.date_naive()),
            amount: data.amount,
            status: data
                .status
                .clone()
                .unwrap_or_else(|| "Processing".to_string()),
            items: Json(data.items.clone()),
            created_at: now,
            updated_at: now,
        };
        orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Order>> {
        Ok(self.orders.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Order>> {
        let mut orders: Vec<Order> = self.orders.read().await.values().cloned().collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    async fn update_status(&self, id: Uuid, status: &str) -> AppResult<Order> {
        let mut orders = self.orders.write().await;
        let order = orders
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Order not found"))?;
        order.status = status.to_string();
        order.updated_at = Utc::now();
        Ok(order.clone())
    }
}
