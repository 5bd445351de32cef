//! Order store trait.

use async_trait::async_trait;
use uuid::Uuid;

use stride_core::result::AppResult;
use stride_entity::order::{NewOrder, Order};

/// Persistence operations for orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Create a new order.
    async fn create(&self, data: &NewOrder) -> AppResult<Order>;

    /// Find an order by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Order>>;

    /// List all orders, newest first.
    async fn find_all(&self) -> AppResult<Vec<Order>>;

    /// Replace the fulfilment status.
    async fn update_status(&self, id: Uuid, status: &str) -> AppResult<Order>;
}
