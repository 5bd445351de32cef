//! Order operations — placement with stock decrement, status updates.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use stride_core::error::AppError;
use stride_database::store::{OrderStore, ProductStore};
use stride_entity::order::{NewOrder, Order};

/// Handles order placement and fulfilment.
#[derive(Clone)]
pub struct OrderService {
    /// Order persistence.
    orders: Arc<dyn OrderStore>,
    /// Product persistence, for stock decrements.
    products: Arc<dyn ProductStore>,
}

impl OrderService {
    /// Creates a new order service.
    pub fn new(orders: Arc<dyn OrderStore>, products: Arc<dyn ProductStore>) -> Self {
        Self { orders, products }
    }

    /// Lists all orders, newest first.
    pub async fn list(&self) -> Result<Vec<Order>, AppError> {
        self.orders.find_all().await
    }

    /// Places an order and decrements stock for each referenced product.
    ///
    /// Stock decrements are best-effort: a line item pointing at a
    /// missing product does not fail the order.
    pub async fn create(&self, data: &NewOrder) -> Result<Order, AppError> {
        let order = self.orders.create(data).await?;

        for item in &data.items {
            let Some(product_id) = item.id else {
                continue;
            };
            let quantity = item.quantity.unwrap_or(1);
            if let Err(e) = self.products.decrement_stock(product_id, quantity).await {
                warn!(
                    order_id = %order.id,
                    product_id = %product_id,
                    error = %e,
                    "Failed to decrement stock for order item"
                );
            }
        }

        info!(order_id = %order.id, customer = %order.customer, "Order placed");
        Ok(order)
    }

    /// Updates an order's fulfilment status.
    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<Order, AppError> {
        self.orders.update_status(id, status).await
    }
}
