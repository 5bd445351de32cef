//! Order entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

/// A customer order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order identifier.
    pub id: Uuid,
    /// Customer name.
    pub customer: String,
    /// Order date as shown to the storefront.
    pub date: NaiveDate,
    /// Order total.
    pub amount: f64,
    /// Fulfilment status (free-form, defaults to "Processing").
    pub status: String,
    /// Ordered line items.
    pub items: Json<Vec<OrderItem>>,
    /// When the order was created.
    pub created_at: DateTime<Utc>,
    /// When the order was last updated.
    pub updated_at: DateTime<Utc>,
}

/// One line item within an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Referenced product, when known.
    pub id: Option<Uuid>,
    /// Product name snapshot.
    pub name: Option<String>,
    /// Unit price snapshot.
    pub price: Option<f64>,
    /// Quantity ordered.
    pub quantity: Option<i32>,
    /// Size variant.
    pub size: Option<String>,
}

/// Data required to create a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    /// Customer name.
    pub customer: String,
    /// Order date; defaults to today when absent.
    pub date: Option<NaiveDate>,
    /// Order total.
    pub amount: f64,
    /// Initial status; defaults to "Processing".
    pub status: Option<String>,
    /// Ordered line items.
    #[serde(default)]
    pub items: Vec<OrderItem>,
}
