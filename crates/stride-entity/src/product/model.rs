//! Product entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

/// A catalog product.
///
/// `num_reviews` and `rating` are denormalized from the product's review
/// collection: `num_reviews` always equals the live review count and
/// `rating` the arithmetic mean of live ratings (0 when there are none).
/// Both are recomputed and persisted together with every review insert or
/// delete, never mutated independently.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: Uuid,
    /// Product name.
    pub name: String,
    /// Brand name.
    pub brand: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Mean review rating (derived, 0 when unreviewed).
    pub rating: f64,
    /// Review count (derived).
    pub num_reviews: i32,
    /// Category label.
    pub category: String,
    /// Target gender label.
    pub gender: Option<String>,
    /// Product imagery.
    pub images: Json<ProductImages>,
    /// Long description.
    pub description: Option<String>,
    /// Units in stock.
    pub stock: i32,
    /// Whether the product is purchasable.
    pub in_stock: bool,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Primary and secondary product images.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImages {
    /// Main listing image URL.
    pub primary: String,
    /// Hover/detail image URL.
    pub secondary: Option<String>,
}

/// Data required to create a new product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    /// Product name.
    pub name: String,
    /// Brand name.
    pub brand: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Category label.
    pub category: String,
    /// Target gender label.
    pub gender: Option<String>,
    /// Product imagery.
    pub images: ProductImages,
    /// Long description.
    pub description: Option<String>,
    /// Units in stock.
    pub stock: Option<i32>,
    /// Whether the product is purchasable.
    pub in_stock: Option<bool>,
}

/// Data for updating an existing product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    /// New product name.
    pub name: Option<String>,
    /// New brand name.
    pub brand: Option<String>,
    /// New unit price.
    pub price: Option<f64>,
    /// New category label.
    pub category: Option<String>,
    /// New gender label.
    pub gender: Option<String>,
    /// New imagery.
    pub images: Option<ProductImages>,
    /// New description.
    pub description: Option<String>,
    /// New stock count.
    pub stock: Option<i32>,
    /// New purchasable flag.
    pub in_stock: Option<bool>,
}
