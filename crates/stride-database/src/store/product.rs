//! Product and review store trait.

use async_trait::async_trait;
use uuid::Uuid;

use stride_core::result::AppResult;
use stride_entity::product::{NewProduct, NewReview, Product, ProductUpdate, Review};

/// Persistence operations for the product catalog and its reviews.
///
/// Review insertion and removal recompute the product's `num_reviews`
/// and `rating` atomically with the collection change — no caller ever
/// observes the derived fields out of step with the review rows.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Create a new product.
    async fn create(&self, data: &NewProduct) -> AppResult<Product>;

    /// Find a product by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    /// List all products, newest first.
    async fn find_all(&self) -> AppResult<Vec<Product>>;

    /// Update product fields; absent fields are left unchanged.
    async fn update(&self, id: Uuid, update: &ProductUpdate) -> AppResult<Product>;

    /// Delete a product (and its reviews). Returns whether a row existed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Decrease stock by `quantity` (floored at zero), keeping the
    /// purchasable flag in step.
    async fn decrement_stock(&self, id: Uuid, quantity: i32) -> AppResult<()>;

    /// List a product's reviews, oldest first.
    async fn reviews_for(&self, product_id: Uuid) -> AppResult<Vec<Review>>;

    /// Insert a review and recompute the product aggregate.
    ///
    /// Fails with not-found for an unknown product and with a policy
    /// error when the author already reviewed this product (no state
    /// change in that case).
    async fn add_review(&self, product_id: Uuid, data: &NewReview) -> AppResult<Review>;

    /// Remove a review by id and recompute the product aggregate.
    ///
    /// Fails with not-found for an unknown product or review id.
    async fn remove_review(&self, product_id: Uuid, review_id: Uuid) -> AppResult<()>;
}
