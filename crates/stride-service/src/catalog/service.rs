//! Catalog operations — product CRUD and review submission/removal.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use stride_core::error::AppError;
use stride_database::store::{ProductStore, SecurityLogStore};
use stride_entity::product::{NewProduct, NewReview, Product, ProductUpdate, Review};
use stride_entity::security::{NewSecurityEvent, Outcome, Severity, event};

/// Handles catalog management and the review aggregate.
#[derive(Clone)]
pub struct CatalogService {
    /// Product persistence.
    products: Arc<dyn ProductStore>,
    /// Security event log.
    security_log: Arc<dyn SecurityLogStore>,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(products: Arc<dyn ProductStore>, security_log: Arc<dyn SecurityLogStore>) -> Self {
        Self {
            products,
            security_log,
        }
    }

    /// Lists all products, newest first.
    pub async fn list(&self) -> Result<Vec<Product>, AppError> {
        self.products.find_all().await
    }

    /// Fetches one product.
    pub async fn get(&self, id: Uuid) -> Result<Product, AppError> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found"))
    }

    /// Creates a product.
    pub async fn create(&self, actor_email: &str, data: &NewProduct) -> Result<Product, AppError> {
        let product = self.products.create(data).await?;

        self.record(NewSecurityEvent {
            event: event::PRODUCT_CREATE.to_string(),
            user_email: actor_email.to_string(),
            ip_address: None,
            details: Some(format!("Added new product: {}", product.name)),
            severity: Severity::Low,
            outcome: Outcome::Success,
        })
        .await;

        Ok(product)
    }

    /// Updates a product.
    pub async fn update(
        &self,
        actor_email: &str,
        id: Uuid,
        update: &ProductUpdate,
    ) -> Result<Product, AppError> {
        let product = self.products.update(id, update).await?;

        self.record(NewSecurityEvent {
            event: event::PRODUCT_UPDATE.to_string(),
            user_email: actor_email.to_string(),
            ip_address: None,
            details: Some(format!("Updated product: {}", product.name)),
            severity: Severity::Low,
            outcome: Outcome::Success,
        })
        .await;

        Ok(product)
    }

    /// Deletes a product.
    pub async fn delete(&self, actor_email: &str, id: Uuid) -> Result<(), AppError> {
        let product = self.get(id).await?;
        self.products.delete(id).await?;

        self.record(NewSecurityEvent {
            event: event::PRODUCT_DELETE.to_string(),
            user_email: actor_email.to_string(),
            ip_address: None,
            details: Some(format!("Deleted product: {}", product.name)),
            severity: Severity::Medium,
            outcome: Outcome::Success,
        })
        .await;

        info!(product_id = %id, "Product deleted");
        Ok(())
    }

    /// Submits a review. One review per author per product; the
    /// product's `num_reviews` and `rating` are recomputed atomically
    /// with the insertion.
    pub async fn add_review(
        &self,
        product_id: Uuid,
        review: &NewReview,
    ) -> Result<Review, AppError> {
        if !(1..=5).contains(&review.rating) {
            return Err(AppError::validation("Rating must be between 1 and 5"));
        }
        if review.author.trim().is_empty() {
            return Err(AppError::validation("Reviewer identity is required"));
        }

        self.products.add_review(product_id, review).await
    }

    /// Removes a review by id, recomputing the aggregate.
    pub async fn remove_review(&self, product_id: Uuid, review_id: Uuid) -> Result<(), AppError> {
        self.products.remove_review(product_id, review_id).await
    }

    /// Lists a product's reviews, oldest first.
    pub async fn reviews(&self, product_id: Uuid) -> Result<Vec<Review>, AppError> {
        self.get(product_id).await?;
        self.products.reviews_for(product_id).await
    }

    /// Best-effort security-event write.
    async fn record(&self, event: NewSecurityEvent) {
        if let Err(e) = self.security_log.append(&event).await {
            warn!(error = %e, "Failed to write security event");
        }
    }
}
