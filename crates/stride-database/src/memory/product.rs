//! In-memory product and review store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use tokio::sync::RwLock;
use uuid::Uuid;

use stride_core::error::AppError;
use stride_core::result::AppResult;
use stride_entity::product::review::aggregate;
use stride_entity::product::{NewProduct, NewReview, Product, ProductUpdate, Review};

use crate::store::ProductStore;

/// Products and their reviews behind one lock, so a review mutation and
/// the aggregate recomputation are observed as a single step.
#[derive(Debug, Default)]
struct State {
    products: HashMap<Uuid, Product>,
    reviews: HashMap<Uuid, Vec<Review>>,
}

/// Product store held in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryProductStore {
    state: Arc<RwLock<State>>,
}

impl MemoryProductStore {
    /// Create an empty product store.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Recompute one product's derived fields from its live reviews.
fn recompute(product: &mut Product, reviews: &[Review]) {
    let ratings: Vec<i32> = reviews.iter().map(|r| r.rating).collect();
    let (num_reviews, rating) = aggregate(&ratings);
    product.num_reviews = num_reviews;
    product.rating = rating;
    product.updated_at = Utc::now();
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn create(&self, data: &NewProduct) -> AppResult<Product> {
        let mut state = self.state.write().await;
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            brand: data.brand.clone(),
            price: data.price,
            rating: 0.0,
            num_reviews: 0,
            category: data.category.clone(),
            gender: data.gender.clone(),
            images: Json(data.images.clone()),
            description: data.description.clone(),
            stock: data.stock.unwrap_or(24),
            in_stock: data.in_stock.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };
        state.products.insert(product.id, product.clone());
        state.reviews.insert(product.id, Vec::new());
        Ok(product)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        Ok(self.state.read().await.products.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        let mut products: Vec<Product> =
            self.state.read().await.products.values().cloned().collect();
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(products)
    }

    async fn update(&self, id: Uuid, update: &ProductUpdate) -> AppResult<Product> {
        let mut state = self.state.write().await;
        let product = state
            .products
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Product not found"))?;

        if let Some(name) = &update.name {
            product.name = name.clone();
        }
        if let Some(brand) = &update.brand {
            product.brand = Some(brand.clone());
        }
        if let Some(price) = update.price {
            product.price = price;
        }
        if let Some(category) = &update.category {
            product.category = category.clone();
        }
        if let Some(gender) = &update.gender {
            product.gender = Some(gender.clone());
        }
        if let Some(images) = &update.images {
            product.images = Json(images.clone());
        }
        if let Some(description) = &update.description {
            product.description = Some(description.clone());
        }
        if let Some(stock) = update.stock {
            product.stock = stock;
        }
        if let Some(in_stock) = update.in_stock {
            product.in_stock = in_stock;
        }
        product.updated_at = Utc::now();
        Ok(product.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut state = self.state.write().await;
        state.reviews.remove(&id);
        Ok(state.products.remove(&id).is_some())
    }

    async fn decrement_stock(&self, id: Uuid, quantity: i32) -> AppResult<()> {
        let mut state = self.state.write().await;
        if let Some(product) = state.products.get_mut(&id) {
            product.stock = (product.stock - quantity).max(0);
            product.in_stock = product.stock > 0;
            product.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn reviews_for(&self, product_id: Uuid) -> AppResult<Vec<Review>> {
        Ok(self
            .state
            .read()
            .await
            .reviews
            .get(&product_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn add_review(&self, product_id: Uuid, data: &NewReview) -> AppResult<Review> {
        let mut state = self.state.write().await;

        if !state.products.contains_key(&product_id) {
            return Err(AppError::not_found("Product not found"));
        }

        let reviews = state.reviews.entry(product_id).or_default();
        if reviews.iter().any(|r| r.author == data.author) {
            return Err(AppError::policy("Product already reviewed"));
        }

        let review = Review {
            id: Uuid::new_v4(),
            product_id,
            author: data.author.clone(),
            rating: data.rating,
            comment: data.comment.clone(),
            created_at: Utc::now(),
        };
        reviews.push(review.clone());

        let snapshot = reviews.clone();
        if let Some(product) = state.products.get_mut(&product_id) {
            recompute(product, &snapshot);
        }

        Ok(review)
    }

    async fn remove_review(&self, product_id: Uuid, review_id: Uuid) -> AppResult<()> {
        let mut state = self.state.write().await;

        if !state.products.contains_key(&product_id) {
            return Err(AppError::not_found("Product not found"));
        }

        let reviews = state.reviews.entry(product_id).or_default();
        let before = reviews.len();
        reviews.retain(|r| r.id != review_id);
        if reviews.len() == before {
            return Err(AppError::not_found("Review not found"));
        }

        let snapshot = reviews.clone();
        if let Some(product) = state.products.get_mut(&product_id) {
            recompute(product, &snapshot);
        }

        Ok(())
    }
}
