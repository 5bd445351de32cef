//! PostgreSQL product and review store.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use stride_core::error::{AppError, ErrorKind};
use stride_core::result::AppResult;
use stride_entity::product::{NewProduct, NewReview, Product, ProductUpdate, Review};

use crate::store::ProductStore;

/// Product store backed by PostgreSQL.
///
/// Review mutations run inside a transaction that recomputes the
/// product's `num_reviews`/`rating` from the review rows, so the derived
/// fields and the collection always commit together.
#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    /// Create a new product store on the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Recompute the aggregate columns of one product from its review rows.
async fn recompute_aggregate(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    product_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE products SET \
             num_reviews = agg.cnt, \
             rating = agg.mean, \
             updated_at = NOW() \
         FROM (SELECT COUNT(*)::int AS cnt, \
                      COALESCE(AVG(rating), 0)::float8 AS mean \
               FROM reviews WHERE product_id = $1) AS agg \
         WHERE products.id = $1",
    )
    .bind(product_id)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn create(&self, data: &NewProduct) -> AppResult<Product> {
        sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, brand, price, category, gender, images, description, \
                                   stock, in_stock) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, 24), COALESCE($9, TRUE)) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.brand)
        .bind(data.price)
        .bind(&data.category)
        .bind(&data.gender)
        .bind(Json(data.images.clone()))
        .bind(&data.description)
        .bind(data.stock)
        .bind(data.in_stock)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create product", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find product", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list products", e))
    }

    async fn update(&self, id: Uuid, update: &ProductUpdate) -> AppResult<Product> {
        sqlx::query_as::<_, Product>(
            "UPDATE products SET name = COALESCE($2, name), \
                                 brand = COALESCE($3, brand), \
                                 price = COALESCE($4, price), \
                                 category = COALESCE($5, category), \
                                 gender = COALESCE($6, gender), \
                                 images = COALESCE($7, images), \
                                 description = COALESCE($8, description), \
                                 stock = COALESCE($9, stock), \
                                 in_stock = COALESCE($10, in_stock), \
                                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.brand)
        .bind(update.price)
        .bind(&update.category)
        .bind(&update.gender)
        .bind(update.images.clone().map(Json))
        .bind(&update.description)
        .bind(update.stock)
        .bind(update.in_stock)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update product", e))?
        .ok_or_else(|| AppError::not_found("Product not found"))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete product", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn decrement_stock(&self, id: Uuid, quantity: i32) -> AppResult<()> {
        sqlx::query(
            "UPDATE products SET stock = GREATEST(stock - $2, 0), \
                                 in_stock = GREATEST(stock - $2, 0) > 0, \
                                 updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(quantity)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to decrement stock", e))?;
        Ok(())
    }

    async fn reviews_for(&self, product_id: Uuid) -> AppResult<Vec<Review>> {
        sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE product_id = $1 ORDER BY created_at ASC",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list reviews", e))
    }

    async fn add_review(&self, product_id: Uuid, data: &NewReview) -> AppResult<Review> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to start transaction", e)
        })?;

        let exists: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM products WHERE id = $1 FOR UPDATE")
                .bind(product_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to find product", e)
                })?;

        if exists.is_none() {
            return Err(AppError::not_found("Product not found"));
        }

        let review = sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (product_id, author, rating, comment) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(product_id)
        .bind(&data.author)
        .bind(data.rating)
        .bind(&data.comment)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("reviews_product_id_author_key") =>
            {
                AppError::policy("Product already reviewed")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to insert review", e),
        })?;

        recompute_aggregate(&mut tx, product_id).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to recompute rating", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit review", e)
        })?;

        Ok(review)
    }

    async fn remove_review(&self, product_id: Uuid, review_id: Uuid) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to start transaction", e)
        })?;

        let exists: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM products WHERE id = $1 FOR UPDATE")
                .bind(product_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to find product", e)
                })?;

        if exists.is_none() {
            return Err(AppError::not_found("Product not found"));
        }

        let result = sqlx::query("DELETE FROM reviews WHERE id = $1 AND product_id = $2")
            .bind(review_id)
            .bind(product_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete review", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Review not found"));
        }

        recompute_aggregate(&mut tx, product_id).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to recompute rating", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit review removal", e)
        })?;

        Ok(())
    }
}
