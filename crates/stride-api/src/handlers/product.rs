//! Product and review handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use stride_core::error::AppError;
use stride_entity::product::{NewProduct, NewReview, Product, ProductUpdate, Review};

use crate::dto::request::ReviewRequest;
use crate::dto::response::MessageResponse;
use crate::extractors::CurrentAdmin;
use crate::state::AppState;

/// GET /api/products
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    Ok(Json(state.catalog.list().await?))
}

/// POST /api/products
pub async fn create(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Json(req): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let product = state.catalog.create(admin.email(), &req).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/{id}
pub async fn update(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(id): Path<Uuid>,
    Json(req): Json<ProductUpdate>,
) -> Result<Json<Product>, AppError> {
    let product = state.catalog.update(admin.email(), id, &req).await?;
    Ok(Json(product))
}

/// DELETE /api/products/{id}
pub async fn delete(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    state.catalog.delete(admin.email(), id).await?;
    Ok(Json(MessageResponse::new("Product deleted")))
}

/// GET /api/products/{id}/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Review>>, AppError> {
    Ok(Json(state.catalog.reviews(id).await?))
}

/// POST /api/products/{id}/reviews
pub async fn add_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ReviewRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    state
        .catalog
        .add_review(
            id,
            &NewReview {
                author: req.user,
                rating: req.rating,
                comment: req.comment,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new("Review added"))))
}

/// DELETE /api/products/{id}/reviews/{review_id}
pub async fn remove_review(
    State(state): State<AppState>,
    Path((id, review_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<MessageResponse>, AppError> {
    state.catalog.remove_review(id, review_id).await?;
    Ok(Json(MessageResponse::new("Review removed")))
}
