//! Order handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use stride_core::error::AppError;
use stride_entity::order::{NewOrder, Order};

use crate::dto::request::OrderStatusRequest;
use crate::extractors::CurrentAdmin;
use crate::state::AppState;

/// GET /api/orders
pub async fn list(
    State(state): State<AppState>,
    _admin: CurrentAdmin,
) -> Result<Json<Vec<Order>>, AppError> {
    Ok(Json(state.orders.list().await?))
}

/// POST /api/orders
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<NewOrder>,
) -> Result<(StatusCode, Json<Order>), AppError> {
    let order = state.orders.create(&req).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// PATCH /api/orders/{id}
pub async fn update_status(
    State(state): State<AppState>,
    _admin: CurrentAdmin,
    Path(id): Path<Uuid>,
    Json(req): Json<OrderStatusRequest>,
) -> Result<Json<Order>, AppError> {
    let order = state.orders.update_status(id, &req.status).await?;
    Ok(Json(order))
}
