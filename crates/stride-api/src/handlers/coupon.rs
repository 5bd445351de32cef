//! Coupon handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use stride_core::error::AppError;
use stride_entity::coupon::{Coupon, NewCoupon};

use crate::dto::request::ValidateCouponRequest;
use crate::dto::response::{MessageResponse, ValidateCouponResponse};
use crate::extractors::CurrentAdmin;
use crate::state::AppState;

/// GET /api/coupons
pub async fn list(
    State(state): State<AppState>,
    _admin: CurrentAdmin,
) -> Result<Json<Vec<Coupon>>, AppError> {
    Ok(Json(state.coupons.list().await?))
}

/// POST /api/coupons
pub async fn create(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Json(req): Json<NewCoupon>,
) -> Result<(StatusCode, Json<Coupon>), AppError> {
    let coupon = state.coupons.create(admin.email(), &req).await?;
    Ok((StatusCode::CREATED, Json(coupon)))
}

/// DELETE /api/coupons/{id}
pub async fn delete(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    state.coupons.delete(admin.email(), id).await?;
    Ok(Json(MessageResponse::new("Coupon deleted")))
}

/// POST /api/coupons/validate
pub async fn validate(
    State(state): State<AppState>,
    Json(req): Json<ValidateCouponRequest>,
) -> Result<Json<ValidateCouponResponse>, AppError> {
    let quote = state.coupons.validate(&req.code, req.cart_total).await?;

    Ok(Json(ValidateCouponResponse {
        success: true,
        discount: quote.discount,
        coupon: quote.coupon,
    }))
}
