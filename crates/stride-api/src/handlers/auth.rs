//! Shopper auth handlers — register, login, profile, password.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use stride_core::error::AppError;
use stride_entity::user::UserProfileUpdate;

use crate::dto::request::{
    ChangePasswordRequest, LoginRequest, RegisterRequest, UpdateProfileRequest,
};
use crate::dto::response::{AccountSummary, AuthResponse, MessageResponse};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let (user, token) = state
        .users
        .register(&req.name, &req.email, &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: AccountSummary::from_user(&user),
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let (user, token) = state.users.login(&req.email, &req.password).await?;

    Ok(Json(AuthResponse {
        token,
        user: AccountSummary::from_user(&user),
    }))
}

/// PUT /api/auth/profile/{id}
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<AccountSummary>, AppError> {
    let user = state
        .users
        .update_profile(
            id,
            &UserProfileUpdate {
                name: req.name,
                email: req.email,
            },
        )
        .await?;

    Ok(Json(AccountSummary::from_user(&user)))
}

/// PUT /api/auth/password/{id}
pub async fn change_password(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .users
        .change_password(id, &req.current_password, &req.new_password)
        .await?;

    Ok(Json(MessageResponse::new("Password updated successfully")))
}
