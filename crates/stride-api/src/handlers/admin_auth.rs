//! Admin auth handlers — register, login, 2FA, password reset, profile.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;
use validator::Validate;

use stride_auth::account::LoginOutcome;
use stride_core::error::AppError;
use stride_entity::admin::AdminProfileUpdate;

use crate::dto::request::{
    AdminProfileRequest, ChangePasswordRequest, ForgotPasswordRequest, LoginRequest,
    RegisterRequest, ResetPasswordRequest, TwoFactorRequest,
};
use crate::dto::response::{
    AccountSummary, AuthResponse, ForgotPasswordResponse, MessageResponse, TwoFactorChallenge,
};
use crate::state::AppState;

/// POST /api/auth/admin/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let (admin, token) = state
        .accounts
        .register(&req.name, &req.email, &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: AccountSummary::from_admin(&admin),
        }),
    ))
}

/// POST /api/auth/admin/login
///
/// Responds with either a token or a second-factor challenge.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Response, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    match state.accounts.login(&req.email, &req.password).await? {
        LoginOutcome::Success { token, admin } => Ok(Json(AuthResponse {
            token,
            user: AccountSummary::from_admin(&admin),
        })
        .into_response()),
        LoginOutcome::TwoFactorRequired { temp_id } => Ok(Json(TwoFactorChallenge {
            requires_2fa: true,
            temp_id,
            message: "2FA verification code sent to your registered device (Simulated)"
                .to_string(),
        })
        .into_response()),
    }
}

/// POST /api/auth/admin/verify-2fa
pub async fn verify_two_factor(
    State(state): State<AppState>,
    Json(req): Json<TwoFactorRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let (admin, token) = state.accounts.verify_two_factor(req.id, &req.code).await?;

    Ok(Json(AuthResponse {
        token,
        user: AccountSummary::from_admin(&admin),
    }))
}

/// POST /api/auth/admin/forgot-password
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(req): Json<ForgotPasswordRequest>,
) -> Result<Json<ForgotPasswordResponse>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state.accounts.forgot_password(&req.email).await?;

    Ok(Json(ForgotPasswordResponse {
        message: result.message,
        dev_token: result.dev_token,
    }))
}

/// POST /api/auth/admin/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    Json(req): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .accounts
        .reset_password(&req.token, &req.new_password)
        .await?;

    Ok(Json(MessageResponse::new("Password reset successfully")))
}

/// PUT /api/auth/admin/profile/{id}
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AdminProfileRequest>,
) -> Result<Json<AccountSummary>, AppError> {
    let admin = state
        .accounts
        .update_profile(
            id,
            &AdminProfileUpdate {
                name: req.name,
                bio: req.bio,
                avatar: req.avatar,
                two_factor_enabled: req.two_factor_enabled,
            },
        )
        .await?;

    Ok(Json(AccountSummary::from_admin(&admin)))
}

/// PUT /api/auth/admin/password/{id}
pub async fn change_password(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .accounts
        .change_password(id, &req.current_password, &req.new_password)
        .await?;

    Ok(Json(MessageResponse::new("Password updated successfully")))
}
