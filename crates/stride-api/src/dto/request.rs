//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Account registration request body (shopper or admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Shopper profile update request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// Current password.
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    /// New password.
    #[validate(length(min = 1, message = "New password is required"))]
    pub new_password: String,
}

/// Admin profile update request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfileRequest {
    /// New display name.
    pub name: Option<String>,
    /// New bio.
    pub bio: Option<String>,
    /// New avatar URL.
    pub avatar: Option<String>,
    /// Toggle the second factor.
    pub two_factor_enabled: Option<bool>,
}

/// Second-factor verification request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwoFactorRequest {
    /// Temporary identifier returned by the login step.
    pub id: Uuid,
    /// Submitted one-time code.
    pub code: String,
}

/// Password-reset issuance request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    /// Email of the account to reset.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
}

/// Password-reset consumption request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    /// Raw reset secret.
    #[validate(length(min = 1, message = "Token is required"))]
    pub token: String,
    /// New password.
    #[validate(length(min = 1, message = "New password is required"))]
    pub new_password: String,
}

/// Review submission request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRequest {
    /// Reviewer identity.
    pub user: String,
    /// Star rating, 1–5.
    pub rating: i32,
    /// Free-text comment.
    #[serde(default)]
    pub comment: String,
}

/// Order status update request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusRequest {
    /// New fulfilment status.
    pub status: String,
}

/// Coupon validation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateCouponRequest {
    /// Redemption code.
    pub code: String,
    /// Current cart total.
    pub cart_total: f64,
}

/// Security-log query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityLogQuery {
    /// Maximum number of entries to return.
    pub limit: Option<i64>,
}
