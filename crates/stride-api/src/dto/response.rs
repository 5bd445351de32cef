//! Response DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stride_entity::admin::Admin;
use stride_entity::coupon::Coupon;
use stride_entity::user::User;

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Account summary embedded in auth responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    /// Account ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Whether this is an admin account.
    pub is_admin: bool,
    /// Admin bio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Admin avatar URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Whether the second factor is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two_factor_enabled: Option<bool>,
}

impl AccountSummary {
    /// Summary for a shopper account.
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            is_admin: false,
            bio: None,
            avatar: None,
            two_factor_enabled: None,
        }
    }

    /// Summary for an admin account.
    pub fn from_admin(admin: &Admin) -> Self {
        Self {
            id: admin.id,
            name: admin.name.clone(),
            email: admin.email.clone(),
            is_admin: true,
            bio: Some(admin.bio.clone()),
            avatar: Some(admin.avatar.clone()),
            two_factor_enabled: Some(admin.two_factor_enabled),
        }
    }
}

/// Successful authentication response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed bearer token.
    pub token: String,
    /// The authenticated account.
    pub user: AccountSummary,
}

/// Login response when the second factor is still outstanding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwoFactorChallenge {
    /// Always true; marks the challenge response shape.
    #[serde(rename = "requires2FA")]
    pub requires_2fa: bool,
    /// Temporary identifier to present with the code.
    #[serde(rename = "tempId")]
    pub temp_id: Uuid,
    /// Operator guidance.
    pub message: String,
}

/// Password-reset issuance response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordResponse {
    /// Generic message (identical whether or not the account exists).
    pub message: String,
    /// Raw reset secret, present only in development configurations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_token: Option<String>,
}

/// Coupon validation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateCouponResponse {
    /// Always true on a successful validation.
    pub success: bool,
    /// Discount amount, capped at the cart total.
    pub discount: f64,
    /// The matched coupon.
    pub coupon: Coupon,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
