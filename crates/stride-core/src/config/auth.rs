//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for bearer-token signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Bearer token TTL in days.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_days: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Maximum failed login attempts before lockout.
    #[serde(default = "default_max_failed")]
    pub max_failed_attempts: i32,
    /// Account lockout duration in minutes.
    #[serde(default = "default_lockout")]
    pub lockout_duration_minutes: u64,
    /// Password-reset token TTL in minutes.
    #[serde(default = "default_reset_ttl")]
    pub reset_token_ttl_minutes: u64,
    /// Accepted second-factor code (simulated verifier).
    #[serde(default = "default_two_factor_code")]
    pub two_factor_code: String,
    /// Return the raw reset secret in the API response (development only).
    #[serde(default)]
    pub expose_reset_token: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_days: default_token_ttl(),
            password_min_length: default_password_min(),
            max_failed_attempts: default_max_failed(),
            lockout_duration_minutes: default_lockout(),
            reset_token_ttl_minutes: default_reset_ttl(),
            two_factor_code: default_two_factor_code(),
            expose_reset_token: false,
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    7
}

fn default_password_min() -> usize {
    8
}

fn default_max_failed() -> i32 {
    5
}

fn default_lockout() -> u64 {
    30
}

fn default_reset_ttl() -> u64 {
    30
}

fn default_two_factor_code() -> String {
    "123456".to_string()
}
