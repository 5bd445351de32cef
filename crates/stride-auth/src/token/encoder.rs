//! Bearer-token creation with configurable signing and TTL.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use stride_core::config::AuthConfig;
use stride_core::error::AppError;

use super::claims::Claims;

/// Creates signed bearer tokens.
#[derive(Clone)]
pub struct TokenEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in days.
    ttl_days: i64,
}

impl std::fmt::Debug for TokenEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenEncoder")
            .field("ttl_days", &self.ttl_days)
            .finish()
    }
}

impl TokenEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_days: config.token_ttl_days as i64,
        }
    }

    /// Issues a signed bearer token for the given account.
    pub fn issue(&self, subject: Uuid, is_admin: bool) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::days(self.ttl_days);

        let claims = Claims {
            sub: subject,
            is_admin,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }
}
