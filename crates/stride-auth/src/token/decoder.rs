//! Stateless bearer-token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use stride_core::config::AuthConfig;
use stride_core::error::AppError;

use super::claims::Claims;

/// Validates bearer tokens. Verification is stateless: only the
/// signature and expiry are checked.
#[derive(Clone)]
pub struct TokenDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // seconds of clock-skew tolerance

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a bearer token string.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::unauthorized("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::unauthorized("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::unauthorized("Invalid token signature")
                    }
                    _ => AppError::unauthorized(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::encoder::TokenEncoder;
    use stride_core::config::AuthConfig;
    use uuid::Uuid;

    #[test]
    fn test_issue_and_decode_roundtrip() {
        let config = AuthConfig::default();
        let encoder = TokenEncoder::new(&config);
        let decoder = TokenDecoder::new(&config);

        let subject = Uuid::new_v4();
        let token = encoder.issue(subject, true).unwrap();
        let claims = decoder.decode(&token).unwrap();

        assert_eq!(claims.account_id(), subject);
        assert!(claims.is_admin);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_rejects_wrong_secret() {
        let encoder = TokenEncoder::new(&AuthConfig::default());
        let decoder = TokenDecoder::new(&AuthConfig {
            jwt_secret: "a-different-secret".to_string(),
            ..AuthConfig::default()
        });

        let token = encoder.issue(Uuid::new_v4(), false).unwrap();
        assert!(decoder.decode(&token).is_err());
    }
}
