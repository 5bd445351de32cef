//! Bearer-token claims.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims payload embedded in every bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the account ID.
    pub sub: Uuid,
    /// Whether the subject is an admin account.
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the account ID from the subject claim.
    pub fn account_id(&self) -> Uuid {
        self.sub
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
