//! Shopper account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered shopper.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique account identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address (unique, login identifier).
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new shopper account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
}

/// Data for updating a shopper's profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfileUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
}
