//! Shopper account store trait.

use async_trait::async_trait;
use uuid::Uuid;

use stride_core::result::AppResult;
use stride_entity::user::{NewUser, User, UserProfileUpdate};

/// Persistence operations for shopper accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create a new shopper account.
    async fn create(&self, data: &NewUser) -> AppResult<User>;

    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List all users, newest first.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Update profile fields; absent fields are left unchanged.
    async fn update_profile(&self, id: Uuid, update: &UserProfileUpdate) -> AppResult<User>;

    /// Replace the stored password hash.
    async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<()>;
}
