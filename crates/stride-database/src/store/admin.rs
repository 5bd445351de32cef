//! Admin account store trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use stride_core::result::AppResult;
use stride_entity::admin::{Admin, AdminProfileUpdate, LoginFailure, NewAdmin};

/// Persistence operations for admin accounts, including the lockout and
/// password-reset state transitions.
#[async_trait]
pub trait AdminStore: Send + Sync {
    /// Create a new admin account.
    async fn create(&self, data: &NewAdmin) -> AppResult<Admin>;

    /// Find an admin by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Admin>>;

    /// Find an admin by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>>;

    /// Update profile fields; absent fields are left unchanged.
    async fn update_profile(&self, id: Uuid, update: &AdminProfileUpdate) -> AppResult<Admin>;

    /// Replace the stored password hash.
    async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<()>;

    /// Record one failed login attempt as a single atomic transition.
    ///
    /// Increments the attempt counter; when the new count reaches
    /// `max_attempts` the account is locked until `lock_until` and the
    /// counter is reset to 0 in the same write. A stale, already-expired
    /// lock is cleared on non-locking failures.
    async fn record_login_failure(
        &self,
        id: Uuid,
        max_attempts: i32,
        lock_until: DateTime<Utc>,
    ) -> AppResult<LoginFailure>;

    /// Reset the attempt counter to 0 and clear any lock.
    async fn clear_lock_state(&self, id: Uuid) -> AppResult<()>;

    /// Store a reset-token digest with its expiry, replacing any
    /// outstanding token.
    async fn set_reset_token(
        &self,
        id: Uuid,
        digest: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<()>;

    /// Atomically consume an unexpired reset token.
    ///
    /// Matches an admin whose stored digest equals `digest` and whose
    /// expiry is still in the future; sets the new password hash, clears
    /// both reset fields and all lock state in the same write. Returns
    /// `None` when no admin matches (wrong or expired token) — callers
    /// must not distinguish the two.
    async fn consume_reset_token(
        &self,
        digest: &str,
        new_password_hash: &str,
    ) -> AppResult<Option<Admin>>;
}
