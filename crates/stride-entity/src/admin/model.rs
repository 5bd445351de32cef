//! Admin account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::Role;

/// A store administrator account.
///
/// Carries the lockout state (`failed_login_attempts` / `locked_until`)
/// and the password-reset state (`reset_token_digest` /
/// `reset_token_expires`). The two reset fields are always set and
/// cleared together; a lock and a non-zero attempt counter never coexist.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    /// Unique account identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address (unique, login identifier).
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Account role.
    pub role: Role,
    /// Profile bio.
    pub bio: String,
    /// Avatar image URL.
    pub avatar: String,
    /// Whether the simulated second factor gates login.
    pub two_factor_enabled: bool,
    /// Consecutive failed login attempts since the last success or lock.
    pub failed_login_attempts: i32,
    /// Account locked until this time (if locked).
    pub locked_until: Option<DateTime<Utc>>,
    /// SHA-256 digest of the outstanding reset secret, if any.
    #[serde(skip_serializing)]
    pub reset_token_digest: Option<String>,
    /// Expiry of the outstanding reset secret, if any.
    #[serde(skip_serializing)]
    pub reset_token_expires: Option<DateTime<Utc>>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Admin {
    /// Check whether the account is locked at the given instant.
    ///
    /// The comparison is always against the stored expiry, never a cached
    /// value, so reading the lock state cannot extend it.
    pub fn is_locked(&self, now: DateTime<Utc>) -> bool {
        matches!(self.locked_until, Some(until) if until > now)
    }

    /// Remaining whole minutes of an active lock, rounded up.
    ///
    /// Returns 0 when the account is not locked.
    pub fn lock_remaining_minutes(&self, now: DateTime<Utc>) -> i64 {
        match self.locked_until {
            Some(until) if until > now => {
                let secs = (until - now).num_seconds();
                (secs + 59) / 60
            }
            _ => 0,
        }
    }
}

/// Data required to create a new admin account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAdmin {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
}

/// Data for updating an admin's profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminProfileUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New bio.
    pub bio: Option<String>,
    /// New avatar URL.
    pub avatar: Option<String>,
    /// Toggle the second factor.
    pub two_factor_enabled: Option<bool>,
}

/// Outcome of recording one failed login attempt.
///
/// `locked_until` is set exactly when this failure tripped the lockout,
/// in which case `attempts` has been reset to 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoginFailure {
    /// Attempt counter after this failure.
    pub attempts: i32,
    /// Lock expiry, when this failure locked the account.
    pub locked_until: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn admin_locked_for(seconds: i64, now: DateTime<Utc>) -> Admin {
        Admin {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            email: "a@x.com".to_string(),
            password_hash: String::new(),
            role: Role::Admin,
            bio: String::new(),
            avatar: String::new(),
            two_factor_enabled: false,
            failed_login_attempts: 0,
            locked_until: Some(now + Duration::seconds(seconds)),
            reset_token_digest: None,
            reset_token_expires: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_remaining_minutes_rounds_up() {
        let now = Utc::now();
        assert_eq!(admin_locked_for(60, now).lock_remaining_minutes(now), 1);
        assert_eq!(admin_locked_for(61, now).lock_remaining_minutes(now), 2);
        assert_eq!(
            admin_locked_for(30 * 60, now).lock_remaining_minutes(now),
            30
        );
    }

    #[test]
    fn test_expired_lock_is_not_locked() {
        let now = Utc::now();
        let mut admin = admin_locked_for(60, now);
        admin.locked_until = Some(now - Duration::seconds(1));
        assert!(!admin.is_locked(now));
        assert_eq!(admin.lock_remaining_minutes(now), 0);
    }
}
