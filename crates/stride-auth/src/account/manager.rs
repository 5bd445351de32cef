//! Admin account manager — login, lockout, 2FA, and password reset.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use stride_core::config::AuthConfig;
use stride_core::error::AppError;
use stride_database::store::{AdminStore, SecurityLogStore};
use stride_entity::admin::{Admin, AdminProfileUpdate, NewAdmin};
use stride_entity::security::{NewSecurityEvent, Outcome, Severity, event};

use crate::password::{PasswordHasher, PasswordValidator};
use crate::reset::{self, ResetToken};
use crate::token::TokenEncoder;

/// Result of a credential-valid login attempt.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    /// Credentials accepted; a bearer token was issued.
    Success {
        /// Signed bearer token.
        token: String,
        /// The authenticated admin.
        admin: Admin,
    },
    /// Credentials accepted but the second factor is still outstanding.
    /// No token is issued yet.
    TwoFactorRequired {
        /// Temporary identifier to present with the code (the admin's
        /// own id).
        temp_id: Uuid,
    },
}

/// Result of a password-reset request.
#[derive(Debug, Clone)]
pub struct PasswordResetRequest {
    /// Generic message, identical whether or not the account exists.
    pub message: String,
    /// The raw secret, present only when `auth.expose_reset_token` is
    /// enabled (development convenience — production delivery must go
    /// out-of-band).
    pub dev_token: Option<String>,
}

/// Drives the admin login-attempt tracker, the simulated two-factor
/// gate, and the reset-token lifecycle. Every security-relevant
/// transition appends to the security event log.
#[derive(Clone)]
pub struct AdminAccountManager {
    /// Admin persistence.
    admins: Arc<dyn AdminStore>,
    /// Security event log.
    security_log: Arc<dyn SecurityLogStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    validator: Arc<PasswordValidator>,
    /// Bearer-token encoder.
    tokens: Arc<TokenEncoder>,
    /// Auth configuration.
    config: AuthConfig,
}

impl std::fmt::Debug for AdminAccountManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAccountManager")
            .field("config", &self.config)
            .finish()
    }
}

impl AdminAccountManager {
    /// Creates a new account manager with all required dependencies.
    pub fn new(
        admins: Arc<dyn AdminStore>,
        security_log: Arc<dyn SecurityLogStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        tokens: Arc<TokenEncoder>,
        config: AuthConfig,
    ) -> Self {
        Self {
            admins,
            security_log,
            hasher,
            validator,
            tokens,
            config,
        }
    }

    /// Registers a new admin account and issues a token.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(Admin, String), AppError> {
        if self.admins.find_by_email(email).await?.is_some() {
            return Err(AppError::policy("Admin already exists"));
        }

        let password_hash = self.hasher.hash_password(password)?;
        let admin = self
            .admins
            .create(&NewAdmin {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        let token = self.tokens.issue(admin.id, true)?;
        info!(admin_id = %admin.id, "Admin registered");
        Ok((admin, token))
    }

    /// Performs the complete admin login flow:
    ///
    /// 1. Look up the account (unknown email → generic failure)
    /// 2. Refuse while locked, without consulting the password
    /// 3. Verify the password; on mismatch record the failure and lock
    ///    on the configured attempt
    /// 4. On match clear the lock state, then either demand the second
    ///    factor or issue a token
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let Some(admin) = self.admins.find_by_email(email).await? else {
            self.record(NewSecurityEvent {
                event: event::LOGIN_FAILURE.to_string(),
                user_email: email.to_string(),
                ip_address: None,
                details: Some("Non-existent admin email".to_string()),
                severity: Severity::Medium,
                outcome: Outcome::Failure,
            })
            .await;
            return Err(AppError::policy("Invalid credentials"));
        };

        // Step 2: wall-clock lock check against the stored expiry; the
        // password is not consulted at all while locked.
        let now = Utc::now();
        if admin.is_locked(now) {
            let minutes_left = admin.lock_remaining_minutes(now);
            self.record(NewSecurityEvent {
                event: event::LOGIN_BLOCKED.to_string(),
                user_email: admin.email.clone(),
                ip_address: None,
                details: Some(format!("Locked for {minutes_left} more minutes")),
                severity: Severity::High,
                outcome: Outcome::Failure,
            })
            .await;
            return Err(AppError::forbidden(format!(
                "Account locked. Please try again in {minutes_left} minutes."
            )));
        }

        // Step 3: password check.
        let matches = self
            .hasher
            .verify_password(password, &admin.password_hash)?;

        if !matches {
            return Err(self.handle_failed_login(&admin).await?);
        }

        // Step 4: success clears both the counter and any expired lock.
        self.admins.clear_lock_state(admin.id).await?;

        if admin.two_factor_enabled {
            self.record(NewSecurityEvent {
                event: event::TWO_FACTOR_REQUIRED.to_string(),
                user_email: admin.email.clone(),
                ip_address: None,
                details: Some("Waiting for 2FA verification".to_string()),
                severity: Severity::Low,
                outcome: Outcome::Success,
            })
            .await;
            return Ok(LoginOutcome::TwoFactorRequired { temp_id: admin.id });
        }

        self.record(NewSecurityEvent {
            event: event::LOGIN_SUCCESS.to_string(),
            user_email: admin.email.clone(),
            ip_address: None,
            details: None,
            severity: Severity::Low,
            outcome: Outcome::Success,
        })
        .await;

        let token = self.tokens.issue(admin.id, true)?;
        info!(admin_id = %admin.id, "Admin login successful");
        Ok(LoginOutcome::Success { token, admin })
    }

    /// Verifies the simulated second factor and issues a token.
    ///
    /// A mismatch never touches the lock state.
    pub async fn verify_two_factor(
        &self,
        temp_id: Uuid,
        code: &str,
    ) -> Result<(Admin, String), AppError> {
        let admin = self
            .admins
            .find_by_id(temp_id)
            .await?
            .ok_or_else(|| AppError::not_found("Admin not found"))?;

        if code != self.config.two_factor_code {
            self.record(NewSecurityEvent {
                event: event::TWO_FACTOR_FAILURE.to_string(),
                user_email: admin.email.clone(),
                ip_address: None,
                details: Some("Invalid 2FA code entered".to_string()),
                severity: Severity::Medium,
                outcome: Outcome::Failure,
            })
            .await;
            return Err(AppError::policy("Invalid 2FA code"));
        }

        self.record(NewSecurityEvent {
            event: event::LOGIN_SUCCESS.to_string(),
            user_email: admin.email.clone(),
            ip_address: None,
            details: Some("Verified via 2FA".to_string()),
            severity: Severity::Low,
            outcome: Outcome::Success,
        })
        .await;

        let token = self.tokens.issue(admin.id, true)?;
        info!(admin_id = %admin.id, "Admin login successful via 2FA");
        Ok((admin, token))
    }

    /// Issues a password-reset secret for the given email.
    ///
    /// Unknown emails receive the same generic message with no stored
    /// record and no log entry, so the endpoint cannot be used to probe
    /// which accounts exist.
    pub async fn forgot_password(&self, email: &str) -> Result<PasswordResetRequest, AppError> {
        let generic = "If an account exists, a reset link has been sent.".to_string();

        let Some(admin) = self.admins.find_by_email(email).await? else {
            return Ok(PasswordResetRequest {
                message: generic,
                dev_token: None,
            });
        };

        let token = ResetToken::generate();
        let expires_at = Utc::now() + Duration::minutes(self.config.reset_token_ttl_minutes as i64);

        self.admins
            .set_reset_token(admin.id, &token.digest, expires_at)
            .await?;

        self.record(NewSecurityEvent {
            event: event::PASSWORD_RESET_REQUEST.to_string(),
            user_email: admin.email.clone(),
            ip_address: None,
            details: Some("Password reset link requested".to_string()),
            severity: Severity::Low,
            outcome: Outcome::Success,
        })
        .await;

        info!(admin_id = %admin.id, "Password reset token issued");

        Ok(PasswordResetRequest {
            message: generic,
            dev_token: self.config.expose_reset_token.then_some(token.raw),
        })
    }

    /// Consumes a reset secret and sets the new password.
    ///
    /// A successful reset is also a recovery path out of lockout: the
    /// attempt counter and lock are cleared in the same store write. The
    /// response does not distinguish a wrong token from an expired one.
    pub async fn reset_password(&self, raw_token: &str, new_password: &str) -> Result<(), AppError> {
        self.validator.validate(new_password)?;

        let digest = reset::digest_of(raw_token);
        let new_hash = self.hasher.hash_password(new_password)?;

        let Some(admin) = self.admins.consume_reset_token(&digest, &new_hash).await? else {
            return Err(AppError::policy("Invalid or expired token"));
        };

        self.record(NewSecurityEvent {
            event: event::PASSWORD_RESET_SUCCESS.to_string(),
            user_email: admin.email.clone(),
            ip_address: None,
            details: Some("Password reset completed via token".to_string()),
            severity: Severity::Medium,
            outcome: Outcome::Success,
        })
        .await;

        info!(admin_id = %admin.id, "Password reset completed");
        Ok(())
    }

    /// Updates an admin's profile fields.
    pub async fn update_profile(
        &self,
        id: Uuid,
        update: &AdminProfileUpdate,
    ) -> Result<Admin, AppError> {
        self.admins.update_profile(id, update).await
    }

    /// Changes an admin's password after verifying the current one.
    pub async fn change_password(
        &self,
        id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let admin = self
            .admins
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Admin not found"))?;

        self.validator.validate(new_password)?;

        let matches = self
            .hasher
            .verify_password(current_password, &admin.password_hash)?;
        if !matches {
            return Err(AppError::policy("Current password incorrect"));
        }

        self.validator
            .validate_not_same(current_password, new_password)?;

        let new_hash = self.hasher.hash_password(new_password)?;
        self.admins.update_password(id, &new_hash).await?;

        self.record(NewSecurityEvent {
            event: event::PASSWORD_CHANGE.to_string(),
            user_email: admin.email.clone(),
            ip_address: None,
            details: None,
            severity: Severity::Low,
            outcome: Outcome::Success,
        })
        .await;

        Ok(())
    }

    /// Fetches an admin by id.
    pub async fn get(&self, id: Uuid) -> Result<Admin, AppError> {
        self.admins
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Admin not found"))
    }

    /// Records one failed attempt and returns the error to surface.
    async fn handle_failed_login(&self, admin: &Admin) -> Result<AppError, AppError> {
        let lock_until =
            Utc::now() + Duration::minutes(self.config.lockout_duration_minutes as i64);

        let failure = self
            .admins
            .record_login_failure(admin.id, self.config.max_failed_attempts, lock_until)
            .await?;

        if let Some(locked_until) = failure.locked_until {
            warn!(
                admin_id = %admin.id,
                email = %admin.email,
                locked_until = %locked_until,
                "Admin account locked after repeated failures"
            );
            self.record(NewSecurityEvent {
                event: event::ACCOUNT_LOCKOUT.to_string(),
                user_email: admin.email.clone(),
                ip_address: None,
                details: None,
                severity: Severity::Critical,
                outcome: Outcome::Failure,
            })
            .await;
            return Ok(AppError::policy(format!(
                "Too many failed attempts. Account locked for {} minutes.",
                self.config.lockout_duration_minutes
            )));
        }

        self.record(NewSecurityEvent {
            event: event::LOGIN_FAILURE.to_string(),
            user_email: admin.email.clone(),
            ip_address: None,
            details: Some(format!("Failed attempt {}", failure.attempts)),
            severity: Severity::Low,
            outcome: Outcome::Failure,
        })
        .await;

        Ok(AppError::policy("Invalid credentials"))
    }

    /// Best-effort security-event write; a logging failure never masks
    /// the primary response.
    async fn record(&self, event: NewSecurityEvent) {
        if let Err(e) = self.security_log.append(&event).await {
            warn!(error = %e, "Failed to write security event");
        }
    }
}
