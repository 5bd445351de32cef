//! Shopper account operations — registration, login, profile, password.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use stride_auth::password::{PasswordHasher, PasswordValidator};
use stride_auth::token::TokenEncoder;
use stride_core::error::AppError;
use stride_database::store::UserStore;
use stride_entity::user::{NewUser, User, UserProfileUpdate};

/// Handles shopper registration, login, and self-service.
#[derive(Clone)]
pub struct UserService {
    /// Shopper persistence.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    validator: Arc<PasswordValidator>,
    /// Bearer-token encoder.
    tokens: Arc<TokenEncoder>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        tokens: Arc<TokenEncoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
            tokens,
        }
    }

    /// Registers a new shopper and issues a token.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(User, String), AppError> {
        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::policy("User already exists"));
        }

        let password_hash = self.hasher.hash_password(password)?;
        let user = self
            .users
            .create(&NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        let token = self.tokens.issue(user.id, false)?;
        info!(user_id = %user.id, "User registered");
        Ok((user, token))
    }

    /// Authenticates a shopper and issues a token. Failures are the
    /// generic "Invalid credentials" regardless of which factor failed.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String), AppError> {
        let Some(user) = self.users.find_by_email(email).await? else {
            return Err(AppError::policy("Invalid credentials"));
        };

        let matches = self.hasher.verify_password(password, &user.password_hash)?;
        if !matches {
            return Err(AppError::policy("Invalid credentials"));
        }

        let token = self.tokens.issue(user.id, false)?;
        Ok((user, token))
    }

    /// Lists all shoppers, newest first.
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        self.users.find_all().await
    }

    /// Updates a shopper's profile.
    pub async fn update_profile(
        &self,
        id: Uuid,
        update: &UserProfileUpdate,
    ) -> Result<User, AppError> {
        self.users.update_profile(id, update).await
    }

    /// Changes a shopper's password after verifying the current one.
    pub async fn change_password(
        &self,
        id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let matches = self
            .hasher
            .verify_password(current_password, &user.password_hash)?;
        if !matches {
            return Err(AppError::policy("Incorrect current password"));
        }

        self.validator.validate(new_password)?;
        self.validator
            .validate_not_same(current_password, new_password)?;

        let new_hash = self.hasher.hash_password(new_password)?;
        self.users.update_password(id, &new_hash).await?;

        info!(user_id = %id, "User password changed");
        Ok(())
    }
}
