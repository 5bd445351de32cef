//! In-memory admin store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use stride_core::error::AppError;
use stride_core::result::AppResult;
use stride_entity::admin::{Admin, AdminProfileUpdate, LoginFailure, NewAdmin, Role};

use crate::store::AdminStore;

/// Admin store held in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryAdminStore {
    admins: Arc<RwLock<HashMap<Uuid, Admin>>>,
}

impl MemoryAdminStore {
    /// Create an empty admin store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdminStore for MemoryAdminStore {
    async fn create(&self, data: &NewAdmin) -> AppResult<Admin> {
        let mut admins = self.admins.write().await;

        if admins
            .values()
            .any(|a| a.email.eq_ignore_ascii_case(&data.email))
        {
            return Err(AppError::conflict("Admin already exists"));
        }

        let now = Utc::now();
        let admin = Admin {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            role: Role::Admin,
            bio: String::new(),
            avatar: String::new(),
            two_factor_enabled: false,
            failed_login_attempts: 0,
            locked_until: None,
            reset_token_digest: None,
            reset_token_expires: None,
            created_at: now,
            updated_at: now,
        };
        admins.insert(admin.id, admin.clone());
        Ok(admin)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Admin>> {
        Ok(self.admins.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        Ok(self
            .admins
            .read()
            .await
            .values()
            .find(|a| a.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn update_profile(&self, id: Uuid, update: &AdminProfileUpdate) -> AppResult<Admin> {
        let mut admins = self.admins.write().await;
        let admin = admins
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Admin not found"))?;

        if let Some(name) = &update.name {
            admin.name = name.clone();
        }
        if let Some(bio) = &update.bio {
            admin.bio = bio.clone();
        }
        if let Some(avatar) = &update.avatar {
            admin.avatar = avatar.clone();
        }
        if let Some(enabled) = update.two_factor_enabled {
            admin.two_factor_enabled = enabled;
        }
        admin.updated_at = Utc::now();
        Ok(admin.clone())
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<()> {
        let mut admins = self.admins.write().await;
        let admin = admins
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Admin not found"))?;
        admin.password_hash = password_hash.to_string();
        admin.updated_at = Utc::now();
        Ok(())
    }

    async fn record_login_failure(
        &self,
        id: Uuid,
        max_attempts: i32,
        lock_until: DateTime<Utc>,
    ) -> AppResult<LoginFailure> {
        let mut admins = self.admins.write().await;
        let admin = admins
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Admin not found"))?;

        if admin.failed_login_attempts + 1 >= max_attempts {
            admin.failed_login_attempts = 0;
            admin.locked_until = Some(lock_until);
        } else {
            admin.failed_login_attempts += 1;
            admin.locked_until = None;
        }
        admin.updated_at = Utc::now();

        Ok(LoginFailure {
            attempts: admin.failed_login_attempts,
            locked_until: admin.locked_until,
        })
    }

    async fn clear_lock_state(&self, id: Uuid) -> AppResult<()> {
        let mut admins = self.admins.write().await;
        let admin = admins
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Admin not found"))?;
        admin.failed_login_attempts = 0;
        admin.locked_until = None;
        admin.updated_at = Utc::now();
        Ok(())
    }

    async fn set_reset_token(
        &self,
        id: Uuid,
        digest: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<()> {
        let mut admins = self.admins.write().await;
        let admin = admins
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Admin not found"))?;
        admin.reset_token_digest = Some(digest.to_string());
        admin.reset_token_expires = Some(expires_at);
        admin.updated_at = Utc::now();
        Ok(())
    }

    async fn consume_reset_token(
        &self,
        digest: &str,
        new_password_hash: &str,
    ) -> AppResult<Option<Admin>> {
        let mut admins = self.admins.write().await;
        let now = Utc::now();

        let admin = admins.values_mut().find(|a| {
            a.reset_token_digest.as_deref() == Some(digest)
                && matches!(a.reset_token_expires, Some(exp) if exp > now)
        });

        let Some(admin) = admin else {
            return Ok(None);
        };

        admin.password_hash = new_password_hash.to_string();
        admin.reset_token_digest = None;
        admin.reset_token_expires = None;
        admin.failed_login_attempts = 0;
        admin.locked_until = None;
        admin.updated_at = now;
        Ok(Some(admin.clone()))
    }
}
