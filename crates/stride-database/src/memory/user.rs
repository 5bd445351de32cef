//! In-memory shopper account store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use stride_core::error::AppError;
use stride_core::result::AppResult;
use stride_entity::user::{NewUser, User, UserProfileUpdate};

use crate::store::UserStore;

/// Shopper store held in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MemoryUserStore {
    /// Create an empty user store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, data: &NewUser) -> AppResult<User> {
        let mut users = self.users.write().await;

        if users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&data.email))
        {
            return Err(AppError::conflict("User already exists"));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            created_at: now,
            updated_at: now,
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }

    async fn update_profile(&self, id: Uuid, update: &UserProfileUpdate) -> AppResult<User> {
        let mut users = self.users.write().await;

        if let Some(email) = &update.email {
            if users
                .values()
                .any(|u| u.id != id && u.email.eq_ignore_ascii_case(email))
            {
                return Err(AppError::conflict("Email is already in use"));
            }
        }

        let user = users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if let Some(name) = &update.name {
            user.name = name.clone();
        }
        if let Some(email) = &update.email {
            user.email = email.clone();
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<()> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("User not found"))?;
        user.password_hash = password_hash.to_string();
        user.updated_at = Utc::now();
        Ok(())
    }
}
