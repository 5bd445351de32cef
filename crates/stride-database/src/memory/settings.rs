//! In-memory store-settings singleton.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use tokio::sync::RwLock;

use stride_core::result::AppResult;
use stride_entity::settings::{SettingsUpdate, StoreSettings};

use crate::store::SettingsStore;

/// Settings store held in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    settings: Arc<RwLock<Option<StoreSettings>>>,
}

impl MemorySettingsStore {
    /// Create an empty settings store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn get_or_create_default(&self) -> AppResult<StoreSettings> {
        let mut slot = self.settings.write().await;
        Ok(slot
            .get_or_insert_with(|| StoreSettings::default_values(Utc::now()))
            .clone())
    }

    async fn update(&self, update: &SettingsUpdate) -> AppResult<StoreSettings> {
        let mut slot = self.settings.write().await;
        let settings = slot.get_or_insert_with(|| StoreSettings::default_values(Utc::now()));

        if let Some(store_name) = &update.store_name {
            settings.store_name = store_name.clone();
        }
        if let Some(store_email) = &update.store_email {
            settings.store_email = store_email.clone();
        }
        if let Some(currency) = &update.currency {
            settings.currency = currency.clone();
        }
        if let Some(timezone) = &update.timezone {
            settings.timezone = timezone.clone();
        }
        if let Some(notifications) = &update.notifications {
            settings.notifications = Json(notifications.clone());
        }
        if let Some(timeout) = update.session_timeout_minutes {
            settings.session_timeout_minutes = timeout;
        }
        if let Some(hero_image) = &update.hero_image {
            settings.hero_image = hero_image.clone();
        }
        if let Some(hero_title) = &update.hero_title {
            settings.hero_title = hero_title.clone();
        }
        if let Some(hero_subtitle) = &update.hero_subtitle {
            settings.hero_subtitle = hero_subtitle.clone();
        }
        settings.updated_at = Utc::now();
        Ok(settings.clone())
    }
}
