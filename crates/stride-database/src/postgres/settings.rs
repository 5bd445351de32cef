//! PostgreSQL store-settings singleton.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;

use stride_core::error::{AppError, ErrorKind};
use stride_core::result::AppResult;
use stride_entity::settings::{SettingsUpdate, StoreSettings};

use crate::store::SettingsStore;

/// Settings store backed by PostgreSQL.
///
/// The table carries a constant `singleton` column with a unique index,
/// which makes lazy creation idempotent under concurrency.
#[derive(Debug, Clone)]
pub struct PgSettingsStore {
    pool: PgPool,
}

impl PgSettingsStore {
    /// Create a new settings store on the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsStore for PgSettingsStore {
    async fn get_or_create_default(&self) -> AppResult<StoreSettings> {
        if let Some(settings) =
            sqlx::query_as::<_, StoreSettings>("SELECT * FROM store_settings LIMIT 1")
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to read settings", e)
                })?
        {
            return Ok(settings);
        }

        sqlx::query("INSERT INTO store_settings DEFAULT VALUES ON CONFLICT (singleton) DO NOTHING")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to create settings", e)
            })?;

        sqlx::query_as::<_, StoreSettings>("SELECT * FROM store_settings LIMIT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to read settings", e))
    }

    async fn update(&self, update: &SettingsUpdate) -> AppResult<StoreSettings> {
        let current = self.get_or_create_default().await?;

        sqlx::query_as::<_, StoreSettings>(
            "UPDATE store_settings SET \
                 store_name = COALESCE($2, store_name), \
                 store_email = COALESCE($3, store_email), \
                 currency = COALESCE($4, currency), \
                 timezone = COALESCE($5, timezone), \
                 notifications = COALESCE($6, notifications), \
                 session_timeout_minutes = COALESCE($7, session_timeout_minutes), \
                 hero_image = COALESCE($8, hero_image), \
                 hero_title = COALESCE($9, hero_title), \
                 hero_subtitle = COALESCE($10, hero_subtitle), \
                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(current.id)
        .bind(&update.store_name)
        .bind(&update.store_email)
        .bind(&update.currency)
        .bind(&update.timezone)
        .bind(update.notifications.clone().map(Json))
        .bind(update.session_timeout_minutes)
        .bind(&update.hero_image)
        .bind(&update.hero_title)
        .bind(&update.hero_subtitle)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update settings", e))
    }
}
