//! Store settings singleton trait.

use async_trait::async_trait;

use stride_core::result::AppResult;
use stride_entity::settings::{SettingsUpdate, StoreSettings};

/// Persistence operations for the single store-settings row.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Fetch the settings row, creating it with defaults if absent.
    /// Idempotent: concurrent callers observe the same row.
    async fn get_or_create_default(&self) -> AppResult<StoreSettings>;

    /// Apply a partial update to the settings row, creating it first if
    /// absent.
    async fn update(&self, update: &SettingsUpdate) -> AppResult<StoreSettings>;
}
