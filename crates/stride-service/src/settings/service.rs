//! Settings operations over the lazily created singleton row.

use std::sync::Arc;

use tracing::warn;

use stride_core::error::AppError;
use stride_database::store::{SecurityLogStore, SettingsStore};
use stride_entity::security::{NewSecurityEvent, Outcome, Severity, event};
use stride_entity::settings::{SettingsUpdate, StoreSettings};

/// Handles reads and updates of the store-settings singleton.
#[derive(Clone)]
pub struct SettingsService {
    /// Settings persistence.
    settings: Arc<dyn SettingsStore>,
    /// Security event log.
    security_log: Arc<dyn SecurityLogStore>,
}

impl SettingsService {
    /// Creates a new settings service.
    pub fn new(settings: Arc<dyn SettingsStore>, security_log: Arc<dyn SecurityLogStore>) -> Self {
        Self {
            settings,
            security_log,
        }
    }

    /// Fetches the settings, creating the row with defaults on first
    /// read.
    pub async fn get(&self) -> Result<StoreSettings, AppError> {
        self.settings.get_or_create_default().await
    }

    /// Applies a partial update to the settings.
    pub async fn update(
        &self,
        actor_email: &str,
        update: &SettingsUpdate,
    ) -> Result<StoreSettings, AppError> {
        let settings = self.settings.update(update).await?;

        self.record(NewSecurityEvent {
            event: event::SETTINGS_UPDATE.to_string(),
            user_email: actor_email.to_string(),
            ip_address: None,
            details: Some("System settings modified".to_string()),
            severity: Severity::Medium,
            outcome: Outcome::Success,
        })
        .await;

        Ok(settings)
    }

    /// Best-effort security-event write.
    async fn record(&self, event: NewSecurityEvent) {
        if let Err(e) = self.security_log.append(&event).await {
            warn!(error = %e, "Failed to write security event");
        }
    }
}
