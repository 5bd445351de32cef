//! Store settings entity model.
//!
//! A single row, created lazily with defaults on first read through
//! `SettingsStore::get_or_create_default`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

/// Storefront-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StoreSettings {
    /// Row identifier.
    pub id: Uuid,
    /// Store display name.
    pub store_name: String,
    /// Store contact email.
    pub store_email: String,
    /// Display currency label.
    pub currency: String,
    /// Display timezone label.
    pub timezone: String,
    /// Admin notification toggles.
    pub notifications: Json<NotificationPrefs>,
    /// Admin session timeout in minutes.
    pub session_timeout_minutes: i32,
    /// Landing hero image URL.
    pub hero_image: String,
    /// Landing hero title.
    pub hero_title: String,
    /// Landing hero subtitle.
    pub hero_subtitle: String,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Admin notification toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPrefs {
    /// Notify on sales.
    pub sales: bool,
    /// Send periodic reports.
    pub reports: bool,
    /// Notify on low stock.
    pub stock: bool,
    /// Notify on new signups.
    pub signups: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            sales: true,
            reports: true,
            stock: false,
            signups: false,
        }
    }
}

impl StoreSettings {
    /// The defaults used when the singleton row does not exist yet.
    pub fn default_values(now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            store_name: "Stride Footwear".to_string(),
            store_email: "admin@stride.shop".to_string(),
            currency: "INR (₹) - Indian Rupee".to_string(),
            timezone: "(GMT+05:30) IST - Kolkata".to_string(),
            notifications: Json(NotificationPrefs::default()),
            session_timeout_minutes: 15,
            hero_image: String::new(),
            hero_title: "STEP INTO \nTHE FUTURE.".to_string(),
            hero_subtitle: "The next generation of urban footwear is here.".to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial settings update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    /// New store name.
    pub store_name: Option<String>,
    /// New contact email.
    pub store_email: Option<String>,
    /// New currency label.
    pub currency: Option<String>,
    /// New timezone label.
    pub timezone: Option<String>,
    /// New notification toggles.
    pub notifications: Option<NotificationPrefs>,
    /// New session timeout.
    pub session_timeout_minutes: Option<i32>,
    /// New hero image URL.
    pub hero_image: Option<String>,
    /// New hero title.
    pub hero_title: Option<String>,
    /// New hero subtitle.
    pub hero_subtitle: Option<String>,
}
