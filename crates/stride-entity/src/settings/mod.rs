//! Store settings singleton entity.

pub mod model;

pub use model::{NotificationPrefs, SettingsUpdate, StoreSettings};
