//! Store settings access.

pub mod service;

pub use service::SettingsService;
