//! Security event log store trait.

use async_trait::async_trait;

use stride_core::result::AppResult;
use stride_entity::security::{NewSecurityEvent, SecurityEvent};

/// Append-only persistence for security events. Entries are never
/// mutated or deleted.
#[async_trait]
pub trait SecurityLogStore: Send + Sync {
    /// Append one event.
    async fn append(&self, data: &NewSecurityEvent) -> AppResult<SecurityEvent>;

    /// The most recent `limit` events, newest first.
    async fn recent(&self, limit: i64) -> AppResult<Vec<SecurityEvent>>;
}
