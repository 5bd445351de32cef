//! In-memory security event log store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use stride_core::result::AppResult;
use stride_entity::security::{NewSecurityEvent, SecurityEvent};

use crate::store::SecurityLogStore;

/// Security log held in process memory. Append-only: the backing vector
/// is only ever pushed to.
#[derive(Debug, Clone, Default)]
pub struct MemorySecurityLogStore {
    events: Arc<RwLock<Vec<SecurityEvent>>>,
}

impl MemorySecurityLogStore {
    /// Create an empty security log.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SecurityLogStore for MemorySecurityLogStore {
    async fn append(&self, data: &NewSecurityEvent) -> AppResult<SecurityEvent> {
        let mut events = self.events.write().await;
        let event = SecurityEvent {
            id: Uuid::new_v4(),
            event: data.event.clone(),
            user_email: data.user_email.clone(),
            ip_address: data.ip_address.clone(),
            details: data.details.clone(),
            severity: data.severity,
            outcome: data.outcome,
            created_at: Utc::now(),
        };
        events.push(event.clone());
        Ok(event)
    }

    async fn recent(&self, limit: i64) -> AppResult<Vec<SecurityEvent>> {
        let events = self.events.read().await;
        Ok(events
            .iter()
            .rev()
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }
}
