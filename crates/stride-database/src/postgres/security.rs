//! PostgreSQL security event log store.

use async_trait::async_trait;
use sqlx::PgPool;

use stride_core::error::{AppError, ErrorKind};
use stride_core::result::AppResult;
use stride_entity::security::{NewSecurityEvent, SecurityEvent};

use crate::store::SecurityLogStore;

/// Security log store backed by PostgreSQL. Insert-only; no update or
/// delete statement exists against this table.
#[derive(Debug, Clone)]
pub struct PgSecurityLogStore {
    pool: PgPool,
}

impl PgSecurityLogStore {
    /// Create a new security log store on the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SecurityLogStore for PgSecurityLogStore {
    async fn append(&self, data: &NewSecurityEvent) -> AppResult<SecurityEvent> {
        sqlx::query_as::<_, SecurityEvent>(
            "INSERT INTO security_log (event, user_email, ip_address, details, severity, outcome) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&data.event)
        .bind(&data.user_email)
        .bind(&data.ip_address)
        .bind(&data.details)
        .bind(data.severity)
        .bind(data.outcome)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to append security event", e)
        })
    }

    async fn recent(&self, limit: i64) -> AppResult<Vec<SecurityEvent>> {
        sqlx::query_as::<_, SecurityEvent>(
            "SELECT * FROM security_log ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list security events", e)
        })
    }
}
