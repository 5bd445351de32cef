//! Security event log entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

/// An immutable security event. Created, never mutated or deleted;
/// ordered by creation time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SecurityEvent {
    /// Unique entry identifier.
    pub id: Uuid,
    /// Event kind (see [`crate::security::event`]).
    pub event: String,
    /// Email of the subject account.
    pub user_email: String,
    /// Source IP address, when known.
    pub ip_address: Option<String>,
    /// Free-text detail.
    pub details: Option<String>,
    /// Event severity.
    pub severity: Severity,
    /// Event outcome.
    pub outcome: Outcome,
    /// When the event occurred.
    pub created_at: DateTime<Utc>,
}

/// Event severity scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "security_severity", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Routine activity.
    Low,
    /// Noteworthy but expected.
    Medium,
    /// Suspicious activity.
    High,
    /// Active attack indicator or lockout.
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Event outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "security_outcome", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    /// The action succeeded.
    Success,
    /// The action was refused or failed.
    Failure,
    /// The action succeeded with caveats.
    Warning,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "SUCCESS"),
            Self::Failure => write!(f, "FAILURE"),
            Self::Warning => write!(f, "WARNING"),
        }
    }
}

/// Data required to append a security event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSecurityEvent {
    /// Event kind.
    pub event: String,
    /// Email of the subject account.
    pub user_email: String,
    /// Source IP address.
    pub ip_address: Option<String>,
    /// Free-text detail.
    pub details: Option<String>,
    /// Event severity.
    pub severity: Severity,
    /// Event outcome.
    pub outcome: Outcome,
}
