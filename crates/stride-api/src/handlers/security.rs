//! Security event log handlers (admin surface).

use axum::Json;
use axum::extract::{Query, State};

use stride_core::error::AppError;
use stride_database::store::SecurityLogStore;
use stride_entity::security::SecurityEvent;

use crate::dto::request::SecurityLogQuery;
use crate::extractors::CurrentAdmin;
use crate::state::AppState;

/// Default number of entries returned by the log endpoint.
const DEFAULT_LOG_LIMIT: i64 = 100;

/// GET /api/security/logs
pub async fn list(
    State(state): State<AppState>,
    _admin: CurrentAdmin,
    Query(query): Query<SecurityLogQuery>,
) -> Result<Json<Vec<SecurityEvent>>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_LOG_LIMIT).clamp(1, 1000);
    Ok(Json(state.stores.security_log.recent(limit).await?))
}
