//! Store settings handlers.

use axum::Json;
use axum::extract::State;

use stride_core::error::AppError;
use stride_entity::settings::{SettingsUpdate, StoreSettings};

use crate::extractors::CurrentAdmin;
use crate::state::AppState;

/// GET /api/settings
///
/// Creates the singleton row with defaults on first read.
pub async fn get(State(state): State<AppState>) -> Result<Json<StoreSettings>, AppError> {
    Ok(Json(state.settings.get().await?))
}

/// POST /api/settings
pub async fn update(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Json(req): Json<SettingsUpdate>,
) -> Result<Json<StoreSettings>, AppError> {
    Ok(Json(state.settings.update(admin.email(), &req).await?))
}
