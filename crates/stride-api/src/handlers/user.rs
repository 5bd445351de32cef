//! User listing handlers (admin surface).

use axum::Json;
use axum::extract::State;

use stride_core::error::AppError;
use stride_entity::user::User;

use crate::extractors::CurrentAdmin;
use crate::state::AppState;

/// GET /api/users
///
/// Password hashes are never serialized.
pub async fn list(
    State(state): State<AppState>,
    _admin: CurrentAdmin,
) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(state.users.list().await?))
}
