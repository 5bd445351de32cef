//! `CurrentAdmin` extractor — pulls the bearer token from the
//! Authorization header, validates it, and loads the admin account.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use stride_core::error::AppError;
use stride_database::store::AdminStore;
use stride_entity::admin::Admin;

use crate::state::AppState;

/// Extracted admin context available to admin-surface handlers.
#[derive(Debug, Clone)]
pub struct CurrentAdmin(pub Admin);

impl CurrentAdmin {
    /// The authenticated admin's email, used as the security-event
    /// subject.
    pub fn email(&self) -> &str {
        &self.0.email
    }
}

impl std::ops::Deref for CurrentAdmin {
    type Target = Admin;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for CurrentAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        let claims = state.token_decoder.decode(token)?;

        if !claims.is_admin {
            return Err(AppError::forbidden("Admin access required"));
        }

        let admin = state
            .stores
            .admins
            .find_by_id(claims.account_id())
            .await?
            .ok_or_else(|| AppError::unauthorized("Admin account not found"))?;

        Ok(CurrentAdmin(admin))
    }
}
