//! PostgreSQL admin store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use stride_core::error::{AppError, ErrorKind};
use stride_core::result::AppResult;
use stride_entity::admin::{Admin, AdminProfileUpdate, LoginFailure, NewAdmin};

use crate::store::AdminStore;

/// Admin store backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgAdminStore {
    pool: PgPool,
}

impl PgAdminStore {
    /// Create a new admin store on the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminStore for PgAdminStore {
    async fn create(&self, data: &NewAdmin) -> AppResult<Admin> {
        sqlx::query_as::<_, Admin>(
            "INSERT INTO admins (name, email, password_hash) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("admins_email_key") => {
                AppError::conflict("Admin already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create admin", e),
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Admin>> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find admin by id", e))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find admin by email", e)
            })
    }

    async fn update_profile(&self, id: Uuid, update: &AdminProfileUpdate) -> AppResult<Admin> {
        sqlx::query_as::<_, Admin>(
            "UPDATE admins SET name = COALESCE($2, name), \
                               bio = COALESCE($3, bio), \
                               avatar = COALESCE($4, avatar), \
                               two_factor_enabled = COALESCE($5, two_factor_enabled), \
                               updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.bio)
        .bind(&update.avatar)
        .bind(update.two_factor_enabled)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update admin", e))?
        .ok_or_else(|| AppError::not_found("Admin not found"))
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE admins SET password_hash = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(password_hash)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to update password", e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Admin not found"));
        }
        Ok(())
    }

    async fn record_login_failure(
        &self,
        id: Uuid,
        max_attempts: i32,
        lock_until: DateTime<Utc>,
    ) -> AppResult<LoginFailure> {
        // Counter and lock transition in one statement so that two
        // concurrent failures cannot lose an increment.
        let row: (i32, Option<DateTime<Utc>>) = sqlx::query_as(
            "UPDATE admins SET \
                 failed_login_attempts = CASE \
                     WHEN failed_login_attempts + 1 >= $2 THEN 0 \
                     ELSE failed_login_attempts + 1 END, \
                 locked_until = CASE \
                     WHEN failed_login_attempts + 1 >= $2 THEN $3 \
                     ELSE NULL END, \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING failed_login_attempts, locked_until",
        )
        .bind(id)
        .bind(max_attempts)
        .bind(lock_until)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to record login failure", e)
        })?
        .ok_or_else(|| AppError::not_found("Admin not found"))?;

        Ok(LoginFailure {
            attempts: row.0,
            locked_until: row.1,
        })
    }

    async fn clear_lock_state(&self, id: Uuid) -> AppResult<()> {
        sqlx::query(
            "UPDATE admins SET failed_login_attempts = 0, locked_until = NULL, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to clear lock state", e))?;
        Ok(())
    }

    async fn set_reset_token(
        &self,
        id: Uuid,
        digest: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE admins SET reset_token_digest = $2, reset_token_expires = $3, \
                               updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(digest)
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set reset token", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Admin not found"));
        }
        Ok(())
    }

    async fn consume_reset_token(
        &self,
        digest: &str,
        new_password_hash: &str,
    ) -> AppResult<Option<Admin>> {
        // Single conditional UPDATE: the digest can only ever be consumed
        // once, and only while unexpired.
        sqlx::query_as::<_, Admin>(
            "UPDATE admins SET password_hash = $2, \
                               reset_token_digest = NULL, \
                               reset_token_expires = NULL, \
                               failed_login_attempts = 0, \
                               locked_until = NULL, \
                               updated_at = NOW() \
             WHERE reset_token_digest = $1 AND reset_token_expires > NOW() \
             RETURNING *",
        )
        .bind(digest)
        .bind(new_password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to consume reset token", e)
        })
    }
}
