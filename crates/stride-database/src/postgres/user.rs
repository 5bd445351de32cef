//! PostgreSQL shopper account store.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use stride_core::error::{AppError, ErrorKind};
use stride_core::result::AppResult;
use stride_entity::user::{NewUser, User, UserProfileUpdate};

use crate::store::UserStore;

/// Shopper store backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Create a new user store on the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, data: &NewUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password_hash) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("User already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    async fn update_profile(&self, id: Uuid, update: &UserProfileUpdate) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET name = COALESCE($2, name), \
                              email = COALESCE($3, email), \
                              updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("Email is already in use")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update user", e),
        })?
        .ok_or_else(|| AppError::not_found("User not found"))
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(password_hash)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to update password", e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("User not found"));
        }
        Ok(())
    }
}
