//! Store provider that dispatches to the configured adapter.

use std::sync::Arc;

use tracing::info;

use stride_core::config::DatabaseConfig;
use stride_core::error::AppError;
use stride_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::{
    MemoryAdminStore, MemoryCouponStore, MemoryOrderStore, MemoryProductStore,
    MemorySecurityLogStore, MemorySettingsStore, MemoryUserStore,
};
use crate::postgres::{
    PgAdminStore, PgCouponStore, PgOrderStore, PgProductStore, PgSecurityLogStore,
    PgSettingsStore, PgUserStore,
};
use crate::store::{
    AdminStore, CouponStore, OrderStore, ProductStore, SecurityLogStore, SettingsStore, UserStore,
};

/// The full set of entity stores behind one adapter.
///
/// The adapter is selected at construction time based on configuration;
/// all fields are `Arc`-wrapped trait objects for cheap cloning across
/// tasks.
#[derive(Clone)]
pub struct DataStores {
    /// Admin account store.
    pub admins: Arc<dyn AdminStore>,
    /// Shopper account store.
    pub users: Arc<dyn UserStore>,
    /// Product catalog store.
    pub products: Arc<dyn ProductStore>,
    /// Order store.
    pub orders: Arc<dyn OrderStore>,
    /// Coupon store.
    pub coupons: Arc<dyn CouponStore>,
    /// Settings singleton store.
    pub settings: Arc<dyn SettingsStore>,
    /// Security event log store.
    pub security_log: Arc<dyn SecurityLogStore>,
}

impl std::fmt::Debug for DataStores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataStores").finish()
    }
}

impl DataStores {
    /// Connect the stores configured by `config.provider`.
    ///
    /// `"postgres"` connects a pool and runs pending migrations;
    /// `"memory"` builds empty in-process stores.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL stores");
                let pool = DatabasePool::connect(config).await?.into_pool();
                crate::migration::run_migrations(&pool).await?;
                Ok(Self::postgres(pool))
            }
            "memory" => {
                info!("Initializing in-memory stores");
                Ok(Self::in_memory())
            }
            other => Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    /// Build the PostgreSQL adapter set on an existing pool.
    pub fn postgres(pool: sqlx::PgPool) -> Self {
        Self {
            admins: Arc::new(PgAdminStore::new(pool.clone())),
            users: Arc::new(PgUserStore::new(pool.clone())),
            products: Arc::new(PgProductStore::new(pool.clone())),
            orders: Arc::new(PgOrderStore::new(pool.clone())),
            coupons: Arc::new(PgCouponStore::new(pool.clone())),
            settings: Arc::new(PgSettingsStore::new(pool.clone())),
            security_log: Arc::new(PgSecurityLogStore::new(pool)),
        }
    }

    /// Build the in-memory adapter set (also used by tests).
    pub fn in_memory() -> Self {
        Self {
            admins: Arc::new(MemoryAdminStore::new()),
            users: Arc::new(MemoryUserStore::new()),
            products: Arc::new(MemoryProductStore::new()),
            orders: Arc::new(MemoryOrderStore::new()),
            coupons: Arc::new(MemoryCouponStore::new()),
            settings: Arc::new(MemorySettingsStore::new()),
            security_log: Arc::new(MemorySecurityLogStore::new()),
        }
    }
}
