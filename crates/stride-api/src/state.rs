//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use stride_auth::account::AdminAccountManager;
use stride_auth::password::{PasswordHasher, PasswordValidator};
use stride_auth::token::{TokenDecoder, TokenEncoder};
use stride_core::config::AppConfig;
use stride_database::DataStores;
use stride_service::{CatalogService, CouponService, OrderService, SettingsService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Entity stores behind the configured adapter.
    pub stores: DataStores,
    /// Bearer-token validator.
    pub token_decoder: Arc<TokenDecoder>,
    /// Admin account state machine.
    pub accounts: Arc<AdminAccountManager>,
    /// Shopper account service.
    pub users: Arc<UserService>,
    /// Catalog and review service.
    pub catalog: Arc<CatalogService>,
    /// Order service.
    pub orders: Arc<OrderService>,
    /// Coupon service.
    pub coupons: Arc<CouponService>,
    /// Settings service.
    pub settings: Arc<SettingsService>,
}

impl AppState {
    /// Wires services and auth components over the given stores.
    pub fn new(config: AppConfig, stores: DataStores) -> Self {
        let hasher = Arc::new(PasswordHasher::new());
        let validator = Arc::new(PasswordValidator::new(&config.auth));
        let token_encoder = Arc::new(TokenEncoder::new(&config.auth));
        let token_decoder = Arc::new(TokenDecoder::new(&config.auth));

        let accounts = Arc::new(AdminAccountManager::new(
            Arc::clone(&stores.admins),
            Arc::clone(&stores.security_log),
            Arc::clone(&hasher),
            Arc::clone(&validator),
            Arc::clone(&token_encoder),
            config.auth.clone(),
        ));

        let users = Arc::new(UserService::new(
            Arc::clone(&stores.users),
            Arc::clone(&hasher),
            Arc::clone(&validator),
            Arc::clone(&token_encoder),
        ));

        let catalog = Arc::new(CatalogService::new(
            Arc::clone(&stores.products),
            Arc::clone(&stores.security_log),
        ));

        let orders = Arc::new(OrderService::new(
            Arc::clone(&stores.orders),
            Arc::clone(&stores.products),
        ));

        let coupons = Arc::new(CouponService::new(
            Arc::clone(&stores.coupons),
            Arc::clone(&stores.security_log),
        ));

        let settings = Arc::new(SettingsService::new(
            Arc::clone(&stores.settings),
            Arc::clone(&stores.security_log),
        ));

        Self {
            config: Arc::new(config),
            stores,
            token_decoder,
            accounts,
            users,
            catalog,
            orders,
            coupons,
            settings,
        }
    }
}
