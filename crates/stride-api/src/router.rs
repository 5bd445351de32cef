//! Route definitions for the Stride HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, patch, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes as usize;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(admin_auth_routes())
        .merge(product_routes())
        .merge(order_routes())
        .merge(user_routes())
        .merge(settings_routes())
        .merge(security_routes())
        .merge(coupon_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Shopper auth endpoints
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/profile/{id}", put(handlers::auth::update_profile))
        .route("/auth/password/{id}", put(handlers::auth::change_password))
}

/// Admin auth endpoints: login/lockout, 2FA, password reset, profile
fn admin_auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/admin/register", post(handlers::admin_auth::register))
        .route("/auth/admin/login", post(handlers::admin_auth::login))
        .route(
            "/auth/admin/verify-2fa",
            post(handlers::admin_auth::verify_two_factor),
        )
        .route(
            "/auth/admin/forgot-password",
            post(handlers::admin_auth::forgot_password),
        )
        .route(
            "/auth/admin/reset-password",
            post(handlers::admin_auth::reset_password),
        )
        .route(
            "/auth/admin/profile/{id}",
            put(handlers::admin_auth::update_profile),
        )
        .route(
            "/auth/admin/password/{id}",
            put(handlers::admin_auth::change_password),
        )
}

/// Product catalog and reviews
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(handlers::product::list))
        .route("/products", post(handlers::product::create))
        .route("/products/{id}", put(handlers::product::update))
        .route("/products/{id}", delete(handlers::product::delete))
        .route(
            "/products/{id}/reviews",
            get(handlers::product::list_reviews).post(handlers::product::add_review),
        )
        .route(
            "/products/{id}/reviews/{review_id}",
            delete(handlers::product::remove_review),
        )
}

/// Orders
fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(handlers::order::list))
        .route("/orders", post(handlers::order::create))
        .route("/orders/{id}", patch(handlers::order::update_status))
}

/// User listing (admin surface)
fn user_routes() -> Router<AppState> {
    Router::new().route("/users", get(handlers::user::list))
}

/// Store settings
fn settings_routes() -> Router<AppState> {
    Router::new()
        .route("/settings", get(handlers::settings::get))
        .route("/settings", post(handlers::settings::update))
}

/// Security event log (admin surface)
fn security_routes() -> Router<AppState> {
    Router::new().route("/security/logs", get(handlers::security::list))
}

/// Coupons
fn coupon_routes() -> Router<AppState> {
    Router::new()
        .route("/coupons", get(handlers::coupon::list))
        .route("/coupons", post(handlers::coupon::create))
        .route("/coupons/{id}", delete(handlers::coupon::delete))
        .route("/coupons/validate", post(handlers::coupon::validate))
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::HeaderValue;
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
