//! Router-level tests driving the API over the in-memory adapter.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use stride_api::AppState;
use stride_core::config::AppConfig;
use stride_database::DataStores;

fn test_app() -> Router {
    let mut config = AppConfig::default();
    config.auth.expose_reset_token = true;
    let state = AppState::new(config, DataStores::in_memory());
    stride_api::build_router(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body read failed");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body was not JSON")
    };
    (status, body)
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_auth(uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_auth(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

async fn register_admin(app: &Router) -> String {
    let (status, body) = send(
        app,
        post(
            "/api/auth/admin/register",
            json!({"name": "Root", "email": "root@x.com", "password": "Sunset-Harbor9!"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_endpoint_is_open() {
    let app = test_app();
    let (status, body) = send(&app, get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn admin_login_locks_after_five_failures() {
    let app = test_app();
    register_admin(&app).await;

    for _ in 0..4 {
        let (status, body) = send(
            &app,
            post(
                "/api/auth/admin/login",
                json!({"email": "root@x.com", "password": "wrong"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid credentials");
    }

    let (status, body) = send(
        &app,
        post(
            "/api/auth/admin/login",
            json!({"email": "root@x.com", "password": "wrong"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["message"].as_str().unwrap().contains("locked"),
        "got: {body}"
    );

    // Even the correct password is refused while the window is open.
    let (status, body) = send(
        &app,
        post(
            "/api/auth/admin/login",
            json!({"email": "root@x.com", "password": "Sunset-Harbor9!"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Account locked. Please try again in"),
        "got: {body}"
    );
}

#[tokio::test]
async fn admin_login_issues_token_and_user() {
    let app = test_app();
    register_admin(&app).await;

    let (status, body) = send(
        &app,
        post(
            "/api/auth/admin/login",
            json!({"email": "root@x.com", "password": "Sunset-Harbor9!"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["user"]["isAdmin"], true);
    assert_eq!(body["user"]["email"], "root@x.com");
}

#[tokio::test]
async fn forgot_and_reset_password_roundtrip() {
    let app = test_app();
    register_admin(&app).await;

    let (status, body) = send(
        &app,
        post("/api/auth/admin/forgot-password", json!({"email": "root@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let raw = body["devToken"].as_str().expect("dev token exposed").to_string();

    let (status, _) = send(
        &app,
        post(
            "/api/auth/admin/reset-password",
            json!({"token": raw, "newPassword": "Bright-Magenta-Falcon7!"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // The same secret cannot be replayed.
    let (status, body) = send(
        &app,
        post(
            "/api/auth/admin/reset-password",
            json!({"token": raw, "newPassword": "Another-Strong-Pass3?"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid or expired token");

    let (status, _) = send(
        &app,
        post(
            "/api/auth/admin/login",
            json!({"email": "root@x.com", "password": "Bright-Magenta-Falcon7!"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn review_flow_updates_the_aggregate() {
    let app = test_app();
    let token = register_admin(&app).await;

    let (status, product) = send(
        &app,
        post_auth(
            "/api/products",
            &token,
            json!({
                "name": "Apex Runner",
                "price": 120.0,
                "category": "Running",
                "images": {"primary": "https://img/apex.png"}
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let product_id = product["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        post(
            &format!("/api/products/{product_id}/reviews"),
            json!({"user": "u1", "rating": 5, "comment": "great"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        post(
            &format!("/api/products/{product_id}/reviews"),
            json!({"user": "u1", "rating": 1, "comment": "again"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Product already reviewed");

    let (status, products) = send(&app, get("/api/products")).await;
    assert_eq!(status, StatusCode::OK);
    let listed = &products.as_array().unwrap()[0];
    assert_eq!(listed["numReviews"], 1);
    assert_eq!(listed["rating"], 5.0);
}

#[tokio::test]
async fn admin_surface_requires_a_token() {
    let app = test_app();

    let (status, _) = send(&app, get("/api/security/logs")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = register_admin(&app).await;
    let (status, body) = send(&app, get_auth("/api/security/logs", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_array());
}

#[tokio::test]
async fn shopper_tokens_are_not_admin_tokens() {
    let app = test_app();

    let (status, body) = send(
        &app,
        post(
            "/api/auth/register",
            json!({"name": "Shopper", "email": "s@x.com", "password": "Plain-Shopper1!"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["isAdmin"], false);
    let token = body["token"].as_str().unwrap();

    let (status, _) = send(&app, get_auth("/api/security/logs", token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn settings_read_is_open_and_lazy() {
    let app = test_app();
    let (status, body) = send(&app, get("/api/settings")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["storeName"], "Stride Footwear");
}
