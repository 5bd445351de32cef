//! Admin account state-machine tests over the in-memory adapter:
//! lockout window, two-factor gate, and reset-token lifecycle.

use std::sync::Arc;

use chrono::{Duration, Utc};

use stride_auth::account::{AdminAccountManager, LoginOutcome};
use stride_auth::password::{PasswordHasher, PasswordValidator};
use stride_auth::reset;
use stride_auth::token::TokenEncoder;
use stride_core::config::AuthConfig;
use stride_core::error::ErrorKind;
use stride_database::memory::{MemoryAdminStore, MemorySecurityLogStore};
use stride_database::store::{AdminStore, SecurityLogStore};
use stride_entity::admin::AdminProfileUpdate;
use stride_entity::security::{Severity, event};

const PASSWORD: &str = "Sunset-Harbor9!";
const NEW_PASSWORD: &str = "Bright-Magenta-Falcon7!";

struct Harness {
    manager: AdminAccountManager,
    admins: Arc<MemoryAdminStore>,
    log: Arc<MemorySecurityLogStore>,
}

fn harness() -> Harness {
    let config = AuthConfig {
        expose_reset_token: true,
        ..AuthConfig::default()
    };
    let admins = Arc::new(MemoryAdminStore::new());
    let log = Arc::new(MemorySecurityLogStore::new());
    let manager = AdminAccountManager::new(
        admins.clone(),
        log.clone(),
        Arc::new(PasswordHasher::new()),
        Arc::new(PasswordValidator::new(&config)),
        Arc::new(TokenEncoder::new(&config)),
        config,
    );
    Harness {
        manager,
        admins,
        log,
    }
}

#[tokio::test]
async fn five_failures_lock_the_account_and_reset_the_counter() {
    let h = harness();
    let (admin, _) = h.manager.register("A", "a@x.com", PASSWORD).await.unwrap();

    for attempt in 1..=4 {
        let err = h.manager.login("a@x.com", "wrong").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Policy, "attempt {attempt}");
        assert_eq!(err.message, "Invalid credentials");
    }

    let err = h.manager.login("a@x.com", "wrong").await.unwrap_err();
    assert!(err.message.contains("locked"), "got: {}", err.message);

    let stored = h.admins.find_by_id(admin.id).await.unwrap().unwrap();
    assert_eq!(stored.failed_login_attempts, 0);
    let locked_until = stored.locked_until.expect("account should be locked");
    let remaining = locked_until - Utc::now();
    assert!(remaining > Duration::minutes(29));
    assert!(remaining <= Duration::minutes(30));
}

#[tokio::test]
async fn locked_account_rejects_even_the_correct_password() {
    let h = harness();
    let (admin, _) = h.manager.register("A", "a@x.com", PASSWORD).await.unwrap();

    for _ in 0..5 {
        let _ = h.manager.login("a@x.com", "wrong").await;
    }

    let err = h.manager.login("a@x.com", PASSWORD).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Forbidden);
    assert!(
        err.message.starts_with("Account locked. Please try again in"),
        "got: {}",
        err.message
    );

    // The refused attempt must not touch the counter.
    let stored = h.admins.find_by_id(admin.id).await.unwrap().unwrap();
    assert_eq!(stored.failed_login_attempts, 0);
    assert!(stored.locked_until.is_some());
}

#[tokio::test]
async fn successful_login_clears_counter_and_lock() {
    let h = harness();
    let (admin, _) = h.manager.register("A", "a@x.com", PASSWORD).await.unwrap();

    for _ in 0..2 {
        let _ = h.manager.login("a@x.com", "wrong").await;
    }

    let outcome = h.manager.login("a@x.com", PASSWORD).await.unwrap();
    assert!(matches!(outcome, LoginOutcome::Success { .. }));

    let stored = h.admins.find_by_id(admin.id).await.unwrap().unwrap();
    assert_eq!(stored.failed_login_attempts, 0);
    assert!(stored.locked_until.is_none());
}

#[tokio::test]
async fn expired_lock_allows_login_again() {
    let h = harness();
    let (admin, _) = h.manager.register("A", "a@x.com", PASSWORD).await.unwrap();

    for _ in 0..5 {
        let _ = h.manager.login("a@x.com", "wrong").await;
    }

    // Rewind the lock so the wall-clock check sees it expired.
    h.admins
        .record_login_failure(admin.id, 1, Utc::now() - Duration::seconds(1))
        .await
        .unwrap();

    let outcome = h.manager.login("a@x.com", PASSWORD).await.unwrap();
    assert!(matches!(outcome, LoginOutcome::Success { .. }));
}

#[tokio::test]
async fn unknown_email_gets_generic_failure() {
    let h = harness();
    let err = h.manager.login("ghost@x.com", "whatever").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Policy);
    assert_eq!(err.message, "Invalid credentials");
}

#[tokio::test]
async fn lockout_is_logged_as_critical() {
    let h = harness();
    h.manager.register("A", "a@x.com", PASSWORD).await.unwrap();

    for _ in 0..5 {
        let _ = h.manager.login("a@x.com", "wrong").await;
    }

    let events = h.log.recent(100).await.unwrap();
    let lockout = events
        .iter()
        .find(|e| e.event == event::ACCOUNT_LOCKOUT)
        .expect("lockout event should be logged");
    assert_eq!(lockout.severity, Severity::Critical);
    assert_eq!(lockout.user_email, "a@x.com");
}

#[tokio::test]
async fn two_factor_gate_issues_token_only_for_the_right_code() {
    let h = harness();
    let (admin, _) = h.manager.register("A", "a@x.com", PASSWORD).await.unwrap();
    h.manager
        .update_profile(
            admin.id,
            &AdminProfileUpdate {
                two_factor_enabled: Some(true),
                ..AdminProfileUpdate::default()
            },
        )
        .await
        .unwrap();

    let outcome = h.manager.login("a@x.com", PASSWORD).await.unwrap();
    let LoginOutcome::TwoFactorRequired { temp_id } = outcome else {
        panic!("expected a 2FA challenge");
    };
    assert_eq!(temp_id, admin.id);

    let err = h
        .manager
        .verify_two_factor(temp_id, "000000")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Policy);

    // A failed code never touches the lock state.
    let stored = h.admins.find_by_id(admin.id).await.unwrap().unwrap();
    assert_eq!(stored.failed_login_attempts, 0);
    assert!(stored.locked_until.is_none());

    let (verified, token) = h.manager.verify_two_factor(temp_id, "123456").await.unwrap();
    assert_eq!(verified.id, admin.id);
    assert!(!token.is_empty());
}

#[tokio::test]
async fn reset_token_is_single_use() {
    let h = harness();
    h.manager.register("A", "a@x.com", PASSWORD).await.unwrap();

    let request = h.manager.forgot_password("a@x.com").await.unwrap();
    let raw = request.dev_token.expect("dev token exposed in tests");

    h.manager.reset_password(&raw, NEW_PASSWORD).await.unwrap();

    // New password works.
    let outcome = h.manager.login("a@x.com", NEW_PASSWORD).await.unwrap();
    assert!(matches!(outcome, LoginOutcome::Success { .. }));

    // Second consumption of the same secret fails generically.
    let err = h
        .manager
        .reset_password(&raw, "Another-Strong-Pass3?")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Policy);
    assert_eq!(err.message, "Invalid or expired token");
}

#[tokio::test]
async fn expired_reset_token_is_rejected() {
    let h = harness();
    let (admin, _) = h.manager.register("A", "a@x.com", PASSWORD).await.unwrap();

    let request = h.manager.forgot_password("a@x.com").await.unwrap();
    let raw = request.dev_token.unwrap();

    // Age the token past its window.
    h.admins
        .set_reset_token(
            admin.id,
            &reset::digest_of(&raw),
            Utc::now() - Duration::minutes(1),
        )
        .await
        .unwrap();

    let err = h.manager.reset_password(&raw, NEW_PASSWORD).await.unwrap_err();
    assert_eq!(err.message, "Invalid or expired token");
}

#[tokio::test]
async fn reset_recovers_a_locked_account() {
    let h = harness();
    let (admin, _) = h.manager.register("A", "a@x.com", PASSWORD).await.unwrap();

    for _ in 0..5 {
        let _ = h.manager.login("a@x.com", "wrong").await;
    }
    assert!(
        h.admins
            .find_by_id(admin.id)
            .await
            .unwrap()
            .unwrap()
            .locked_until
            .is_some()
    );

    let raw = h
        .manager
        .forgot_password("a@x.com")
        .await
        .unwrap()
        .dev_token
        .unwrap();
    h.manager.reset_password(&raw, NEW_PASSWORD).await.unwrap();

    // The reset cleared the lock; login succeeds immediately.
    let outcome = h.manager.login("a@x.com", NEW_PASSWORD).await.unwrap();
    assert!(matches!(outcome, LoginOutcome::Success { .. }));

    let stored = h.admins.find_by_id(admin.id).await.unwrap().unwrap();
    assert_eq!(stored.failed_login_attempts, 0);
    assert!(stored.locked_until.is_none());
    assert!(stored.reset_token_digest.is_none());
    assert!(stored.reset_token_expires.is_none());
}

#[tokio::test]
async fn unknown_email_reset_request_leaks_nothing() {
    let h = harness();
    h.manager.register("A", "a@x.com", PASSWORD).await.unwrap();

    let request = h.manager.forgot_password("ghost@x.com").await.unwrap();
    assert_eq!(
        request.message,
        "If an account exists, a reset link has been sent."
    );
    assert!(request.dev_token.is_none());

    // No log entry ties the probe to any account.
    let events = h.log.recent(100).await.unwrap();
    assert!(events.iter().all(|e| e.user_email != "ghost@x.com"));
}
