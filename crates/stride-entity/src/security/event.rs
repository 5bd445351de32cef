//! Security event kind constants.
//!
//! Event kinds are open-ended strings on the wire; the constants below
//! cover every kind this application emits.

/// Successful admin login (direct or via the second factor).
pub const LOGIN_SUCCESS: &str = "LOGIN_SUCCESS";
/// Failed admin login attempt.
pub const LOGIN_FAILURE: &str = "LOGIN_FAILURE";
/// Login refused because the account is locked.
pub const LOGIN_BLOCKED: &str = "LOGIN_BLOCKED";
/// Account locked after too many consecutive failures.
pub const ACCOUNT_LOCKOUT: &str = "ACCOUNT_LOCKOUT";
/// Login accepted pending second-factor verification.
pub const TWO_FACTOR_REQUIRED: &str = "2FA_REQUIRED";
/// Second-factor verification failed.
pub const TWO_FACTOR_FAILURE: &str = "2FA_FAILURE";
/// Password-reset token issued.
pub const PASSWORD_RESET_REQUEST: &str = "PASSWORD_RESET_REQUEST";
/// Password reset completed via token.
pub const PASSWORD_RESET_SUCCESS: &str = "PASSWORD_RESET_SUCCESS";
/// Admin changed their password.
pub const PASSWORD_CHANGE: &str = "PASSWORD_CHANGE";
/// Product created.
pub const PRODUCT_CREATE: &str = "PRODUCT_CREATE";
/// Product updated.
pub const PRODUCT_UPDATE: &str = "PRODUCT_UPDATE";
/// Product deleted.
pub const PRODUCT_DELETE: &str = "PRODUCT_DELETE";
/// Store settings modified.
pub const SETTINGS_UPDATE: &str = "SETTINGS_UPDATE";
/// Coupon created.
pub const COUPON_CREATE: &str = "COUPON_CREATE";
/// Coupon deleted.
pub const COUPON_DELETE: &str = "COUPON_DELETE";
