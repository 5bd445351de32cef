//! Admin account lifecycle: login/lockout, the simulated second factor,
//! and the password-reset flow.

pub mod manager;

pub use manager::{AdminAccountManager, LoginOutcome, PasswordResetRequest};
