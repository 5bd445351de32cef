//! Maps domain `AppError` to HTTP responses.
//!
//! The `IntoResponse` implementation for `AppError` lives in `stride-core`
//! (the crate that owns `AppError`), since Rust's orphan rule forbids
//! implementing a foreign trait for a foreign type here. The response body
//! type is re-exported for API consumers.

pub use stride_core::error::ApiErrorResponse;
