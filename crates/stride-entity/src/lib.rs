//! # stride-entity
//!
//! Domain entity models for Stride Commerce. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.
//!
//! Entities serialize in camelCase to preserve the storefront's wire
//! format.

pub mod admin;
pub mod coupon;
pub mod order;
pub mod product;
pub mod security;
pub mod settings;
pub mod user;
