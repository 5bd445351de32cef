//! Discount coupon entity.

pub mod model;

pub use model::{Coupon, CouponKind, NewCoupon};
