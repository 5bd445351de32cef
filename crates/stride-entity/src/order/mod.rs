//! Order entity.

pub mod model;

pub use model::{NewOrder, Order, OrderItem};
