//! Order placement and fulfilment.

pub mod service;

pub use service::OrderService;
