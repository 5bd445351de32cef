//! Product catalog and review aggregation.

pub mod service;

pub use service::CatalogService;
