//! Infrastructure layer: product storage and catalog orchestration.

pub mod catalog_service;
pub mod store;


pub use catalog_service::CatalogService;
pub use store::{InMemoryProductStore, ProductStore, StoreError, StoreResult};
