//! Product storage boundary.
//!
//! This module defines the capability contract the catalog service persists
//! through, plus an in-memory implementation. A durable backend plugs in behind
//! the same trait.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryProductStore;
pub use r#trait::{ProductStore, StoreError, StoreResult};
