//! `catalog-core`: identifiers, errors and the entity trait shared by the catalog crates.
//!
//! Pure domain primitives with no infrastructure dependencies.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
