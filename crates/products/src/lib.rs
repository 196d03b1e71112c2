//! Products domain module.
//!
//! This crate contains the catalog's business rules (record shape, validation,
//! partial-update merging, list query composition), implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod patch;
pub mod product;
pub mod query;
pub mod validation;

pub use patch::{FieldUpdate, ProductPatch};
pub use product::{Product, ProductDraft, ProductFields};
pub use query::{
    FilterClause, PageLimits, Pagination, ProductFilter, ProductQuery, SortDirection, SortField,
    SortOrder,
};
pub use validation::validate;
