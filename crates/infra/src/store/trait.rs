use std::sync::Arc;

use thiserror::Error;

use catalog_core::{DomainError, ProductId};
use catalog_products::{Product, ProductFields, ProductQuery};

/// Storage operation error.
///
/// `NotFound` is the only domain-level outcome a store reports. `Backend` is
/// the catch-all for infrastructure faults (poisoned lock, unreachable
/// database) and surfaces to callers as an internal error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("product {0} not found")]
    NotFound(ProductId),

    #[error("store backend failure: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for DomainError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => DomainError::NotFound(id),
            StoreError::Backend(msg) => DomainError::Internal(msg),
        }
    }
}

/// Owner of the canonical product records and the identity sequence.
///
/// ## Implementation Requirements
///
/// Implementations must:
/// - mint ids atomically: concurrent `insert`s never share an id, and an id is
///   never handed out twice, even after `remove`
/// - apply the query's filter before its sort, and its sort before its page
/// - serialize concurrent writes to the same id (no torn records)
/// - report a missing id as `StoreError::NotFound`, never as an empty success
///
/// Callers (the catalog service) validate before writing; stores persist what
/// they are given verbatim.
pub trait ProductStore: Send + Sync {
    /// Store a validated record under a freshly minted id.
    fn insert(&self, fields: ProductFields) -> StoreResult<Product>;

    fn get(&self, id: ProductId) -> StoreResult<Product>;

    /// Snapshot of matching records at call time, ordered and windowed.
    fn list(&self, query: &ProductQuery) -> StoreResult<Vec<Product>>;

    /// Overwrite the record stored at `id`. `product.id` must equal `id`.
    fn update(&self, id: ProductId, product: Product) -> StoreResult<Product>;

    /// Delete permanently. The id is not reissued.
    fn remove(&self, id: ProductId) -> StoreResult<()>;

    /// Number of stored records.
    fn count(&self) -> StoreResult<usize>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn insert(&self, fields: ProductFields) -> StoreResult<Product> {
        (**self).insert(fields)
    }

    fn get(&self, id: ProductId) -> StoreResult<Product> {
        (**self).get(id)
    }

    fn list(&self, query: &ProductQuery) -> StoreResult<Vec<Product>> {
        (**self).list(query)
    }

    fn update(&self, id: ProductId, product: Product) -> StoreResult<Product> {
        (**self).update(id, product)
    }

    fn remove(&self, id: ProductId) -> StoreResult<()> {
        (**self).remove(id)
    }

    fn count(&self) -> StoreResult<usize> {
        (**self).count()
    }
}
