//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// `Validation` and `NotFound` are client-input problems and are never retried.
/// `Internal` is the catch-all for faults the caller cannot fix (e.g. a storage
/// backend going away).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A candidate record, patch, or query parameter failed validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The addressed product does not exist.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Unexpected fault outside the domain rules.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn not_found(id: ProductId) -> Self {
        Self::NotFound(id)
    }

    /// The human-readable detail without the category prefix.
    pub fn detail(&self) -> String {
        match self {
            DomainError::Validation(msg)
            | DomainError::InvalidId(msg)
            | DomainError::Internal(msg) => msg.clone(),
            DomainError::NotFound(id) => format!("product {id} not found"),
        }
    }
}
