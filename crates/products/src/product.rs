use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult, Entity, ProductId};

use crate::validation;

/// Candidate product as supplied by a caller (create/replace payload).
///
/// Every field is optional so that "absent" can be told apart from "empty"
/// during validation. A caller-supplied `id` is carried only so it can be
/// discarded; it never reaches storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub id: Option<ProductId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub in_stock: Option<bool>,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    /// Drop any identity the caller tried to supply.
    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }

    /// Validate and normalize into storable fields.
    ///
    /// Absent description becomes `""`, absent stock flag becomes `false`.
    pub fn into_fields(self) -> DomainResult<ProductFields> {
        validation::validate(&self)?;

        match (self.name, self.price) {
            (Some(name), Some(price)) => Ok(ProductFields {
                name,
                description: self.description.unwrap_or_default(),
                price,
                in_stock: self.in_stock.unwrap_or(false),
            }),
            _ => Err(DomainError::internal("validated draft is missing name or price")),
        }
    }
}

/// A validated product without identity (what the store is asked to insert).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub in_stock: bool,
}

/// A stored product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub in_stock: bool,
}

impl Product {
    pub fn from_fields(id: ProductId, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            in_stock: fields.in_stock,
        }
    }

    /// Working copy used to merge a partial update before re-validation.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            id: Some(self.id),
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            price: Some(self.price),
            in_stock: Some(self.in_stock),
        }
    }

    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            in_stock: self.in_stock,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}
