use core::str::FromStr;

use axum::body::Bytes;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Map, Value};

use catalog_core::{DomainError, DomainResult, ProductId};
use catalog_products::{
    PageLimits, ProductDraft, ProductFilter, ProductQuery, SortDirection, SortField, SortOrder,
};

// -------------------------
// Request DTOs
// -------------------------

/// Raw list query string. Every value is kept as text so that a malformed
/// parameter surfaces as a validation error instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsParams {
    pub name: Option<String>,
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub in_stock: Option<String>,
    /// `field` or `field,dir`.
    pub sort: Option<String>,
    /// Zero-based page index.
    pub page: Option<String>,
    pub size: Option<String>,
}

impl ListProductsParams {
    pub fn into_query(self, limits: &PageLimits) -> DomainResult<ProductQuery> {
        let filter = ProductFilter::new(
            self.name,
            parse_opt::<Decimal>("priceMin", self.price_min)?,
            parse_opt::<Decimal>("priceMax", self.price_max)?,
            parse_opt::<bool>("inStock", self.in_stock)?,
        )?;

        let sort = match self.sort.as_deref().map(str::trim) {
            None | Some("") => SortOrder::default(),
            Some(raw) => parse_sort(raw)?,
        };

        let page = limits.resolve(
            parse_opt::<usize>("page", self.page)?,
            parse_opt::<usize>("size", self.size)?,
        )?;

        Ok(ProductQuery { filter, sort, page })
    }
}

fn parse_opt<T: FromStr>(name: &str, raw: Option<String>) -> DomainResult<Option<T>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<T>()
        .map(Some)
        .map_err(|_| DomainError::validation(format!("invalid value for {name}: {raw}")))
}

/// Parse `field` or `field,dir`.
pub fn parse_sort(raw: &str) -> DomainResult<SortOrder> {
    let (field, direction) = match raw.split_once(',') {
        Some((field, dir)) => (field, SortDirection::from_str(dir)?),
        None => (raw, SortDirection::default()),
    };
    Ok(SortOrder::by(SortField::from_str(field)?, direction))
}

pub fn parse_product_id(raw: &str) -> DomainResult<ProductId> {
    raw.parse()
}

/// Decode a create/replace body.
pub fn parse_draft(body: &Bytes) -> DomainResult<ProductDraft> {
    serde_json::from_slice(body)
        .map_err(|e| DomainError::validation(format!("malformed product body: {e}")))
}

/// Decode a patch body. Only a JSON object is accepted.
pub fn parse_patch_fields(body: &Bytes) -> DomainResult<Map<String, Value>> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(_) => Err(DomainError::validation("patch body must be a JSON object")),
        Err(e) => Err(DomainError::validation(format!("malformed patch body: {e}"))),
    }
}
