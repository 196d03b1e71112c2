//! Partial updates: a closed set of typed field setters.
//!
//! A patch arrives as a JSON object keyed by wire field names. Parsing turns
//! it into [`FieldUpdate`]s up front, so an unknown key or a mistyped value
//! fails before anything is merged.

use core::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use catalog_core::{DomainError, DomainResult};

use crate::product::ProductDraft;

/// One field assignment. `None` clears the field in the working copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(Option<String>),
    Description(Option<String>),
    Price(Option<Decimal>),
    InStock(Option<bool>),
}

impl FieldUpdate {
    /// Wire name of the field this update targets.
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldUpdate::Name(_) => "name",
            FieldUpdate::Description(_) => "description",
            FieldUpdate::Price(_) => "price",
            FieldUpdate::InStock(_) => "inStock",
        }
    }

    /// Parse a single `key: value` pair.
    pub fn parse(key: &str, value: &Value) -> DomainResult<Self> {
        match key {
            "name" => Ok(FieldUpdate::Name(string_value(key, value)?)),
            "description" => Ok(FieldUpdate::Description(string_value(key, value)?)),
            "price" => Ok(FieldUpdate::Price(decimal_value(key, value)?)),
            "inStock" => Ok(FieldUpdate::InStock(bool_value(key, value)?)),
            other => Err(DomainError::validation(format!("unknown field: {other}"))),
        }
    }

    fn apply(&self, draft: &mut ProductDraft) {
        match self {
            FieldUpdate::Name(v) => draft.name = v.clone(),
            FieldUpdate::Description(v) => draft.description = v.clone(),
            FieldUpdate::Price(v) => draft.price = *v,
            FieldUpdate::InStock(v) => draft.in_stock = *v,
        }
    }
}

/// An ordered list of field updates to merge into an existing record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    updates: Vec<FieldUpdate>,
}

impl ProductPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, update: FieldUpdate) -> Self {
        self.updates.push(update);
        self
    }

    /// Parse a JSON object of field name → new value.
    ///
    /// Fails on the first unknown key or mistyped value; nothing is partially
    /// accepted.
    pub fn from_json(fields: &Map<String, Value>) -> DomainResult<Self> {
        let updates = fields
            .iter()
            .map(|(key, value)| FieldUpdate::parse(key, value))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self { updates })
    }

    pub fn updates(&self) -> &[FieldUpdate] {
        &self.updates
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    /// Merge into a working copy. The caller re-validates the result.
    pub fn apply_to(&self, draft: &mut ProductDraft) {
        for update in &self.updates {
            update.apply(draft);
        }
    }
}

fn invalid(key: &str) -> DomainError {
    DomainError::validation(format!("invalid value for field {key}"))
}

fn string_value(key: &str, value: &Value) -> DomainResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(invalid(key)),
    }
}

fn bool_value(key: &str, value: &Value) -> DomainResult<Option<bool>> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(*b)),
        _ => Err(invalid(key)),
    }
}

fn decimal_value(key: &str, value: &Value) -> DomainResult<Option<Decimal>> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => {
            let text = n.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .map(Some)
                .map_err(|_| invalid(key))
        }
        _ => Err(invalid(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    fn existing() -> ProductDraft {
        ProductDraft::new("A", Decimal::new(100, 0))
            .with_description("B")
            .with_in_stock(false)
    }

    #[test]
    fn price_only_patch_changes_only_price() {
        let patch = ProductPatch::from_json(&object(json!({ "price": 150.0 }))).unwrap();
        let mut draft = existing();
        patch.apply_to(&mut draft);

        assert_eq!(draft.name.as_deref(), Some("A"));
        assert_eq!(draft.description.as_deref(), Some("B"));
        assert_eq!(draft.price, Some(Decimal::new(150, 0)));
        assert_eq!(draft.in_stock, Some(false));
    }

    #[test]
    fn parses_every_known_field() {
        let patch = ProductPatch::from_json(&object(json!({
            "name": "Sofa",
            "description": "Green",
            "price": 12,
            "inStock": true,
        })))
        .unwrap();

        let mut names: Vec<_> = patch.updates().iter().map(FieldUpdate::field_name).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["description", "inStock", "name", "price"]);

        let mut draft = existing();
        patch.apply_to(&mut draft);
        assert_eq!(draft.name.as_deref(), Some("Sofa"));
        assert_eq!(draft.description.as_deref(), Some("Green"));
        assert_eq!(draft.price, Some(Decimal::new(12, 0)));
        assert_eq!(draft.in_stock, Some(true));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = ProductPatch::from_json(&object(json!({ "color": "red" }))).unwrap_err();
        assert_eq!(err, DomainError::validation("unknown field: color"));
    }

    #[test]
    fn unknown_field_fails_the_whole_patch() {
        let err = ProductPatch::from_json(&object(json!({ "name": "X", "weight": 3 }))).unwrap_err();
        assert_eq!(err, DomainError::validation("unknown field: weight"));
    }

    #[test]
    fn mistyped_values_are_rejected() {
        let err = ProductPatch::from_json(&object(json!({ "price": "cheap" }))).unwrap_err();
        assert_eq!(err, DomainError::validation("invalid value for field price"));

        let err = ProductPatch::from_json(&object(json!({ "inStock": "yes" }))).unwrap_err();
        assert_eq!(err, DomainError::validation("invalid value for field inStock"));

        let err = ProductPatch::from_json(&object(json!({ "name": 5 }))).unwrap_err();
        assert_eq!(err, DomainError::validation("invalid value for field name"));
    }

    #[test]
    fn null_clears_the_field() {
        let patch = ProductPatch::from_json(&object(json!({ "description": null }))).unwrap();
        let mut draft = existing();
        patch.apply_to(&mut draft);
        assert_eq!(draft.description, None);
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let patch = ProductPatch::from_json(&Map::new()).unwrap();
        assert!(patch.is_empty());

        let mut draft = existing();
        patch.apply_to(&mut draft);
        assert_eq!(draft, existing());
    }

    #[test]
    fn builder_applies_in_order() {
        let patch = ProductPatch::new()
            .set(FieldUpdate::Name(Some("first".into())))
            .set(FieldUpdate::Name(Some("second".into())));

        let mut draft = existing();
        patch.apply_to(&mut draft);
        assert_eq!(draft.name.as_deref(), Some("second"));
    }
}
