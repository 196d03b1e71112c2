//! Field rules every stored product must satisfy.
//!
//! Rules run in a fixed order (name, description, price) and the first
//! violation is reported. A zero price is allowed; only negative prices fail.

use rust_decimal::Decimal;

use catalog_core::{DomainError, DomainResult};

use crate::product::ProductDraft;

/// Maximum product name length, in characters.
pub const NAME_MAX_CHARS: usize = 255;

/// Maximum product description length, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 4096;

/// Check a candidate product against the field rules.
pub fn validate(draft: &ProductDraft) -> DomainResult<()> {
    validate_name(draft.name.as_deref())?;
    validate_description(draft.description.as_deref())?;
    validate_price(draft.price)?;
    Ok(())
}

fn validate_name(name: Option<&str>) -> DomainResult<()> {
    match name {
        None => Err(DomainError::validation("name required")),
        Some(name) if name.trim().is_empty() => Err(DomainError::validation("name required")),
        Some(name) if name.chars().count() > NAME_MAX_CHARS => {
            Err(DomainError::validation("name too long"))
        }
        Some(_) => Ok(()),
    }
}

fn validate_description(description: Option<&str>) -> DomainResult<()> {
    match description {
        Some(text) if text.chars().count() > DESCRIPTION_MAX_CHARS => {
            Err(DomainError::validation("description too long"))
        }
        _ => Ok(()),
    }
}

fn validate_price(price: Option<Decimal>) -> DomainResult<()> {
    match price {
        None => Err(DomainError::validation("price required")),
        Some(price) if price < Decimal::ZERO => {
            Err(DomainError::validation("price must not be negative"))
        }
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ProductDraft {
        ProductDraft::new("Chair", Decimal::new(50, 0))
    }

    fn message(draft: &ProductDraft) -> String {
        match validate(draft).unwrap_err() {
            DomainError::Validation(msg) => msg,
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_minimal_draft() {
        assert!(validate(&valid()).is_ok());
    }

    #[test]
    fn accepts_zero_price() {
        let draft = ProductDraft::new("Freebie", Decimal::ZERO);
        assert!(validate(&draft).is_ok());
    }

    #[test]
    fn rejects_missing_empty_and_blank_names() {
        let mut draft = valid();
        draft.name = None;
        assert_eq!(message(&draft), "name required");

        draft.name = Some(String::new());
        assert_eq!(message(&draft), "name required");

        draft.name = Some("   \t".to_string());
        assert_eq!(message(&draft), "name required");
    }

    #[test]
    fn name_length_limit_is_inclusive() {
        let mut draft = valid();
        draft.name = Some("x".repeat(NAME_MAX_CHARS));
        assert!(validate(&draft).is_ok());

        draft.name = Some("x".repeat(NAME_MAX_CHARS + 1));
        assert_eq!(message(&draft), "name too long");
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let mut draft = valid();
        draft.name = Some("я".repeat(NAME_MAX_CHARS));
        assert!(validate(&draft).is_ok());
    }

    #[test]
    fn description_length_limit_is_inclusive() {
        let mut draft = valid();
        draft.description = Some("d".repeat(DESCRIPTION_MAX_CHARS));
        assert!(validate(&draft).is_ok());

        draft.description = Some("d".repeat(DESCRIPTION_MAX_CHARS + 1));
        assert_eq!(message(&draft), "description too long");
    }

    #[test]
    fn missing_description_is_valid() {
        let mut draft = valid();
        draft.description = None;
        assert!(validate(&draft).is_ok());
    }

    #[test]
    fn rejects_missing_and_negative_price() {
        let mut draft = valid();
        draft.price = None;
        assert_eq!(message(&draft), "price required");

        draft.price = Some(Decimal::new(-1, 2));
        assert_eq!(message(&draft), "price must not be negative");
    }

    #[test]
    fn reports_first_violation_in_rule_order() {
        let draft = ProductDraft {
            id: None,
            name: None,
            description: Some("d".repeat(DESCRIPTION_MAX_CHARS + 1)),
            price: Some(Decimal::new(-5, 0)),
            in_stock: None,
        };
        assert_eq!(message(&draft), "name required");

        let draft = ProductDraft {
            name: Some("ok".to_string()),
            ..draft
        };
        assert_eq!(message(&draft), "description too long");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any non-blank name within limits and any non-negative price validates.
            #[test]
            fn in_range_drafts_validate(
                name in "[A-Za-z][A-Za-z0-9 ]{0,200}",
                cents in 0i64..10_000_000,
                in_stock in any::<bool>(),
            ) {
                let draft = ProductDraft::new(name, Decimal::new(cents, 2)).with_in_stock(in_stock);
                prop_assert!(validate(&draft).is_ok());
            }

            /// Property: any strictly negative price is rejected with the price message.
            #[test]
            fn negative_prices_are_rejected(cents in i64::MIN / 2..0) {
                let draft = ProductDraft::new("Item", Decimal::new(cents, 2));
                prop_assert_eq!(
                    validate(&draft),
                    Err(DomainError::validation("price must not be negative"))
                );
            }

            /// Property: validation is deterministic.
            #[test]
            fn validation_is_deterministic(
                name in proptest::option::of(".{0,300}"),
                cents in proptest::option::of(-1000i64..1000),
            ) {
                let draft = ProductDraft {
                    name,
                    price: cents.map(|c| Decimal::new(c, 2)),
                    ..ProductDraft::default()
                };
                prop_assert_eq!(validate(&draft), validate(&draft));
            }
        }
    }
}
