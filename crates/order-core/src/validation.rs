//! # Validation Module
//!
//! The positive-integer rule set applied to each order field.
//!
//! ## Rule Pipeline (per field)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FieldInput { raw, coerced }                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. NotANumber      coerced is Missing?  ──yes──► "is not a number"     │
//! │       │ no                                        (stop: skip 2 and 3)  │
//! │       ▼                                                                 │
//! │  2. GreaterThanZero coerced <= 0?        ──yes──► "must be greater      │
//! │       │                                            than 0"              │
//! │       ▼ (always continues)                                              │
//! │  3. OnlyInteger     raw integer-like?    ──no───► "must be an integer"  │
//! │                                                                         │
//! │  Quantity is checked before Unit price.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use order_core::validation::validate;
//!
//! let result = validate("2.9", "300");
//! assert_eq!(result.full_messages(), vec!["Quantity must be an integer"]);
//!
//! let result = validate("a", None::<&str>);
//! assert_eq!(
//!     result.full_messages(),
//!     vec![
//!         "Quantity must be greater than 0",
//!         "Quantity must be an integer",
//!         "Unit price is not a number",
//!     ]
//! );
//! ```

use std::fmt;

use crate::error::ValidationError;
use crate::order::{FieldInput, OrderInput};
use crate::types::{Field, RawInput};

// =============================================================================
// Rules
// =============================================================================

/// One check applied to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// A value must be present.
    NotANumber,
    /// The coerced value must be strictly positive, judged by sign.
    GreaterThanZero,
    /// The raw value must be a whole number.
    OnlyInteger,
}

impl Rule {
    /// Evaluation order. A `NotANumber` failure suppresses the rest.
    pub const ORDER: [Rule; 3] = [Rule::NotANumber, Rule::GreaterThanZero, Rule::OnlyInteger];

    /// Applies this rule, returning the error it produces, if any.
    pub fn check(self, field: Field, input: &FieldInput) -> Option<ValidationError> {
        match self {
            Rule::NotANumber => input
                .coerced()
                .is_missing()
                .then_some(ValidationError::NotANumber { field }),
            Rule::GreaterThanZero => (input.coerced().is_positive() == Some(false))
                .then_some(ValidationError::MustBeGreaterThan { field, count: 0 }),
            Rule::OnlyInteger => {
                let raw = input.raw();
                (!raw.is_blank() && !raw.is_integer_like())
                    .then_some(ValidationError::NotAnInteger { field })
            }
        }
    }

    /// Whether a failure of this rule stops the field's remaining rules.
    pub const fn halts(&self) -> bool {
        matches!(self, Rule::NotANumber)
    }
}

// =============================================================================
// Validation Result
// =============================================================================

/// Ordered set of validation errors. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// All messages, quantity's first, each field in rule order.
    pub fn full_messages(&self) -> Vec<String> {
        self.errors.iter().map(ValidationError::message).collect()
    }

    /// Messages for one field only.
    pub fn messages_for(&self, field: Field) -> Vec<String> {
        self.errors
            .iter()
            .filter(|err| err.field() == field)
            .map(ValidationError::message)
            .collect()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_messages().join(", "))
    }
}

impl FromIterator<ValidationError> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        ValidationResult {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationResult {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

// =============================================================================
// Validators
// =============================================================================

/// Runs every rule for one field, in [`Rule::ORDER`].
pub fn validate_field(field: Field, input: &FieldInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for rule in Rule::ORDER {
        if let Some(err) = rule.check(field, input) {
            errors.push(err);
            if rule.halts() {
                break;
            }
        }
    }

    errors
}

/// Validates a constructed order, field by field in declaration order.
pub fn validate_input(input: &OrderInput) -> ValidationResult {
    Field::ALL
        .iter()
        .flat_map(|&field| validate_field(field, input.field(field)))
        .collect()
}

/// Validates a quantity and unit price given in raw form.
pub fn validate(quantity: impl Into<RawInput>, unit_price: impl Into<RawInput>) -> ValidationResult {
    OrderInput::new(quantity, unit_price).validate()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(quantity: impl Into<RawInput>, unit_price: impl Into<RawInput>) -> Vec<String> {
        validate(quantity, unit_price).full_messages()
    }

    #[test]
    fn test_scenarios() {
        let cases: Vec<(RawInput, RawInput, Vec<&str>)> = vec![
            ("2".into(), "300".into(), vec![]),
            (RawInput::Absent, "300".into(), vec!["Quantity is not a number"]),
            ("0".into(), "300".into(), vec!["Quantity must be greater than 0"]),
            ("-1".into(), "300".into(), vec!["Quantity must be greater than 0"]),
            ("2.9".into(), "300".into(), vec!["Quantity must be an integer"]),
            (
                "a".into(),
                "300".into(),
                vec!["Quantity must be greater than 0", "Quantity must be an integer"],
            ),
            ("2".into(), RawInput::Absent, vec!["Unit price is not a number"]),
            ("2".into(), "0".into(), vec!["Unit price must be greater than 0"]),
            ("2".into(), "-1".into(), vec!["Unit price must be greater than 0"]),
            ("2".into(), "99.99".into(), vec!["Unit price must be an integer"]),
            (
                "2".into(),
                "a".into(),
                vec!["Unit price must be greater than 0", "Unit price must be an integer"],
            ),
        ];

        for (quantity, unit_price, expected) in cases {
            let result = validate(quantity.clone(), unit_price.clone());
            assert_eq!(
                result.full_messages(),
                expected,
                "quantity={quantity:?} unit_price={unit_price:?}"
            );
            assert_eq!(result.is_valid(), expected.is_empty());
        }
    }

    #[test]
    fn test_empty_string_is_not_a_number() {
        assert_eq!(messages("", "300"), vec!["Quantity is not a number"]);
        assert_eq!(messages("2", "  "), vec!["Unit price is not a number"]);
    }

    #[test]
    fn test_presence_suppresses_other_rules() {
        let result = validate(RawInput::Absent, RawInput::Absent);
        assert_eq!(result.len(), 2);
        assert_eq!(result.errors()[0].rule(), Rule::NotANumber);
        assert_eq!(result.errors()[1].rule(), Rule::NotANumber);
    }

    #[test]
    fn test_negative_decimal_reports_both() {
        assert_eq!(
            messages("-2.5", "300"),
            vec!["Quantity must be greater than 0", "Quantity must be an integer"]
        );
    }

    #[test]
    fn test_small_decimal_is_positive_but_not_integer() {
        assert_eq!(messages("0.5", "300"), vec!["Quantity must be an integer"]);
    }

    #[test]
    fn test_numeric_raw_inputs() {
        assert!(validate(2_i64, 300_i64).is_valid());
        assert!(validate(2.0, 300.0).is_valid());
        assert_eq!(messages(2_i64, 99.99), vec!["Unit price must be an integer"]);
        assert_eq!(
            messages(0_i64, -3.5),
            vec![
                "Quantity must be greater than 0",
                "Unit price must be greater than 0",
                "Unit price must be an integer",
            ]
        );
    }

    #[test]
    fn test_integers_beyond_decimal_range() {
        let huge = format!("1{}", "0".repeat(30));
        assert!(messages(huge.as_str(), "300").is_empty());
        assert!(messages("2", huge.as_str()).is_empty());
        assert!(messages(RawInput::Float(1e300), "300").is_empty());

        assert_eq!(
            messages(format!("-{huge}"), "300"),
            vec!["Quantity must be greater than 0"]
        );
        assert_eq!(
            messages(RawInput::Float(-1e300), "300"),
            vec!["Quantity must be greater than 0"]
        );
        assert_eq!(
            messages(format!("{huge}.5"), "300"),
            vec!["Quantity must be an integer"]
        );
    }

    #[test]
    fn test_booleans_read_as_one_and_zero() {
        assert_eq!(
            messages(RawInput::Bool(true), "300"),
            vec!["Quantity must be an integer"]
        );
        assert_eq!(
            messages("2", RawInput::Bool(false)),
            vec!["Unit price must be greater than 0", "Unit price must be an integer"]
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert!(validate(" 2 ", "\t300\n").is_valid());
    }

    #[test]
    fn test_quantity_messages_come_first() {
        let result = validate("a", "-1");
        let fields: Vec<Field> = result.errors().iter().map(ValidationError::field).collect();
        assert_eq!(
            fields,
            vec![Field::Quantity, Field::Quantity, Field::UnitPrice]
        );
        assert_eq!(
            result.messages_for(Field::UnitPrice),
            vec!["Unit price must be greater than 0"]
        );
    }

    #[test]
    fn test_validate_is_idempotent() {
        let first = validate("a", "2.9");
        let second = validate("a", "2.9");
        assert_eq!(first, second);
    }

    #[test]
    fn test_rule_order() {
        assert_eq!(
            Rule::ORDER,
            [Rule::NotANumber, Rule::GreaterThanZero, Rule::OnlyInteger]
        );
        assert!(Rule::NotANumber.halts());
        assert!(!Rule::GreaterThanZero.halts());
        assert!(!Rule::OnlyInteger.halts());
    }

    mod properties {
        use super::*;
        use crate::order::total;
        use crate::types::{is_numeric_text, OrderResponse};
        use proptest::prelude::*;
        use rust_decimal::Decimal;

        fn non_numeric_text() -> impl Strategy<Value = String> {
            "\\PC{1,16}".prop_filter("blank or numeric", |text| {
                !text.trim().is_empty() && !is_numeric_text(text)
            })
        }

        proptest! {
            #[test]
            fn positive_integer_strings_are_valid(quantity in 1u32.., unit_price in 1u32..) {
                let result = validate(quantity.to_string(), unit_price.to_string());
                prop_assert!(result.is_valid());
                prop_assert!(result.full_messages().is_empty());

                prop_assert_eq!(
                    total(quantity.to_string(), unit_price.to_string()),
                    Some(Decimal::from(quantity) * Decimal::from(unit_price))
                );

                let order = OrderInput::new(quantity.to_string(), unit_price.to_string());
                let response = OrderResponse::try_from(&order).unwrap();
                prop_assert_eq!(response.total, Some(i128::from(quantity) * i128::from(unit_price)));
                prop_assert!(response.message.is_empty());
            }

            #[test]
            fn blank_strings_are_not_a_number(blank in "[ \t\r\n]{0,8}", unit_price in 1u32..) {
                prop_assert_eq!(
                    validate(blank.as_str(), unit_price.to_string()).full_messages(),
                    vec!["Quantity is not a number"]
                );
                prop_assert_eq!(
                    validate(unit_price.to_string(), blank.as_str()).full_messages(),
                    vec!["Unit price is not a number"]
                );
                prop_assert_eq!(total(blank.as_str(), unit_price.to_string()), None);
            }

            #[test]
            fn missing_quantity_is_not_a_number(unit_price in 1u32..) {
                let result = validate(RawInput::Absent, unit_price.to_string());
                prop_assert_eq!(result.full_messages(), vec!["Quantity is not a number"]);
            }

            #[test]
            fn negative_quantity_must_be_greater_than_zero(quantity in i64::MIN..0, unit_price in 1u32..) {
                let result = validate(quantity.to_string(), unit_price.to_string());
                prop_assert_eq!(result.full_messages(), vec!["Quantity must be greater than 0"]);
            }

            #[test]
            fn decimal_unit_price_must_be_an_integer(
                quantity in 1u32..,
                whole in 1u32..,
                fraction in 1u32..
            ) {
                let result = validate(quantity.to_string(), format!("{whole}.{fraction}"));
                prop_assert_eq!(result.full_messages(), vec!["Unit price must be an integer"]);
            }

            #[test]
            fn non_numeric_quantity_yields_two_messages(
                quantity in non_numeric_text(),
                unit_price in 1u32..
            ) {
                let result = validate(quantity, unit_price.to_string());
                prop_assert_eq!(
                    result.messages_for(Field::Quantity),
                    vec!["Quantity must be greater than 0", "Quantity must be an integer"]
                );
                prop_assert!(result.messages_for(Field::UnitPrice).is_empty());
            }

            #[test]
            fn non_numeric_unit_price_yields_two_messages(
                quantity in 1u32..,
                unit_price in non_numeric_text()
            ) {
                let result = validate(quantity.to_string(), unit_price);
                prop_assert_eq!(
                    result.full_messages(),
                    vec!["Unit price must be greater than 0", "Unit price must be an integer"]
                );
            }
        }
    }
}
