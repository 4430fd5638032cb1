//! # Order Module
//!
//! [`OrderInput`] pairs each field's raw value with its coerced value and
//! computes the order total once validation passes.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Request ──► OrderInput::new(quantity, unit_price)                      │
//! │                   │   (coerce once, immutable from here on)             │
//! │                   ▼                                                     │
//! │              validate() ──► ValidationResult                            │
//! │                   │                                                     │
//! │                   ├── errors? ──► total = None                          │
//! │                   │                                                     │
//! │                   └── valid   ──► total = quantity × unit_price         │
//! │                                                                         │
//! │  Dropped after the response is built. Nothing is stored.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use order_core::OrderInput;
//! use rust_decimal::Decimal;
//!
//! let order = OrderInput::new("2", "300");
//! assert!(order.validate().is_valid());
//! assert_eq!(order.total(), Some(Decimal::from(600)));
//!
//! let order = OrderInput::new("2.9", "300");
//! assert_eq!(order.total(), None);
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{CoreError, CoreResult};
use crate::types::{CoercedValue, Field, OrderResponse, RawInput};
use crate::validation::{self, ValidationResult};

// =============================================================================
// Field Input
// =============================================================================

/// One field's raw value and its coercion, computed together.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldInput {
    raw: RawInput,
    coerced: CoercedValue,
}

impl FieldInput {
    pub fn new(raw: impl Into<RawInput>) -> Self {
        let raw = raw.into();
        let coerced = CoercedValue::coerce(&raw);
        FieldInput { raw, coerced }
    }

    /// The value as sent.
    pub fn raw(&self) -> &RawInput {
        &self.raw
    }

    pub fn coerced(&self) -> CoercedValue {
        self.coerced
    }
}

impl From<RawInput> for FieldInput {
    fn from(raw: RawInput) -> Self {
        FieldInput::new(raw)
    }
}

// =============================================================================
// Order Input
// =============================================================================

/// The two order fields for a single request.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderInput {
    quantity: FieldInput,
    unit_price: FieldInput,
}

impl OrderInput {
    pub fn new(quantity: impl Into<RawInput>, unit_price: impl Into<RawInput>) -> Self {
        OrderInput {
            quantity: FieldInput::new(quantity),
            unit_price: FieldInput::new(unit_price),
        }
    }

    pub fn quantity(&self) -> &FieldInput {
        &self.quantity
    }

    pub fn unit_price(&self) -> &FieldInput {
        &self.unit_price
    }

    pub fn field(&self, field: Field) -> &FieldInput {
        match field {
            Field::Quantity => &self.quantity,
            Field::UnitPrice => &self.unit_price,
        }
    }

    /// Runs all rules on both fields.
    pub fn validate(&self) -> ValidationResult {
        validation::validate_input(self)
    }

    /// Computes the total, or says why there is none.
    ///
    /// ## Errors
    /// - [`CoreError::Invalid`] when any rule fails
    /// - [`CoreError::TotalOutOfRange`] when a field or the product is too
    ///   large to represent
    pub fn try_total(&self) -> CoreResult<Decimal> {
        let result = self.validate();
        if !result.is_valid() {
            return Err(CoreError::Invalid(result));
        }

        // Valid fields are numbers; only out-of-range ones have no value.
        self.quantity
            .coerced()
            .numeric()
            .zip(self.unit_price.coerced().numeric())
            .and_then(|(quantity, unit_price)| quantity.checked_mul(unit_price))
            .ok_or_else(|| self.out_of_range())
    }

    fn out_of_range(&self) -> CoreError {
        CoreError::TotalOutOfRange {
            quantity: self.quantity.raw().to_string(),
            unit_price: self.unit_price.raw().to_string(),
        }
    }

    /// The total if the order is valid, otherwise `None`.
    pub fn total(&self) -> Option<Decimal> {
        self.try_total().ok()
    }
}

/// Total for a quantity and unit price given in raw form.
///
/// ```rust
/// use order_core::order::total;
/// use rust_decimal::Decimal;
///
/// assert_eq!(total("2", "300"), Some(Decimal::from(600)));
/// assert_eq!(total(None::<&str>, "300"), None);
/// ```
pub fn total(quantity: impl Into<RawInput>, unit_price: impl Into<RawInput>) -> Option<Decimal> {
    OrderInput::new(quantity, unit_price).total()
}

// =============================================================================
// Response
// =============================================================================

impl TryFrom<&OrderInput> for OrderResponse {
    type Error = CoreError;

    /// Builds the response payload.
    ///
    /// Validation failures are a normal response; only an unrepresentable
    /// total is an error.
    fn try_from(order: &OrderInput) -> CoreResult<Self> {
        match order.try_total() {
            Ok(total) => total
                .to_i128()
                .map(OrderResponse::valid)
                .ok_or_else(|| order.out_of_range()),
            Err(CoreError::Invalid(result)) => Ok(OrderResponse::invalid(result.full_messages())),
            Err(err) => Err(err),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
