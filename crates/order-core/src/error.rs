//! # Error Types
//!
//! Domain-specific error types for order-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  order-core errors (this file)                                          │
//! │  ├── ValidationError  - One user-facing message about one field         │
//! │  └── CoreError        - Why no total could be produced                  │
//! │                                                                         │
//! │  order-cli errors (in app)                                              │
//! │  └── ApiError         - What the client sees (serialized)               │
//! │                                                                         │
//! │  Flow: ValidationError → ValidationResult → CoreError → ApiError        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation errors are normal outcomes, never faults: they end up in the
//! response's `message` array.

use thiserror::Error;

use crate::types::Field;
use crate::validation::{Rule, ValidationResult};

// =============================================================================
// Validation Error
// =============================================================================

/// A single failed rule for a single field.
///
/// The `Display` output is the full message shown to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No value was given (absent or blank).
    #[error("{field} is not a number")]
    NotANumber { field: Field },

    /// Value is at or below the lower bound.
    #[error("{field} must be greater than {count}")]
    MustBeGreaterThan { field: Field, count: i64 },

    /// Raw value is not a whole number.
    #[error("{field} must be an integer")]
    NotAnInteger { field: Field },
}

impl ValidationError {
    /// The field this error is about.
    pub const fn field(&self) -> Field {
        match self {
            ValidationError::NotANumber { field }
            | ValidationError::MustBeGreaterThan { field, .. }
            | ValidationError::NotAnInteger { field } => *field,
        }
    }

    /// The rule that produced this error.
    pub const fn rule(&self) -> Rule {
        match self {
            ValidationError::NotANumber { .. } => Rule::NotANumber,
            ValidationError::MustBeGreaterThan { .. } => Rule::GreaterThanZero,
            ValidationError::NotAnInteger { .. } => Rule::OnlyInteger,
        }
    }

    /// Full human-readable message, e.g. "Unit price must be an integer".
    pub fn message(&self) -> String {
        self.to_string()
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Reasons an order has no total.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// One or more validation rules failed.
    #[error("Invalid order: {0}")]
    Invalid(ValidationResult),

    /// Both fields are valid but their product cannot be represented.
    #[error("Total of {quantity} x {unit_price} is out of range")]
    TotalOutOfRange { quantity: String, unit_price: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
