//! # Domain Types
//!
//! Types that carry a single order request from raw client input to the
//! response payload.
//!
//! ## Two-Stage Values
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Raw → Coerced                                      │
//! │                                                                         │
//! │   RawInput (untouched)          CoercedValue (numeric view)             │
//! │   ─────────────────────         ──────────────────────────              │
//! │   Absent / Text("  ")     ──►   Missing                                 │
//! │   Text("3")               ──►   Number(3)                               │
//! │   Text("2.9")             ──►   Number(2.9)     (never truncated)       │
//! │   Text("a")               ──►   Unparsable      (behaves as zero)       │
//! │   Text("1000…000")        ──►   OutOfRange      (sign kept)             │
//! │   Integer(5)              ──►   Number(5)                               │
//! │   Float(99.99)            ──►   Number(99.99)                           │
//! │   Bool(true)              ──►   Number(1)                               │
//! │                                                                         │
//! │   The raw side is kept because the integer rule must see "2.9",         │
//! │   not whatever a lossy cast made of it.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use ts_rs::TS;

/// Optional sign followed by ASCII digits.
static INTEGER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A[+-]?[0-9]+\z").expect("integer pattern is valid"));

/// Integer or decimal with at least one digit on each side of the point.
static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A[+-]?[0-9]+(\.[0-9]+)?\z").expect("number pattern is valid")
});

/// Returns true if the trimmed text reads as an integer or decimal literal.
pub fn is_numeric_text(text: &str) -> bool {
    NUMBER_PATTERN.is_match(text.trim())
}

/// Returns true if the trimmed text reads as an integer literal.
pub fn is_integer_text(text: &str) -> bool {
    INTEGER_PATTERN.is_match(text.trim())
}

/// Coerces a numeric literal into an exact decimal.
///
/// Literals with more significant digits than a `Decimal` can hold are
/// still numbers: they become [`CoercedValue::OutOfRange`] with their sign.
fn coerce_literal(text: &str) -> CoercedValue {
    let text = text.trim();
    if !NUMBER_PATTERN.is_match(text) {
        return CoercedValue::Unparsable;
    }

    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let digits = digits.trim_start_matches('0');
    if digits.bytes().all(|b| b == b'0' || b == b'.') {
        return CoercedValue::Number(Decimal::ZERO);
    }

    let normalized = format!(
        "{}{}{}",
        if negative { "-" } else { "" },
        if digits.starts_with('.') { "0" } else { "" },
        digits
    );
    match Decimal::from_str(&normalized) {
        Ok(value) => CoercedValue::Number(value),
        Err(_) => CoercedValue::OutOfRange { negative },
    }
}

// =============================================================================
// Field
// =============================================================================

/// The two order fields, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Quantity,
    UnitPrice,
}

impl Field {
    /// All fields in the order their messages are reported.
    pub const ALL: [Field; 2] = [Field::Quantity, Field::UnitPrice];

    /// Request parameter name.
    pub const fn param_name(&self) -> &'static str {
        match self {
            Field::Quantity => "quantity",
            Field::UnitPrice => "unit_price",
        }
    }

    /// Human-readable name used as the message prefix.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Field::Quantity => "Quantity",
            Field::UnitPrice => "Unit price",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// =============================================================================
// Raw Input
// =============================================================================

/// A field value exactly as the client sent it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawInput {
    /// Not sent, or sent as `null`.
    #[default]
    Absent,
    /// Any string, including the empty string.
    Text(String),
    /// A JSON integer.
    Integer(i64),
    /// A JSON number with a fractional or exponent part.
    Float(f64),
    /// A JSON boolean. Numerically 1 or 0, never a whole number.
    Bool(bool),
}

impl RawInput {
    /// Creates a text input.
    pub fn text(value: impl Into<String>) -> Self {
        RawInput::Text(value.into())
    }

    /// Absent, or a string that is empty after trimming whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            RawInput::Absent => true,
            RawInput::Text(text) => text.trim().is_empty(),
            RawInput::Integer(_) | RawInput::Float(_) | RawInput::Bool(_) => false,
        }
    }

    /// Whether the raw form denotes a whole number.
    ///
    /// ## Rules
    /// - `Integer`: always
    /// - `Text`: optional sign and digits only, after trimming
    /// - `Float`: finite with a zero fractional part
    /// - `Absent`, `Bool`: never
    ///
    /// ## Example
    /// ```rust
    /// use order_core::RawInput;
    ///
    /// assert!(RawInput::text(" 42 ").is_integer_like());
    /// assert!(RawInput::Float(3.0).is_integer_like());
    /// assert!(!RawInput::text("2.9").is_integer_like());
    /// assert!(!RawInput::Float(99.99).is_integer_like());
    /// ```
    pub fn is_integer_like(&self) -> bool {
        match self {
            RawInput::Integer(_) => true,
            RawInput::Text(text) => is_integer_text(text),
            RawInput::Float(value) => value.is_finite() && value.fract() == 0.0,
            RawInput::Absent | RawInput::Bool(_) => false,
        }
    }
}

impl fmt::Display for RawInput {
    /// The value as it would appear in a request, trimmed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawInput::Absent => Ok(()),
            RawInput::Text(text) => f.write_str(text.trim()),
            RawInput::Integer(value) => write!(f, "{value}"),
            RawInput::Float(value) => write!(f, "{value}"),
            RawInput::Bool(flag) => write!(f, "{flag}"),
        }
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        RawInput::Text(value.to_string())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        RawInput::Text(value)
    }
}

impl From<i64> for RawInput {
    fn from(value: i64) -> Self {
        RawInput::Integer(value)
    }
}

impl From<f64> for RawInput {
    fn from(value: f64) -> Self {
        RawInput::Float(value)
    }
}

impl<T: Into<RawInput>> From<Option<T>> for RawInput {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Maps a request parameter onto a raw input.
///
/// Only scalars are permitted: arrays and objects are dropped and read as
/// absent.
impl From<&Value> for RawInput {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null | Value::Array(_) | Value::Object(_) => RawInput::Absent,
            Value::Bool(flag) => RawInput::Bool(*flag),
            Value::String(text) => RawInput::Text(text.clone()),
            Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    RawInput::Integer(int)
                } else if number.is_u64() {
                    // Beyond i64: keep the digits so nothing is rounded.
                    RawInput::Text(number.to_string())
                } else {
                    RawInput::Float(number.as_f64().unwrap_or(f64::NAN))
                }
            }
        }
    }
}

// =============================================================================
// Coerced Value
// =============================================================================

/// Numeric interpretation of a [`RawInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoercedValue {
    /// No value was given (absent or blank).
    Missing,
    /// A number, kept exact.
    Number(Decimal),
    /// A number literal too large for a `Decimal`. Only its sign is known.
    OutOfRange { negative: bool },
    /// Text that is not a number. Numerically zero.
    Unparsable,
}

impl CoercedValue {
    /// Coerces a raw value.
    ///
    /// ## Example
    /// ```rust
    /// use order_core::{CoercedValue, RawInput};
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(CoercedValue::coerce(&RawInput::text("")), CoercedValue::Missing);
    /// assert_eq!(
    ///     CoercedValue::coerce(&RawInput::text("2.9")),
    ///     CoercedValue::Number(Decimal::new(29, 1))
    /// );
    /// assert_eq!(CoercedValue::coerce(&RawInput::text("a")), CoercedValue::Unparsable);
    /// ```
    pub fn coerce(raw: &RawInput) -> Self {
        if raw.is_blank() {
            return CoercedValue::Missing;
        }

        match raw {
            RawInput::Absent => CoercedValue::Missing,
            RawInput::Integer(value) => CoercedValue::Number(Decimal::from(*value)),
            RawInput::Bool(flag) => CoercedValue::Number(Decimal::from(u8::from(*flag))),
            RawInput::Text(text) => coerce_literal(text),
            // Shortest round-trip text, so 99.99 stays 99.99.
            RawInput::Float(value) if value.is_finite() => coerce_literal(&value.to_string()),
            RawInput::Float(_) => CoercedValue::Unparsable,
        }
    }

    /// Whether coercion found no value at all.
    pub const fn is_missing(&self) -> bool {
        matches!(self, CoercedValue::Missing)
    }

    /// The value used for comparisons and arithmetic.
    ///
    /// `Unparsable` reads as zero. `Missing` and `OutOfRange` have no
    /// representable value.
    pub fn numeric(&self) -> Option<Decimal> {
        match self {
            CoercedValue::Missing | CoercedValue::OutOfRange { .. } => None,
            CoercedValue::Number(value) => Some(*value),
            CoercedValue::Unparsable => Some(Decimal::ZERO),
        }
    }

    /// Whether the value is strictly positive; `None` when missing.
    pub fn is_positive(&self) -> Option<bool> {
        match self {
            CoercedValue::Missing => None,
            CoercedValue::Number(value) => Some(*value > Decimal::ZERO),
            CoercedValue::OutOfRange { negative } => Some(!negative),
            CoercedValue::Unparsable => Some(false),
        }
    }
}

impl From<&RawInput> for CoercedValue {
    fn from(raw: &RawInput) -> Self {
        CoercedValue::coerce(raw)
    }
}

// =============================================================================
// Order Response
// =============================================================================

/// Response payload for one order request.
///
/// ```json
/// { "total": 600, "message": [] }
/// { "total": null, "message": ["Quantity must be an integer"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct OrderResponse {
    /// Product of quantity and unit price; `null` unless the input was valid.
    #[ts(type = "number | null")]
    pub total: Option<i128>,

    /// Validation messages in report order; empty when valid.
    pub message: Vec<String>,
}

impl OrderResponse {
    /// Response for a valid order.
    pub fn valid(total: i128) -> Self {
        OrderResponse {
            total: Some(total),
            message: Vec::new(),
        }
    }

    /// Response for an invalid order.
    pub fn invalid(message: Vec<String>) -> Self {
        OrderResponse {
            total: None,
            message,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.total.is_some()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
