//! # order-core: Pure Business Logic for Order Totals
//!
//! Validates a quantity and a unit price sent by an untrusted client and
//! computes their product. Pure functions only, zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Order Total Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    order-cli (boundary)                         │   │
//! │  │   JSON request ──► allow-list ──► create_order ──► JSON out     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ order-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ validation│  │   order   │  │   error   │  │   │
//! │  │   │ RawInput  │  │   Rule    │  │OrderInput │  │ CoreError │  │   │
//! │  │   │ Coerced   │  │  Result   │  │   total   │  │ Validation│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO GLOBAL STATE • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Fields, raw input, coercion, response payload
//! - [`validation`] - Positive-integer rules and their ordered results
//! - [`order`] - Order input and total calculation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use order_core::{OrderInput, OrderResponse};
//!
//! let order = OrderInput::new("2", "300");
//! let response = OrderResponse::try_from(&order).unwrap();
//! assert_eq!(response.total, Some(600));
//! assert!(response.message.is_empty());
//!
//! let order = OrderInput::new(None::<&str>, "300");
//! let response = OrderResponse::try_from(&order).unwrap();
//! assert_eq!(response.total, None);
//! assert_eq!(response.message, vec!["Quantity is not a number"]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use order::{total, FieldInput, OrderInput};
pub use types::{CoercedValue, Field, OrderResponse, RawInput};
pub use validation::{validate, Rule, ValidationResult};
