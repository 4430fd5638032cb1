//! Request parsing and parameter allow-listing.
//!
//! Only `quantity` and `unit_price` are read from a request. Any other key
//! is dropped here and never reaches order-core.

use order_core::{Field, OrderInput, RawInput};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::RequestError;

/// Parameters of one create-order request, after allow-listing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateOrderRequest {
    pub quantity: RawInput,
    pub unit_price: RawInput,
}

impl CreateOrderRequest {
    pub fn new(quantity: impl Into<RawInput>, unit_price: impl Into<RawInput>) -> Self {
        CreateOrderRequest {
            quantity: quantity.into(),
            unit_price: unit_price.into(),
        }
    }

    /// Whether a parameter name is on the allow-list.
    pub fn is_permitted(name: &str) -> bool {
        Field::ALL.iter().any(|field| field.param_name() == name)
    }

    /// Picks the permitted parameters out of a JSON object.
    pub fn from_params(params: &Map<String, Value>) -> Self {
        for name in params.keys().filter(|name| !Self::is_permitted(name)) {
            debug!(param = %name, "Ignoring unpermitted parameter");
        }

        let param = |field: Field| {
            params
                .get(field.param_name())
                .map(RawInput::from)
                .unwrap_or_default()
        };

        CreateOrderRequest {
            quantity: param(Field::Quantity),
            unit_price: param(Field::UnitPrice),
        }
    }

    /// Parses a JSON object request body.
    pub fn from_json(body: &str) -> Result<Self, RequestError> {
        match serde_json::from_str::<Value>(body)? {
            Value::Object(params) => Ok(Self::from_params(&params)),
            _ => Err(RequestError::NotAnObject),
        }
    }

    pub fn to_order(&self) -> OrderInput {
        OrderInput::new(self.quantity.clone(), self.unit_price.clone())
    }
}
