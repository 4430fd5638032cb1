//! # Error Types
//!
//! Errors raised at the request boundary.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin line                                                             │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  Not JSON / not an object? ── RequestError ──┐                          │
//! │      │                                       │                          │
//! │      ▼                                       ▼                          │
//! │  create_order ── CoreError::TotalOutOfRange ─► ApiError ─► stdout line  │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  OrderResponse (valid or with messages) ──────────────────► stdout line │
//! │                                                                         │
//! │  Broken stdin/stdout ── AppError ──► stderr, exit 1                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation messages are NOT errors here: they travel inside a normal
//! `OrderResponse`.

use std::io;

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Request Error
// =============================================================================

/// A request line that cannot be read as parameters.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Request is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("Request must be a JSON object")]
    NotAnObject,
}

// =============================================================================
// API Error
// =============================================================================

/// Error payload written in place of a response.
///
/// ```json
/// { "code": "MALFORMED_REQUEST", "message": "Request must be a JSON object" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for API error payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request could not be parsed
    MalformedRequest,

    /// Valid input whose product cannot be represented
    TotalOutOfRange,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }
}

impl From<RequestError> for ApiError {
    fn from(err: RequestError) -> Self {
        ApiError::new(ErrorCode::MalformedRequest, err.to_string())
    }
}

// =============================================================================
// App Error
// =============================================================================

/// Failures that stop a command.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
