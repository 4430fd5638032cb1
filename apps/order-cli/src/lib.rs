//! # order-cli
//!
//! Command-line boundary for order-core.
//!
//! ## Configuration
//! Environment variables:
//! - `ORDER_LOG_LEVEL` - error, warn, info, debug, trace (default: warn)
//! - `ORDER_LOG_FORMAT` - pretty, compact, json (default: compact)
//! - `ORDER_PRETTY_JSON` - pretty-print `quote` output (default: false)
//! - `RUST_LOG` - full filter override

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod request;

// Re-exports
pub use commands::{create_order, run_batch, run_quote, BatchSummary};
pub use config::AppConfig;
pub use error::{ApiError, AppError, ErrorCode};
pub use request::CreateOrderRequest;
