//! CLI argument definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::Level;

use crate::config::AppConfig;
use crate::logging::LogFormat;
use crate::request::CreateOrderRequest;

#[derive(Debug, Parser)]
#[command(
    name = "order-cli",
    version,
    about = "Validate an order and compute its total",
    long_about = "Validate a quantity and unit price and compute their product.\n\n\
                  Responses are JSON objects: {\"total\": <integer|null>, \"message\": [...]}.\n\
                  Logs go to stderr; configure with ORDER_LOG_LEVEL, ORDER_LOG_FORMAT, RUST_LOG."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (overrides ORDER_LOG_LEVEL).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (overrides ORDER_LOG_FORMAT).
    #[arg(long = "log-format", value_enum, global = true)]
    pub log_format: Option<LogFormatArg>,

    /// Pretty-print the `quote` response (overrides ORDER_PRETTY_JSON).
    #[arg(long, global = true)]
    pub pretty: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate a single order given as flags.
    Quote(QuoteArgs),

    /// Evaluate newline-delimited JSON requests read from stdin.
    Batch,
}

#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Quantity as entered (omit to send no value).
    #[arg(long, allow_hyphen_values = true)]
    pub quantity: Option<String>,

    /// Unit price as entered (omit to send no value).
    #[arg(long = "unit-price", allow_hyphen_values = true)]
    pub unit_price: Option<String>,
}

impl QuoteArgs {
    pub fn to_request(&self) -> CreateOrderRequest {
        CreateOrderRequest::new(self.quantity.clone(), self.unit_price.clone())
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for Level {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Level::ERROR,
            LogLevelArg::Warn => Level::WARN,
            LogLevelArg::Info => Level::INFO,
            LogLevelArg::Debug => Level::DEBUG,
            LogLevelArg::Trace => Level::TRACE,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

impl Cli {
    /// Applies flags on top of the environment configuration.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(level) = self.log_level {
            config.log_level = level.into();
        }
        if let Some(format) = self.log_format {
            config.log_format = format.into();
        }
        if self.pretty {
            config.pretty_json = true;
        }
        config
    }
}
