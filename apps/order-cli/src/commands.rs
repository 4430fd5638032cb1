//! # Commands
//!
//! The create-order action and the two ways of feeding it.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  quote --quantity 2 --unit-price 300      batch < requests.jsonl        │
//! │              │                                   │                      │
//! │              └──────────► CreateOrderRequest ◄───┘                      │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                          create_order()  ← order-core                   │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │              {"total":600,"message":[]}  (one JSON per request)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use order_core::{CoreError, OrderResponse};
use serde::Serialize;
use tracing::{debug, info, trace, warn};

use crate::error::{ApiError, AppResult, ErrorCode};
use crate::request::CreateOrderRequest;

/// Validates one order request and computes its total.
///
/// Validation failures produce `Ok` with `total: None` and the messages.
/// Only a total too large to represent is an `Err`.
pub fn create_order(request: &CreateOrderRequest) -> Result<OrderResponse, ApiError> {
    let order = request.to_order();
    let response = match OrderResponse::try_from(&order) {
        Ok(response) => response,
        Err(CoreError::Invalid(result)) => OrderResponse::invalid(result.full_messages()),
        Err(err @ CoreError::TotalOutOfRange { .. }) => {
            warn!(error = %err, "Order total could not be represented");
            return Err(ApiError::new(ErrorCode::TotalOutOfRange, err.to_string()));
        }
    };

    if response.is_valid() {
        debug!(total = ?response.total, "Order accepted");
    } else {
        debug!(messages = ?response.message, "Order rejected");
    }

    Ok(response)
}

/// Counts of batch outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Requests with a total.
    pub accepted: usize,
    /// Requests with validation messages.
    pub rejected: usize,
    /// Lines answered with an error payload.
    pub failed: usize,
}

/// Evaluates a single request and writes its response.
pub fn run_quote<W: Write>(
    request: &CreateOrderRequest,
    pretty: bool,
    out: &mut W,
) -> AppResult<()> {
    match create_order(request) {
        Ok(response) => write_json(out, &response, pretty),
        Err(err) => write_json(out, &err, pretty),
    }
}

/// Evaluates newline-delimited JSON requests, one response line each.
///
/// Blank lines are skipped. A line that is not a JSON object gets a
/// `MALFORMED_REQUEST` error line and the batch continues.
pub fn run_batch<R: BufRead, W: Write>(input: R, out: &mut W) -> AppResult<BatchSummary> {
    let mut summary = BatchSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let _span = tracing::debug_span!("request", line = line_number).entered();
        trace!(body = %line, "Read request");

        let outcome = CreateOrderRequest::from_json(&line)
            .map_err(|err| {
                warn!(error = %err, "Malformed request");
                ApiError::from(err)
            })
            .and_then(|request| create_order(&request));

        match outcome {
            Ok(response) => {
                if response.is_valid() {
                    summary.accepted += 1;
                } else {
                    summary.rejected += 1;
                }
                write_json(out, &response, false)?;
            }
            Err(err) => {
                summary.failed += 1;
                write_json(out, &err, false)?;
            }
        }
    }

    out.flush()?;
    info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        failed = summary.failed,
        "Batch complete"
    );

    Ok(summary)
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, pretty: bool) -> AppResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use order_core::RawInput;
    use serde_json::{json, Value};

    fn batch(input: &str) -> (BatchSummary, Vec<Value>) {
        let mut out = Vec::new();
        let summary = run_batch(input.as_bytes(), &mut out).unwrap();
        let lines = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        (summary, lines)
    }

    #[test]
    fn test_create_order_valid() {
        let response = create_order(&CreateOrderRequest::new("2", "300")).unwrap();
        assert_eq!(response, OrderResponse::valid(600));
    }

    #[test]
    fn test_create_order_invalid() {
        let response = create_order(&CreateOrderRequest::new(RawInput::Absent, "300")).unwrap();
        assert_eq!(response.total, None);
        assert_eq!(response.message, vec!["Quantity is not a number"]);
    }

    #[test]
    fn test_create_order_out_of_range() {
        let huge = format!("1{}", "0".repeat(30));
        let err = create_order(&CreateOrderRequest::new(huge.as_str(), "300")).unwrap_err();
        assert_eq!(err.code, ErrorCode::TotalOutOfRange);
        assert_eq!(err.message, format!("Total of {huge} x 300 is out of range"));
    }

    #[test]
    fn test_create_order_boolean_quantity() {
        let request = CreateOrderRequest::from_json(r#"{"quantity":true,"unit_price":"300"}"#)
            .unwrap();
        let response = create_order(&request).unwrap();
        assert_eq!(response.message, vec!["Quantity must be an integer"]);
    }

    #[test]
    fn test_quote_output() {
        let mut out = Vec::new();
        run_quote(&CreateOrderRequest::new("2.9", "300"), false, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"total\":null,\"message\":[\"Quantity must be an integer\"]}\n"
        );
    }

    #[test]
    fn test_quote_pretty_output_is_same_json() {
        let mut out = Vec::new();
        run_quote(&CreateOrderRequest::new("2", "300"), true, &mut out).unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value, json!({ "total": 600, "message": [] }));
    }

    #[test]
    fn test_batch_mixed_requests() {
        let input = r#"{"quantity":"2","unit_price":"300"}

{"quantity":"a","unit_price":"300","admin":true}
not json
{"quantity":2,"unit_price":99.99}
"#;
        let (summary, lines) = batch(input);

        assert_eq!(
            summary,
            BatchSummary {
                accepted: 1,
                rejected: 2,
                failed: 1,
            }
        );
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], json!({ "total": 600, "message": [] }));
        assert_eq!(
            lines[1],
            json!({
                "total": null,
                "message": ["Quantity must be greater than 0", "Quantity must be an integer"]
            })
        );
        assert_eq!(lines[2]["code"], json!("MALFORMED_REQUEST"));
        assert_eq!(
            lines[3],
            json!({ "total": null, "message": ["Unit price must be an integer"] })
        );
    }

    #[test]
    fn test_batch_reports_out_of_range_total() {
        let huge = "9".repeat(28);
        let input = format!("{{\"quantity\":\"{huge}\",\"unit_price\":\"{huge}\"}}\n");
        let (summary, lines) = batch(&input);
        assert_eq!(summary.failed, 1);
        assert_eq!(lines[0]["code"], json!("TOTAL_OUT_OF_RANGE"));
    }

    #[test]
    fn test_batch_fields_beyond_decimal_range() {
        let huge = format!("1{}", "0".repeat(30));
        let input = format!(
            "{{\"quantity\":\"{huge}\",\"unit_price\":\"300\"}}\n\
             {{\"quantity\":1e300,\"unit_price\":\"300\"}}\n\
             {{\"quantity\":\"-{huge}\",\"unit_price\":\"300\"}}\n"
        );
        let (summary, lines) = batch(&input);

        assert_eq!(
            summary,
            BatchSummary {
                accepted: 0,
                rejected: 1,
                failed: 2,
            }
        );
        assert_eq!(lines[0]["code"], json!("TOTAL_OUT_OF_RANGE"));
        assert_eq!(lines[1]["code"], json!("TOTAL_OUT_OF_RANGE"));
        assert_eq!(
            lines[2],
            json!({ "total": null, "message": ["Quantity must be greater than 0"] })
        );
    }

    #[test]
    fn test_empty_batch() {
        let (summary, lines) = batch("");
        assert_eq!(summary, BatchSummary::default());
        assert!(lines.is_empty());
    }
}
