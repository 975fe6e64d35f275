//! Line-delimited JSON evaluation over stdin/stdout.
//!
//! Each input line is a request
//! `{"id": <any>, "fn": "<name>", "args": [{"real": .., "imaginary": ..}, ..]}`
//! and produces exactly one response line carrying either `result` or
//! `error`. Blank lines are skipped.

use std::fmt;
use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use cplx_core::{ComplexNumber, Evaluation, Function};

// ---------------------------------------------------------------------------
// Message types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    #[serde(default)]
    pub id: Value,
    #[serde(rename = "fn")]
    pub function: String,
    #[serde(default)]
    pub args: Vec<ComplexNumber>,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Evaluation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Failure>,
}

impl BatchResponse {
    pub fn ok(id: Value, result: Evaluation) -> Self {
        Self {
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn err(id: Value, error: Failure) -> Self {
        Self {
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// A failed evaluation, with a stable code for machine consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Failure {
    pub code: &'static str,
    pub message: String,
}

impl Failure {
    fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Failure {}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Resolve `name` and apply it to `args`.
pub fn evaluate(name: &str, args: &[ComplexNumber]) -> Result<Evaluation, Failure> {
    let function: Function = name
        .parse()
        .map_err(|e: String| Failure::new("unknown_function", e))?;

    match function.apply(args) {
        Some(Ok(value)) => Ok(value),
        Some(Err(e)) => Err(Failure::new(e.code(), e.to_string())),
        None => Err(Failure::new(
            "arity_mismatch",
            format!(
                "{function} expects {} argument(s), got {}",
                function.arity(),
                args.len()
            ),
        )),
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub ok: usize,
    pub failed: usize,
}

/// Process requests from `input` until EOF, or until the first failure when
/// `fail_fast` is set.
pub fn run_batch<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    fail_fast: bool,
) -> anyhow::Result<BatchSummary> {
    let mut summary = BatchSummary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        // A line that is not UTF-8 is answered like any other malformed line.
        let response = match std::str::from_utf8(&buf) {
            Ok(text) => {
                let line = text.trim();
                if line.is_empty() {
                    continue;
                }
                respond(line)
            }
            Err(e) => parse_error(e),
        };

        let failed = response.error.is_some();
        write_response(output, &response)?;

        if failed {
            summary.failed += 1;
            if fail_fast {
                break;
            }
        } else {
            summary.ok += 1;
        }
    }

    info!("batch done: {} ok, {} failed", summary.ok, summary.failed);
    Ok(summary)
}

fn respond(line: &str) -> BatchResponse {
    let req = match serde_json::from_str::<BatchRequest>(line) {
        Ok(req) => req,
        Err(e) => return parse_error(e),
    };
    debug!("batch request: {} ({} args)", req.function, req.args.len());
    match evaluate(&req.function, &req.args) {
        Ok(value) => BatchResponse::ok(req.id, value),
        Err(e) => BatchResponse::err(req.id, e),
    }
}

fn parse_error(e: impl fmt::Display) -> BatchResponse {
    warn!("invalid batch line: {e}");
    BatchResponse::err(
        Value::Null,
        Failure::new("parse_error", format!("parse error: {e}")),
    )
}

fn write_response<W: Write>(output: &mut W, resp: &BatchResponse) -> anyhow::Result<()> {
    let json = serde_json::to_string(resp)?;
    writeln!(output, "{json}")?;
    output.flush()?;
    Ok(())
}
