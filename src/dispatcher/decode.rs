//! Double-encoded argument lists
//!
//! The wire form is a JSON array whose elements are JSON strings, each of
//! which holds the JSON text of one argument: `(1, "x")` travels as
//! `["1", "\"x\""]`. Decoding takes two passes.

use serde_json::Value;
use tracing::trace;

use crate::error::{DispatchError, Result};

/// Decodes the argument list into positional values
pub fn decode_arguments(raw: &str) -> Result<Vec<Value>> {
    let encoded: Vec<Value> =
        serde_json::from_str(raw).map_err(DispatchError::invalid_argument_list)?;
    trace!("Decoding {} encoded arguments", encoded.len());

    encoded
        .iter()
        .enumerate()
        .map(|(index, element)| {
            let text = element
                .as_str()
                .ok_or_else(|| DispatchError::non_string_argument(index))?;
            serde_json::from_str(text).map_err(|e| DispatchError::invalid_argument(index, e))
        })
        .collect()
}

/// Produces the wire form for a list of values
pub fn encode_arguments(args: &[Value]) -> String {
    let encoded: Vec<Value> = args
        .iter()
        .map(|arg| Value::String(arg.to_string()))
        .collect();
    Value::Array(encoded).to_string()
}
