//! Textual form of returned values

use serde_json::Value;

/// Renders a value for standard output.
///
/// Strings are written raw. Everything else uses its compact JSON text, so
/// `3` prints as `3`, `true` as `true` and `[1,2]` as `[1,2]`.
pub fn render_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
