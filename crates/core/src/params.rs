//! The untyped, JSON-decoded params map submitted with an alerting rule.

use serde_json::{Map, Value};

use crate::error::{ParamsError, Result};

/// Rule-type-specific params exactly as they are sent to the alerting API.
pub type Params = Map<String, Value>;

/// Parse JSON text into a [`Params`] object.
pub fn parse_params(raw: &str) -> Result<Params> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(map),
        other => Err(ParamsError::NotAnObject(json_type_name(&other))),
    }
}

/// Short JSON type name used in diagnostics.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
