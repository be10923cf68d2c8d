//! Strict structural decoding of a params object into one typed shape.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Why a params object could not be decoded into a shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A key the shape (or one of its nested objects) does not declare.
    #[error("unknown field \"{key}\"")]
    UnknownField {
        key: String,
        /// Field names declared at the level where `key` was found.
        expected: Vec<String>,
    },

    /// A declared key holds a value of the wrong JSON type.
    #[error("{0}")]
    Mismatch(String),
}

impl DecodeError {
    fn from_serde(err: serde_json::Error) -> Self {
        let text = err.to_string();
        match parse_unknown_field(&text) {
            Some((key, expected)) => DecodeError::UnknownField { key, expected },
            None => DecodeError::Mismatch(text),
        }
    }

    pub fn is_unknown_field(&self) -> bool {
        matches!(self, DecodeError::UnknownField { .. })
    }
}

/// Decode `params` into `T`, discarding the typed value.
///
/// Shapes are declared with `deny_unknown_fields`, so any undeclared key fails.
/// `null` is accepted for every field because all shape fields are `Option`s.
pub fn decode_into<T: DeserializeOwned>(params: &Value) -> Result<(), DecodeError> {
    T::deserialize(params)
        .map(|_| ())
        .map_err(DecodeError::from_serde)
}

/// Split serde's `unknown field` message into the key and the declared names.
///
/// serde renders it as ``unknown field `k`, expected one of `a`, `b` ``,
/// ``unknown field `k`, expected `a` or `b` `` or
/// ``unknown field `k`, there are no fields``.
fn parse_unknown_field(text: &str) -> Option<(String, Vec<String>)> {
    const EXPECTED: &str = "`, expected ";
    const NO_FIELDS: &str = "`, there are no fields";

    let rest = text.strip_prefix("unknown field `")?;
    if let Some(idx) = rest.rfind(EXPECTED) {
        let expected = rest[idx + EXPECTED.len()..]
            .split('`')
            .skip(1)
            .step_by(2)
            .map(str::to_string)
            .collect();
        return Some((rest[..idx].to_string(), expected));
    }
    let idx = rest.rfind(NO_FIELDS)?;
    Some((rest[..idx].to_string(), Vec::new()))
}
