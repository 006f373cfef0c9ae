//! Error types for wire encoding and decoding.

use thiserror::Error;

use crate::enums::UnrecognizedToken;

/// Errors raised while moving models to and from their wire form.
///
/// Construction never fails at runtime (required fields are constructor
/// parameters), so every variant here originates in the encoding layer.
#[derive(Debug, Error)]
pub enum WireError {
    /// The payload was not valid JSON or did not match the model shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A model serialized to something other than a JSON object.
    #[error("Expected a JSON object for {model}, got {found}")]
    NotAnObject {
        /// Model (or type) being serialized
        model: String,
        /// JSON kind that was produced instead
        found: &'static str,
    },

    /// Strict decoding met a token outside an enum's documented set.
    #[error("Unrecognized token {0}")]
    UnrecognizedToken(UnrecognizedToken),

    /// A timestamp field did not hold an RFC 3339 value.
    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp {
        /// The raw wire value
        value: String,
        /// Parser message
        reason: String,
    },
}

impl WireError {
    /// Returns true if the error stems from the payload itself rather than
    /// from a model that cannot be represented on the wire.
    #[must_use]
    pub const fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::Json(_) | Self::UnrecognizedToken(_) | Self::InvalidTimestamp { .. }
        )
    }
}

/// Short name of a JSON value's kind, used in error messages.
pub(crate) const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_an_object_message() {
        let err = WireError::NotAnObject {
            model: "Money".to_string(),
            found: "array",
        };
        assert_eq!(err.to_string(), "Expected a JSON object for Money, got array");
        assert!(!err.is_data_error());
    }

    #[test]
    fn test_unrecognized_token_message() {
        let err = WireError::UnrecognizedToken(UnrecognizedToken {
            enum_name: "CardBrand",
            token: "MYSTERY".to_string(),
        });
        assert_eq!(err.to_string(), "Unrecognized token CardBrand::\"MYSTERY\"");
        assert!(err.is_data_error());
    }

    #[test]
    fn test_json_kind() {
        assert_eq!(json_kind(&serde_json::json!([])), "array");
        assert_eq!(json_kind(&serde_json::json!({})), "object");
        assert_eq!(json_kind(&serde_json::Value::Null), "null");
    }
}
