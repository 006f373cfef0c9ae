//! Error payloads.

use serde::{Deserialize, Serialize};

use crate::enums::{ErrorCategory, ErrorCode};

/// One entry of the `errors` array returned by failed requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Error {
    /// High-level class of the error.
    pub category: ErrorCategory,

    /// Specific error code.
    pub code: ErrorCode,

    /// Human-readable description; not intended for end users.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Request field the error relates to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl Error {
    /// Create an error with only the required fields.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: ErrorCode) -> Self {
        Self {
            category,
            code,
            detail: None,
            field: None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.category, self.code)?;
        if let Some(field) = &self.field {
            write!(f, " ({field})")?;
        }
        if let Some(detail) = &self.detail {
            write!(f, ": {detail}")?;
        }
        Ok(())
    }
}

/// Body of a failed response that carries nothing but errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,
}

impl ErrorResponse {
    /// Errors in the response, empty if none were sent.
    #[must_use]
    pub fn errors(&self) -> &[Error] {
        self.errors.as_deref().unwrap_or_default()
    }

    /// True if any error is in a category worth retrying.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        self.errors().iter().any(|e| e.category.is_transient())
    }
}
