//! CLI-specific error types and mappings to exit codes.

use square_core::{SettingsError, WireError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Unknown model or enum name, or otherwise unusable arguments.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The payload could not be decoded as the requested model.
    #[error("Invalid payload: {0}")]
    Data(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to an exit code from sysexits.h.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Data(_) => 65,     // EX_DATAERR
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<WireError> for CliError {
    fn from(err: WireError) -> Self {
        Self::Data(err.to_string())
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use square_core::UnrecognizedToken;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Arguments(String::new()).exit_code(), 2);
        assert_eq!(CliError::Data(String::new()).exit_code(), 65);
        assert_eq!(CliError::Io(String::new()).exit_code(), 74);
        assert_eq!(CliError::Config(String::new()).exit_code(), 78);
    }

    #[test]
    fn test_wire_errors_are_data_errors() {
        let err: CliError = WireError::UnrecognizedToken(UnrecognizedToken {
            enum_name: "OrderState",
            token: "ARCHIVED".to_string(),
        })
        .into();
        assert_eq!(err.exit_code(), 65);
        assert!(err.to_string().contains("ARCHIVED"));
    }

    #[test]
    fn test_settings_errors_are_config_errors() {
        let err: CliError = SettingsError::InvalidValue {
            key: "SQUARE_WIRE_PRETTY",
            reason: "expected a boolean".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_io_errors() {
        let err: CliError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.exit_code(), 74);
    }
}
