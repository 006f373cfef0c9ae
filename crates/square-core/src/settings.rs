//! Wire encoding settings.
//!
//! All fields are optional so partial configurations (environment, CLI
//! flags) can be layered; `effective_*` getters supply defaults.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::wire::EmptyAs;

/// Environment variable selecting the empty-mapping representation.
pub const ENV_EMPTY_AS: &str = "SQUARE_WIRE_EMPTY_AS";

/// Environment variable enabling pretty-printed output.
pub const ENV_PRETTY: &str = "SQUARE_WIRE_PRETTY";

/// Environment variable enabling strict enum decoding.
pub const ENV_STRICT_ENUMS: &str = "SQUARE_WIRE_STRICT_ENUMS";

/// Settings for encoding and decoding models.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WireSettings {
    /// Representation of a model whose wire mapping is empty.
    pub empty_as: Option<EmptyAs>,

    /// Pretty-print JSON text output.
    pub pretty: Option<bool>,

    /// Reject enum tokens outside the documented set instead of passing
    /// them through.
    pub strict_enums: Option<bool>,
}

impl WireSettings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            empty_as: Some(EmptyAs::Object),
            pretty: Some(false),
            strict_enums: Some(false),
        }
    }

    /// Get the effective empty-mapping representation.
    #[must_use]
    pub const fn effective_empty_as(&self) -> EmptyAs {
        match self.empty_as {
            Some(empty_as) => empty_as,
            None => EmptyAs::Object,
        }
    }

    /// Get the effective pretty-print flag.
    #[must_use]
    pub const fn effective_pretty(&self) -> bool {
        match self.pretty {
            Some(pretty) => pretty,
            None => false,
        }
    }

    /// Get the effective strict-enum flag.
    #[must_use]
    pub const fn effective_strict_enums(&self) -> bool {
        match self.strict_enums {
            Some(strict) => strict,
            None => false,
        }
    }

    /// Read settings from the process environment.
    ///
    /// Unset variables leave the corresponding field `None`.
    pub fn from_env() -> Result<Self, SettingsError> {
        let vars: HashMap<String, String> = [ENV_EMPTY_AS, ENV_PRETTY, ENV_STRICT_ENUMS]
            .into_iter()
            .filter_map(|key| std::env::var(key).ok().map(|value| (key.to_string(), value)))
            .collect();
        Self::from_vars(&vars)
    }

    /// Read settings from an explicit variable map.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, SettingsError> {
        let empty_as = vars
            .get(ENV_EMPTY_AS)
            .map(|raw| {
                raw.parse::<EmptyAs>()
                    .map_err(|reason| SettingsError::InvalidValue {
                        key: ENV_EMPTY_AS,
                        reason,
                    })
            })
            .transpose()?;
        let pretty = vars
            .get(ENV_PRETTY)
            .map(|raw| parse_flag(ENV_PRETTY, raw))
            .transpose()?;
        let strict_enums = vars
            .get(ENV_STRICT_ENUMS)
            .map(|raw| parse_flag(ENV_STRICT_ENUMS, raw))
            .transpose()?;

        Ok(Self {
            empty_as,
            pretty,
            strict_enums,
        })
    }

    /// Merge an update into these settings, only touching fields that are Some.
    pub fn merge(&mut self, other: &WireSettingsUpdate) {
        if let Some(empty_as) = other.empty_as {
            self.empty_as = empty_as;
        }
        if let Some(pretty) = other.pretty {
            self.pretty = pretty;
        }
        if let Some(strict) = other.strict_enums {
            self.strict_enums = strict;
        }
    }
}

/// Partial settings update.
///
/// Each field is `Option<Option<T>>`:
/// - `None` = don't change this field
/// - `Some(None)` = reset the field to its default
/// - `Some(Some(value))` = set field to value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WireSettingsUpdate {
    pub empty_as: Option<Option<EmptyAs>>,
    pub pretty: Option<Option<bool>>,
    pub strict_enums: Option<Option<bool>>,
}

/// Settings loading error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, SettingsError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(SettingsError::InvalidValue {
            key,
            reason: format!("expected a boolean, got '{other}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_default_settings() {
        let settings = WireSettings::with_defaults();
        assert_eq!(settings.effective_empty_as(), EmptyAs::Object);
        assert!(!settings.effective_pretty());
        assert!(!settings.effective_strict_enums());
    }

    #[test]
    fn test_unset_fields_fall_back() {
        let settings = WireSettings::default();
        assert_eq!(settings.empty_as, None);
        assert_eq!(settings.effective_empty_as(), EmptyAs::Object);
    }

    #[test]
    fn test_from_vars() {
        let settings = WireSettings::from_vars(&vars(&[
            (ENV_EMPTY_AS, "array"),
            (ENV_PRETTY, "yes"),
            (ENV_STRICT_ENUMS, "0"),
        ]))
        .unwrap();
        assert_eq!(settings.empty_as, Some(EmptyAs::Array));
        assert_eq!(settings.pretty, Some(true));
        assert_eq!(settings.strict_enums, Some(false));
    }

    #[test]
    fn test_from_vars_empty() {
        let settings = WireSettings::from_vars(&HashMap::new()).unwrap();
        assert_eq!(settings, WireSettings::default());
    }

    #[test]
    fn test_from_vars_rejects_bad_flag() {
        let err = WireSettings::from_vars(&vars(&[(ENV_PRETTY, "maybe")])).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::InvalidValue {
                key: ENV_PRETTY,
                ..
            }
        ));
    }

    #[test]
    fn test_from_vars_rejects_bad_empty_as() {
        assert!(WireSettings::from_vars(&vars(&[(ENV_EMPTY_AS, "list")])).is_err());
    }

    #[test]
    fn test_merge() {
        let mut settings = WireSettings::with_defaults();
        settings.merge(&WireSettingsUpdate {
            empty_as: Some(Some(EmptyAs::Array)),
            pretty: Some(None),
            strict_enums: None,
        });
        assert_eq!(settings.empty_as, Some(EmptyAs::Array));
        assert_eq!(settings.pretty, None);
        assert_eq!(settings.strict_enums, Some(false));
    }
}
