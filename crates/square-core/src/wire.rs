//! Conversion between models and their JSON wire form.
//!
//! Serialization follows the field presence rules:
//!
//! 1. required fields are always written;
//! 2. `Option` fields only when `Some`;
//! 3. [`Nullable`](crate::Nullable) fields when touched, as `null` if null;
//! 4. nested models and lists are written transitively;
//! 5. an empty top-level mapping becomes `{}` or `[]` per [`EmptyAs`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::{UnrecognizedToken, collect};
use crate::error::{WireError, json_kind};
use crate::settings::WireSettings;

/// Representation of a model whose wire mapping ended up empty.
///
/// Some endpoints distinguish "empty object" from "no data" and expect an
/// empty array for the latter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyAs {
    /// `{}`
    #[default]
    Object,
    /// `[]`
    Array,
}

impl EmptyAs {
    /// Get the canonical string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
        }
    }
}

impl std::fmt::Display for EmptyAs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EmptyAs {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "object" => Ok(Self::Object),
            "array" => Ok(Self::Array),
            other => Err(format!("expected 'object' or 'array', got '{other}'")),
        }
    }
}

/// Serialize a model to its ordered wire mapping.
///
/// Keys appear in field declaration order.
pub fn to_wire_map<T: Serialize + ?Sized>(model: &T) -> Result<Map<String, Value>, WireError> {
    match serde_json::to_value(model)? {
        Value::Object(map) => Ok(map),
        other => Err(WireError::NotAnObject {
            model: short_type_name::<T>().to_string(),
            found: json_kind(&other),
        }),
    }
}

/// Serialize a model, applying the empty-mapping rule.
pub fn to_wire_value<T: Serialize + ?Sized>(model: &T, empty_as: EmptyAs) -> Result<Value, WireError> {
    let map = to_wire_map(model)?;
    if map.is_empty() && empty_as == EmptyAs::Array {
        tracing::debug!(
            model = short_type_name::<T>(),
            "empty wire mapping written as array"
        );
        return Ok(Value::Array(Vec::new()));
    }
    Ok(Value::Object(map))
}

/// Serialize a model to a JSON string using the given settings.
pub fn to_wire_string<T: Serialize + ?Sized>(
    model: &T,
    settings: &WireSettings,
) -> Result<String, WireError> {
    let value = to_wire_value(model, settings.effective_empty_as())?;
    let text = if settings.effective_pretty() {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(text)
}

/// Parse a wire payload, letting unrecognized enum tokens pass through.
pub fn from_wire<T: DeserializeOwned>(input: &str) -> Result<T, WireError> {
    Ok(serde_json::from_str(input)?)
}

/// A decoded model together with the enum tokens it did not recognize.
#[derive(Debug, Clone)]
pub struct Decoded<T> {
    /// The decoded model.
    pub value: T,
    /// Unrecognized tokens in the order they were read.
    pub unrecognized: Vec<UnrecognizedToken>,
}

/// Decode a payload, collecting unrecognized enum tokens.
///
/// With `strict_enums` the first unrecognized token aborts the decode with
/// [`WireError::UnrecognizedToken`]. The payload is read straight from text,
/// so it is held to the same rules as [`from_wire`] (a repeated key is an
/// error, not last-one-wins).
pub fn decode<T: DeserializeOwned>(input: &str, settings: &WireSettings) -> Result<Decoded<T>, WireError> {
    let strict = settings.effective_strict_enums();
    tracing::trace!(
        model = short_type_name::<T>(),
        strict,
        bytes = input.len(),
        "decoding wire payload"
    );

    let collected = collect(strict, || serde_json::from_str::<T>(input));

    if let Some(rejected) = collected.rejected {
        return Err(WireError::UnrecognizedToken(rejected));
    }
    let value = collected.result?;

    Ok(Decoded {
        value,
        unrecognized: collected.seen,
    })
}

/// Result of decoding a payload and writing it back out.
#[derive(Debug, Clone)]
pub struct RoundTrip {
    /// The re-serialized (canonical) form.
    pub canonical: Value,
    /// Unrecognized enum tokens met while decoding.
    pub unrecognized: Vec<UnrecognizedToken>,
    /// Top-level keys whose value differs between input and output, in
    /// input order followed by keys only present in the output.
    pub changed_keys: Vec<String>,
}

impl RoundTrip {
    /// True if the canonical form equals the input.
    #[must_use]
    pub fn is_lossless(&self) -> bool {
        self.changed_keys.is_empty()
    }
}

/// Decode `input` as `T`, re-serialize it and compare.
///
/// Fields the model does not know, and optional fields sent as `null` that
/// are not nullable, show up in [`RoundTrip::changed_keys`].
pub fn round_trip<T>(input: &str, settings: &WireSettings) -> Result<RoundTrip, WireError>
where
    T: Serialize + DeserializeOwned,
{
    let decoded = decode::<T>(input, settings)?;
    let raw: Value = serde_json::from_str(input)?;
    let canonical = to_wire_value(&decoded.value, settings.effective_empty_as())?;
    let changed_keys = diff_top_level(&raw, &canonical);

    if !changed_keys.is_empty() {
        tracing::debug!(
            model = short_type_name::<T>(),
            changed = ?changed_keys,
            "round trip was not lossless"
        );
    }

    Ok(RoundTrip {
        canonical,
        unrecognized: decoded.unrecognized,
        changed_keys,
    })
}

fn diff_top_level(input: &Value, output: &Value) -> Vec<String> {
    match (input, output) {
        (Value::Object(before), Value::Object(after)) => {
            let mut changed: Vec<String> = before
                .iter()
                .filter(|(key, value)| after.get(key.as_str()) != Some(value))
                .map(|(key, _)| key.clone())
                .collect();
            changed.extend(
                after
                    .keys()
                    .filter(|key| !before.contains_key(key.as_str()))
                    .cloned(),
            );
            changed
        }
        _ if input == output => Vec::new(),
        // An empty object written back as `[]` (or vice versa) is expected.
        (Value::Object(map), Value::Array(items)) | (Value::Array(items), Value::Object(map))
            if map.is_empty() && items.is_empty() =>
        {
            Vec::new()
        }
        _ => vec![String::new()],
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Nullable;
    use serde_json::json;

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct Memo {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Nullable::is_absent")]
        body: Nullable<String>,
    }

    #[test]
    fn test_empty_mapping_as_object() {
        let value = to_wire_value(&Memo::default(), EmptyAs::Object).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_empty_mapping_as_array() {
        let value = to_wire_value(&Memo::default(), EmptyAs::Array).unwrap();
        assert_eq!(value, json!([]));
    }

    #[test]
    fn test_non_empty_ignores_array_flag() {
        let memo = Memo {
            body: Nullable::Null,
            ..Memo::default()
        };
        let value = to_wire_value(&memo, EmptyAs::Array).unwrap();
        assert_eq!(value, json!({"body": null}));
    }

    #[test]
    fn test_to_wire_map_rejects_non_objects() {
        let err = to_wire_map(&vec![1, 2]).unwrap_err();
        assert!(matches!(err, WireError::NotAnObject { found: "array", .. }));
    }

    #[test]
    fn test_round_trip_reports_dropped_keys() {
        let settings = WireSettings::with_defaults();
        let result = round_trip::<Memo>(r#"{"title":null,"body":null,"extra":1}"#, &settings).unwrap();
        assert_eq!(result.canonical, json!({"body": null}));
        assert_eq!(result.changed_keys, vec!["title".to_string(), "extra".to_string()]);
        assert!(!result.is_lossless());
    }

    #[test]
    fn test_round_trip_lossless() {
        let settings = WireSettings::with_defaults();
        let result = round_trip::<Memo>(r#"{"title":"a","body":"b"}"#, &settings).unwrap();
        assert!(result.is_lossless());
    }

    #[test]
    fn test_repeated_key_rejected_by_every_entry_point() {
        let input = r#"{"title":"a","title":"b"}"#;
        let settings = WireSettings::with_defaults();
        assert!(matches!(from_wire::<Memo>(input), Err(WireError::Json(_))));
        assert!(matches!(decode::<Memo>(input, &settings), Err(WireError::Json(_))));
        assert!(matches!(round_trip::<Memo>(input, &settings), Err(WireError::Json(_))));
    }

    #[test]
    fn test_empty_as_parse() {
        assert_eq!("Array".parse::<EmptyAs>(), Ok(EmptyAs::Array));
        assert_eq!("object".parse::<EmptyAs>(), Ok(EmptyAs::Object));
        assert!("list".parse::<EmptyAs>().is_err());
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<Memo>(), "Memo");
        assert_eq!(short_type_name::<Vec<u8>>(), "Vec");
    }
}
