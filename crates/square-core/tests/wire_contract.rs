//! Integration tests for the presence and encoding rules.
//!
//! Uses a small hand-declared model so the rules are checked independently of
//! the generated catalog.

use serde::{Deserialize, Serialize};
use serde_json::json;
use square_core::{
    EmptyAs, Model, Nullable, WireEnum, WireError, WireSettings, decode, impl_model, round_trip,
    wire_enum,
};

wire_enum! {
    /// Delivery speed.
    pub enum Speed {
        Standard => "STANDARD",
        Express => "EXPRESS",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
struct Parcel {
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    speed: Option<Speed>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    note: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<String>>,
}

impl Parcel {
    fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            speed: None,
            note: Nullable::Absent,
            tags: None,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct Empty {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    cursor: Nullable<String>,
}

impl_model!(Parcel, Empty);

#[test]
fn test_required_only() {
    let parcel = Parcel::new("box");
    assert_eq!(parcel.to_wire(EmptyAs::Object).unwrap(), json!({"label": "box"}));
}

#[test]
fn test_nullable_lifecycle() {
    let mut parcel = Parcel::new("box");

    parcel.note.set_null();
    assert_eq!(
        parcel.to_wire(EmptyAs::Object).unwrap(),
        json!({"label": "box", "note": null})
    );

    parcel.note.set("fragile".to_string());
    assert_eq!(
        parcel.to_wire(EmptyAs::Object).unwrap(),
        json!({"label": "box", "note": "fragile"})
    );

    parcel.note.unset();
    assert_eq!(parcel.to_wire(EmptyAs::Object).unwrap(), json!({"label": "box"}));
}

#[test]
fn test_wire_map_keeps_declaration_order() {
    let mut parcel = Parcel::new("box");
    parcel.tags = Some(vec![]);
    parcel.note.set_null();
    parcel.speed = Some(Speed::Express);

    let keys: Vec<String> = parcel.to_wire_map().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["label", "speed", "note", "tags"]);
}

#[test]
fn test_round_trip_law() {
    let mut parcel = Parcel::new("box");
    parcel.speed = Some(Speed::Unrecognized("DRONE".to_string()));
    parcel.note.set_null();

    let text = serde_json::to_string(&parcel).unwrap();
    let again = Parcel::from_wire(&text).unwrap();
    assert_eq!(again, parcel);
    assert_eq!(
        again.to_wire_map().unwrap(),
        parcel.to_wire_map().unwrap()
    );
}

#[test]
fn test_enum_tokens_unchanged() {
    for speed in Speed::known() {
        let mut parcel = Parcel::new("box");
        parcel.speed = Some(speed.clone());
        let map = parcel.to_wire_map().unwrap();
        assert_eq!(map["speed"], json!(speed.as_str()));
    }
}

#[test]
fn test_empty_flag() {
    assert_eq!(Empty::default().to_wire(EmptyAs::Object).unwrap(), json!({}));
    assert_eq!(Empty::default().to_wire(EmptyAs::Array).unwrap(), json!([]));
}

#[test]
fn test_decode_collects_unrecognized() {
    let settings = WireSettings::with_defaults();
    let decoded = decode::<Parcel>(r#"{"label":"x","speed":"TELEPORT"}"#, &settings).unwrap();
    assert_eq!(decoded.value.speed.as_ref().map(Speed::as_str), Some("TELEPORT"));
    assert_eq!(decoded.unrecognized.len(), 1);
    assert_eq!(decoded.unrecognized[0].enum_name, "Speed");
}

#[test]
fn test_decode_strict_rejects() {
    let settings = WireSettings {
        strict_enums: Some(true),
        ..WireSettings::default()
    };
    let err = decode::<Parcel>(r#"{"label":"x","speed":"TELEPORT"}"#, &settings).unwrap_err();
    assert!(matches!(err, WireError::UnrecognizedToken(ref t) if t.token == "TELEPORT"));

    // Documented tokens still decode in strict mode.
    assert!(decode::<Parcel>(r#"{"label":"x","speed":"EXPRESS"}"#, &settings).is_ok());
}

#[test]
fn test_missing_required_field_is_a_json_error() {
    let err = Parcel::from_wire("{}").unwrap_err();
    assert!(matches!(err, WireError::Json(_)));
}

#[test]
fn test_round_trip_empty_array_payload_as_array() {
    let settings = WireSettings {
        empty_as: Some(EmptyAs::Array),
        ..WireSettings::default()
    };
    let result = round_trip::<Empty>("{}", &settings).unwrap();
    assert_eq!(result.canonical, json!([]));
    assert!(result.is_lossless());
}
