//! Decode, re-encode and compare, driven through the registry.

mod common;

use common::fixtures::{CANONICAL, EMPTY_BODY, ORDER_WITH_NEW_TOKENS};
use square_core::{EmptyAs, Model, WireError, WireSettings, decode};
use square_models::enums::{FulfillmentType, OrderState};
use square_models::models::{ErrorResponse, Order};
use square_models::{all_enums, all_models, find_model};

fn lenient() -> WireSettings {
    WireSettings::with_defaults()
}

fn strict() -> WireSettings {
    WireSettings {
        strict_enums: Some(true),
        ..WireSettings::with_defaults()
    }
}

#[test]
fn test_canonical_fixtures_are_lossless() {
    for (name, payload) in CANONICAL {
        let descriptor = find_model(name).unwrap_or_else(|| panic!("unknown model {name}"));
        let result = (descriptor.round_trip)(payload, &lenient())
            .unwrap_or_else(|e| panic!("{name}: {e}"));
        assert!(
            result.is_lossless(),
            "{name} changed keys {:?}",
            result.changed_keys
        );
        assert!(result.unrecognized.is_empty(), "{name}: {:?}", result.unrecognized);
    }
}

#[test]
fn test_canonical_fixtures_pass_strict_mode() {
    for (name, payload) in CANONICAL {
        let descriptor = find_model(name).unwrap();
        assert!((descriptor.round_trip)(payload, &strict()).is_ok(), "{name}");
    }
}

#[test]
fn test_every_model_accepts_its_own_empty_form() {
    // Models without required fields decode `{}` and write it back unchanged.
    for descriptor in all_models() {
        match (descriptor.round_trip)(EMPTY_BODY, &lenient()) {
            Ok(result) => assert!(result.is_lossless(), "{}", descriptor.name),
            Err(err) => assert!(
                matches!(err, WireError::Json(_)),
                "{}: {err}",
                descriptor.name
            ),
        }
    }
}

#[test]
fn test_unknown_tokens_pass_through() {
    let order = Order::from_wire(ORDER_WITH_NEW_TOKENS).unwrap();
    assert_eq!(order.state, Some(OrderState::from_token("ARCHIVED")));
    let fulfillment = &order.fulfillments.value().unwrap()[0];
    assert_eq!(
        fulfillment.fulfillment_type.as_ref().map(FulfillmentType::as_str),
        Some("DRONE")
    );

    let result = (find_model("Order").unwrap().round_trip)(ORDER_WITH_NEW_TOKENS, &lenient())
        .unwrap();
    assert!(result.is_lossless());
    let names: Vec<_> = result
        .unrecognized
        .iter()
        .map(|t| (t.enum_name, t.token.as_str()))
        .collect();
    assert_eq!(names, vec![("OrderState", "ARCHIVED"), ("FulfillmentType", "DRONE")]);
}

#[test]
fn test_unknown_tokens_rejected_when_strict() {
    let err = decode::<Order>(ORDER_WITH_NEW_TOKENS, &strict()).unwrap_err();
    match err {
        WireError::UnrecognizedToken(token) => {
            assert_eq!(token.enum_name, "OrderState");
            assert_eq!(token.token, "ARCHIVED");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unknown_field_reported_as_changed() {
    let result = (find_model("Money").unwrap().round_trip)(
        r#"{"amount":5,"currency":"USD","precision":2}"#,
        &lenient(),
    )
    .unwrap();
    assert_eq!(result.changed_keys, vec!["precision".to_string()]);
}

#[test]
fn test_empty_array_setting_round_trips_empty_body() {
    let settings = WireSettings {
        empty_as: Some(EmptyAs::Array),
        ..WireSettings::with_defaults()
    };
    let result = (find_model("ErrorResponse").unwrap().round_trip)(EMPTY_BODY, &settings).unwrap();
    assert_eq!(result.canonical, serde_json::json!([]));
    assert!(result.is_lossless());
    assert_eq!(ErrorResponse::from_wire(EMPTY_BODY).unwrap(), ErrorResponse::default());
}

#[test]
fn test_every_enum_token_round_trips() {
    for descriptor in all_enums() {
        assert!(!descriptor.values.is_empty(), "{}", descriptor.name);
        for token in descriptor.values {
            let again = (descriptor.reencode)(token).unwrap();
            assert_eq!(&again, token, "{}", descriptor.name);
        }
        let unknown = (descriptor.reencode)("NOT_A_REAL_TOKEN_42").unwrap();
        assert_eq!(unknown, "NOT_A_REAL_TOKEN_42", "{}", descriptor.name);
    }
}

#[test]
fn test_enum_tokens_unique_per_enum() {
    for descriptor in all_enums() {
        let mut seen = std::collections::HashSet::new();
        for token in descriptor.values {
            assert!(seen.insert(token), "{} repeats {token}", descriptor.name);
        }
    }
}
