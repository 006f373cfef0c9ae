//! Webhook subscriptions and the event envelope they deliver.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use square_core::Nullable;

/// A registration for webhook delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WebhookSubscription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub enabled: Nullable<bool>,
    /// Event types, e.g. `payment.created`.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub event_types: Nullable<Vec<String>>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub notification_url: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub api_version: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl WebhookSubscription {
    /// True if `event_type` is among the subscribed types.
    #[must_use]
    pub fn subscribes_to(&self, event_type: &str) -> bool {
        self.event_types
            .value()
            .is_some_and(|types| types.iter().any(|t| t == event_type))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EventMetadata {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub event_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub api_version: Nullable<String>,
}

/// Webhook delivery envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Event {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub merchant_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub location_id: Nullable<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Nullable::is_absent")]
    pub event_type: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub event_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<EventData>,
}

impl Event {
    /// Decode the affected object as a concrete model.
    ///
    /// Returns `Ok(None)` when the event carries no object.
    pub fn object_as<T: serde::de::DeserializeOwned>(&self) -> Result<Option<T>, serde_json::Error> {
        match self.data.as_ref().and_then(|data| data.object.value()) {
            Some(object) => T::deserialize(object).map(Some),
            None => Ok(None),
        }
    }
}

/// Payload of an [`Event`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EventData {
    /// Name of the affected object type, e.g. `payment`.
    #[serde(rename = "type", default, skip_serializing_if = "Nullable::is_absent")]
    pub object_type: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub deleted: Nullable<bool>,
    /// The affected object, shaped per `object_type`.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub object: Nullable<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::payments::Payment;
    use serde_json::json;

    #[test]
    fn test_object_as_payment() {
        let event: Event = serde_json::from_value(json!({
            "merchant_id": "M1",
            "type": "payment.created",
            "event_id": "ev-1",
            "created_at": "2024-01-01T00:00:00Z",
            "data": {
                "type": "payment",
                "id": "P1",
                "object": {"payment": {"id": "P1", "status": "APPROVED"}}
            }
        }))
        .unwrap();

        #[derive(Deserialize)]
        struct Wrapped {
            payment: Payment,
        }
        let wrapped: Wrapped = event.object_as().unwrap().unwrap();
        assert_eq!(wrapped.payment.id.as_deref(), Some("P1"));
    }

    #[test]
    fn test_null_object() {
        let event: Event = serde_json::from_value(json!({"data": {"object": null}})).unwrap();
        assert!(event.data.as_ref().unwrap().object.is_null());
        assert!(event.object_as::<Payment>().unwrap().is_none());
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"data": {"object": null}})
        );
    }

    #[test]
    fn test_subscribes_to() {
        let mut subscription = WebhookSubscription::default();
        assert!(!subscription.subscribes_to("payment.created"));
        subscription.event_types.set(vec!["payment.created".to_string()]);
        assert!(subscription.subscribes_to("payment.created"));
    }
}
