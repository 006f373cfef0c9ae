//! Subscriptions to recurring plans.

use serde::{Deserialize, Serialize};
use square_core::Nullable;

use super::common::Money;
use super::errors::Error;
use crate::enums::{SubscriptionActionType, SubscriptionCadence, SubscriptionStatus};

/// A customer's subscription to a plan variation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Subscription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_variation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub canceled_date: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charged_through_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub tax_percentage: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_override_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub card_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub actions: Nullable<Vec<SubscriptionAction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_billing_anchor_date: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phases: Option<Vec<SubscriptionPhase>>,
}

impl Subscription {
    /// Pending actions of the given kind.
    pub fn actions_of(&self, kind: &SubscriptionActionType) -> impl Iterator<Item = &SubscriptionAction> {
        self.actions
            .value()
            .into_iter()
            .flatten()
            .filter(move |action| action.action_type.as_ref() == Some(kind))
    }

    /// Typed `created_at`.
    pub fn created_at_utc(&self) -> Result<Option<chrono::DateTime<chrono::Utc>>, square_core::WireError> {
        square_core::time::parse_optional_timestamp(self.created_at.as_deref())
    }
}

/// A scheduled change to a subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SubscriptionAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub action_type: Option<SubscriptionActionType>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub effective_date: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub monthly_billing_anchor_date: Nullable<i32>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub new_plan_variation_id: Nullable<String>,
}

/// One pricing phase of a plan variation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SubscriptionPhase {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub uid: Nullable<String>,
    pub cadence: SubscriptionCadence,
    /// Number of cadences; `null` means the phase never ends.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub periods: Nullable<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_price_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub ordinal: Nullable<i64>,
}

impl SubscriptionPhase {
    #[must_use]
    pub const fn new(cadence: SubscriptionCadence) -> Self {
        Self {
            uid: Nullable::Absent,
            cadence,
            periods: Nullable::Absent,
            recurring_price_money: None,
            ordinal: Nullable::Absent,
        }
    }

    /// True unless a period count is set.
    #[must_use]
    pub const fn is_open_ended(&self) -> bool {
        !self.periods.is_value()
    }
}

// --- Endpoint bodies ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateSubscriptionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
    pub location_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_variation_id: Option<String>,
    pub customer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canceled_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_percentage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_override_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phases: Option<Vec<SubscriptionPhase>>,
}

impl CreateSubscriptionRequest {
    pub fn new(location_id: impl Into<String>, customer_id: impl Into<String>) -> Self {
        Self {
            idempotency_key: None,
            location_id: location_id.into(),
            plan_variation_id: None,
            customer_id: customer_id.into(),
            start_date: None,
            canceled_date: None,
            tax_percentage: None,
            price_override_money: None,
            card_id: None,
            timezone: None,
            phases: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateSubscriptionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Subscription>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_required_only() {
        let request = CreateSubscriptionRequest::new("L1", "C1");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"location_id": "L1", "customer_id": "C1"})
        );
    }

    #[test]
    fn test_phase_periods() {
        let mut phase = SubscriptionPhase::new(SubscriptionCadence::Monthly);
        assert!(phase.is_open_ended());
        phase.periods.set(12);
        assert!(!phase.is_open_ended());
        phase.periods.set_null();
        assert!(phase.is_open_ended());
        assert_eq!(
            serde_json::to_value(&phase).unwrap(),
            json!({"cadence": "MONTHLY", "periods": null})
        );
    }

    #[test]
    fn test_actions_of() {
        let subscription: Subscription = serde_json::from_value(json!({
            "actions": [
                {"id": "a1", "type": "PAUSE", "effective_date": "2024-06-01"},
                {"id": "a2", "type": "RESUME", "effective_date": "2024-07-01"},
                {"id": "a3", "type": "FREEZE"}
            ]
        }))
        .unwrap();
        let pauses: Vec<_> = subscription
            .actions_of(&SubscriptionActionType::Pause)
            .collect();
        assert_eq!(pauses.len(), 1);
        assert_eq!(
            subscription
                .actions_of(&SubscriptionActionType::from_token("FREEZE"))
                .count(),
            1
        );
    }
}
