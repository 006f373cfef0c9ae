//! Inventory counts and the changes that move them.

use serde::{Deserialize, Serialize};
use square_core::Nullable;

use super::common::Money;
use super::errors::Error;
use crate::enums::{InventoryChangeType, InventoryState};

/// Quantity of one catalog object in one state at one location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct InventoryCount {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub catalog_object_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub catalog_object_type: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<InventoryState>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub location_id: Nullable<String>,
    /// Decimal string with up to 5 fractional digits.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub quantity: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_estimated: Option<bool>,
}

/// Movement of stock between two states.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct InventoryAdjustment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub reference_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_state: Option<InventoryState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_state: Option<InventoryState>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub location_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub catalog_object_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub catalog_object_type: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub quantity: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub occurred_at: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goods_receipt_id: Option<String>,
}

/// Absolute stock level observed by counting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct InventoryPhysicalCount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub reference_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub catalog_object_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub catalog_object_type: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<InventoryState>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub location_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub quantity: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub occurred_at: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub team_member_id: Nullable<String>,
}

/// One entry of an inventory history; the populated body matches `change_type`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct InventoryChange {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub change_type: Option<InventoryChangeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_count: Option<InventoryPhysicalCount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjustment: Option<InventoryAdjustment>,
}

impl InventoryChange {
    #[must_use]
    pub fn physical_count(count: InventoryPhysicalCount) -> Self {
        Self {
            change_type: Some(InventoryChangeType::PhysicalCount),
            physical_count: Some(count),
            adjustment: None,
        }
    }

    #[must_use]
    pub fn adjustment(adjustment: InventoryAdjustment) -> Self {
        Self {
            change_type: Some(InventoryChangeType::Adjustment),
            physical_count: None,
            adjustment: Some(adjustment),
        }
    }

    /// True if the body set matches `change_type`.
    ///
    /// Unrecognized change types are accepted as long as no known body
    /// contradicts them.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        match &self.change_type {
            Some(InventoryChangeType::PhysicalCount) => {
                self.physical_count.is_some() && self.adjustment.is_none()
            }
            Some(InventoryChangeType::Adjustment) => {
                self.adjustment.is_some() && self.physical_count.is_none()
            }
            Some(InventoryChangeType::Transfer) => {
                self.adjustment.is_none() && self.physical_count.is_none()
            }
            Some(InventoryChangeType::Unrecognized(_)) | None => true,
        }
    }
}

// --- Endpoint bodies ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BatchChangeInventoryRequest {
    pub idempotency_key: String,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub changes: Nullable<Vec<InventoryChange>>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub ignore_unchanged_counts: Nullable<bool>,
}

impl BatchChangeInventoryRequest {
    pub fn new(idempotency_key: impl Into<String>) -> Self {
        Self {
            idempotency_key: idempotency_key.into(),
            changes: Nullable::Absent,
            ignore_unchanged_counts: Nullable::Absent,
        }
    }

    /// Append a change, starting the list if it is unset or null.
    pub fn push_change(&mut self, change: InventoryChange) {
        match self.changes.value_mut() {
            Some(changes) => changes.push(change),
            None => self.changes.set(vec![change]),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BatchChangeInventoryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counts: Option<Vec<InventoryCount>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<Vec<InventoryChange>>,
}
