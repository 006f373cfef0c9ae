//! Loyalty accounts, rewards and events.

use serde::{Deserialize, Serialize};
use square_core::Nullable;

use crate::enums::{LoyaltyEventSource, LoyaltyEventType, LoyaltyRewardStatus};

/// A buyer's membership in a loyalty program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoyaltyAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub program_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifetime_points: Option<i64>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub customer_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub enrolled_at: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping: Option<LoyaltyAccountMapping>,
}

impl LoyaltyAccount {
    pub fn new(program_id: impl Into<String>) -> Self {
        Self {
            id: None,
            program_id: program_id.into(),
            balance: None,
            lifetime_points: None,
            customer_id: Nullable::Absent,
            enrolled_at: Nullable::Absent,
            created_at: None,
            updated_at: None,
            mapping: None,
        }
    }
}

/// Phone number identifying a loyalty account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoyaltyAccountMapping {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// E.164 phone number.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub phone_number: Nullable<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoyaltyReward {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LoyaltyRewardStatus>,
    pub loyalty_account_id: String,
    pub reward_tier_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub order_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redeemed_at: Option<String>,
}

impl LoyaltyReward {
    pub fn new(loyalty_account_id: impl Into<String>, reward_tier_id: impl Into<String>) -> Self {
        Self {
            id: None,
            status: None,
            loyalty_account_id: loyalty_account_id.into(),
            reward_tier_id: reward_tier_id.into(),
            points: None,
            order_id: Nullable::Absent,
            created_at: None,
            updated_at: None,
            redeemed_at: None,
        }
    }
}

/// A change to a loyalty account's point balance.
///
/// Exactly one detail object is set, matching `event_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoyaltyEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: LoyaltyEventType,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accumulate_points: Option<LoyaltyEventAccumulatePoints>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_reward: Option<LoyaltyEventCreateReward>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redeem_reward: Option<LoyaltyEventRedeemReward>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_reward: Option<LoyaltyEventDeleteReward>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjust_points: Option<LoyaltyEventAdjustPoints>,
    pub loyalty_account_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    pub source: LoyaltyEventSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_points: Option<LoyaltyEventExpirePoints>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_event: Option<LoyaltyEventOther>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accumulate_promotion_points: Option<LoyaltyEventAccumulatePromotionPoints>,
}

impl LoyaltyEvent {
    pub fn new(
        id: impl Into<String>,
        event_type: LoyaltyEventType,
        created_at: impl Into<String>,
        loyalty_account_id: impl Into<String>,
        source: LoyaltyEventSource,
    ) -> Self {
        Self {
            id: id.into(),
            event_type,
            created_at: created_at.into(),
            accumulate_points: None,
            create_reward: None,
            redeem_reward: None,
            delete_reward: None,
            adjust_points: None,
            loyalty_account_id: loyalty_account_id.into(),
            location_id: None,
            source,
            expire_points: None,
            other_event: None,
            accumulate_promotion_points: None,
        }
    }

    /// Typed `created_at`.
    pub fn created_at_utc(&self) -> Result<chrono::DateTime<chrono::Utc>, square_core::WireError> {
        square_core::time::parse_timestamp(&self.created_at)
    }

    /// Signed change to the account balance, if the detail carries one.
    ///
    /// Reward creation and expiry take points away; redemptions move no
    /// points because they were locked when the reward was created.
    #[must_use]
    pub fn points_delta(&self) -> Option<i64> {
        match &self.event_type {
            LoyaltyEventType::AccumulatePoints => {
                self.accumulate_points.as_ref()?.points.value().copied()
            }
            LoyaltyEventType::CreateReward => Some(-self.create_reward.as_ref()?.points),
            LoyaltyEventType::RedeemReward => Some(0),
            LoyaltyEventType::DeleteReward => Some(self.delete_reward.as_ref()?.points),
            LoyaltyEventType::AdjustPoints => Some(self.adjust_points.as_ref()?.points),
            LoyaltyEventType::ExpirePoints => Some(-self.expire_points.as_ref()?.points),
            LoyaltyEventType::Other => Some(self.other_event.as_ref()?.points),
            LoyaltyEventType::AccumulatePromotionPoints => {
                Some(self.accumulate_promotion_points.as_ref()?.points)
            }
            LoyaltyEventType::Unrecognized(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoyaltyEventAccumulatePoints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loyalty_program_id: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub points: Nullable<i64>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub order_id: Nullable<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoyaltyEventCreateReward {
    pub loyalty_program_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward_id: Option<String>,
    /// Points locked into the reward.
    pub points: i64,
}

impl LoyaltyEventCreateReward {
    pub fn new(loyalty_program_id: impl Into<String>, points: i64) -> Self {
        Self {
            loyalty_program_id: loyalty_program_id.into(),
            reward_id: None,
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoyaltyEventRedeemReward {
    pub loyalty_program_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

impl LoyaltyEventRedeemReward {
    pub fn new(loyalty_program_id: impl Into<String>) -> Self {
        Self {
            loyalty_program_id: loyalty_program_id.into(),
            reward_id: None,
            order_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoyaltyEventDeleteReward {
    pub loyalty_program_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward_id: Option<String>,
    /// Points returned to the balance.
    pub points: i64,
}

impl LoyaltyEventDeleteReward {
    pub fn new(loyalty_program_id: impl Into<String>, points: i64) -> Self {
        Self {
            loyalty_program_id: loyalty_program_id.into(),
            reward_id: None,
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoyaltyEventAdjustPoints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loyalty_program_id: Option<String>,
    /// Signed adjustment.
    pub points: i64,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub reason: Nullable<String>,
}

impl LoyaltyEventAdjustPoints {
    pub const fn new(points: i64) -> Self {
        Self {
            loyalty_program_id: None,
            points,
            reason: Nullable::Absent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoyaltyEventExpirePoints {
    pub loyalty_program_id: String,
    /// Points removed, as a positive count.
    pub points: i64,
}

impl LoyaltyEventExpirePoints {
    pub fn new(loyalty_program_id: impl Into<String>, points: i64) -> Self {
        Self {
            loyalty_program_id: loyalty_program_id.into(),
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoyaltyEventOther {
    pub loyalty_program_id: String,
    pub points: i64,
}

impl LoyaltyEventOther {
    pub fn new(loyalty_program_id: impl Into<String>, points: i64) -> Self {
        Self {
            loyalty_program_id: loyalty_program_id.into(),
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoyaltyEventAccumulatePromotionPoints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loyalty_program_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loyalty_promotion_id: Option<String>,
    pub points: i64,
    pub order_id: String,
}

impl LoyaltyEventAccumulatePromotionPoints {
    pub fn new(points: i64, order_id: impl Into<String>) -> Self {
        Self {
            loyalty_program_id: None,
            loyalty_promotion_id: None,
            points,
            order_id: order_id.into(),
        }
    }
}
