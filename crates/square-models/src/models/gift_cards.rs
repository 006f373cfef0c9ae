use serde::{Deserialize, Serialize};
use square_core::Nullable;

use super::common::Money;
use super::errors::Error;
use crate::enums::{GiftCardGanSource, GiftCardStatus, GiftCardType};

/// A Square gift card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GiftCard {
    /// Square-assigned gift card ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Physical or digital.
    #[serde(rename = "type")]
    pub card_type: GiftCardType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gan_source: Option<GiftCardGanSource>,
    /// Current status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<GiftCardStatus>,
    /// Remaining balance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_money: Option<Money>,
    /// Gift card account number.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub gan: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Customers the card is linked to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_ids: Option<Vec<String>>,
}

impl GiftCard {
    #[must_use]
    pub const fn new(card_type: GiftCardType) -> Self {
        Self {
            id: None,
            card_type,
            gan_source: None,
            state: None,
            balance_money: None,
            gan: Nullable::Absent,
            created_at: None,
            customer_ids: None,
        }
    }

    /// Last four characters of the GAN, for display.
    #[must_use]
    pub fn gan_suffix(&self) -> Option<&str> {
        let gan = self.gan.value()?;
        let start = gan.char_indices().rev().nth(3).map_or(0, |(index, _)| index);
        Some(&gan[start..])
    }
}

// --- Endpoint bodies ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateGiftCardRequest {
    pub idempotency_key: String,
    /// Location where the card is created.
    pub location_id: String,
    /// Card to create; only `type` and optionally `gan` are read.
    pub gift_card: GiftCard,
}

impl CreateGiftCardRequest {
    pub fn new(
        idempotency_key: impl Into<String>,
        location_id: impl Into<String>,
        gift_card: GiftCard,
    ) -> Self {
        Self {
            idempotency_key: idempotency_key.into(),
            location_id: location_id.into(),
            gift_card,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateGiftCardResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift_card: Option<GiftCard>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_nests_required_type() {
        let request = CreateGiftCardRequest::new("key", "L1", GiftCard::new(GiftCardType::Digital));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"idempotency_key": "key", "location_id": "L1", "gift_card": {"type": "DIGITAL"}})
        );
    }

    #[test]
    fn test_gan_suffix() {
        let mut card = GiftCard::new(GiftCardType::Physical);
        assert_eq!(card.gan_suffix(), None);
        card.gan.set("7783320001001635".to_string());
        assert_eq!(card.gan_suffix(), Some("1635"));
        card.gan.set("12".to_string());
        assert_eq!(card.gan_suffix(), Some("12"));
    }
}
