//! Payments, refunds and the card details attached to them.

use serde::{Deserialize, Serialize};
use square_core::Nullable;

use super::common::{Address, Money};
use super::errors::Error;
use crate::enums::{
    CardBrand, CardCoBrand, CardEntryMethod, CardPaymentStatus, CardPrepaidType, CardType,
    DelayAction, PaymentSourceType, PaymentStatus, ProcessingFeeType, RefundStatus,
};

/// A payment card. Only non-confidential fields are returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Card {
    /// Square-assigned ID of a stored card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_brand: Option<CardBrand>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_4: Option<String>,
    /// Expiration month, 1 to 12.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub exp_month: Nullable<i64>,
    /// Four-digit expiration year.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub exp_year: Nullable<i64>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub cardholder_name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    /// Stable across tokens for the same card number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    /// Customer the card is stored for.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub customer_id: Nullable<String>,
    /// Seller that stored the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
    /// Seller-defined identifier.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub reference_id: Nullable<String>,
    /// False once the card is disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<CardType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prepaid_type: Option<CardPrepaidType>,
    /// First six digits of the card number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin: Option<String>,
    /// Incremented on each change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_co_brand: Option<CardCoBrand>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CardPaymentDetails {
    /// Authorization state of the card charge.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub status: Nullable<CardPaymentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    /// How the card was read.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub entry_method: Nullable<CardEntryMethod>,
    /// CVV check result, e.g. `CVV_ACCEPTED`.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub cvv_status: Nullable<String>,
    /// Address check result, e.g. `AVS_ACCEPTED`.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub avs_status: Nullable<String>,
    /// Text shown on the buyer's statement.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub statement_description: Nullable<String>,
    /// Errors from the card network, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,
}

/// A fee Square took for processing a payment or refund.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessingFee {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub effective_at: Nullable<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Nullable::is_absent")]
    pub fee_type: Nullable<ProcessingFeeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_money: Option<Money>,
}

/// A payment taken by a seller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Payment {
    /// Square-assigned payment ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Amount charged, excluding the tip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_money: Option<Money>,
    /// Tip, charged on top of `amount_money`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip_money: Option<Money>,
    /// Amount plus tip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_money: Option<Money>,
    /// Portion that goes to the calling application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_fee_money: Option<Money>,
    /// Amount approved, which may be lower on partial authorization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_money: Option<Money>,
    /// Fees Square took, in the order they were applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_fee: Option<Vec<ProcessingFee>>,
    /// Total refunded so far.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refunded_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
    /// RFC 3339 duration before `delay_action` applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_duration: Option<String>,
    /// What happens when `delay_duration` elapses.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub delay_action: Nullable<DelayAction>,
    /// Time `delay_action` is applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delayed_until: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<PaymentSourceType>,
    /// Set when `source_type` is `CARD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_details: Option<CardPaymentDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    /// Order this payment is attached to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Seller-defined identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Refunds made against this payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer_email_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_number: Option<String>,
    /// Public receipt page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
    /// Optimistic concurrency token for updates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_token: Option<String>,
}

impl Payment {
    /// Amount still refundable: approved (or total) minus refunded.
    #[must_use]
    pub fn refundable_amount(&self) -> Option<i64> {
        let paid = self
            .approved_money
            .as_ref()
            .or(self.total_money.as_ref())?
            .amount()?;
        let refunded = self
            .refunded_money
            .as_ref()
            .and_then(Money::amount)
            .unwrap_or(0);
        Some(paid.saturating_sub(refunded).max(0))
    }
}

/// A refund of all or part of a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PaymentRefund {
    /// Square-assigned refund ID.
    pub id: String,
    /// Processing status of the refund.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub status: Nullable<RefundStatus>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub location_id: Nullable<String>,
    /// True if the refund has no linked payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlinked: Option<bool>,
    /// Where the money goes, e.g. `CARD`.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub destination_type: Nullable<String>,
    /// Amount returned to the buyer.
    pub amount_money: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_fee_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub processing_fee: Nullable<Vec<ProcessingFee>>,
    /// Payment being refunded.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub payment_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub order_id: Nullable<String>,
    /// Seller-supplied reason.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub reason: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl PaymentRefund {
    pub fn new(id: impl Into<String>, amount_money: Money) -> Self {
        Self {
            id: id.into(),
            status: Nullable::Absent,
            location_id: Nullable::Absent,
            unlinked: None,
            destination_type: Nullable::Absent,
            amount_money,
            app_fee_money: None,
            processing_fee: Nullable::Absent,
            payment_id: Nullable::Absent,
            order_id: Nullable::Absent,
            reason: Nullable::Absent,
            created_at: None,
            updated_at: None,
        }
    }
}

// --- Endpoint bodies ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CreatePaymentRequest {
    /// Card nonce, card on file ID, or `CASH` / `EXTERNAL`.
    pub source_id: String,
    pub idempotency_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_fee_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_action: Option<String>,
    /// `false` to only authorize.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept_partial_authorization: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer_email_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CreatePaymentRequest {
    pub fn new(source_id: impl Into<String>, idempotency_key: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            idempotency_key: idempotency_key.into(),
            amount_money: None,
            tip_money: None,
            app_fee_money: None,
            delay_duration: None,
            delay_action: None,
            autocomplete: None,
            order_id: None,
            customer_id: None,
            location_id: None,
            reference_id: None,
            verification_token: None,
            accept_partial_authorization: None,
            buyer_email_address: None,
            billing_address: None,
            shipping_address: None,
            note: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CreatePaymentResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ListPaymentsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payments: Option<Vec<Payment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RefundPaymentRequest {
    pub idempotency_key: String,
    pub amount_money: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_fee_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub payment_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub reason: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub payment_version_token: Nullable<String>,
}

impl RefundPaymentRequest {
    pub fn new(idempotency_key: impl Into<String>, amount_money: Money) -> Self {
        Self {
            idempotency_key: idempotency_key.into(),
            amount_money,
            app_fee_money: None,
            payment_id: Nullable::Absent,
            reason: Nullable::Absent,
            payment_version_token: Nullable::Absent,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RefundPaymentResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund: Option<PaymentRefund>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Currency;
    use serde_json::json;

    #[test]
    fn test_create_payment_required_fields() {
        let mut request = CreatePaymentRequest::new("cnon:card-nonce-ok", "key-1");
        request.amount_money = Some(Money::new(100, Currency::Usd));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "source_id": "cnon:card-nonce-ok",
                "idempotency_key": "key-1",
                "amount_money": {"amount": 100, "currency": "USD"}
            })
        );
    }

    #[test]
    fn test_refundable_amount() {
        let payment = Payment {
            total_money: Some(Money::new(1000, Currency::Usd)),
            refunded_money: Some(Money::new(250, Currency::Usd)),
            ..Payment::default()
        };
        assert_eq!(payment.refundable_amount(), Some(750));
        assert_eq!(Payment::default().refundable_amount(), None);
    }

    #[test]
    fn test_refund_missing_amount_rejected() {
        let result = serde_json::from_str::<PaymentRefund>(r#"{"id":"R1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_processing_fee_type_renamed() {
        let fee: ProcessingFee = serde_json::from_value(json!({"type": "INITIAL"})).unwrap();
        assert_eq!(fee.fee_type, Nullable::Value(ProcessingFeeType::Initial));
    }
}
