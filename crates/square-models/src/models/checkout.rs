//! Hosted checkout: payment links and their options.

use serde::{Deserialize, Serialize};
use square_core::Nullable;

use super::common::{Address, Money};
use super::errors::Error;
use super::orders::Order;

/// A field the buyer fills in at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CustomField {
    /// Label shown to the buyer.
    pub title: String,
}

impl CustomField {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CheckoutOptions {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub allow_tipping: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub custom_fields: Nullable<Vec<CustomField>>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub subscription_plan_id: Nullable<String>,
    /// Where the buyer lands after paying.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub redirect_url: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub merchant_support_email: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub ask_for_shipping_address: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_fee_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub enable_coupon: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub enable_loyalty: Nullable<bool>,
}

/// A one-line checkout: a name and a price, no catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct QuickPay {
    pub name: String,
    pub price_money: Money,
    pub location_id: String,
}

impl QuickPay {
    pub fn new(name: impl Into<String>, price_money: Money, location_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price_money,
            location_id: location_id.into(),
        }
    }
}

/// Buyer details to prefill at checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PrePopulatedData {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub buyer_email: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub buyer_phone_number: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer_address: Option<Address>,
}

/// A hosted checkout page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PaymentLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub version: i32,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub description: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_options: Option<CheckoutOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_populated_data: Option<PrePopulatedData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub payment_note: Nullable<String>,
}

impl PaymentLink {
    #[must_use]
    pub const fn new(version: i32) -> Self {
        Self {
            id: None,
            version,
            description: Nullable::Absent,
            order_id: None,
            checkout_options: None,
            pre_populated_data: None,
            url: None,
            long_url: None,
            created_at: None,
            updated_at: None,
            payment_note: Nullable::Absent,
        }
    }
}

// --- Endpoint bodies ---

/// Exactly one of `quick_pay` and `order` must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CreatePaymentLinkRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_pay: Option<QuickPay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_options: Option<CheckoutOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_populated_data: Option<PrePopulatedData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_note: Option<String>,
}

impl CreatePaymentLinkRequest {
    /// Request for a quick-pay link.
    #[must_use]
    pub fn quick_pay(quick_pay: QuickPay) -> Self {
        Self {
            quick_pay: Some(quick_pay),
            ..Self::default()
        }
    }

    /// Request for a link to an existing order shape.
    #[must_use]
    pub fn for_order(order: Order) -> Self {
        Self {
            order: Some(order),
            ..Self::default()
        }
    }

    /// True when exactly one of `quick_pay` and `order` is set.
    #[must_use]
    pub const fn has_single_source(&self) -> bool {
        self.quick_pay.is_some() != self.order.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CreatePaymentLinkResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_link: Option<PaymentLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_resources: Option<PaymentLinkRelatedResources>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PaymentLinkRelatedResources {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub orders: Nullable<Vec<Order>>,
}
