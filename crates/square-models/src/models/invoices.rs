//! Invoices and their payment schedules.

use serde::{Deserialize, Serialize};
use square_core::Nullable;

use super::common::{Address, Money};
use super::errors::Error;
use crate::enums::{
    InvoiceAutomaticPaymentSource, InvoiceCustomFieldPlacement, InvoiceDeliveryMethod,
    InvoiceReminderStatus, InvoiceRequestType, InvoiceStatus,
};

/// An invoice for an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Invoice {
    /// Square-assigned invoice ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Incremented on each change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub location_id: Nullable<String>,
    /// Order the invoice bills for; fixed once set.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub order_id: Nullable<String>,
    /// Customer who receives and pays the invoice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_recipient: Option<InvoiceRecipient>,
    /// Deposit, balance or installment requests, in due date order.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub payment_requests: Nullable<Vec<InvoicePaymentRequest>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_method: Option<InvoiceDeliveryMethod>,
    /// Seller-visible number, unique per seller.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub invoice_number: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub title: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub description: Nullable<String>,
    /// Publication time; `null` to publish immediately.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub scheduled_at: Nullable<String>,
    /// Payment page for the recipient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,
    /// Amount due on the next unpaid request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_payment_amount_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_payment_methods: Option<InvoiceAcceptedPaymentMethods>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub custom_fields: Nullable<Vec<InvoiceCustomField>>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub subscription_id: Nullable<String>,
    /// `YYYY-MM-DD` of the sale or service.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub sale_or_service_date: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub payment_conditions: Nullable<String>,
    /// Let the buyer save the payment method.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub store_payment_method_enabled: Nullable<bool>,
}

impl Invoice {
    /// Sum of the fixed amounts requested, if all are in one currency.
    #[must_use]
    pub fn requested_total(&self) -> Option<Money> {
        let mut amounts = self
            .payment_requests
            .value()?
            .iter()
            .filter_map(|request| request.fixed_amount_requested_money.as_ref());
        let first = amounts.next()?.clone();
        amounts.try_fold(first, |total, next| total.checked_add(next))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct InvoiceRecipient {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub customer_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

/// One payment due on an invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct InvoicePaymentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_type: Option<InvoiceRequestType>,
    /// `YYYY-MM-DD` in the invoice's time zone.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub due_date: Nullable<String>,
    /// Amount for a deposit or installment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_amount_requested_money: Option<Money>,
    /// Share of the total for a deposit or installment, as a decimal string.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub percentage_requested: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub tipping_enabled: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automatic_payment_source: Option<InvoiceAutomaticPaymentSource>,
    /// Stored card used when `automatic_payment_source` is `CARD_ON_FILE`.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub card_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub reminders: Nullable<Vec<InvoicePaymentReminder>>,
    /// Amount this request asks for, computed by Square.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computed_amount_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_completed_amount_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounding_adjustment_included_money: Option<Money>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct InvoicePaymentReminder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Days relative to the due date; negative means before.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub relative_scheduled_days: Nullable<i32>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub message: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceReminderStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct InvoiceAcceptedPaymentMethods {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub card: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub square_gift_card: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub bank_account: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub buy_now_pay_later: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub cash_app_pay: Nullable<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct InvoiceCustomField {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub label: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub value: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<InvoiceCustomFieldPlacement>,
}

// --- Endpoint bodies ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateInvoiceRequest {
    pub invoice: Invoice,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
}

impl CreateInvoiceRequest {
    #[must_use]
    pub const fn new(invoice: Invoice) -> Self {
        Self {
            invoice,
            idempotency_key: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateInvoiceResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice: Option<Invoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,
}
