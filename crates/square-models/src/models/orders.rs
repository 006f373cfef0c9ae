//! Orders, their line items and adjustments, and the order endpoints' bodies.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use square_core::Nullable;

use super::common::{Address, Money, TimeRange};
use super::errors::Error;
use crate::enums::{
    FulfillmentPickupDetailsScheduleType, FulfillmentState, FulfillmentType,
    OrderLineItemDiscountScope, OrderLineItemDiscountType, OrderLineItemItemType,
    OrderLineItemTaxScope, OrderLineItemTaxType, OrderServiceChargeCalculationPhase,
    OrderServiceChargeType, OrderState, SearchOrdersSortField, SortOrder,
};

/// Seller-defined key/value pairs attached to orders and their parts.
pub type Metadata = BTreeMap<String, String>;

/// A purchase at a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Location the order belongs to.
    pub location_id: String,

    /// Client reference, e.g. a POS ticket number.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub reference_id: Nullable<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<OrderSource>,

    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub customer_id: Nullable<String>,

    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub line_items: Nullable<Vec<OrderLineItem>>,

    /// Order-level taxes.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub taxes: Nullable<Vec<OrderLineItemTax>>,

    /// Order-level discounts.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub discounts: Nullable<Vec<OrderLineItemDiscount>>,

    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub service_charges: Nullable<Vec<OrderServiceCharge>>,

    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub fulfillments: Nullable<Vec<Fulfillment>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_amounts: Option<OrderMoneyAmounts>,

    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub metadata: Nullable<Metadata>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<OrderState>,

    /// Optimistic concurrency version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_money: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tax_money: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_discount_money: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tip_money: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_service_charge_money: Option<Money>,

    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub ticket_name: Nullable<String>,
}

impl Order {
    /// Create an empty order for a location.
    pub fn new(location_id: impl Into<String>) -> Self {
        Self {
            id: None,
            location_id: location_id.into(),
            reference_id: Nullable::Absent,
            source: None,
            customer_id: Nullable::Absent,
            line_items: Nullable::Absent,
            taxes: Nullable::Absent,
            discounts: Nullable::Absent,
            service_charges: Nullable::Absent,
            fulfillments: Nullable::Absent,
            net_amounts: None,
            metadata: Nullable::Absent,
            created_at: None,
            updated_at: None,
            closed_at: None,
            state: None,
            version: None,
            total_money: None,
            total_tax_money: None,
            total_discount_money: None,
            total_tip_money: None,
            total_service_charge_money: None,
            ticket_name: Nullable::Absent,
        }
    }

    /// Line items, empty if unset or null.
    #[must_use]
    pub fn line_items(&self) -> &[OrderLineItem] {
        self.line_items.value().map_or(&[], Vec::as_slice)
    }

    /// Append a line item, creating the list if needed.
    pub fn push_line_item(&mut self, item: OrderLineItem) {
        match self.line_items.value_mut() {
            Some(items) => items.push(item),
            None => self.line_items.set(vec![item]),
        }
    }

    /// Typed `created_at`.
    pub fn created_at_utc(&self) -> Result<Option<chrono::DateTime<chrono::Utc>>, square_core::WireError> {
        square_core::time::parse_optional_timestamp(self.created_at.as_deref())
    }
}

/// Where an order was created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OrderSource {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,
}

/// A product or custom amount on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OrderLineItem {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub uid: Nullable<String>,

    /// Required for ad hoc items without `catalog_object_id`.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,

    /// Decimal string; whole numbers unless the unit allows fractions.
    pub quantity: String,

    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub note: Nullable<String>,

    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub catalog_object_id: Nullable<String>,

    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub catalog_version: Nullable<i64>,

    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub variation_name: Nullable<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<OrderLineItemItemType>,

    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub metadata: Nullable<Metadata>,

    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub modifiers: Nullable<Vec<OrderLineItemModifier>>,

    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub applied_taxes: Nullable<Vec<OrderLineItemAppliedTax>>,

    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub applied_discounts: Nullable<Vec<OrderLineItemAppliedDiscount>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_price_money: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation_total_price_money: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_sales_money: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tax_money: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_discount_money: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_money: Option<Money>,
}

impl OrderLineItem {
    pub fn new(quantity: impl Into<String>) -> Self {
        Self {
            uid: Nullable::Absent,
            name: Nullable::Absent,
            quantity: quantity.into(),
            note: Nullable::Absent,
            catalog_object_id: Nullable::Absent,
            catalog_version: Nullable::Absent,
            variation_name: Nullable::Absent,
            item_type: None,
            metadata: Nullable::Absent,
            modifiers: Nullable::Absent,
            applied_taxes: Nullable::Absent,
            applied_discounts: Nullable::Absent,
            base_price_money: None,
            variation_total_price_money: None,
            gross_sales_money: None,
            total_tax_money: None,
            total_discount_money: None,
            total_money: None,
        }
    }

    /// Ad hoc line item priced at `base_price`.
    pub fn ad_hoc(name: impl Into<String>, quantity: impl Into<String>, base_price: Money) -> Self {
        Self {
            name: Nullable::Value(name.into()),
            base_price_money: Some(base_price),
            ..Self::new(quantity)
        }
    }

    /// Line item for a catalog variation.
    pub fn catalog(catalog_object_id: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            catalog_object_id: Nullable::Value(catalog_object_id.into()),
            ..Self::new(quantity)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OrderLineItemModifier {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub uid: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub catalog_object_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub catalog_version: Nullable<i64>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub quantity: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_price_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price_money: Option<Money>,
}

/// Reference from a line item to an order-level tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OrderLineItemAppliedTax {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub uid: Nullable<String>,
    /// `uid` of the tax in `Order::taxes`.
    pub tax_uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_money: Option<Money>,
}

impl OrderLineItemAppliedTax {
    pub fn new(tax_uid: impl Into<String>) -> Self {
        Self {
            uid: Nullable::Absent,
            tax_uid: tax_uid.into(),
            applied_money: None,
        }
    }
}

/// Reference from a line item to an order-level discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OrderLineItemAppliedDiscount {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub uid: Nullable<String>,
    /// `uid` of the discount in `Order::discounts`.
    pub discount_uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_money: Option<Money>,
}

impl OrderLineItemAppliedDiscount {
    pub fn new(discount_uid: impl Into<String>) -> Self {
        Self {
            uid: Nullable::Absent,
            discount_uid: discount_uid.into(),
            applied_money: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OrderLineItemTax {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub uid: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub catalog_object_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub catalog_version: Nullable<i64>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub tax_type: Option<OrderLineItemTaxType>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub percentage: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub metadata: Nullable<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<OrderLineItemTaxScope>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OrderLineItemDiscount {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub uid: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub catalog_object_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub catalog_version: Nullable<i64>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<OrderLineItemDiscountType>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub percentage: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub metadata: Nullable<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<OrderLineItemDiscountScope>,
    /// Loyalty rewards that created this discount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_rule_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OrderServiceCharge {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub uid: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub catalog_object_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub catalog_version: Nullable<i64>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub percentage: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tax_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculation_phase: Option<OrderServiceChargeCalculationPhase>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub taxable: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub applied_taxes: Nullable<Vec<OrderLineItemAppliedTax>>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub metadata: Nullable<Metadata>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub charge_type: Option<OrderServiceChargeType>,
}

/// How and when an order reaches the buyer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Fulfillment {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub uid: Nullable<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub fulfillment_type: Option<FulfillmentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<FulfillmentState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_details: Option<FulfillmentPickupDetails>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub metadata: Nullable<Metadata>,
}

/// Person receiving a fulfillment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FulfillmentRecipient {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub customer_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub display_name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub email_address: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub phone_number: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FulfillmentPickupDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<FulfillmentRecipient>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub expires_at: Nullable<String>,
    /// RFC 3339 duration, e.g. `P1W3D`.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub auto_complete_duration: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_type: Option<FulfillmentPickupDetailsScheduleType>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub pickup_at: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub pickup_window_duration: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub prep_time_duration: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub note: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picked_up_at: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub is_curbside_pickup: Nullable<bool>,
}

/// Totals broken down by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OrderMoneyAmounts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_charge_money: Option<Money>,
}

// --- Endpoint bodies ---

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateOrderRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
}

impl CreateOrderRequest {
    /// A request carrying `order`, keyed for safe retries.
    pub fn with_order(order: Order, idempotency_key: impl Into<String>) -> Self {
        Self {
            order: Some(order),
            idempotency_key: Some(idempotency_key.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateOrderResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchOrdersStateFilter {
    pub states: Vec<OrderState>,
}

impl SearchOrdersStateFilter {
    pub const fn new(states: Vec<OrderState>) -> Self {
        Self { states }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchOrdersDateTimeFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<TimeRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<TimeRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<TimeRange>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchOrdersCustomerFilter {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub customer_ids: Nullable<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchOrdersFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_filter: Option<SearchOrdersStateFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time_filter: Option<SearchOrdersDateTimeFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_filter: Option<SearchOrdersCustomerFilter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchOrdersSort {
    pub sort_field: SearchOrdersSortField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl SearchOrdersSort {
    pub const fn new(sort_field: SearchOrdersSortField) -> Self {
        Self {
            sort_field,
            sort_order: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchOrdersQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<SearchOrdersFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SearchOrdersSort>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchOrdersRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<SearchOrdersQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    /// Return lightweight entries instead of full orders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_entries: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchOrdersResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orders: Option<Vec<Order>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,
}
