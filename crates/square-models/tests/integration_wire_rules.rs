//! Presence and encoding rules checked against the real catalog.

use std::collections::BTreeSet;

use serde_json::json;
use square_core::{EmptyAs, Model, Nullable, WireEnum, WireSettings, to_wire_string};
use square_models::enums::{
    CatalogObjectType, Currency, ErrorCategory, ErrorCode, GiftCardType, LoyaltyEventSource,
    LoyaltyEventType, OrderState, SearchOrdersSortField, SubscriptionCadence,
};
use square_models::models::{
    BatchChangeInventoryRequest, BatchUpsertCatalogObjectsRequest, CatalogItemModifierListInfo,
    CatalogObject, CatalogObjectBatch, CheckoutOptions, CreateGiftCardRequest,
    CreateInvoiceRequest, CreatePaymentRequest, CreateSubscriptionRequest, CustomField, Customer,
    Error, ErrorResponse, GiftCard, Invoice, ListLocationsResponse, LoyaltyAccount, LoyaltyEvent,
    LoyaltyEventAccumulatePromotionPoints, LoyaltyEventAdjustPoints, LoyaltyEventCreateReward,
    LoyaltyEventDeleteReward, LoyaltyEventExpirePoints, LoyaltyEventOther,
    LoyaltyEventRedeemReward, LoyaltyReward, Money, Order, OrderLineItem,
    OrderLineItemAppliedDiscount, OrderLineItemAppliedTax, PaymentLink, PaymentRefund, QuickPay,
    RefundPaymentRequest, SearchOrdersSort, SearchOrdersStateFilter, SubscriptionPhase,
    UpsertCatalogObjectRequest,
};

/// Wire keys written by a freshly constructed model, next to the keys its
/// required fields map to.
struct RequiredOnly {
    name: &'static str,
    written: BTreeSet<String>,
    required: BTreeSet<&'static str>,
}

fn required_only<M: Model>(model: &M, required: &'static [&'static str]) -> RequiredOnly {
    RequiredOnly {
        name: M::NAME,
        written: model.to_wire_map().unwrap().keys().cloned().collect(),
        required: required.iter().copied().collect(),
    }
}

fn usd(amount: i64) -> Money {
    Money::new(amount, Currency::Usd)
}

#[test]
fn test_custom_field_serializes_exactly() {
    let field = CustomField::new("Discount Code");
    let text = to_wire_string(&field, &WireSettings::with_defaults()).unwrap();
    assert_eq!(text, r#"{"title":"Discount Code"}"#);
}

#[test]
fn test_required_only_serialization() {
    let order = Order::new("L1");
    let map = order.to_wire_map().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map["location_id"], json!("L1"));
}

#[test]
fn test_constructors_write_exactly_the_required_fields() {
    let item = CatalogObject::new(CatalogObjectType::Item, "#item");
    let cases = [
        required_only(&item, &["type", "id"]),
        required_only(&CatalogItemModifierListInfo::new("ML1"), &["modifier_list_id"]),
        required_only(&CatalogObjectBatch::new(vec![item.clone()]), &["objects"]),
        required_only(
            &UpsertCatalogObjectRequest::new("key", item.clone()),
            &["idempotency_key", "object"],
        ),
        required_only(
            &BatchUpsertCatalogObjectsRequest::new("key", vec![CatalogObjectBatch::new(vec![item])]),
            &["idempotency_key", "batches"],
        ),
        required_only(&CustomField::new("Discount Code"), &["title"]),
        required_only(
            &QuickPay::new("Tea", usd(300), "L1"),
            &["name", "price_money", "location_id"],
        ),
        required_only(&PaymentLink::new(1), &["version"]),
        required_only(
            &Error::new(ErrorCategory::ApiError, ErrorCode::InternalServerError),
            &["category", "code"],
        ),
        required_only(&GiftCard::new(GiftCardType::Digital), &["type"]),
        required_only(
            &CreateGiftCardRequest::new("key", "L1", GiftCard::new(GiftCardType::Physical)),
            &["idempotency_key", "location_id", "gift_card"],
        ),
        required_only(&BatchChangeInventoryRequest::new("key"), &["idempotency_key"]),
        required_only(&CreateInvoiceRequest::new(Invoice::default()), &["invoice"]),
        required_only(&LoyaltyAccount::new("P1"), &["program_id"]),
        required_only(
            &LoyaltyReward::new("A1", "T1"),
            &["loyalty_account_id", "reward_tier_id"],
        ),
        required_only(
            &LoyaltyEvent::new(
                "E1",
                LoyaltyEventType::AdjustPoints,
                "2024-03-01T10:00:00Z",
                "A1",
                LoyaltyEventSource::LoyaltyApi,
            ),
            &["id", "type", "created_at", "loyalty_account_id", "source"],
        ),
        required_only(
            &LoyaltyEventCreateReward::new("P1", 10),
            &["loyalty_program_id", "points"],
        ),
        required_only(&LoyaltyEventRedeemReward::new("P1"), &["loyalty_program_id"]),
        required_only(
            &LoyaltyEventDeleteReward::new("P1", 10),
            &["loyalty_program_id", "points"],
        ),
        required_only(&LoyaltyEventAdjustPoints::new(-3), &["points"]),
        required_only(
            &LoyaltyEventExpirePoints::new("P1", 4),
            &["loyalty_program_id", "points"],
        ),
        required_only(&LoyaltyEventOther::new("P1", 2), &["loyalty_program_id", "points"]),
        required_only(
            &LoyaltyEventAccumulatePromotionPoints::new(6, "O1"),
            &["points", "order_id"],
        ),
        required_only(&Order::new("L1"), &["location_id"]),
        required_only(&OrderLineItem::new("2"), &["quantity"]),
        required_only(&OrderLineItemAppliedTax::new("tax-1"), &["tax_uid"]),
        required_only(&OrderLineItemAppliedDiscount::new("disc-1"), &["discount_uid"]),
        required_only(&SearchOrdersStateFilter::new(vec![OrderState::Open]), &["states"]),
        required_only(&SearchOrdersSort::new(SearchOrdersSortField::CreatedAt), &["sort_field"]),
        required_only(&PaymentRefund::new("R1", usd(100)), &["id", "amount_money"]),
        required_only(
            &CreatePaymentRequest::new("cnon:card-nonce-ok", "key"),
            &["source_id", "idempotency_key"],
        ),
        required_only(
            &RefundPaymentRequest::new("key", usd(100)),
            &["idempotency_key", "amount_money"],
        ),
        required_only(&SubscriptionPhase::new(SubscriptionCadence::Monthly), &["cadence"]),
        required_only(
            &CreateSubscriptionRequest::new("L1", "C1"),
            &["location_id", "customer_id"],
        ),
    ];

    for case in &cases {
        let written: BTreeSet<&str> = case.written.iter().map(String::as_str).collect();
        assert_eq!(written, case.required, "{}", case.name);
    }
}

#[test]
fn test_nullable_states_on_a_real_model() {
    let mut customer = Customer::default();

    // Untouched
    assert_eq!(customer.to_wire(EmptyAs::Object).unwrap(), json!({}));

    // Explicit null
    customer.email_address.set_null();
    assert_eq!(
        customer.to_wire(EmptyAs::Object).unwrap(),
        json!({"email_address": null})
    );

    // Value
    customer.email_address.set("ada@example.com".to_string());
    assert_eq!(
        customer.to_wire(EmptyAs::Object).unwrap(),
        json!({"email_address": "ada@example.com"})
    );

    // Back to untouched
    customer.email_address.unset();
    assert_eq!(customer.to_wire(EmptyAs::Object).unwrap(), json!({}));
}

#[test]
fn test_optional_simple_none_is_filtered() {
    let mut order = Order::new("L1");
    order.state = None;
    order.version = None;
    assert!(!order.to_wire_map().unwrap().contains_key("state"));

    order.state = Some(OrderState::Completed);
    assert_eq!(order.to_wire_map().unwrap()["state"], json!("COMPLETED"));
}

#[test]
fn test_nested_models_and_lists() {
    let mut order = Order::new("L1");
    let mut item = OrderLineItem::ad_hoc("Latte", "1", Money::new(450, Currency::Usd));
    item.note.set_null();
    order.push_line_item(item);

    assert_eq!(
        order.to_wire(EmptyAs::Object).unwrap(),
        json!({
            "location_id": "L1",
            "line_items": [{
                "name": "Latte",
                "quantity": "1",
                "note": null,
                "base_price_money": {"amount": 450, "currency": "USD"}
            }]
        })
    );
}

#[test]
fn test_empty_object_vs_array() {
    assert_eq!(ErrorResponse::default().to_wire(EmptyAs::Object).unwrap(), json!({}));
    assert_eq!(ErrorResponse::default().to_wire(EmptyAs::Array).unwrap(), json!([]));

    // Only an empty top-level mapping is affected.
    let options = CheckoutOptions {
        custom_fields: Nullable::Value(Vec::new()),
        ..CheckoutOptions::default()
    };
    assert_eq!(
        options.to_wire(EmptyAs::Array).unwrap(),
        json!({"custom_fields": []})
    );

    let settings = WireSettings {
        empty_as: Some(EmptyAs::Array),
        ..WireSettings::default()
    };
    assert_eq!(
        to_wire_string(&ListLocationsResponse::default(), &settings).unwrap(),
        "[]"
    );
}

#[test]
fn test_pretty_output() {
    let settings = WireSettings {
        pretty: Some(true),
        ..WireSettings::default()
    };
    let text = to_wire_string(&CustomField::new("Discount Code"), &settings).unwrap();
    assert_eq!(text, "{\n  \"title\": \"Discount Code\"\n}");
}

#[test]
fn test_model_names() {
    assert_eq!(<Order as Model>::NAME, "Order");
    assert_eq!(<OrderState as WireEnum>::NAME, "OrderState");
}
