//! Wire payloads in the shape the API returns them.
//!
//! Each payload is already canonical: declaration key order, no unknown
//! fields, and `null` only where the field is nullable.

/// (model name, payload) pairs for the round-trip suite.
pub const CANONICAL: &[(&str, &str)] = &[
    ("CustomField", r#"{"title":"Discount Code"}"#),
    ("Money", r#"{"amount":1099,"currency":"USD"}"#),
    (
        "Error",
        r#"{"category":"INVALID_REQUEST_ERROR","code":"MISSING_REQUIRED_PARAMETER","detail":"Missing required parameter.","field":"idempotency_key"}"#,
    ),
    (
        "Order",
        r#"{"id":"O1","location_id":"L1","reference_id":null,"line_items":[{"uid":"li-1","name":"Latte","quantity":"2","item_type":"ITEM","base_price_money":{"amount":450,"currency":"USD"},"total_money":{"amount":900,"currency":"USD"}}],"metadata":{"table":"7"},"state":"OPEN","version":3,"total_money":{"amount":900,"currency":"USD"}}"#,
    ),
    (
        "Payment",
        r#"{"id":"P1","created_at":"2024-05-01T12:00:00.000Z","amount_money":{"amount":900,"currency":"USD"},"status":"COMPLETED","delay_action":null,"source_type":"CARD","card_details":{"status":"CAPTURED","card":{"card_brand":"VISA","last_4":"1111","exp_month":12,"exp_year":2030},"entry_method":"KEYED"},"location_id":"L1","order_id":"O1"}"#,
    ),
    (
        "Customer",
        r#"{"id":"C1","given_name":"Ada","family_name":"Lovelace","nickname":null,"email_address":"ada@example.com","preferences":{"email_unsubscribed":false},"creation_source":"THIRD_PARTY","version":1}"#,
    ),
    (
        "Location",
        r#"{"id":"L1","name":"Main St","capabilities":["CREDIT_CARD_PROCESSING"],"status":"ACTIVE","country":"US","currency":"USD","type":"PHYSICAL","business_hours":{"periods":[{"day_of_week":"MON","start_local_time":"09:00:00","end_local_time":"17:00:00"}]},"coordinates":{"latitude":37.7749,"longitude":-122.4194}}"#,
    ),
    (
        "Invoice",
        r#"{"id":"I1","version":0,"location_id":"L1","order_id":"O1","payment_requests":[{"uid":"pr-1","request_type":"BALANCE","due_date":"2024-06-01","reminders":[{"relative_scheduled_days":-1,"message":"Due tomorrow"}]}],"delivery_method":"EMAIL","scheduled_at":null,"status":"DRAFT","accepted_payment_methods":{"card":true,"square_gift_card":false}}"#,
    ),
    (
        "CreatePaymentLinkRequest",
        r#"{"idempotency_key":"k1","quick_pay":{"name":"Auto Detailing","price_money":{"amount":12500,"currency":"USD"},"location_id":"L1"},"checkout_options":{"custom_fields":[{"title":"Discount Code"}],"redirect_url":null}}"#,
    ),
    (
        "Subscription",
        r#"{"id":"S1","location_id":"L1","customer_id":"C1","status":"ACTIVE","canceled_date":null,"actions":[{"id":"a1","type":"PAUSE","effective_date":"2024-07-01"}],"phases":[{"cadence":"MONTHLY","periods":null,"ordinal":0}]}"#,
    ),
    (
        "BatchChangeInventoryRequest",
        r#"{"idempotency_key":"k2","changes":[{"type":"ADJUSTMENT","adjustment":{"from_state":"IN_STOCK","to_state":"SOLD","location_id":"L1","catalog_object_id":"V1","quantity":"1","occurred_at":"2024-05-01T12:00:00Z"}}]}"#,
    ),
    (
        "GiftCard",
        r#"{"id":"G1","type":"DIGITAL","gan_source":"SQUARE","state":"ACTIVE","balance_money":{"amount":2500,"currency":"USD"},"gan":"7783320001001635"}"#,
    ),
    (
        "LoyaltyAccount",
        r#"{"id":"A1","program_id":"P1","balance":10,"customer_id":null,"mapping":{"phone_number":"+14155550100"}}"#,
    ),
    (
        "LoyaltyEvent",
        r#"{"id":"LE1","type":"ADJUST_POINTS","created_at":"2024-04-01T09:30:00Z","adjust_points":{"points":-5,"reason":null},"loyalty_account_id":"A1","source":"LOYALTY_API"}"#,
    ),
    (
        "Event",
        r#"{"merchant_id":"M1","type":"payment.updated","event_id":"E1","created_at":"2024-05-01T12:00:00Z","data":{"type":"payment","id":"P1","object":{"payment":{"id":"P1","status":"COMPLETED"}}}}"#,
    ),
    ("ListLocationsResponse", r#"{"locations":[]}"#),
];

/// An order using tokens this crate does not know about.
pub const ORDER_WITH_NEW_TOKENS: &str = r#"{"location_id":"L1","state":"ARCHIVED","fulfillments":[{"type":"DRONE","state":"PROPOSED"}]}"#;

/// A response the server sent with an empty body.
pub const EMPTY_BODY: &str = "{}";
