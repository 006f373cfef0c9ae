//! Name-indexed tables of every model and enum in the crate.
//!
//! Used by tooling that works on a model chosen at runtime, such as the
//! `sqmodels` CLI.

use serde::Serialize;
use serde::de::DeserializeOwned;
use square_core::{RoundTrip, WireEnum, WireError, WireSettings, impl_model, round_trip};

use crate::enums::*;
use crate::models::*;

/// A model type, erased to its name and a round-trip entry point.
#[derive(Clone, Copy)]
pub struct ModelDescriptor {
    /// Type name as used by the API reference.
    pub name: &'static str,
    /// Decode a payload as this model and write it back out.
    pub round_trip: fn(&str, &WireSettings) -> Result<RoundTrip, WireError>,
}

impl std::fmt::Debug for ModelDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelDescriptor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// An enum type, erased to its name and documented tokens.
#[derive(Clone, Copy)]
pub struct EnumDescriptor {
    pub name: &'static str,
    pub values: &'static [&'static str],
    /// Decode a JSON string token into this enum and encode it again.
    pub reencode: fn(&str) -> Result<String, serde_json::Error>,
}

impl std::fmt::Debug for EnumDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumDescriptor")
            .field("name", &self.name)
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}

fn reencode<E>(token: &str) -> Result<String, serde_json::Error>
where
    E: WireEnum + Serialize + DeserializeOwned,
{
    let value: E = serde_json::from_value(serde_json::Value::String(token.to_owned()))?;
    match serde_json::to_value(&value)? {
        serde_json::Value::String(token) => Ok(token),
        other => Ok(other.to_string()),
    }
}

macro_rules! model_table {
    ($($ty:ident),+ $(,)?) => {
        impl_model!($($ty),+);

        static MODELS: &[ModelDescriptor] = &[
            $(ModelDescriptor {
                name: <$ty as square_core::Model>::NAME,
                round_trip: round_trip::<$ty>,
            },)+
        ];
    };
}

macro_rules! enum_table {
    ($($ty:ident),+ $(,)?) => {
        static ENUMS: &[EnumDescriptor] = &[
            $(EnumDescriptor {
                name: <$ty as WireEnum>::NAME,
                values: <$ty as WireEnum>::VALUES,
                reencode: reencode::<$ty>,
            },)+
        ];
    };
}

model_table!(
    // common
    Money,
    Address,
    Coordinates,
    TimeRange,
    DateRange,
    PaginationCursor,
    // errors
    Error,
    ErrorResponse,
    // catalog
    CatalogObject,
    CatalogV1Id,
    CatalogItem,
    CatalogItemModifierListInfo,
    CatalogItemVariation,
    CatalogCategory,
    CatalogTax,
    CatalogDiscount,
    CatalogModifierList,
    CatalogModifier,
    CatalogIdMapping,
    UpsertCatalogObjectRequest,
    UpsertCatalogObjectResponse,
    CatalogObjectBatch,
    BatchUpsertCatalogObjectsRequest,
    BatchUpsertCatalogObjectsResponse,
    ListCatalogResponse,
    // orders
    Order,
    OrderSource,
    OrderLineItem,
    OrderLineItemModifier,
    OrderLineItemAppliedTax,
    OrderLineItemAppliedDiscount,
    OrderLineItemTax,
    OrderLineItemDiscount,
    OrderServiceCharge,
    Fulfillment,
    FulfillmentRecipient,
    FulfillmentPickupDetails,
    OrderMoneyAmounts,
    CreateOrderRequest,
    CreateOrderResponse,
    SearchOrdersStateFilter,
    SearchOrdersDateTimeFilter,
    SearchOrdersCustomerFilter,
    SearchOrdersFilter,
    SearchOrdersSort,
    SearchOrdersQuery,
    SearchOrdersRequest,
    SearchOrdersResponse,
    // payments
    Card,
    CardPaymentDetails,
    ProcessingFee,
    Payment,
    PaymentRefund,
    CreatePaymentRequest,
    CreatePaymentResponse,
    ListPaymentsResponse,
    RefundPaymentRequest,
    RefundPaymentResponse,
    // customers
    Customer,
    CustomerPreferences,
    CustomerTaxIds,
    CustomerCreationSourceFilter,
    CustomerFilter,
    CustomerTextFilter,
    CustomerSort,
    CustomerQuery,
    CreateCustomerRequest,
    CreateCustomerResponse,
    SearchCustomersRequest,
    SearchCustomersResponse,
    // locations
    Location,
    BusinessHours,
    BusinessHoursPeriod,
    ListLocationsResponse,
    // invoices
    Invoice,
    InvoiceRecipient,
    InvoicePaymentRequest,
    InvoicePaymentReminder,
    InvoiceAcceptedPaymentMethods,
    InvoiceCustomField,
    CreateInvoiceRequest,
    CreateInvoiceResponse,
    // checkout
    CustomField,
    CheckoutOptions,
    QuickPay,
    PrePopulatedData,
    PaymentLink,
    CreatePaymentLinkRequest,
    CreatePaymentLinkResponse,
    PaymentLinkRelatedResources,
    // subscriptions
    Subscription,
    SubscriptionAction,
    SubscriptionPhase,
    CreateSubscriptionRequest,
    CreateSubscriptionResponse,
    // inventory
    InventoryCount,
    InventoryAdjustment,
    InventoryPhysicalCount,
    InventoryChange,
    BatchChangeInventoryRequest,
    BatchChangeInventoryResponse,
    // gift cards
    GiftCard,
    CreateGiftCardRequest,
    CreateGiftCardResponse,
    // loyalty
    LoyaltyAccount,
    LoyaltyAccountMapping,
    LoyaltyReward,
    LoyaltyEvent,
    LoyaltyEventAccumulatePoints,
    LoyaltyEventCreateReward,
    LoyaltyEventRedeemReward,
    LoyaltyEventDeleteReward,
    LoyaltyEventAdjustPoints,
    LoyaltyEventExpirePoints,
    LoyaltyEventOther,
    LoyaltyEventAccumulatePromotionPoints,
    // webhooks
    WebhookSubscription,
    EventMetadata,
    Event,
    EventData,
);

enum_table!(
    Currency,
    Country,
    SortOrder,
    DayOfWeek,
    ErrorCategory,
    ErrorCode,
    CatalogObjectType,
    CatalogItemProductType,
    CatalogPricingType,
    InventoryAlertType,
    CatalogDiscountType,
    CatalogDiscountModifyTaxBasis,
    TaxCalculationPhase,
    TaxInclusionType,
    CatalogModifierListSelectionType,
    OrderState,
    OrderLineItemItemType,
    OrderLineItemDiscountType,
    OrderLineItemDiscountScope,
    OrderLineItemTaxType,
    OrderLineItemTaxScope,
    OrderServiceChargeCalculationPhase,
    OrderServiceChargeType,
    FulfillmentType,
    FulfillmentState,
    FulfillmentPickupDetailsScheduleType,
    SearchOrdersSortField,
    PaymentStatus,
    PaymentSourceType,
    CardBrand,
    CardType,
    CardPrepaidType,
    CardCoBrand,
    CardPaymentStatus,
    CardEntryMethod,
    RefundStatus,
    ProcessingFeeType,
    DelayAction,
    CustomerCreationSource,
    CustomerInclusionExclusion,
    CustomerSortField,
    LocationStatus,
    LocationType,
    LocationCapability,
    InvoiceStatus,
    InvoiceDeliveryMethod,
    InvoiceRequestType,
    InvoiceAutomaticPaymentSource,
    InvoiceReminderStatus,
    InvoiceCustomFieldPlacement,
    SubscriptionStatus,
    SubscriptionCadence,
    SubscriptionActionType,
    InventoryState,
    InventoryChangeType,
    GiftCardType,
    GiftCardStatus,
    GiftCardGanSource,
    LoyaltyProgramStatus,
    LoyaltyEventType,
    LoyaltyEventSource,
    LoyaltyRewardStatus,
);

/// Every model, grouped by domain.
#[must_use]
pub fn all_models() -> &'static [ModelDescriptor] {
    MODELS
}

/// Every enum, grouped by domain.
#[must_use]
pub fn all_enums() -> &'static [EnumDescriptor] {
    ENUMS
}

/// Look up a model by exact type name.
#[must_use]
pub fn find_model(name: &str) -> Option<&'static ModelDescriptor> {
    MODELS.iter().find(|model| model.name == name)
}

/// Look up an enum by exact type name.
#[must_use]
pub fn find_enum(name: &str) -> Option<&'static EnumDescriptor> {
    ENUMS.iter().find(|descriptor| descriptor.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_unique() {
        let models: HashSet<_> = all_models().iter().map(|m| m.name).collect();
        assert_eq!(models.len(), all_models().len());
        let enums: HashSet<_> = all_enums().iter().map(|e| e.name).collect();
        assert_eq!(enums.len(), all_enums().len());
    }

    #[test]
    fn test_find() {
        assert_eq!(find_model("CustomField").map(|m| m.name), Some("CustomField"));
        assert!(find_model("customfield").is_none());
        assert_eq!(find_enum("Currency").map(|e| e.values.len()), Some(Currency::VALUES.len()));
        assert!(find_enum("Order").is_none());
    }

    #[test]
    fn test_reencode_passes_unknown_through() {
        let descriptor = find_enum("OrderState").unwrap();
        assert_eq!((descriptor.reencode)("OPEN").unwrap(), "OPEN");
        assert_eq!((descriptor.reencode)("ARCHIVED").unwrap(), "ARCHIVED");
    }

    #[test]
    fn test_descriptor_round_trip() {
        let descriptor = find_model("CustomField").unwrap();
        let result = (descriptor.round_trip)(
            r#"{"title":"Discount Code"}"#,
            &WireSettings::with_defaults(),
        )
        .unwrap();
        assert!(result.is_lossless());
    }
}
