//! Data transfer objects, grouped by API domain.
//!
//! Field presence follows three shapes:
//!
//! - required: plain field, always written, constructor parameter
//! - optional: `Option<T>`, written only when `Some`
//! - nullable: [`square_core::Nullable`], written when touched, `null` when cleared

pub mod catalog;
pub mod checkout;
pub mod common;
pub mod customers;
pub mod errors;
pub mod gift_cards;
pub mod inventory;
pub mod invoices;
pub mod locations;
pub mod loyalty;
pub mod orders;
pub mod payments;
pub mod subscriptions;
pub mod webhooks;

pub use catalog::{
    BatchUpsertCatalogObjectsRequest, BatchUpsertCatalogObjectsResponse, CatalogCategory,
    CatalogDiscount, CatalogIdMapping, CatalogItem, CatalogItemModifierListInfo,
    CatalogItemVariation, CatalogModifier, CatalogModifierList, CatalogObject, CatalogObjectBatch,
    CatalogTax, CatalogV1Id, ListCatalogResponse, TEMPORARY_ID_PREFIX, UpsertCatalogObjectRequest,
    UpsertCatalogObjectResponse,
};
pub use checkout::{
    CheckoutOptions, CreatePaymentLinkRequest, CreatePaymentLinkResponse, CustomField,
    PaymentLink, PaymentLinkRelatedResources, PrePopulatedData, QuickPay,
};
pub use common::{Address, Coordinates, DateRange, Money, PaginationCursor, TimeRange};
pub use customers::{
    CreateCustomerRequest, CreateCustomerResponse, Customer, CustomerCreationSourceFilter,
    CustomerFilter, CustomerPreferences, CustomerQuery, CustomerSort, CustomerTaxIds,
    CustomerTextFilter, SearchCustomersRequest, SearchCustomersResponse,
};
pub use errors::{Error, ErrorResponse};
pub use gift_cards::{CreateGiftCardRequest, CreateGiftCardResponse, GiftCard};
pub use inventory::{
    BatchChangeInventoryRequest, BatchChangeInventoryResponse, InventoryAdjustment,
    InventoryChange, InventoryCount, InventoryPhysicalCount,
};
pub use invoices::{
    CreateInvoiceRequest, CreateInvoiceResponse, Invoice, InvoiceAcceptedPaymentMethods,
    InvoiceCustomField, InvoicePaymentReminder, InvoicePaymentRequest, InvoiceRecipient,
};
pub use locations::{BusinessHours, BusinessHoursPeriod, ListLocationsResponse, Location};
pub use loyalty::{
    LoyaltyAccount, LoyaltyAccountMapping, LoyaltyEvent, LoyaltyEventAccumulatePoints,
    LoyaltyEventAccumulatePromotionPoints, LoyaltyEventAdjustPoints, LoyaltyEventCreateReward,
    LoyaltyEventDeleteReward, LoyaltyEventExpirePoints, LoyaltyEventOther,
    LoyaltyEventRedeemReward, LoyaltyReward,
};
pub use orders::{
    CreateOrderRequest, CreateOrderResponse, Fulfillment, FulfillmentPickupDetails,
    FulfillmentRecipient, Metadata, Order, OrderLineItem, OrderLineItemAppliedDiscount,
    OrderLineItemAppliedTax, OrderLineItemDiscount, OrderLineItemModifier, OrderLineItemTax,
    OrderMoneyAmounts, OrderServiceCharge, OrderSource, SearchOrdersCustomerFilter,
    SearchOrdersDateTimeFilter, SearchOrdersFilter, SearchOrdersQuery, SearchOrdersRequest,
    SearchOrdersResponse, SearchOrdersSort, SearchOrdersStateFilter,
};
pub use payments::{
    Card, CardPaymentDetails, CreatePaymentRequest, CreatePaymentResponse, ListPaymentsResponse,
    Payment, PaymentRefund, ProcessingFee, RefundPaymentRequest, RefundPaymentResponse,
};
pub use subscriptions::{
    CreateSubscriptionRequest, CreateSubscriptionResponse, Subscription, SubscriptionAction,
    SubscriptionPhase,
};
pub use webhooks::{Event, EventData, EventMetadata, WebhookSubscription};
