//! Enumerations of wire tokens, grouped by API domain.
//!
//! Every type is declared with [`square_core::wire_enum!`] and carries an
//! `Unrecognized` variant for tokens added by the server later.

pub mod catalog;
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

pub use catalog::{
    CatalogDiscountModifyTaxBasis, CatalogDiscountType, CatalogItemProductType,
    CatalogModifierListSelectionType, CatalogObjectType, CatalogPricingType, InventoryAlertType,
    TaxCalculationPhase, TaxInclusionType,
};
pub use common::{Country, Currency, DayOfWeek, SortOrder};
pub use customers::{CustomerCreationSource, CustomerInclusionExclusion, CustomerSortField};
pub use errors::{ErrorCategory, ErrorCode};
pub use gift_cards::{GiftCardGanSource, GiftCardStatus, GiftCardType};
pub use inventory::{InventoryChangeType, InventoryState};
pub use invoices::{
    InvoiceAutomaticPaymentSource, InvoiceCustomFieldPlacement, InvoiceDeliveryMethod,
    InvoiceReminderStatus, InvoiceRequestType, InvoiceStatus,
};
pub use locations::{LocationCapability, LocationStatus, LocationType};
pub use loyalty::{LoyaltyEventSource, LoyaltyEventType, LoyaltyProgramStatus, LoyaltyRewardStatus};
pub use orders::{
    FulfillmentPickupDetailsScheduleType, FulfillmentState, FulfillmentType,
    OrderLineItemDiscountScope, OrderLineItemDiscountType, OrderLineItemItemType,
    OrderLineItemTaxScope, OrderLineItemTaxType, OrderServiceChargeCalculationPhase,
    OrderServiceChargeType, OrderState, SearchOrdersSortField,
};
pub use payments::{
    CardBrand, CardCoBrand, CardEntryMethod, CardPaymentStatus, CardPrepaidType, CardType,
    DelayAction, PaymentSourceType, PaymentStatus, ProcessingFeeType, RefundStatus,
};
pub use subscriptions::{SubscriptionActionType, SubscriptionCadence, SubscriptionStatus};
