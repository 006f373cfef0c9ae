//! Order vocabularies.

use square_core::wire_enum;

wire_enum! {
    /// Lifecycle state of an order.
    pub enum OrderState {
        /// Created and not yet finished.
        Open => "OPEN",
        /// Paid and fulfilled.
        Completed => "COMPLETED",
        /// Canceled before completion.
        Canceled => "CANCELED",
        /// Not yet visible to the seller.
        Draft => "DRAFT",
    }
}

impl OrderState {
    /// True once the order can no longer change.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Canceled)
    }
}

wire_enum! {
    /// What a line item represents.
    pub enum OrderLineItemItemType {
        /// A catalog or ad hoc item.
        Item => "ITEM",
        /// A custom amount with no item.
        CustomAmount => "CUSTOM_AMOUNT",
        /// A gift card sale or reload.
        GiftCard => "GIFT_CARD",
    }
}

wire_enum! {
    /// How an order-level discount is computed.
    pub enum OrderLineItemDiscountType {
        /// Type could not be determined.
        UnknownDiscount => "UNKNOWN_DISCOUNT",
        /// A fixed percentage off.
        FixedPercentage => "FIXED_PERCENTAGE",
        /// A fixed amount off.
        FixedAmount => "FIXED_AMOUNT",
        /// Percentage entered at sale time.
        VariablePercentage => "VARIABLE_PERCENTAGE",
        /// Amount entered at sale time.
        VariableAmount => "VARIABLE_AMOUNT",
    }
}

wire_enum! {
    /// Whether a discount applies to line items or the whole order.
    pub enum OrderLineItemDiscountScope {
        /// Scope could not be determined.
        OtherDiscountScope => "OTHER_DISCOUNT_SCOPE",
        /// Applies to selected line items.
        LineItem => "LINE_ITEM",
        /// Applies to every line item.
        Order => "ORDER",
    }
}

wire_enum! {
    /// Whether a tax is added to the price or included in it.
    pub enum OrderLineItemTaxType {
        /// Type could not be determined.
        UnknownTax => "UNKNOWN_TAX",
        /// Added on top of the price.
        Additive => "ADDITIVE",
        /// Already part of the price.
        Inclusive => "INCLUSIVE",
    }
}

wire_enum! {
    /// Whether a tax applies to line items or the whole order.
    pub enum OrderLineItemTaxScope {
        /// Scope could not be determined.
        OtherTaxScope => "OTHER_TAX_SCOPE",
        /// Applies to selected line items.
        LineItem => "LINE_ITEM",
        /// Applies to every line item.
        Order => "ORDER",
    }
}

wire_enum! {
    /// Point in the order calculation at which a service charge applies.
    pub enum OrderServiceChargeCalculationPhase {
        /// Computed on the subtotal.
        SubtotalPhase => "SUBTOTAL_PHASE",
        /// Computed on the total after taxes.
        TotalPhase => "TOTAL_PHASE",
        /// A percentage spread across line items.
        ApportionedPercentagePhase => "APPORTIONED_PERCENTAGE_PHASE",
        /// An amount spread across line items.
        ApportionedAmountPhase => "APPORTIONED_AMOUNT_PHASE",
    }
}

wire_enum! {
    /// Who added a service charge.
    pub enum OrderServiceChargeType {
        /// Added automatically, e.g. for large parties.
        AutoGratuity => "AUTO_GRATUITY",
        /// Added by the seller.
        Custom => "CUSTOM",
    }
}

wire_enum! {
    /// How a fulfillment reaches the buyer.
    pub enum FulfillmentType {
        /// The buyer collects the order.
        Pickup => "PICKUP",
        /// Shipped by a carrier.
        Shipment => "SHIPMENT",
        /// Delivered by the seller or a courier.
        Delivery => "DELIVERY",
    }
}

wire_enum! {
    /// Progress of a fulfillment.
    pub enum FulfillmentState {
        /// Created, not yet accepted.
        Proposed => "PROPOSED",
        /// Accepted by the seller.
        Reserved => "RESERVED",
        /// Ready for pickup or dispatch.
        Prepared => "PREPARED",
        /// Handed to the buyer.
        Completed => "COMPLETED",
        /// Canceled by the seller.
        Canceled => "CANCELED",
        /// Could not be completed.
        Failed => "FAILED",
    }
}

wire_enum! {
    /// When a pickup fulfillment is expected.
    pub enum FulfillmentPickupDetailsScheduleType {
        /// Picked up at `pickup_at`.
        Scheduled => "SCHEDULED",
        /// Picked up as soon as it is prepared.
        Asap => "ASAP",
    }
}

wire_enum! {
    /// Field used to sort order search results.
    pub enum SearchOrdersSortField {
        /// Sort by creation time.
        CreatedAt => "CREATED_AT",
        /// Sort by last update.
        UpdatedAt => "UPDATED_AT",
        /// Sort by completion or cancellation time.
        ClosedAt => "CLOSED_AT",
    }
}
