//! Catalog vocabularies.

use square_core::wire_enum;

wire_enum! {
    /// Type discriminator of a `CatalogObject`.
    pub enum CatalogObjectType {
        /// A sellable item.
        Item => "ITEM",
        /// An image attached to other objects.
        Image => "IMAGE",
        /// A grouping of items.
        Category => "CATEGORY",
        /// A priced variation of an item.
        ItemVariation => "ITEM_VARIATION",
        /// A tax rate.
        Tax => "TAX",
        /// A discount definition.
        Discount => "DISCOUNT",
        /// A set of modifiers offered with items.
        ModifierList => "MODIFIER_LIST",
        /// One modifier within a list.
        Modifier => "MODIFIER",
        /// Rule applying discounts automatically.
        PricingRule => "PRICING_RULE",
        /// Set of products a pricing rule targets.
        ProductSet => "PRODUCT_SET",
        /// Time window a pricing rule is active in.
        TimePeriod => "TIME_PERIOD",
        /// Unit an item is sold by.
        MeasurementUnit => "MEASUREMENT_UNIT",
        /// A priced variation of a subscription plan.
        SubscriptionPlanVariation => "SUBSCRIPTION_PLAN_VARIATION",
        /// An option such as size or color.
        ItemOption => "ITEM_OPTION",
        /// One value of an item option.
        ItemOptionVal => "ITEM_OPTION_VAL",
        /// Definition of a custom attribute.
        CustomAttributeDefinition => "CUSTOM_ATTRIBUTE_DEFINITION",
        /// Preset amounts offered at checkout.
        QuickAmountsSettings => "QUICK_AMOUNTS_SETTINGS",
        /// A subscription plan.
        SubscriptionPlan => "SUBSCRIPTION_PLAN",
        /// Time window a service is bookable in.
        AvailabilityPeriod => "AVAILABILITY_PERIOD",
    }
}

wire_enum! {
    /// Kind of product an item represents.
    pub enum CatalogItemProductType {
        /// A physical or general product.
        Regular => "REGULAR",
        /// A gift card product.
        GiftCard => "GIFT_CARD",
        /// A bookable service.
        AppointmentsService => "APPOINTMENTS_SERVICE",
        /// Food or drink.
        FoodAndBev => "FOOD_AND_BEV",
        /// An event ticket.
        Event => "EVENT",
        /// A digital download.
        Digital => "DIGITAL",
        /// A donation.
        Donation => "DONATION",
        /// Service from the legacy online store.
        LegacySquareOnlineService => "LEGACY_SQUARE_ONLINE_SERVICE",
        /// Membership from the legacy online store.
        LegacySquareOnlineMembership => "LEGACY_SQUARE_ONLINE_MEMBERSHIP",
    }
}

wire_enum! {
    /// Whether a variation has a fixed price or one entered at sale time.
    pub enum CatalogPricingType {
        /// Price set in the catalog.
        FixedPricing => "FIXED_PRICING",
        /// Price entered at sale time.
        VariablePricing => "VARIABLE_PRICING",
    }
}

wire_enum! {
    /// Inventory alert configuration of a variation.
    pub enum InventoryAlertType {
        /// No alert.
        None => "NONE",
        /// Alert when stock falls below the threshold.
        LowQuantity => "LOW_QUANTITY",
    }
}

wire_enum! {
    /// How a catalog discount is computed.
    pub enum CatalogDiscountType {
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
    /// Whether a discount lowers the amount taxes are computed on.
    pub enum CatalogDiscountModifyTaxBasis {
        /// Tax is computed on the discounted price.
        ModifyTaxBasis => "MODIFY_TAX_BASIS",
        /// Tax is computed on the full price.
        DoNotModifyTaxBasis => "DO_NOT_MODIFY_TAX_BASIS",
    }
}

wire_enum! {
    /// When a tax is applied relative to other taxes.
    pub enum TaxCalculationPhase {
        /// Applied to the subtotal, before other taxes.
        TaxSubtotalPhase => "TAX_SUBTOTAL_PHASE",
        /// Applied to the total, after subtotal-phase taxes.
        TaxTotalPhase => "TAX_TOTAL_PHASE",
    }
}

wire_enum! {
    /// Whether a tax is added to the price or already included in it.
    pub enum TaxInclusionType {
        /// Added on top of the price.
        Additive => "ADDITIVE",
        /// Already part of the price.
        Inclusive => "INCLUSIVE",
    }
}

wire_enum! {
    /// How many modifiers a buyer may pick from a list.
    pub enum CatalogModifierListSelectionType {
        /// Exactly one modifier may be chosen.
        Single => "SINGLE",
        /// Any number of modifiers may be chosen.
        Multiple => "MULTIPLE",
    }
}
