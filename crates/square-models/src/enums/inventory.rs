//! Inventory vocabularies.

use square_core::wire_enum;

wire_enum! {
    /// State of a quantity of an item at a location.
    pub enum InventoryState {
        /// Seller-defined state.
        Custom => "CUSTOM",
        /// Available for sale.
        InStock => "IN_STOCK",
        /// Sold to a buyer.
        Sold => "SOLD",
        /// Returned and not yet restocked.
        ReturnedByCustomer => "RETURNED_BY_CUSTOMER",
        /// Held for a pending sale.
        ReservedForSale => "RESERVED_FOR_SALE",
        /// Sold through an online channel.
        SoldOnline => "SOLD_ONLINE",
        /// On order from a vendor.
        OrderedFromVendor => "ORDERED_FROM_VENDOR",
        /// Received from a vendor.
        ReceivedFromVendor => "RECEIVED_FROM_VENDOR",
        /// Being moved to another location.
        InTransitTo => "IN_TRANSIT_TO",
        /// Placeholder for counts that have no state.
        None => "NONE",
        /// Lost, damaged or otherwise written off.
        Waste => "WASTE",
        /// Returned without a matching sale.
        UnlinkedReturn => "UNLINKED_RETURN",
        /// Consumed to build a composite item.
        Composed => "COMPOSED",
        /// Released by breaking up a composite item.
        Decomposed => "DECOMPOSED",
        /// Only readable with a newer API version.
        SupportedByNewerVersion => "SUPPORTED_BY_NEWER_VERSION",
        /// Being moved between locations.
        InTransit => "IN_TRANSIT",
    }
}

wire_enum! {
    /// Kind of inventory change.
    pub enum InventoryChangeType {
        /// Stock was counted.
        PhysicalCount => "PHYSICAL_COUNT",
        /// Stock moved between states.
        Adjustment => "ADJUSTMENT",
        /// Stock moved between locations.
        Transfer => "TRANSFER",
    }
}
