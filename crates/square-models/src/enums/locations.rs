//! Location vocabularies.

use square_core::wire_enum;

wire_enum! {
    /// Whether a location is open for business.
    pub enum LocationStatus {
        /// Open for business.
        Active => "ACTIVE",
        /// Deactivated by the seller.
        Inactive => "INACTIVE",
    }
}

wire_enum! {
    /// Whether a location has a fixed address.
    pub enum LocationType {
        /// A fixed storefront.
        Physical => "PHYSICAL",
        /// A mobile business such as a food truck.
        Mobile => "MOBILE",
    }
}

wire_enum! {
    /// Capabilities enabled for a location.
    pub enum LocationCapability {
        /// Can take card payments.
        CreditCardProcessing => "CREDIT_CARD_PROCESSING",
        /// Balance is paid out automatically.
        AutomaticTransfers => "AUTOMATIC_TRANSFERS",
        /// Can refund without a linked payment.
        UnlinkedRefunds => "UNLINKED_REFUNDS",
    }
}
