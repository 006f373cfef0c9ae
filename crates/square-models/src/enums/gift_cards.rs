//! Gift card vocabularies.

use square_core::wire_enum;

wire_enum! {
    /// Physical or digital gift card.
    pub enum GiftCardType {
        /// A plastic card.
        Physical => "PHYSICAL",
        /// An eGift card.
        Digital => "DIGITAL",
    }
}

wire_enum! {
    /// Status of a gift card.
    pub enum GiftCardStatus {
        /// Can be used for payment.
        Active => "ACTIVE",
        /// Permanently disabled.
        Deactivated => "DEACTIVATED",
        /// Temporarily disabled.
        Blocked => "BLOCKED",
        /// Created but not yet activated.
        Pending => "PENDING",
    }
}

wire_enum! {
    /// Who generated the gift card account number.
    pub enum GiftCardGanSource {
        /// Generated by Square.
        Square => "SQUARE",
        /// Supplied by the seller.
        Other => "OTHER",
    }
}
