//! Payment and refund vocabularies.
//!
//! Several of these are documented as plain strings by the API (payment
//! status, source type, refund status, fee type): the listed tokens are the
//! recommended set and new ones must survive a round trip.

use square_core::wire_enum;

wire_enum! {
    /// Status of a payment.
    pub enum PaymentStatus {
        /// Authorized, awaiting capture.
        Approved => "APPROVED",
        /// Waiting on the payment network.
        Pending => "PENDING",
        /// Captured.
        Completed => "COMPLETED",
        /// Voided before capture.
        Canceled => "CANCELED",
        /// Declined or errored.
        Failed => "FAILED",
    }
}

wire_enum! {
    /// Source of funds of a payment.
    pub enum PaymentSourceType {
        /// A credit or debit card.
        Card => "CARD",
        /// An ACH bank transfer.
        BankAccount => "BANK_ACCOUNT",
        /// A digital wallet such as Cash App Pay.
        Wallet => "WALLET",
        /// A buy-now-pay-later provider.
        BuyNowPayLater => "BUY_NOW_PAY_LATER",
        /// A Square account balance.
        SquareAccount => "SQUARE_ACCOUNT",
        /// Cash recorded by the seller.
        Cash => "CASH",
        /// Taken outside Square and recorded here.
        External => "EXTERNAL",
    }
}

wire_enum! {
    /// Card brand (network).
    pub enum CardBrand {
        /// A brand not listed here.
        OtherBrand => "OTHER_BRAND",
        /// Visa.
        Visa => "VISA",
        /// Mastercard.
        Mastercard => "MASTERCARD",
        /// American Express.
        AmericanExpress => "AMERICAN_EXPRESS",
        /// Discover.
        Discover => "DISCOVER",
        /// Diners Club on the Discover network.
        DiscoverDiners => "DISCOVER_DINERS",
        /// JCB.
        Jcb => "JCB",
        /// UnionPay.
        ChinaUnionpay => "CHINA_UNIONPAY",
        /// A Square gift card.
        SquareGiftCard => "SQUARE_GIFT_CARD",
        /// A Square Capital card.
        SquareCapitalCard => "SQUARE_CAPITAL_CARD",
        /// Interac (Canada).
        Interac => "INTERAC",
        /// eftpos (Australia).
        Eftpos => "EFTPOS",
        /// FeliCa (Japan).
        Felica => "FELICA",
        /// Electronic Benefits Transfer.
        Ebt => "EBT",
    }
}

wire_enum! {
    /// Credit or debit.
    pub enum CardType {
        /// Type could not be determined.
        UnknownCardType => "UNKNOWN_CARD_TYPE",
        /// A credit card.
        Credit => "CREDIT",
        /// A debit card.
        Debit => "DEBIT",
    }
}

wire_enum! {
    /// Whether a card is prepaid.
    pub enum CardPrepaidType {
        /// Could not be determined.
        UnknownPrepaidType => "UNKNOWN_PREPAID_TYPE",
        /// Not a prepaid card.
        NotPrepaid => "NOT_PREPAID",
        /// A prepaid card.
        Prepaid => "PREPAID",
    }
}

wire_enum! {
    /// Co-brand of a card, for buy-now-pay-later issued cards.
    pub enum CardCoBrand {
        /// No co-brand, or not known.
        Unknown => "UNKNOWN",
        /// Afterpay.
        Afterpay => "AFTERPAY",
        /// Clearpay.
        Clearpay => "CLEARPAY",
    }
}

wire_enum! {
    /// Status of a card payment's authorization.
    pub enum CardPaymentStatus {
        /// Funds are held.
        Authorized => "AUTHORIZED",
        /// Funds were taken.
        Captured => "CAPTURED",
        /// The hold was released.
        Voided => "VOIDED",
        /// Authorization failed.
        Failed => "FAILED",
    }
}

wire_enum! {
    /// How the card details were collected.
    pub enum CardEntryMethod {
        /// Typed in.
        Keyed => "KEYED",
        /// Read from the magnetic stripe.
        Swiped => "SWIPED",
        /// Read from the chip.
        Emv => "EMV",
        /// A stored card.
        OnFile => "ON_FILE",
        /// Tapped.
        Contactless => "CONTACTLESS",
    }
}

wire_enum! {
    /// Status of a refund.
    pub enum RefundStatus {
        /// Waiting to be processed.
        Pending => "PENDING",
        /// Returned to the buyer.
        Completed => "COMPLETED",
        /// Rejected by the seller or Square.
        Rejected => "REJECTED",
        /// Failed in the payment network.
        Failed => "FAILED",
    }
}

wire_enum! {
    /// Reason a processing fee was recorded.
    pub enum ProcessingFeeType {
        /// Charged when the payment was taken.
        Initial => "INITIAL",
        /// A later correction, e.g. after a refund.
        Adjustment => "ADJUSTMENT",
    }
}

wire_enum! {
    /// Delay action applied when a delayed-capture payment times out.
    pub enum DelayAction {
        /// Void the payment.
        Cancel => "CANCEL",
        /// Capture the payment.
        Complete => "COMPLETE",
    }
}
