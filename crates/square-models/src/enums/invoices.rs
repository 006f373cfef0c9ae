//! Invoice vocabularies.

use square_core::wire_enum;

wire_enum! {
    /// Status of an invoice.
    pub enum InvoiceStatus {
        /// Not yet published.
        Draft => "DRAFT",
        /// Published and awaiting payment.
        Unpaid => "UNPAID",
        /// Will be sent at a later date.
        Scheduled => "SCHEDULED",
        /// Some payment requests are paid.
        PartiallyPaid => "PARTIALLY_PAID",
        /// Fully paid.
        Paid => "PAID",
        /// Paid, then partly refunded.
        PartiallyRefunded => "PARTIALLY_REFUNDED",
        /// Paid, then fully refunded.
        Refunded => "REFUNDED",
        /// Canceled by the seller.
        Canceled => "CANCELED",
        /// An automatic payment failed.
        Failed => "FAILED",
        /// A payment is in progress.
        PaymentPending => "PAYMENT_PENDING",
    }
}

wire_enum! {
    /// How an invoice reaches the recipient.
    pub enum InvoiceDeliveryMethod {
        /// Sent by email.
        Email => "EMAIL",
        /// The seller shares the link.
        ShareManually => "SHARE_MANUALLY",
        /// Sent by text message.
        Sms => "SMS",
    }
}

wire_enum! {
    /// Kind of payment request on an invoice.
    pub enum InvoiceRequestType {
        /// The remaining balance.
        Balance => "BALANCE",
        /// An upfront deposit.
        Deposit => "DEPOSIT",
        /// One of several installments.
        Installment => "INSTALLMENT",
    }
}

wire_enum! {
    /// Stored payment method charged when an invoice is due.
    pub enum InvoiceAutomaticPaymentSource {
        /// The buyer pays by hand.
        None => "NONE",
        /// Charge a stored card.
        CardOnFile => "CARD_ON_FILE",
        /// Debit a stored bank account.
        BankOnFile => "BANK_ON_FILE",
    }
}

wire_enum! {
    /// Delivery status of a payment reminder.
    pub enum InvoiceReminderStatus {
        /// Will be sent.
        Pending => "PENDING",
        /// Will not be sent, e.g. the invoice is paid.
        NotApplicable => "NOT_APPLICABLE",
        /// Already sent.
        Sent => "SENT",
    }
}

wire_enum! {
    /// Where a custom field is rendered on the invoice.
    pub enum InvoiceCustomFieldPlacement {
        /// Rendered before the line items.
        AboveLineItems => "ABOVE_LINE_ITEMS",
        /// Rendered after the line items.
        BelowLineItems => "BELOW_LINE_ITEMS",
    }
}
