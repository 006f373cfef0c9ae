//! Customer vocabularies.

use square_core::wire_enum;

wire_enum! {
    /// How a customer profile was created.
    pub enum CustomerCreationSource {
        /// Any source not listed here.
        Other => "OTHER",
        /// Square Appointments.
        Appointments => "APPOINTMENTS",
        /// A coupon redemption.
        Coupon => "COUPON",
        /// Restored after deletion.
        DeletionRecovery => "DELETION_RECOVERY",
        /// Created by hand in the directory.
        Directory => "DIRECTORY",
        /// An eGift card purchase.
        Egifting => "EGIFTING",
        /// Email collected at checkout.
        EmailCollection => "EMAIL_COLLECTION",
        /// Buyer feedback.
        Feedback => "FEEDBACK",
        /// A bulk import.
        Import => "IMPORT",
        /// Square Invoices.
        Invoices => "INVOICES",
        /// Square Loyalty.
        Loyalty => "LOYALTY",
        /// Square Marketing.
        Marketing => "MARKETING",
        /// Merging two profiles.
        Merge => "MERGE",
        /// Square Online.
        OnlineStore => "ONLINE_STORE",
        /// Created automatically from a payment.
        InstantProfile => "INSTANT_PROFILE",
        /// Square Terminal.
        Terminal => "TERMINAL",
        /// A third-party application.
        ThirdParty => "THIRD_PARTY",
        /// An import by a third-party application.
        ThirdPartyImport => "THIRD_PARTY_IMPORT",
        /// Restored from an undone merge.
        UnmergeRecovery => "UNMERGE_RECOVERY",
    }
}

wire_enum! {
    /// Whether a filter includes or excludes matching values.
    pub enum CustomerInclusionExclusion {
        /// Keep profiles that match.
        Include => "INCLUDE",
        /// Drop profiles that match.
        Exclude => "EXCLUDE",
    }
}

wire_enum! {
    /// Field used to sort customer search results.
    pub enum CustomerSortField {
        /// Sort by name, then email.
        Default => "DEFAULT",
        /// Sort by creation time.
        CreatedAt => "CREATED_AT",
    }
}
