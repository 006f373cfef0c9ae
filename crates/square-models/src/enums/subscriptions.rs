//! Subscription vocabularies.

use square_core::wire_enum;

wire_enum! {
    /// Status of a subscription.
    pub enum SubscriptionStatus {
        /// Starts on a future date.
        Pending => "PENDING",
        /// Billing.
        Active => "ACTIVE",
        /// Ended by cancellation.
        Canceled => "CANCELED",
        /// Stopped after failed payments.
        Deactivated => "DEACTIVATED",
        /// Billing is suspended.
        Paused => "PAUSED",
    }
}

wire_enum! {
    /// Billing cadence of a subscription phase.
    pub enum SubscriptionCadence {
        /// Every day.
        Daily => "DAILY",
        /// Every week.
        Weekly => "WEEKLY",
        /// Every two weeks.
        EveryTwoWeeks => "EVERY_TWO_WEEKS",
        /// Every 30 days.
        ThirtyDays => "THIRTY_DAYS",
        /// Every 60 days.
        SixtyDays => "SIXTY_DAYS",
        /// Every 90 days.
        NinetyDays => "NINETY_DAYS",
        /// Every month.
        Monthly => "MONTHLY",
        /// Every two months.
        EveryTwoMonths => "EVERY_TWO_MONTHS",
        /// Every three months.
        Quarterly => "QUARTERLY",
        /// Every four months.
        EveryFourMonths => "EVERY_FOUR_MONTHS",
        /// Every six months.
        EverySixMonths => "EVERY_SIX_MONTHS",
        /// Every year.
        Annual => "ANNUAL",
        /// Every two years.
        EveryTwoYears => "EVERY_TWO_YEARS",
    }
}

wire_enum! {
    /// Scheduled action on a subscription.
    pub enum SubscriptionActionType {
        /// End the subscription.
        Cancel => "CANCEL",
        /// Suspend billing.
        Pause => "PAUSE",
        /// Resume billing after a pause.
        Resume => "RESUME",
        /// Move to another plan variation.
        SwapPlan => "SWAP_PLAN",
        /// Move the day of month billing happens on.
        ChangeBillingAnchorDate => "CHANGE_BILLING_ANCHOR_DATE",
    }
}
