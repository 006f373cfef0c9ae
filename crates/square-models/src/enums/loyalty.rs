//! Loyalty vocabularies.

use square_core::wire_enum;

wire_enum! {
    /// Whether a loyalty program is running.
    pub enum LoyaltyProgramStatus {
        /// The program is paused; buyers cannot earn or redeem points.
        Inactive => "INACTIVE",
        /// Buyers can earn and redeem points.
        Active => "ACTIVE",
    }
}

wire_enum! {
    /// Kind of event recorded against a loyalty account.
    pub enum LoyaltyEventType {
        /// Points earned from a purchase.
        AccumulatePoints => "ACCUMULATE_POINTS",
        /// Points locked into a newly created reward.
        CreateReward => "CREATE_REWARD",
        /// A reward applied to an order.
        RedeemReward => "REDEEM_REWARD",
        /// A reward deleted and its points returned.
        DeleteReward => "DELETE_REWARD",
        /// Points added or removed by hand.
        AdjustPoints => "ADJUST_POINTS",
        /// Points removed by the program's expiration policy.
        ExpirePoints => "EXPIRE_POINTS",
        /// Any other balance change.
        Other => "OTHER",
        /// Points earned from a loyalty promotion.
        AccumulatePromotionPoints => "ACCUMULATE_PROMOTION_POINTS",
    }
}

wire_enum! {
    /// Who recorded a loyalty event.
    pub enum LoyaltyEventSource {
        /// Square products, e.g. Point of Sale.
        Square => "SQUARE",
        /// A call to the Loyalty API.
        LoyaltyApi => "LOYALTY_API",
    }
}

wire_enum! {
    /// Lifecycle state of a loyalty reward.
    pub enum LoyaltyRewardStatus {
        /// Points are locked and the reward can be redeemed.
        Issued => "ISSUED",
        /// The reward was applied to an order.
        Redeemed => "REDEEMED",
        /// The reward was deleted and its points returned.
        Deleted => "DELETED",
    }
}
