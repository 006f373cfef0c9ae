//! Error vocabularies returned in `errors[]` arrays.

use square_core::wire_enum;

wire_enum! {
    /// High-level class of an API error.
    pub enum ErrorCategory {
        /// The server failed to handle the request.
        ApiError => "API_ERROR",
        /// Missing, expired or insufficient credentials.
        AuthenticationError => "AUTHENTICATION_ERROR",
        /// The request was malformed or failed validation.
        InvalidRequestError => "INVALID_REQUEST_ERROR",
        /// Too many requests in a short period.
        RateLimitError => "RATE_LIMIT_ERROR",
        /// The payment source was declined or invalid.
        PaymentMethodError => "PAYMENT_METHOD_ERROR",
        /// The refund could not be processed.
        RefundError => "REFUND_ERROR",
        /// The seller's subscription does not allow the operation.
        MerchantSubscriptionError => "MERCHANT_SUBSCRIPTION_ERROR",
        /// An external vendor failed.
        ExternalVendorError => "EXTERNAL_VENDOR_ERROR",
    }
}

impl ErrorCategory {
    /// True for categories where retrying the identical request may succeed.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::ApiError | Self::RateLimitError)
    }
}

wire_enum! {
    /// Specific error code within a category.
    ///
    /// The server adds codes over time; anything not listed here decodes to
    /// `Unrecognized`.
    pub enum ErrorCode {
        /// A general server error.
        InternalServerError => "INTERNAL_SERVER_ERROR",
        /// Missing or invalid credentials.
        Unauthorized => "UNAUTHORIZED",
        /// The access token has expired.
        AccessTokenExpired => "ACCESS_TOKEN_EXPIRED",
        /// The access token was revoked.
        AccessTokenRevoked => "ACCESS_TOKEN_REVOKED",
        /// The application is disabled.
        ClientDisabled => "CLIENT_DISABLED",
        /// The caller may not perform the operation.
        Forbidden => "FORBIDDEN",
        /// The token lacks a required OAuth scope.
        InsufficientScopes => "INSUFFICIENT_SCOPES",
        /// The application was disabled by Square.
        ApplicationDisabled => "APPLICATION_DISABLED",
        /// A v1 application cannot call this endpoint.
        V1Application => "V1_APPLICATION",
        /// A v1 access token cannot call this endpoint.
        V1AccessToken => "V1_ACCESS_TOKEN",
        /// The location cannot take card payments.
        CardProcessingNotEnabled => "CARD_PROCESSING_NOT_ENABLED",
        /// The seller lacks the subscription the operation needs.
        MerchantSubscriptionNotFound => "MERCHANT_SUBSCRIPTION_NOT_FOUND",
        /// A general request error.
        BadRequest => "BAD_REQUEST",
        /// A required parameter is missing.
        MissingRequiredParameter => "MISSING_REQUIRED_PARAMETER",
        /// A value has the wrong type.
        IncorrectType => "INCORRECT_TYPE",
        /// A timestamp is malformed.
        InvalidTime => "INVALID_TIME",
        /// A time range is malformed or reversed.
        InvalidTimeRange => "INVALID_TIME_RANGE",
        /// A value is not allowed.
        InvalidValue => "INVALID_VALUE",
        /// The pagination cursor is invalid or expired.
        InvalidCursor => "INVALID_CURSOR",
        /// A query parameter is not recognized.
        UnknownQueryParameter => "UNKNOWN_QUERY_PARAMETER",
        /// Two parameters cannot be used together.
        ConflictingParameters => "CONFLICTING_PARAMETERS",
        /// The body is not JSON.
        ExpectedJsonBody => "EXPECTED_JSON_BODY",
        /// The sort order is not `ASC` or `DESC`.
        InvalidSortOrder => "INVALID_SORT_ORDER",
        /// A string does not match its required pattern.
        ValueRegexMismatch => "VALUE_REGEX_MISMATCH",
        /// A string is too short.
        ValueTooShort => "VALUE_TOO_SHORT",
        /// A string is too long.
        ValueTooLong => "VALUE_TOO_LONG",
        /// A number is below its minimum.
        ValueTooLow => "VALUE_TOO_LOW",
        /// A number is above its maximum.
        ValueTooHigh => "VALUE_TOO_HIGH",
        /// A value is empty.
        ValueEmpty => "VALUE_EMPTY",
        /// An array has too many elements.
        ArrayLengthTooLong => "ARRAY_LENGTH_TOO_LONG",
        /// An array has too few elements.
        ArrayLengthTooShort => "ARRAY_LENGTH_TOO_SHORT",
        /// An array is empty.
        ArrayEmpty => "ARRAY_EMPTY",
        /// A boolean was expected.
        ExpectedBoolean => "EXPECTED_BOOLEAN",
        /// An integer was expected.
        ExpectedInteger => "EXPECTED_INTEGER",
        /// A float was expected.
        ExpectedFloat => "EXPECTED_FLOAT",
        /// A string was expected.
        ExpectedString => "EXPECTED_STRING",
        /// An object was expected.
        ExpectedObject => "EXPECTED_OBJECT",
        /// An array was expected.
        ExpectedArray => "EXPECTED_ARRAY",
        /// A map was expected.
        ExpectedMap => "EXPECTED_MAP",
        /// Base64-encoded bytes were expected.
        ExpectedBase64EncodedByteArray => "EXPECTED_BASE64_ENCODED_BYTE_ARRAY",
        /// An array element is invalid.
        InvalidArrayValue => "INVALID_ARRAY_VALUE",
        /// An enum token is not allowed.
        InvalidEnumValue => "INVALID_ENUM_VALUE",
        /// The `Content-Type` header is not supported.
        InvalidContentType => "INVALID_CONTENT_TYPE",
        /// A form field is invalid.
        InvalidFormValue => "INVALID_FORM_VALUE",
        /// The customer does not exist.
        CustomerNotFound => "CUSTOMER_NOT_FOUND",
        /// Exactly one payment instrument must be given.
        OneInstrumentExpected => "ONE_INSTRUMENT_EXPECTED",
        /// An update set no fields.
        NoFieldsSet => "NO_FIELDS_SET",
        /// A map has too many entries.
        TooManyMapEntries => "TOO_MANY_MAP_ENTRIES",
        /// A map key is too short.
        MapKeyLengthTooShort => "MAP_KEY_LENGTH_TOO_SHORT",
        /// A map key is too long.
        MapKeyLengthTooLong => "MAP_KEY_LENGTH_TOO_LONG",
        /// The customer needs a name.
        CustomerMissingName => "CUSTOMER_MISSING_NAME",
        /// The customer needs an email address.
        CustomerMissingEmail => "CUSTOMER_MISSING_EMAIL",
        /// A subscription pause is too long.
        InvalidPauseLength => "INVALID_PAUSE_LENGTH",
        /// A date is malformed.
        InvalidDate => "INVALID_DATE",
        /// The country is not supported.
        UnsupportedCountry => "UNSUPPORTED_COUNTRY",
        /// The currency is not supported.
        UnsupportedCurrency => "UNSUPPORTED_CURRENCY",
        /// A Tap to Pay on iPhone PIN token is invalid.
        AppleTtpPinToken => "APPLE_TTP_PIN_TOKEN",
        /// The card has expired.
        CardExpired => "CARD_EXPIRED",
        /// The expiration date is invalid.
        InvalidExpiration => "INVALID_EXPIRATION",
        /// The expiration year is invalid.
        InvalidExpirationYear => "INVALID_EXPIRATION_YEAR",
        /// The expiration date is malformed.
        InvalidExpirationDate => "INVALID_EXPIRATION_DATE",
        /// The card brand is not accepted.
        UnsupportedCardBrand => "UNSUPPORTED_CARD_BRAND",
        /// The entry method is not accepted.
        UnsupportedEntryMethod => "UNSUPPORTED_ENTRY_METHOD",
        /// The encrypted card data is invalid.
        InvalidEncryptedCard => "INVALID_ENCRYPTED_CARD",
        /// The card data is invalid.
        InvalidCard => "INVALID_CARD",
        /// The amount does not match the order total.
        PaymentAmountMismatch => "PAYMENT_AMOUNT_MISMATCH",
        /// The issuer declined without a reason.
        GenericDecline => "GENERIC_DECLINE",
        /// The CVV was rejected.
        CvvFailure => "CVV_FAILURE",
        /// The postal code was rejected.
        AddressVerificationFailure => "ADDRESS_VERIFICATION_FAILURE",
        /// The issuer does not recognize the account.
        InvalidAccount => "INVALID_ACCOUNT",
        /// Currencies in the request do not match.
        CurrencyMismatch => "CURRENCY_MISMATCH",
        /// The account lacks funds.
        InsufficientFunds => "INSUFFICIENT_FUNDS",
        /// The caller lacks a needed permission.
        InsufficientPermissions => "INSUFFICIENT_PERMISSIONS",
        /// The card cannot be used for this purchase.
        CardholderInsufficientPermissions => "CARDHOLDER_INSUFFICIENT_PERMISSIONS",
        /// The location cannot take this payment.
        InvalidLocation => "INVALID_LOCATION",
        /// The card exceeded a transaction limit.
        TransactionLimit => "TRANSACTION_LIMIT",
        /// The issuer asks for voice authorization.
        VoiceFailure => "VOICE_FAILURE",
        /// The card number is invalid.
        PanFailure => "PAN_FAILURE",
        /// The expiration date was rejected.
        ExpirationFailure => "EXPIRATION_FAILURE",
        /// The card cannot be used at this location.
        CardNotSupported => "CARD_NOT_SUPPORTED",
        /// The PIN was wrong.
        InvalidPin => "INVALID_PIN",
        /// A PIN is required.
        MissingPin => "MISSING_PIN",
        /// The account type must be chosen.
        MissingAccountType => "MISSING_ACCOUNT_TYPE",
        /// The postal code is malformed.
        InvalidPostalCode => "INVALID_POSTAL_CODE",
        /// The app fee is too high.
        InvalidFees => "INVALID_FEES",
        /// Keyed-in cards are not accepted.
        ManuallyEnteredPaymentNotSupported => "MANUALLY_ENTERED_PAYMENT_NOT_SUPPORTED",
        /// The seller exceeded a payment limit.
        PaymentLimitExceeded => "PAYMENT_LIMIT_EXCEEDED",
        /// The gift card only covers part of the amount.
        GiftCardAvailableAmount => "GIFT_CARD_AVAILABLE_AMOUNT",
        /// The account cannot be used.
        AccountUnusable => "ACCOUNT_UNUSABLE",
        /// The buyer declined the payment.
        BuyerRefusedPayment => "BUYER_REFUSED_PAYMENT",
        /// The delayed capture window passed.
        DelayedTransactionExpired => "DELAYED_TRANSACTION_EXPIRED",
        /// The delayed payment was already canceled.
        DelayedTransactionCanceled => "DELAYED_TRANSACTION_CANCELED",
        /// The delayed payment was already captured.
        DelayedTransactionCaptured => "DELAYED_TRANSACTION_CAPTURED",
        /// The delayed payment had already failed.
        DelayedTransactionFailed => "DELAYED_TRANSACTION_FAILED",
        /// The card nonce has expired.
        CardTokenExpired => "CARD_TOKEN_EXPIRED",
        /// The card nonce was already used.
        CardTokenUsed => "CARD_TOKEN_USED",
        /// The amount is too large.
        AmountTooHigh => "AMOUNT_TOO_HIGH",
        /// The payment instrument is not accepted.
        UnsupportedInstrumentType => "UNSUPPORTED_INSTRUMENT_TYPE",
        /// The refund exceeds what can be refunded.
        RefundAmountInvalid => "REFUND_AMOUNT_INVALID",
        /// A refund is already in progress.
        RefundAlreadyPending => "REFUND_ALREADY_PENDING",
        /// The payment cannot be refunded.
        PaymentNotRefundable => "PAYMENT_NOT_REFUNDABLE",
        /// The refund was declined.
        RefundDeclined => "REFUND_DECLINED",
        /// The caller may not issue the refund.
        InsufficientPermissionsForRefund => "INSUFFICIENT_PERMISSIONS_FOR_REFUND",
        /// The card data failed validation.
        InvalidCardData => "INVALID_CARD_DATA",
        /// The payment source was already used.
        SourceUsed => "SOURCE_USED",
        /// The payment source has expired.
        SourceExpired => "SOURCE_EXPIRED",
        /// The reward tier cannot be used here.
        UnsupportedLoyaltyRewardTier => "UNSUPPORTED_LOYALTY_REWARD_TIER",
        /// Objects belong to different locations.
        LocationMismatch => "LOCATION_MISMATCH",
        /// The idempotency key was used with a different request.
        IdempotencyKeyReused => "IDEMPOTENCY_KEY_REUSED",
        /// A value was not expected.
        UnexpectedValue => "UNEXPECTED_VALUE",
        /// The endpoint is not available in the sandbox.
        SandboxNotSupported => "SANDBOX_NOT_SUPPORTED",
        /// The email address is malformed.
        InvalidEmailAddress => "INVALID_EMAIL_ADDRESS",
        /// The phone number is malformed.
        InvalidPhoneNumber => "INVALID_PHONE_NUMBER",
        /// The checkout page has expired.
        CheckoutExpired => "CHECKOUT_EXPIRED",
        /// The client certificate is invalid.
        BadCertificate => "BAD_CERTIFICATE",
        /// The `Square-Version` header is malformed.
        InvalidSquareVersionFormat => "INVALID_SQUARE_VERSION_FORMAT",
        /// The API version cannot serve this request.
        ApiVersionIncompatible => "API_VERSION_INCOMPATIBLE",
        /// The card must be present.
        CardPresenceRequired => "CARD_PRESENCE_REQUIRED",
        /// The source type is not accepted.
        UnsupportedSourceType => "UNSUPPORTED_SOURCE_TYPE",
        /// The card does not match the one expected.
        CardMismatch => "CARD_MISMATCH",
        /// The bank link provider failed.
        PlaidError => "PLAID_ERROR",
        /// The buyer must log in to the bank again.
        PlaidErrorItemLoginRequired => "PLAID_ERROR_ITEM_LOGIN_REQUIRED",
        /// The bank link provider is rate limiting.
        PlaidErrorRateLimit => "PLAID_ERROR_RATE_LIMIT",
        /// The card was declined.
        CardDeclined => "CARD_DECLINED",
        /// CVV verification failed.
        VerifyCvvFailure => "VERIFY_CVV_FAILURE",
        /// Address verification failed.
        VerifyAvsFailure => "VERIFY_AVS_FAILURE",
        /// The buyer should call the issuer.
        CardDeclinedCallIssuer => "CARD_DECLINED_CALL_ISSUER",
        /// The issuer requires buyer verification.
        CardDeclinedVerificationRequired => "CARD_DECLINED_VERIFICATION_REQUIRED",
        /// The expiration date is missing or malformed.
        BadExpiration => "BAD_EXPIRATION",
        /// The chip must be inserted.
        ChipInsertionRequired => "CHIP_INSERTION_REQUIRED",
        /// Too many wrong PIN attempts.
        AllowablePinTriesExceeded => "ALLOWABLE_PIN_TRIES_EXCEEDED",
        /// The issuer declined the hold.
        ReservationDeclined => "RESERVATION_DECLINED",
        /// A body field is not recognized.
        UnknownBodyParameter => "UNKNOWN_BODY_PARAMETER",
        /// The resource does not exist.
        NotFound => "NOT_FOUND",
        /// The Apple Pay certificate is not registered.
        ApplePaymentProcessingCertificateHashNotFound => "APPLE_PAYMENT_PROCESSING_CERTIFICATE_HASH_NOT_FOUND",
        /// HTTP 405.
        MethodNotAllowed => "METHOD_NOT_ALLOWED",
        /// HTTP 406.
        NotAcceptable => "NOT_ACCEPTABLE",
        /// HTTP 408.
        RequestTimeout => "REQUEST_TIMEOUT",
        /// HTTP 409.
        Conflict => "CONFLICT",
        /// HTTP 410.
        Gone => "GONE",
        /// HTTP 413.
        RequestEntityTooLarge => "REQUEST_ENTITY_TOO_LARGE",
        /// HTTP 415.
        UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
        /// HTTP 422.
        UnprocessableEntity => "UNPROCESSABLE_ENTITY",
        /// HTTP 429; slow down and retry.
        RateLimited => "RATE_LIMITED",
        /// HTTP 501.
        NotImplemented => "NOT_IMPLEMENTED",
        /// HTTP 502.
        BadGateway => "BAD_GATEWAY",
        /// HTTP 503.
        ServiceUnavailable => "SERVICE_UNAVAILABLE",
        /// A transient failure; retry later.
        TemporaryError => "TEMPORARY_ERROR",
        /// HTTP 504.
        GatewayTimeout => "GATEWAY_TIMEOUT",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use square_core::WireEnum;

    #[test]
    fn test_tokens_are_unique() {
        let mut tokens = ErrorCode::VALUES.to_vec();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), ErrorCode::VALUES.len());
    }

    #[test]
    fn test_transient_categories() {
        assert!(ErrorCategory::RateLimitError.is_transient());
        assert!(!ErrorCategory::InvalidRequestError.is_transient());
    }
}
