//! Common constants for environments and validation error codes

/// Gateway environment hosts
pub mod environments {
    /// Production API host
    pub const PRODUCTION_HOST: &str = "https://api.braintreegateway.com";
    /// Sandbox API host
    pub const SANDBOX_HOST: &str = "https://api.sandbox.braintreegateway.com";
    /// Local development host
    pub const DEVELOPMENT_HOST: &str = "http://localhost:3000";
}

/// Validation error codes returned by the gateway
///
/// The taxonomy is owned by the remote service; the constants here cover
/// the codes this library's own tests exercise. Codes are stable strings,
/// not integers, and should be compared verbatim.
pub mod codes {
    /// PayPal account validation codes
    pub mod paypal_account {
        /// The payment method token is already attached to another account
        pub const TOKEN_IS_IN_USE: &str = "92906";
        /// A consent code or access token is required to vault the account
        pub const CONSENT_CODE_OR_ACCESS_TOKEN_IS_REQUIRED: &str = "82901";
        /// The account cannot be updated through a payment method nonce
        pub const CANNOT_UPDATE_PAYPAL_ACCOUNT_USING_PAYMENT_METHOD_NONCE: &str = "92914";
    }

    /// Credit card validation codes
    pub mod credit_card {
        /// Card number is required
        pub const NUMBER_IS_REQUIRED: &str = "81714";
        /// Card number failed validation
        pub const NUMBER_IS_INVALID: &str = "81715";
        /// Expiration date is required
        pub const EXPIRATION_DATE_IS_REQUIRED: &str = "81709";
        /// Expiration date failed validation
        pub const EXPIRATION_DATE_IS_INVALID: &str = "81710";
        /// CVV failed validation
        pub const CVV_IS_INVALID: &str = "81707";
    }

    /// Customer validation codes
    pub mod customer {
        /// Requested customer id is already taken
        pub const ID_IS_IN_USE: &str = "91609";
        /// Customer id format is invalid
        pub const ID_IS_INVALID: &str = "91610";
    }

    /// Transaction validation codes
    pub mod transaction {
        /// Amount is required
        pub const AMOUNT_IS_REQUIRED: &str = "81501";
        /// Amount format is invalid
        pub const AMOUNT_IS_INVALID: &str = "81503";
    }

    /// OAuth error identifiers (non-numeric, defined by RFC 6749)
    pub mod oauth {
        /// The authorization code was not found or has expired
        pub const INVALID_GRANT: &str = "invalid_grant";
        /// The client credentials were rejected
        pub const INVALID_CLIENT: &str = "invalid_client";
    }
}
