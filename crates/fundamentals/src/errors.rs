//! Error types for fundamentals fetching.

use thiserror::Error;

/// Errors that can occur while fetching company fundamentals.
///
/// None of these are retried automatically; retry and timeout policy live
/// inside each provider, and callers surface the message to the user.
#[derive(Error, Debug)]
pub enum FundamentalsError {
    /// The provider does not know the requested symbol.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The symbol exists but the provider returned no usable statement
    /// figures at all (every requested series was empty or null).
    #[error("No fundamentals data for symbol: {0}")]
    NoFundamentalsData(String),

    /// A provider-specific failure (authentication, unexpected payload,
    /// upstream outage).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// Provider that raised the error
        provider: String,
        /// Message as reported by the provider
        message: String,
    },

    /// The provider answered but the response failed a structural check.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// Transport-level failure before any usable response arrived.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
