//! Fundamentals provider trait definitions.

use async_trait::async_trait;

use crate::errors::FundamentalsError;
use crate::models::FundamentalsSnapshot;

/// Trait for company fundamentals data sources.
///
/// Implement this trait to add support for a new statement-data source.
/// A provider owns its own transport, authentication, and timeout policy;
/// callers only see the snapshot or a typed error.
#[async_trait]
pub trait FundamentalsProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO". Used for logging and as
    /// the `source` tag on returned snapshots.
    fn id(&self) -> &'static str;

    /// Fetch the most recent annual fundamentals for a ticker symbol.
    ///
    /// Missing line items are `None` on the snapshot rather than errors;
    /// [`FundamentalsError::NoFundamentalsData`] is reserved for the case
    /// where nothing at all came back for the symbol.
    async fn get_fundamentals(
        &self,
        symbol: &str,
    ) -> Result<FundamentalsSnapshot, FundamentalsError>;
}
