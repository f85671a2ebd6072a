//! Core error types for the valuation engine.
//!
//! Provider-specific errors (HTTP, response shape, symbol lookup) are defined
//! in the fundamentals crate and wrapped here.

use rust_decimal::Decimal;
use thiserror::Error;

use fairval_fundamentals::FundamentalsError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for valuation operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to load fundamentals: {0}")]
    Fetch(#[from] FundamentalsError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Validation errors for valuation inputs and assumptions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Every forecast line item scales off revenue, so a zero base leaves
    /// nothing to project.
    #[error("Revenue is 0. Enter a nonzero revenue manually or fetch data")]
    ZeroRevenue,

    /// The Gordon growth denominator is zero when the two rates coincide.
    #[error("Discount rate ({discount_rate}%) must differ from terminal growth rate ({terminal_growth_rate}%) to calculate terminal value")]
    DegenerateTerminalValue {
        discount_rate: Decimal,
        terminal_growth_rate: Decimal,
    },

    #[error("Forecast horizon must cover at least one year")]
    EmptyHorizon,
}
