//! Fairval Core - DCF valuation engine.
//!
//! This crate contains the valuation pipeline: resolving base-year figures
//! (fetched, defaulted, or manually overridden), projecting them across a
//! forecast horizon, and discounting the resulting cash flows into an
//! enterprise value. Fetching itself lives in the `fairval-fundamentals`
//! crate and is reached through the provider trait.

pub mod constants;
pub mod errors;
pub mod forecast;
pub mod inputs;
pub mod valuation;

// Re-export common types from the inputs and valuation modules
pub use inputs::*;
pub use valuation::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
pub use errors::ValidationError;
