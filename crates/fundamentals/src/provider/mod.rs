//! Fundamentals providers.
//!
//! Each data source lives in its own submodule and implements
//! [`FundamentalsProvider`].

mod traits;
pub mod yahoo;

pub use traits::FundamentalsProvider;
pub use yahoo::YahooFundamentalsProvider;
