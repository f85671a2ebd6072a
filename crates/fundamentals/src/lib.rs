//! Fairval Fundamentals Crate
//!
//! This crate fetches company statement fundamentals for the fairval
//! valuation engine. It is provider-agnostic: the core crate consumes the
//! [`FundamentalsProvider`] trait and never knows which data source answered.
//!
//! # Overview
//!
//! A provider resolves a ticker symbol to a [`FundamentalsSnapshot`]: the
//! most recent annual revenue, EBITDA, EBIT, capital expenditure, and the
//! current and prior working-capital levels. Every figure is optional:
//! statements are frequently incomplete, and missing keys are a per-field
//! concern for the caller, not a fetch failure.
//!
//! ```text
//! +------------------+     +------------------------+
//! |  Ticker symbol   | --> | FundamentalsProvider   |  (Yahoo, ...)
//! +------------------+     +------------------------+
//!                                      |
//!                                      v
//!                          +------------------------+
//!                          | FundamentalsSnapshot   |  (optional figures)
//!                          +------------------------+
//! ```
//!
//! # Core Types
//!
//! - [`FundamentalsSnapshot`] - Statement figures with per-field optionality
//! - [`FundamentalsProvider`] - Trait implemented by each data source
//! - [`FundamentalsError`] - Fetch/parse error taxonomy

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::FundamentalsError;
pub use models::FundamentalsSnapshot;
pub use provider::{FundamentalsProvider, YahooFundamentalsProvider};
