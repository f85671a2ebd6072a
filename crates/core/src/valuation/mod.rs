//! Discounted cash flow valuation - models, calculator, and service.

mod valuation_calculator;
mod valuation_model;
mod valuation_service;

pub use valuation_calculator::calculate_valuation;
pub use valuation_model::{ForecastRow, TickerValuation, ValuationResult};
pub use valuation_service::{ValuationService, ValuationServiceTrait};
