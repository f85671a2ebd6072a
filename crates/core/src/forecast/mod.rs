//! Forecast engine - per-year line-item projections.

mod forecast_calculator;
mod forecast_model;

pub use forecast_calculator::project_forecast;
pub use forecast_model::ProjectedYear;
