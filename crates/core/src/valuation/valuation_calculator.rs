use log::debug;
use rust_decimal::{Decimal, MathematicalOps};

use crate::errors::{Result, ValidationError};
use crate::forecast::project_forecast;
use crate::inputs::{Assumptions, FinancialInputs};
use crate::valuation::valuation_model::{ForecastRow, ValuationResult};

/// Run the full discounted cash flow pipeline for one set of inputs.
///
/// Projects the forecast, derives free cash flow per year, discounts each
/// year by its own exponent, and closes with a Gordon growth terminal value
/// discounted from the end of the horizon. The enterprise value is the sum
/// of the discounted flows plus the discounted terminal value.
///
/// Guards run before any computation, in input order: zero revenue, equal
/// discount and terminal growth rates (the Gordon denominator would be
/// zero), then an empty horizon. On failure nothing is produced.
pub fn calculate_valuation(
    inputs: &FinancialInputs,
    assumptions: &Assumptions,
) -> Result<ValuationResult> {
    if inputs.revenue.is_zero() {
        return Err(ValidationError::ZeroRevenue.into());
    }

    let denominator = assumptions.discount_fraction() - assumptions.terminal_growth_fraction();
    if denominator.is_zero() {
        return Err(ValidationError::DegenerateTerminalValue {
            discount_rate: assumptions.discount_rate,
            terminal_growth_rate: assumptions.terminal_growth_rate,
        }
        .into());
    }

    if assumptions.forecast_years == 0 {
        return Err(ValidationError::EmptyHorizon.into());
    }

    let projections = project_forecast(inputs, assumptions)?;

    let after_tax = Decimal::ONE - assumptions.tax_fraction();
    let discount_base = Decimal::ONE + assumptions.discount_fraction();

    let mut forecast_rows = Vec::with_capacity(projections.len());
    let mut sum_discounted_fcf = Decimal::ZERO;
    let mut last_fcf = Decimal::ZERO;

    for projection in &projections {
        let fcf =
            projection.ebit * after_tax + projection.da - projection.capex - projection.change_in_nwc;
        // Each year discounts by its own exponent
        let discounted_fcf = fcf / discount_base.powi(projection.year as i64);

        sum_discounted_fcf += discounted_fcf;
        last_fcf = fcf;

        forecast_rows.push(ForecastRow {
            year: projection.year,
            revenue: projection.revenue,
            ebit: projection.ebit,
            da: projection.da,
            capex: projection.capex,
            change_in_nwc: projection.change_in_nwc,
            fcf,
            discounted_fcf,
        });
    }

    let terminal_value =
        last_fcf * (Decimal::ONE + assumptions.terminal_growth_fraction()) / denominator;
    let discounted_terminal_value =
        terminal_value / discount_base.powi(assumptions.forecast_years as i64);
    let enterprise_value = sum_discounted_fcf + discounted_terminal_value;

    debug!(
        "Valuation over {} years: terminal value {}, enterprise value {}",
        assumptions.forecast_years, terminal_value, enterprise_value
    );

    Ok(ValuationResult {
        forecast_rows,
        terminal_value,
        discounted_terminal_value,
        enterprise_value,
    })
}
