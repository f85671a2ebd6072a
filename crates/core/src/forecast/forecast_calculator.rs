use log::debug;
use rust_decimal::{Decimal, MathematicalOps};

use crate::errors::{Result, ValidationError};
use crate::forecast::ProjectedYear;
use crate::inputs::{Assumptions, FinancialInputs};

/// Project the base-year line items across the forecast horizon.
///
/// Revenue compounds at the growth rate; every other line item scales in
/// proportion to revenue. Depreciation and amortization (ebitda minus
/// operating income) and the change in net working capital (current minus
/// prior) are derived once from the base year and scaled like the rest.
///
/// Returns one row per forecast year, ordered year 1 first. A zero base
/// revenue is rejected before any row is produced, since the scaling factor
/// would be undefined.
pub fn project_forecast(
    inputs: &FinancialInputs,
    assumptions: &Assumptions,
) -> Result<Vec<ProjectedYear>> {
    if inputs.revenue.is_zero() {
        return Err(ValidationError::ZeroRevenue.into());
    }

    let da = inputs.ebitda - inputs.operating_income;
    let change_in_nwc = inputs.nwc_current - inputs.nwc_prior;
    let growth = Decimal::ONE + assumptions.growth_fraction();

    let mut years = Vec::with_capacity(assumptions.forecast_years as usize);
    for year in 1..=assumptions.forecast_years {
        let revenue = inputs.revenue * growth.powi(year as i64);
        let scaling_factor = revenue / inputs.revenue;

        years.push(ProjectedYear {
            year,
            revenue,
            scaling_factor,
            ebit: inputs.operating_income * scaling_factor,
            da: da * scaling_factor,
            capex: inputs.capex * scaling_factor,
            change_in_nwc: change_in_nwc * scaling_factor,
        });
    }

    debug!(
        "Projected {} years at {}% growth from revenue {}",
        years.len(),
        assumptions.growth_rate,
        inputs.revenue
    );

    Ok(years)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use rust_decimal_macros::dec;

    fn scenario_inputs() -> FinancialInputs {
        FinancialInputs {
            revenue: dec!(100_000_000),
            ebitda: dec!(30_000_000),
            operating_income: dec!(20_000_000),
            capex: dec!(5_000_000),
            nwc_current: dec!(15_000_000),
            nwc_prior: dec!(14_000_000),
        }
    }

    fn scenario_assumptions() -> Assumptions {
        Assumptions {
            growth_rate: dec!(8),
            tax_rate: dec!(25),
            discount_rate: dec!(10),
            forecast_years: 5,
            terminal_growth_rate: dec!(2.0),
        }
    }

    #[test]
    fn test_first_year_line_items() {
        let years = project_forecast(&scenario_inputs(), &scenario_assumptions()).unwrap();

        let first = &years[0];
        assert_eq!(first.year, 1);
        assert_eq!(first.revenue, dec!(108_000_000));
        assert_eq!(first.scaling_factor, dec!(1.08));
        assert_eq!(first.ebit, dec!(21_600_000));
        assert_eq!(first.da, dec!(10_800_000));
        assert_eq!(first.capex, dec!(5_400_000));
        assert_eq!(first.change_in_nwc, dec!(1_080_000));
    }

    #[test]
    fn test_growth_compounds_per_year() {
        let years = project_forecast(&scenario_inputs(), &scenario_assumptions()).unwrap();

        assert_eq!(years[1].year, 2);
        assert_eq!(years[1].revenue, dec!(116_640_000));
        assert_eq!(years[4].revenue, dec!(146_932_807.68));
    }

    #[test]
    fn test_row_count_matches_horizon() {
        for forecast_years in [1, 5, 10] {
            let assumptions = Assumptions {
                forecast_years,
                ..scenario_assumptions()
            };
            let years = project_forecast(&scenario_inputs(), &assumptions).unwrap();
            assert_eq!(years.len(), forecast_years as usize);
        }
    }

    #[test]
    fn test_zero_growth_keeps_base_year_flat() {
        let assumptions = Assumptions {
            growth_rate: dec!(0),
            ..scenario_assumptions()
        };
        let years = project_forecast(&scenario_inputs(), &assumptions).unwrap();

        assert_eq!(years[4].revenue, dec!(100_000_000));
        assert_eq!(years[4].scaling_factor, dec!(1));
        assert_eq!(years[4].ebit, dec!(20_000_000));
    }

    #[test]
    fn test_zero_revenue_rejected_before_any_row() {
        let inputs = FinancialInputs {
            revenue: dec!(0),
            ..scenario_inputs()
        };
        let err = project_forecast(&inputs, &scenario_assumptions()).unwrap_err();

        assert!(matches!(
            err,
            Error::Validation(ValidationError::ZeroRevenue)
        ));
    }

    #[test]
    fn test_zero_year_horizon_produces_no_rows() {
        let assumptions = Assumptions {
            forecast_years: 0,
            ..scenario_assumptions()
        };
        let years = project_forecast(&scenario_inputs(), &assumptions).unwrap();
        assert!(years.is_empty());
    }
}
