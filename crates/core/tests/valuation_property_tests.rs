//! Property-based integration tests for the valuation pipeline.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use fairval_core::forecast::project_forecast;
use fairval_core::{calculate_valuation, Assumptions, Error, FinancialInputs, ValidationError};

// =============================================================================
// Generators
// =============================================================================

const MAX_FIGURE: i64 = 1_000_000_000_000;

/// Generates base-year figures with a nonzero revenue.
fn arb_inputs() -> impl Strategy<Value = FinancialInputs> {
    (
        1_000i64..=MAX_FIGURE,
        -MAX_FIGURE..=MAX_FIGURE,
        -MAX_FIGURE..=MAX_FIGURE,
        -MAX_FIGURE..=MAX_FIGURE,
        -MAX_FIGURE..=MAX_FIGURE,
        -MAX_FIGURE..=MAX_FIGURE,
    )
        .prop_map(
            |(revenue, ebitda, operating_income, capex, nwc_current, nwc_prior)| FinancialInputs {
                revenue: Decimal::from(revenue),
                ebitda: Decimal::from(ebitda),
                operating_income: Decimal::from(operating_income),
                capex: Decimal::from(capex),
                nwc_current: Decimal::from(nwc_current),
                nwc_prior: Decimal::from(nwc_prior),
            },
        )
}

/// Generates assumptions inside the supported ranges, with distinct discount
/// and terminal growth rates so the Gordon denominator is never zero.
/// Terminal growth moves in 0.5% steps like the original parameter grid.
fn arb_assumptions() -> impl Strategy<Value = Assumptions> {
    (0u32..=50, 0u32..=100, 0u32..=20, 1u32..=10, 0u32..=10)
        .prop_map(|(growth, tax, discount, years, tg_halves)| Assumptions {
            growth_rate: Decimal::from(growth),
            tax_rate: Decimal::from(tax),
            discount_rate: Decimal::from(discount),
            forecast_years: years,
            terminal_growth_rate: Decimal::new(tg_halves as i64 * 5, 1),
        })
        .prop_filter("discount and terminal growth rates must differ", |a| {
            a.discount_rate != a.terminal_growth_rate
        })
}

/// Absolute-plus-relative closeness for decimal comparisons.
fn close(actual: Decimal, expected: Decimal) -> bool {
    let tolerance = expected.abs() * dec!(0.000000000001) + dec!(0.01);
    (actual - expected).abs() <= tolerance
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// **Feature: dcf-valuation, Property 1: Horizon determines row count**
    ///
    /// Any valid input set produces exactly `forecast_years` rows, ordered
    /// year 1 first.
    #[test]
    fn prop_row_count_matches_horizon(
        inputs in arb_inputs(),
        assumptions in arb_assumptions(),
    ) {
        let result = calculate_valuation(&inputs, &assumptions).unwrap();

        prop_assert_eq!(
            result.forecast_rows.len(),
            assumptions.forecast_years as usize,
            "Row count should match the forecast horizon"
        );
        for (index, row) in result.forecast_rows.iter().enumerate() {
            prop_assert_eq!(row.year as usize, index + 1, "Rows must be ordered by year");
        }
    }

    /// **Feature: dcf-valuation, Property 2: All line items share one scaling factor**
    ///
    /// Each projected year scales every line item by the same compounded
    /// growth factor, and that factor equals scaled revenue over base revenue.
    #[test]
    fn prop_line_items_share_scaling_factor(
        inputs in arb_inputs(),
        assumptions in arb_assumptions(),
    ) {
        let years = project_forecast(&inputs, &assumptions).unwrap();

        let da = inputs.ebitda - inputs.operating_income;
        let change_in_nwc = inputs.nwc_current - inputs.nwc_prior;

        for year in &years {
            let factor = year.scaling_factor;
            prop_assert!(
                close(year.revenue, inputs.revenue * factor),
                "revenue should scale by the factor"
            );
            prop_assert!(
                close(year.ebit, inputs.operating_income * factor),
                "ebit should scale by the factor"
            );
            prop_assert!(
                close(year.da, da * factor),
                "da should scale by the factor"
            );
            prop_assert!(
                close(year.capex, inputs.capex * factor),
                "capex should scale by the factor"
            );
            prop_assert!(
                close(year.change_in_nwc, change_in_nwc * factor),
                "change in nwc should scale by the factor"
            );
        }
    }

    /// **Feature: dcf-valuation, Property 3: Free cash flow matches its definition**
    ///
    /// For every row, fcf equals after-tax EBIT plus D&A minus capex minus
    /// the change in net working capital, and the discounted figure divides
    /// by the compounded discount base for that row's own year.
    #[test]
    fn prop_cash_flows_match_definitions(
        inputs in arb_inputs(),
        assumptions in arb_assumptions(),
    ) {
        let result = calculate_valuation(&inputs, &assumptions).unwrap();

        let after_tax = Decimal::ONE - assumptions.tax_rate / dec!(100);
        let discount_base = Decimal::ONE + assumptions.discount_rate / dec!(100);

        let mut compounded = Decimal::ONE;
        for row in &result.forecast_rows {
            compounded *= discount_base;
            let expected_fcf = row.ebit * after_tax + row.da - row.capex - row.change_in_nwc;
            prop_assert!(
                close(row.fcf, expected_fcf),
                "fcf should match its definition"
            );
            prop_assert!(
                close(row.discounted_fcf, row.fcf / compounded),
                "discounting should use the row's own year"
            );
        }
    }

    /// **Feature: dcf-valuation, Property 4: Enterprise value is the sum of its parts**
    #[test]
    fn prop_enterprise_value_is_sum_of_parts(
        inputs in arb_inputs(),
        assumptions in arb_assumptions(),
    ) {
        let result = calculate_valuation(&inputs, &assumptions).unwrap();

        let sum_discounted: Decimal = result
            .forecast_rows
            .iter()
            .map(|row| row.discounted_fcf)
            .sum();

        prop_assert_eq!(
            result.enterprise_value,
            sum_discounted + result.discounted_terminal_value,
            "Enterprise value should be discounted flows plus discounted terminal value"
        );
    }

    /// **Feature: dcf-valuation, Property 5: Valuation is deterministic**
    ///
    /// Running the pipeline twice over the same inputs yields identical
    /// results, field for field.
    #[test]
    fn prop_valuation_is_deterministic(
        inputs in arb_inputs(),
        assumptions in arb_assumptions(),
    ) {
        let first = calculate_valuation(&inputs, &assumptions).unwrap();
        let second = calculate_valuation(&inputs, &assumptions).unwrap();

        prop_assert_eq!(first, second);
    }

    /// **Feature: dcf-valuation, Property 6: Zero revenue is always rejected**
    ///
    /// No assumption set rescues a zero revenue; the pipeline aborts before
    /// producing any row.
    #[test]
    fn prop_zero_revenue_always_rejected(
        inputs in arb_inputs(),
        assumptions in arb_assumptions(),
    ) {
        let inputs = FinancialInputs {
            revenue: Decimal::ZERO,
            ..inputs
        };
        let err = calculate_valuation(&inputs, &assumptions).unwrap_err();

        prop_assert!(matches!(err, Error::Validation(ValidationError::ZeroRevenue)));
    }

    /// **Feature: dcf-valuation, Property 7: Equal rates are always rejected**
    ///
    /// Whenever the discount rate equals the terminal growth rate the
    /// valuation aborts with the degenerate terminal value error.
    #[test]
    fn prop_equal_rates_always_rejected(
        inputs in arb_inputs(),
        assumptions in arb_assumptions(),
        rate_halves in 0u32..=10,
    ) {
        let rate = Decimal::new(rate_halves as i64 * 5, 1);
        let assumptions = Assumptions {
            discount_rate: rate,
            terminal_growth_rate: rate,
            ..assumptions
        };
        let err = calculate_valuation(&inputs, &assumptions).unwrap_err();

        prop_assert!(
            matches!(
                err,
                Error::Validation(ValidationError::DegenerateTerminalValue { .. })
            ),
            "expected DegenerateTerminalValue, got {:?}",
            err
        );
    }

    /// **Feature: dcf-valuation, Property 8: Terminal value sign follows the flow**
    ///
    /// With a positive final-year cash flow and discount above terminal
    /// growth, the terminal value is positive.
    #[test]
    fn prop_terminal_value_sign_follows_flow(
        inputs in arb_inputs(),
        assumptions in arb_assumptions(),
    ) {
        let result = calculate_valuation(&inputs, &assumptions).unwrap();

        let last_fcf = result.forecast_rows.last().unwrap().fcf;
        if last_fcf > Decimal::ZERO && assumptions.discount_rate > assumptions.terminal_growth_rate {
            prop_assert!(
                result.terminal_value > Decimal::ZERO,
                "terminal value should be positive, got {}",
                result.terminal_value
            );
        }
    }
}
