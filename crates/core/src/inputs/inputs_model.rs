use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants;

/// Base-year figures every forecast line item scales from.
///
/// All amounts are annual totals in the reporting currency of the company
/// being valued. Values may be negative where the statements allow it
/// (capital expenditure is handled as a positive outflow).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialInputs {
    /// Total revenue, most recent fiscal year
    pub revenue: Decimal,
    /// Earnings before interest, taxes, depreciation and amortization
    pub ebitda: Decimal,
    /// Operating income (EBIT)
    pub operating_income: Decimal,
    /// Capital expenditure
    pub capex: Decimal,
    /// Net working capital, most recent fiscal year
    pub nwc_current: Decimal,
    /// Net working capital, prior fiscal year
    pub nwc_prior: Decimal,
}

impl Default for FinancialInputs {
    fn default() -> Self {
        Self {
            revenue: constants::DEFAULT_REVENUE,
            ebitda: constants::DEFAULT_EBITDA,
            operating_income: constants::DEFAULT_OPERATING_INCOME,
            capex: constants::DEFAULT_CAPEX,
            nwc_current: constants::DEFAULT_NWC_CURRENT,
            nwc_prior: constants::DEFAULT_NWC_PRIOR,
        }
    }
}

/// Forecast and discounting assumptions.
///
/// Rates are carried in percent, the way users quote them. The `*_fraction`
/// accessors convert to fractions for arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assumptions {
    /// Annual revenue growth rate, in percent
    pub growth_rate: Decimal,
    /// Corporate tax rate applied to EBIT, in percent
    pub tax_rate: Decimal,
    /// Discount rate (WACC), in percent
    pub discount_rate: Decimal,
    /// Forecast horizon, in years
    pub forecast_years: u32,
    /// Perpetual growth rate for the terminal value, in percent
    pub terminal_growth_rate: Decimal,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            growth_rate: constants::DEFAULT_GROWTH_RATE,
            tax_rate: constants::DEFAULT_TAX_RATE,
            discount_rate: constants::DEFAULT_DISCOUNT_RATE,
            forecast_years: constants::DEFAULT_FORECAST_YEARS,
            terminal_growth_rate: constants::DEFAULT_TERMINAL_GROWTH_RATE,
        }
    }
}

impl Assumptions {
    /// Growth rate as a fraction (8% -> 0.08).
    pub fn growth_fraction(&self) -> Decimal {
        self.growth_rate / dec!(100)
    }

    /// Tax rate as a fraction.
    pub fn tax_fraction(&self) -> Decimal {
        self.tax_rate / dec!(100)
    }

    /// Discount rate as a fraction.
    pub fn discount_fraction(&self) -> Decimal {
        self.discount_rate / dec!(100)
    }

    /// Terminal growth rate as a fraction.
    pub fn terminal_growth_fraction(&self) -> Decimal {
        self.terminal_growth_rate / dec!(100)
    }
}

/// Where a resolved figure came from.
///
/// Stored alongside each base-year figure so output can show which numbers
/// are real statement data and which are placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldSource {
    /// Built-in fallback value
    #[default]
    Default,
    /// Taken from fetched statement data
    Fetched,
    /// Supplied by the user
    Manual,
}

impl FieldSource {
    /// Returns the string representation (SCREAMING_SNAKE_CASE).
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldSource::Default => "DEFAULT",
            FieldSource::Fetched => "FETCHED",
            FieldSource::Manual => "MANUAL",
        }
    }
}

/// A base-year figure together with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedField {
    pub value: Decimal,
    pub source: FieldSource,
}

/// The full set of resolved base-year figures.
///
/// Produced by [`resolve_inputs`](crate::inputs::resolve_inputs); feeds the
/// forecast once provenance is stripped via [`financial_inputs`](Self::financial_inputs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedInputs {
    pub revenue: ResolvedField,
    pub ebitda: ResolvedField,
    pub operating_income: ResolvedField,
    pub capex: ResolvedField,
    pub nwc_current: ResolvedField,
    pub nwc_prior: ResolvedField,
}

impl ResolvedInputs {
    /// Strip provenance, leaving just the figures.
    pub fn financial_inputs(&self) -> FinancialInputs {
        FinancialInputs {
            revenue: self.revenue.value,
            ebitda: self.ebitda.value,
            operating_income: self.operating_income.value,
            capex: self.capex.value,
            nwc_current: self.nwc_current.value,
            nwc_prior: self.nwc_prior.value,
        }
    }

    /// Apply manual per-field overrides on top of the resolved figures.
    pub fn with_overrides(mut self, overrides: &InputOverrides) -> Self {
        apply_override(&mut self.revenue, overrides.revenue);
        apply_override(&mut self.ebitda, overrides.ebitda);
        apply_override(&mut self.operating_income, overrides.operating_income);
        apply_override(&mut self.capex, overrides.capex);
        apply_override(&mut self.nwc_current, overrides.nwc_current);
        apply_override(&mut self.nwc_prior, overrides.nwc_prior);
        self
    }
}

/// Manual replacements for individual base-year figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InputOverrides {
    pub revenue: Option<Decimal>,
    pub ebitda: Option<Decimal>,
    pub operating_income: Option<Decimal>,
    pub capex: Option<Decimal>,
    pub nwc_current: Option<Decimal>,
    pub nwc_prior: Option<Decimal>,
}

fn apply_override(field: &mut ResolvedField, value: Option<Decimal>) {
    if let Some(value) = value {
        *field = ResolvedField {
            value,
            source: FieldSource::Manual,
        };
    }
}
