use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::inputs::{Assumptions, ResolvedInputs};

/// One year of the discounted forecast.
///
/// Extends the projected line items with the derived cash flows: `fcf` is
/// after-tax EBIT plus D&A less capital expenditure and the change in net
/// working capital; `discounted_fcf` is that flow discounted back by this
/// row's own year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRow {
    /// 1-based offset from the base year
    pub year: u32,
    pub revenue: Decimal,
    pub ebit: Decimal,
    pub da: Decimal,
    pub capex: Decimal,
    pub change_in_nwc: Decimal,
    pub fcf: Decimal,
    pub discounted_fcf: Decimal,
}

/// Full output of a valuation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    /// Discounted forecast, ordered year 1 first
    pub forecast_rows: Vec<ForecastRow>,
    /// Gordon growth value of all cash flows beyond the horizon,
    /// stated as of the final forecast year
    pub terminal_value: Decimal,
    /// Terminal value discounted back to the present
    pub discounted_terminal_value: Decimal,
    /// Sum of discounted cash flows plus the discounted terminal value
    pub enterprise_value: Decimal,
}

/// A ticker's valuation next to the inputs that produced it.
///
/// `inputs` keeps per-field provenance so output can show which figures came
/// from fetched statements and which are fallbacks or manual overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerValuation {
    /// Ticker symbol the fundamentals were fetched for
    pub symbol: String,

    /// Reporting currency of the fetched statements, when stated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Fiscal year end the base figures belong to, when stated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<NaiveDate>,

    /// Resolved base-year figures with provenance
    pub inputs: ResolvedInputs,

    /// Assumptions the valuation ran under
    pub assumptions: Assumptions,

    /// The valuation itself
    pub valuation: ValuationResult,
}
