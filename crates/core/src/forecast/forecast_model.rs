use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One forecast year of scaled line items, before cash flows are derived.
///
/// All line items share the same scaling factor: the whole projection is
/// driven by revenue growth alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedYear {
    /// 1-based offset from the base year
    pub year: u32,
    /// Revenue compounded at the growth rate
    pub revenue: Decimal,
    /// Ratio of this year's revenue to base revenue
    pub scaling_factor: Decimal,
    /// Operating income (EBIT), scaled
    pub ebit: Decimal,
    /// Depreciation and amortization, scaled
    pub da: Decimal,
    /// Capital expenditure, scaled
    pub capex: Decimal,
    /// Change in net working capital, scaled
    pub change_in_nwc: Decimal,
}
