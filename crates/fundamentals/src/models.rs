//! Statement fundamentals domain model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The most recent annual statement figures for one company.
///
/// Every figure is optional: providers routinely omit line items, and each
/// missing or malformed key is handled independently by the consumer (the
/// input resolver substitutes a default per field). Amounts are reported in
/// `currency` as published, without unit scaling.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FundamentalsSnapshot {
    /// Ticker symbol the snapshot was fetched for
    pub symbol: String,

    /// Reporting currency, when the provider states one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// End date of the most recent fiscal period seen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<NaiveDate>,

    /// Total revenue, most recent fiscal year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_revenue: Option<Decimal>,

    /// EBITDA, most recent fiscal year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebitda: Option<Decimal>,

    /// EBIT (operating income), most recent fiscal year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebit: Option<Decimal>,

    /// Capital expenditure, most recent fiscal year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capex: Option<Decimal>,

    /// Working capital at the end of the most recent fiscal year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_capital: Option<Decimal>,

    /// Working capital at the end of the prior fiscal year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_capital_prior: Option<Decimal>,

    /// Source of the snapshot (YAHOO, etc.)
    pub source: String,
}

impl FundamentalsSnapshot {
    /// Create a snapshot with no figures, to be filled per series.
    pub fn empty(symbol: &str, source: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            currency: None,
            as_of: None,
            total_revenue: None,
            ebitda: None,
            ebit: None,
            capex: None,
            working_capital: None,
            working_capital_prior: None,
            source: source.to_string(),
        }
    }

    /// True when no statement figure was populated at all.
    pub fn is_empty(&self) -> bool {
        self.total_revenue.is_none()
            && self.ebitda.is_none()
            && self.ebit.is_none()
            && self.capex.is_none()
            && self.working_capital.is_none()
            && self.working_capital_prior.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_snapshot() {
        let snapshot = FundamentalsSnapshot::empty("AAPL", "YAHOO");
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.symbol, "AAPL");
        assert_eq!(snapshot.source, "YAHOO");
    }

    #[test]
    fn test_single_figure_is_not_empty() {
        let mut snapshot = FundamentalsSnapshot::empty("AAPL", "YAHOO");
        snapshot.capex = Some(dec!(10_959_000_000));
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn test_serializes_with_camel_case_field_names() {
        let mut snapshot = FundamentalsSnapshot::empty("AAPL", "YAHOO");
        snapshot.total_revenue = Some(dec!(383_285_000_000));
        snapshot.working_capital_prior = Some(dec!(-1_742_000_000));

        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json.get("totalRevenue").is_some());
        assert!(json.get("workingCapitalPrior").is_some());
        // Unpopulated figures are omitted entirely
        assert!(json.get("ebitda").is_none());
    }
}
