use log::debug;
use rust_decimal::Decimal;

use fairval_fundamentals::FundamentalsSnapshot;

use crate::inputs::{FieldSource, FinancialInputs, ResolvedField, ResolvedInputs};

/// Resolve one base-year figure.
///
/// A present figure is truncated to whole currency units and flagged
/// `Fetched`; a missing one falls back to `default` and is flagged `Default`.
/// Zero is a present figure and passes through unchanged, only absence
/// triggers the fallback. Malformed provider values were already dropped to
/// `None` during coercion, so they land here as absent.
pub fn parse_or_default(field: &str, value: Option<Decimal>, default: Decimal) -> ResolvedField {
    match value {
        Some(value) => ResolvedField {
            value: value.trunc(),
            source: FieldSource::Fetched,
        },
        None => {
            debug!("No fetched value for {}, using default {}", field, default);
            ResolvedField {
                value: default,
                source: FieldSource::Default,
            }
        }
    }
}

/// Resolve the six base-year figures from fetched statement data.
///
/// Every field falls back independently, so a snapshot carrying only revenue
/// still resolves with the remaining figures taken from `defaults`. Passing
/// no snapshot resolves everything from `defaults`.
pub fn resolve_inputs(
    snapshot: Option<&FundamentalsSnapshot>,
    defaults: &FinancialInputs,
) -> ResolvedInputs {
    ResolvedInputs {
        revenue: parse_or_default(
            "revenue",
            snapshot.and_then(|s| s.total_revenue),
            defaults.revenue,
        ),
        ebitda: parse_or_default("EBITDA", snapshot.and_then(|s| s.ebitda), defaults.ebitda),
        operating_income: parse_or_default(
            "operating income",
            snapshot.and_then(|s| s.ebit),
            defaults.operating_income,
        ),
        capex: parse_or_default("capex", snapshot.and_then(|s| s.capex), defaults.capex),
        nwc_current: parse_or_default(
            "current NWC",
            snapshot.and_then(|s| s.working_capital),
            defaults.nwc_current,
        ),
        nwc_prior: parse_or_default(
            "prior NWC",
            snapshot.and_then(|s| s.working_capital_prior),
            defaults.nwc_prior,
        ),
    }
}
