//! Yahoo Finance fundamentals-timeseries API response models.
//!
//! The timeseries endpoint returns one result object per requested metric,
//! each carrying an array with one entry per fiscal year (oldest first) and
//! nulls where Yahoo pads years it has no statement for.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Main response wrapper for the fundamentals-timeseries API
#[derive(Debug, Deserialize)]
pub struct YahooTimeseriesResponse {
    pub timeseries: YahooTimeseries,
}

/// Timeseries container
#[derive(Debug, Deserialize)]
pub struct YahooTimeseries {
    #[serde(default)]
    pub result: Vec<YahooTimeseriesResult>,
    /// Populated instead of `result` when the whole request failed
    pub error: Option<YahooTimeseriesError>,
}

/// Error object returned for failed timeseries requests
#[derive(Debug, Deserialize)]
pub struct YahooTimeseriesError {
    pub code: Option<String>,
    pub description: Option<String>,
}

/// One metric series from the timeseries API.
///
/// Exactly one of the series fields is populated, matching `meta.type`;
/// the rest deserialize as `None`. The `timestamp` array that accompanies
/// each result duplicates the per-entry dates and is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooTimeseriesResult {
    pub meta: YahooTimeseriesMeta,
    pub annual_total_revenue: Option<Vec<Option<YahooTimeseriesDatum>>>,
    #[serde(rename = "annualEBITDA")]
    pub annual_ebitda: Option<Vec<Option<YahooTimeseriesDatum>>>,
    #[serde(rename = "annualEBIT")]
    pub annual_ebit: Option<Vec<Option<YahooTimeseriesDatum>>>,
    pub annual_capital_expenditure: Option<Vec<Option<YahooTimeseriesDatum>>>,
    pub annual_working_capital: Option<Vec<Option<YahooTimeseriesDatum>>>,
}

/// Metadata identifying a series
#[derive(Debug, Deserialize)]
pub struct YahooTimeseriesMeta {
    #[serde(default)]
    pub symbol: Vec<String>,
    #[serde(rename = "type", default)]
    pub series_type: Vec<String>,
}

/// One fiscal-year observation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooTimeseriesDatum {
    pub as_of_date: Option<String>,
    pub period_type: Option<String>,
    pub currency_code: Option<String>,
    pub reported_value: Option<YahooReportedValue>,
}

/// Reported value with raw and formatted representations
#[derive(Debug, Deserialize, Clone)]
pub struct YahooReportedValue {
    pub raw: Option<f64>,
    // Note: fmt field exists but we only use raw values
}

impl YahooTimeseriesResult {
    /// The metric name this result carries, from `meta.type`.
    pub fn series_type(&self) -> Option<&str> {
        self.meta.series_type.first().map(String::as_str)
    }

    /// The populated series array, whichever metric field it arrived under.
    pub fn entries(&self) -> Option<&[Option<YahooTimeseriesDatum>]> {
        self.annual_total_revenue
            .as_deref()
            .or(self.annual_ebitda.as_deref())
            .or(self.annual_ebit.as_deref())
            .or(self.annual_capital_expenditure.as_deref())
            .or(self.annual_working_capital.as_deref())
    }

    /// Most recent non-null observation (entries are ordered oldest first).
    pub fn latest(&self) -> Option<&YahooTimeseriesDatum> {
        self.entries()?.iter().rev().flatten().next()
    }

    /// The observation for the fiscal year before [`latest`](Self::latest).
    pub fn previous(&self) -> Option<&YahooTimeseriesDatum> {
        self.entries()?.iter().rev().flatten().nth(1)
    }
}

impl YahooTimeseriesDatum {
    /// Reported figure coerced to `Decimal`.
    ///
    /// NaN and infinite raw values are dropped, so a malformed figure is
    /// indistinguishable from a missing one, which is how callers treat it.
    pub fn value(&self) -> Option<Decimal> {
        self.reported_value
            .as_ref()
            .and_then(|v| v.raw)
            .and_then(Decimal::from_f64_retain)
    }

    /// Fiscal period end date, when parseable.
    pub fn as_of(&self) -> Option<NaiveDate> {
        self.as_of_date
            .as_deref()
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
    }
}
