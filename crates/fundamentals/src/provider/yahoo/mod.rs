//! Yahoo Finance fundamentals provider.
//!
//! This provider uses the Yahoo Finance fundamentals-timeseries API to fetch
//! annual statement figures for:
//! - Income statement (total revenue, EBITDA, EBIT)
//! - Cash flow statement (capital expenditure)
//! - Balance sheet (working capital, current and prior year)
//!
//! The endpoint requires the same crumb/cookie authentication as the other
//! authenticated Yahoo endpoints.

mod models;

use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use lazy_static::lazy_static;
use log::{debug, warn};
use reqwest::header;
use urlencoding::encode;

use crate::errors::FundamentalsError;
use crate::models::FundamentalsSnapshot;
use crate::provider::FundamentalsProvider;

use models::{YahooTimeseriesResponse, YahooTimeseriesResult};

/// Annual series requested from the timeseries endpoint, comma-joined as the
/// API expects them.
const ANNUAL_SERIES: &str =
    "annualTotalRevenue,annualEBITDA,annualEBIT,annualCapitalExpenditure,annualWorkingCapital";

/// How far back to request statements. Two fiscal years would suffice, but a
/// wider window tolerates late filers and padded years.
const LOOKBACK_YEARS: i64 = 5;

const SECONDS_PER_YEAR: i64 = 365 * 24 * 60 * 60;

// ============================================================================
// Crumb/Cookie Authentication
// ============================================================================

/// Cookie/crumb pair Yahoo hands out per session
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

lazy_static! {
    /// Process-wide crumb cache, shared across provider instances
    static ref YAHOO_CRUMB: RwLock<Option<CrumbData>> = RwLock::default();
}

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Yahoo Finance fundamentals provider.
///
/// Fetches the most recent annual statement figures for a ticker and folds
/// them into a single [`FundamentalsSnapshot`].
pub struct YahooFundamentalsProvider {
    client: reqwest::Client,
}

impl YahooFundamentalsProvider {
    /// Create a new Yahoo fundamentals provider.
    pub fn new() -> Result<Self, FundamentalsError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| FundamentalsError::ProviderError {
                provider: "YAHOO".to_string(),
                message: format!("Failed to initialize HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }

    // ========================================================================
    // Crumb/Cookie Authentication
    // ========================================================================

    /// Return the cached crumb, fetching a fresh one on first use.
    async fn ensure_crumb(&self) -> Result<CrumbData, FundamentalsError> {
        {
            let guard = YAHOO_CRUMB.read().unwrap();
            if let Some(crumb) = guard.as_ref() {
                return Ok(crumb.clone());
            }
        }

        self.fetch_crumb().await
    }

    /// Fetch a cookie/crumb pair and cache it for later requests.
    async fn fetch_crumb(&self) -> Result<CrumbData, FundamentalsError> {
        // Cookie first; the crumb is tied to it
        let response = self
            .client
            .get("https://fc.yahoo.com")
            .send()
            .await
            .map_err(|e| FundamentalsError::ProviderError {
                provider: "YAHOO".to_string(),
                message: format!("Failed to get cookie: {}", e),
            })?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| FundamentalsError::ProviderError {
                provider: "YAHOO".to_string(),
                message: "Failed to parse Yahoo cookie".to_string(),
            })?;

        let crumb = self
            .client
            .get("https://query1.finance.yahoo.com/v1/test/getcrumb")
            .header(
                header::USER_AGENT,
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
            )
            .header(header::COOKIE, &cookie)
            .send()
            .await
            .map_err(|e| FundamentalsError::ProviderError {
                provider: "YAHOO".to_string(),
                message: format!("Failed to get crumb: {}", e),
            })?
            .text()
            .await
            .map_err(|e| FundamentalsError::ProviderError {
                provider: "YAHOO".to_string(),
                message: format!("Failed to read crumb: {}", e),
            })?;

        let crumb_data = CrumbData { cookie, crumb };

        let mut guard = YAHOO_CRUMB.write().unwrap();
        *guard = Some(crumb_data.clone());

        Ok(crumb_data)
    }

    /// Drop the cached crumb so the next request re-authenticates.
    fn clear_crumb(&self) {
        let mut guard = YAHOO_CRUMB.write().unwrap();
        *guard = None;
    }

    // ========================================================================
    // Timeseries Fetching
    // ========================================================================

    /// Fetch the raw annual series for a symbol.
    async fn fetch_timeseries(
        &self,
        symbol: &str,
    ) -> Result<Vec<YahooTimeseriesResult>, FundamentalsError> {
        let crumb = self.ensure_crumb().await?;

        let period2 = Utc::now().timestamp();
        let period1 = period2 - LOOKBACK_YEARS * SECONDS_PER_YEAR;

        let url = format!(
            "https://query1.finance.yahoo.com/ws/fundamentals-timeseries/v1/finance/timeseries/{}?symbol={}&type={}&period1={}&period2={}&merge=false&padTimeSeries=true&crumb={}",
            encode(symbol),
            encode(symbol),
            ANNUAL_SERIES,
            period1,
            period2,
            encode(&crumb.crumb)
        );

        let response = self
            .client
            .get(&url)
            .header(
                header::USER_AGENT,
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
            )
            .header(header::COOKIE, &crumb.cookie)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            self.clear_crumb();
            return Err(FundamentalsError::ProviderError {
                provider: "YAHOO".to_string(),
                message: "Yahoo authentication expired".to_string(),
            });
        }

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(FundamentalsError::SymbolNotFound(symbol.to_string()));
        }

        let data: YahooTimeseriesResponse =
            response
                .json()
                .await
                .map_err(|e| FundamentalsError::ProviderError {
                    provider: "YAHOO".to_string(),
                    message: format!("Failed to parse timeseries response: {}", e),
                })?;

        if let Some(error) = data.timeseries.error {
            return Err(FundamentalsError::ProviderError {
                provider: "YAHOO".to_string(),
                message: error
                    .description
                    .or(error.code)
                    .unwrap_or_else(|| "Unknown timeseries error".to_string()),
            });
        }

        if data.timeseries.result.is_empty() {
            return Err(FundamentalsError::SymbolNotFound(symbol.to_string()));
        }

        Ok(data.timeseries.result)
    }
}

// ============================================================================
// FundamentalsProvider Implementation
// ============================================================================

#[async_trait]
impl FundamentalsProvider for YahooFundamentalsProvider {
    fn id(&self) -> &'static str {
        "YAHOO"
    }

    async fn get_fundamentals(
        &self,
        symbol: &str,
    ) -> Result<FundamentalsSnapshot, FundamentalsError> {
        debug!("Fetching annual fundamentals for {} from Yahoo", symbol);

        let series = self.fetch_timeseries(symbol).await?;
        let snapshot = snapshot_from_series(symbol, &series);

        if snapshot.is_empty() {
            warn!("Yahoo returned no usable fundamentals for {}", symbol);
            return Err(FundamentalsError::NoFundamentalsData(symbol.to_string()));
        }

        Ok(snapshot)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Fold the per-metric series into one snapshot.
///
/// Each series contributes its most recent observation; working capital also
/// contributes the prior fiscal year so callers can compute the change. The
/// snapshot currency is taken from the first series that states one, and the
/// snapshot date is the newest fiscal year end seen across all series.
fn snapshot_from_series(symbol: &str, series: &[YahooTimeseriesResult]) -> FundamentalsSnapshot {
    let mut snapshot = FundamentalsSnapshot::empty(symbol, "YAHOO");

    for result in series {
        let Some(series_type) = result.series_type() else {
            continue;
        };
        let Some(latest) = result.latest() else {
            continue;
        };

        match series_type {
            "annualTotalRevenue" => snapshot.total_revenue = latest.value(),
            "annualEBITDA" => snapshot.ebitda = latest.value(),
            "annualEBIT" => snapshot.ebit = latest.value(),
            "annualCapitalExpenditure" => snapshot.capex = latest.value(),
            "annualWorkingCapital" => {
                snapshot.working_capital = latest.value();
                snapshot.working_capital_prior = result.previous().and_then(|d| d.value());
            }
            other => {
                debug!("Ignoring unrequested series type '{}'", other);
                continue;
            }
        }

        if snapshot.currency.is_none() {
            snapshot.currency = latest.currency_code.clone();
        }

        // None orders before any date, so the first real date always wins.
        let as_of = latest.as_of();
        if as_of > snapshot.as_of {
            snapshot.as_of = as_of;
        }
    }

    snapshot
}

// ============================================================================
// Tests
// ============================================================================
