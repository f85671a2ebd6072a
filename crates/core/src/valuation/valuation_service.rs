use async_trait::async_trait;
use log::{debug, error};
use std::sync::Arc;

use fairval_fundamentals::FundamentalsProvider;

use crate::errors::Result;
use crate::inputs::{resolve_inputs, Assumptions, FinancialInputs, InputOverrides};
use crate::valuation::valuation_calculator::calculate_valuation;
use crate::valuation::valuation_model::{TickerValuation, ValuationResult};

#[async_trait]
pub trait ValuationServiceTrait: Send + Sync {
    /// Value a fixed set of base-year figures under the given assumptions.
    fn value_inputs(
        &self,
        inputs: &FinancialInputs,
        assumptions: &Assumptions,
    ) -> Result<ValuationResult>;

    /// Fetch fundamentals for `symbol`, resolve them against the default
    /// figures, apply `overrides`, and value the result.
    ///
    /// Fetch failures propagate without touching any input. The returned
    /// valuation carries the resolved inputs with their provenance so the
    /// caller can show which figures were fetched, defaulted, or overridden.
    async fn value_ticker(
        &self,
        symbol: &str,
        overrides: &InputOverrides,
        assumptions: &Assumptions,
    ) -> Result<TickerValuation>;
}

#[derive(Clone)]
pub struct ValuationService {
    fundamentals_provider: Arc<dyn FundamentalsProvider>,
}

impl ValuationService {
    pub fn new(fundamentals_provider: Arc<dyn FundamentalsProvider>) -> Self {
        Self {
            fundamentals_provider,
        }
    }
}

#[async_trait]
impl ValuationServiceTrait for ValuationService {
    fn value_inputs(
        &self,
        inputs: &FinancialInputs,
        assumptions: &Assumptions,
    ) -> Result<ValuationResult> {
        calculate_valuation(inputs, assumptions)
    }

    async fn value_ticker(
        &self,
        symbol: &str,
        overrides: &InputOverrides,
        assumptions: &Assumptions,
    ) -> Result<TickerValuation> {
        debug!(
            "Valuing {} via provider {}",
            symbol,
            self.fundamentals_provider.id()
        );

        let snapshot = self
            .fundamentals_provider
            .get_fundamentals(symbol)
            .await
            .map_err(|e| {
                error!("Fundamentals fetch failed for {}: {}", symbol, e);
                e
            })?;

        let resolved =
            resolve_inputs(Some(&snapshot), &FinancialInputs::default()).with_overrides(overrides);
        let valuation = calculate_valuation(&resolved.financial_inputs(), assumptions)?;

        Ok(TickerValuation {
            symbol: snapshot.symbol,
            currency: snapshot.currency,
            as_of: snapshot.as_of,
            inputs: resolved,
            assumptions: assumptions.clone(),
            valuation,
        })
    }
}
