mod cli;
mod output;

use std::sync::Arc;

use clap::Parser;
use log::debug;

use fairval_core::{
    calculate_valuation, resolve_inputs, FinancialInputs, ValuationService, ValuationServiceTrait,
};
use fairval_fundamentals::YahooFundamentalsProvider;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let assumptions = cli.assumptions()?;
    let overrides = cli.input_overrides();

    match &cli.ticker {
        Some(ticker) => {
            debug!("Valuing {} with fetched fundamentals", ticker);
            let provider = Arc::new(YahooFundamentalsProvider::new()?);
            let service = ValuationService::new(provider);
            let valuation = service
                .value_ticker(ticker, &overrides, &assumptions)
                .await?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&valuation)?);
            } else {
                output::render_ticker_valuation(&valuation);
            }
        }
        None => {
            debug!("Valuing example figures without a ticker");
            let resolved =
                resolve_inputs(None, &FinancialInputs::default()).with_overrides(&overrides);
            let result = calculate_valuation(&resolved.financial_inputs(), &assumptions)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                output::render_valuation(&resolved, &assumptions, &result);
            }
        }
    }

    Ok(())
}
