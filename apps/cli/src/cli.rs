use clap::Parser;
use rust_decimal::Decimal;

use fairval_core::constants;
use fairval_core::{Assumptions, InputOverrides};

/// Discounted cash flow valuation from the command line.
///
/// With a ticker, fetches the latest annual fundamentals and values the
/// company. Without one, values a set of example figures that can be
/// replaced field by field with the override flags.
#[derive(Parser, Debug)]
#[command(name = "fairval")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Ticker symbol to fetch fundamentals for (e.g. AAPL)
    pub ticker: Option<String>,

    /// Override base-year total revenue
    #[arg(long, value_name = "AMOUNT", allow_negative_numbers = true)]
    pub revenue: Option<Decimal>,

    /// Override base-year EBITDA
    #[arg(long, value_name = "AMOUNT", allow_negative_numbers = true)]
    pub ebitda: Option<Decimal>,

    /// Override base-year operating income (EBIT)
    #[arg(long, value_name = "AMOUNT", allow_negative_numbers = true)]
    pub operating_income: Option<Decimal>,

    /// Override base-year capital expenditure
    #[arg(long, value_name = "AMOUNT", allow_negative_numbers = true)]
    pub capex: Option<Decimal>,

    /// Override current-year net working capital
    #[arg(long, value_name = "AMOUNT", allow_negative_numbers = true)]
    pub nwc_current: Option<Decimal>,

    /// Override prior-year net working capital
    #[arg(long, value_name = "AMOUNT", allow_negative_numbers = true)]
    pub nwc_prior: Option<Decimal>,

    /// Annual revenue growth rate in percent (0 to 50)
    #[arg(long, value_name = "PCT", default_value_t = constants::DEFAULT_GROWTH_RATE)]
    pub growth_rate: Decimal,

    /// Corporate tax rate in percent (0 to 100)
    #[arg(long, value_name = "PCT", default_value_t = constants::DEFAULT_TAX_RATE)]
    pub tax_rate: Decimal,

    /// Discount rate (WACC) in percent (0 to 20)
    #[arg(long, value_name = "PCT", default_value_t = constants::DEFAULT_DISCOUNT_RATE)]
    pub discount_rate: Decimal,

    /// Number of forecast years (1 to 10)
    #[arg(long, value_name = "YEARS", default_value_t = constants::DEFAULT_FORECAST_YEARS)]
    pub forecast_years: u32,

    /// Terminal growth rate in percent (0 to 5)
    #[arg(long, value_name = "PCT", default_value_t = constants::DEFAULT_TERMINAL_GROWTH_RATE)]
    pub terminal_growth_rate: Decimal,

    /// Print the result as JSON instead of formatted tables
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Assembles the valuation assumptions, rejecting values outside the
    /// supported ranges.
    pub fn assumptions(&self) -> anyhow::Result<Assumptions> {
        ensure_rate_range("--growth-rate", self.growth_rate, constants::MAX_GROWTH_RATE)?;
        ensure_rate_range("--tax-rate", self.tax_rate, constants::MAX_TAX_RATE)?;
        ensure_rate_range("--discount-rate", self.discount_rate, constants::MAX_DISCOUNT_RATE)?;
        ensure_rate_range(
            "--terminal-growth-rate",
            self.terminal_growth_rate,
            constants::MAX_TERMINAL_GROWTH_RATE,
        )?;
        if self.forecast_years < 1 || self.forecast_years > constants::MAX_FORECAST_YEARS {
            anyhow::bail!(
                "--forecast-years must be between 1 and {}",
                constants::MAX_FORECAST_YEARS
            );
        }

        Ok(Assumptions {
            growth_rate: self.growth_rate,
            tax_rate: self.tax_rate,
            discount_rate: self.discount_rate,
            forecast_years: self.forecast_years,
            terminal_growth_rate: self.terminal_growth_rate,
        })
    }

    /// Collects the manual per-field input overrides.
    pub fn input_overrides(&self) -> InputOverrides {
        InputOverrides {
            revenue: self.revenue,
            ebitda: self.ebitda,
            operating_income: self.operating_income,
            capex: self.capex,
            nwc_current: self.nwc_current,
            nwc_prior: self.nwc_prior,
        }
    }
}

fn ensure_rate_range(flag: &str, value: Decimal, max: Decimal) -> anyhow::Result<()> {
    if value < Decimal::ZERO || value > max {
        anyhow::bail!("{} must be between 0 and {}", flag, max);
    }
    Ok(())
}
