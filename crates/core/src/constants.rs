use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fallback annual revenue when neither fetched data nor the user provides one
pub const DEFAULT_REVENUE: Decimal = dec!(100_000_000);

/// Fallback annual EBITDA
pub const DEFAULT_EBITDA: Decimal = dec!(30_000_000);

/// Fallback annual operating income (EBIT)
pub const DEFAULT_OPERATING_INCOME: Decimal = dec!(20_000_000);

/// Fallback annual capital expenditure
pub const DEFAULT_CAPEX: Decimal = dec!(5_000_000);

/// Fallback net working capital, most recent fiscal year
pub const DEFAULT_NWC_CURRENT: Decimal = dec!(15_000_000);

/// Fallback net working capital, prior fiscal year
pub const DEFAULT_NWC_PRIOR: Decimal = dec!(14_000_000);

/// Default annual revenue growth rate, in percent
pub const DEFAULT_GROWTH_RATE: Decimal = dec!(8);

/// Default corporate tax rate, in percent
pub const DEFAULT_TAX_RATE: Decimal = dec!(25);

/// Default discount rate (WACC), in percent
pub const DEFAULT_DISCOUNT_RATE: Decimal = dec!(10);

/// Default perpetual growth rate for the terminal value, in percent
pub const DEFAULT_TERMINAL_GROWTH_RATE: Decimal = dec!(2.0);

/// Default forecast horizon, in years
pub const DEFAULT_FORECAST_YEARS: u32 = 5;

/// Upper bound for the revenue growth rate, in percent
pub const MAX_GROWTH_RATE: Decimal = dec!(50);

/// Upper bound for the tax rate, in percent
pub const MAX_TAX_RATE: Decimal = dec!(100);

/// Upper bound for the discount rate, in percent
pub const MAX_DISCOUNT_RATE: Decimal = dec!(20);

/// Upper bound for the terminal growth rate, in percent
pub const MAX_TERMINAL_GROWTH_RATE: Decimal = dec!(5.0);

/// Upper bound for the forecast horizon, in years
pub const MAX_FORECAST_YEARS: u32 = 10;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
