use rust_decimal::Decimal;

use fairval_core::constants::DISPLAY_DECIMAL_PRECISION;
use fairval_core::{
    Assumptions, ForecastRow, ResolvedField, ResolvedInputs, TickerValuation, ValuationResult,
};

const FORECAST_HEADERS: [&str; 8] = [
    "Year",
    "Revenue",
    "EBIT",
    "D&A",
    "CapEx",
    "Change in NWC",
    "FCF",
    "Discounted FCF",
];

/// Prints a fetched ticker valuation: symbol header, resolved inputs,
/// assumptions, the per-year forecast, and the valuation summary.
pub fn render_ticker_valuation(valuation: &TickerValuation) {
    match (&valuation.currency, valuation.as_of) {
        (Some(currency), Some(as_of)) => {
            println!(
                "{} ({}, statements as of {})",
                valuation.symbol, currency, as_of
            );
        }
        (Some(currency), None) => println!("{} ({})", valuation.symbol, currency),
        (None, Some(as_of)) => println!("{} (statements as of {})", valuation.symbol, as_of),
        (None, None) => println!("{}", valuation.symbol),
    }
    println!();
    render_valuation(&valuation.inputs, &valuation.assumptions, &valuation.valuation);
}

/// Prints a valuation built from resolved inputs without a ticker header.
pub fn render_valuation(
    inputs: &ResolvedInputs,
    assumptions: &Assumptions,
    result: &ValuationResult,
) {
    render_inputs(inputs);
    println!();
    render_assumptions(assumptions);
    println!();
    render_forecast_table(&result.forecast_rows);
    println!();
    render_summary(result);
}

fn render_inputs(inputs: &ResolvedInputs) {
    println!("Inputs");
    render_input_line("Total Revenue", &inputs.revenue);
    render_input_line("EBITDA", &inputs.ebitda);
    render_input_line("Operating Income (EBIT)", &inputs.operating_income);
    render_input_line("Capital Expenditure", &inputs.capex);
    render_input_line("Net Working Capital (current)", &inputs.nwc_current);
    render_input_line("Net Working Capital (prior)", &inputs.nwc_prior);
}

fn render_input_line(label: &str, field: &ResolvedField) {
    println!(
        "  {:<30} {:>20}  [{}]",
        label,
        format_money(field.value),
        field.source.as_str()
    );
}

fn render_assumptions(assumptions: &Assumptions) {
    println!(
        "Assumptions: growth {}%, tax {}%, discount {}%, terminal growth {}%, {} forecast years",
        assumptions.growth_rate,
        assumptions.tax_rate,
        assumptions.discount_rate,
        assumptions.terminal_growth_rate,
        assumptions.forecast_years
    );
}

fn render_forecast_table(rows: &[ForecastRow]) {
    let cells: Vec<[String; 8]> = rows
        .iter()
        .map(|row| {
            [
                row.year.to_string(),
                format_money(row.revenue),
                format_money(row.ebit),
                format_money(row.da),
                format_money(row.capex),
                format_money(row.change_in_nwc),
                format_money(row.fcf),
                format_money(row.discounted_fcf),
            ]
        })
        .collect();

    let mut widths: [usize; 8] = FORECAST_HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let header = format_row(&FORECAST_HEADERS.map(String::from), &widths);
    println!("{}", header);
    println!("{}", "-".repeat(header.len()));
    for row in &cells {
        println!("{}", format_row(row, &widths));
    }
}

fn format_row(cells: &[String; 8], widths: &[usize; 8]) -> String {
    cells
        .iter()
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{:>width$}", cell))
        .collect::<Vec<_>>()
        .join("  ")
}

fn render_summary(result: &ValuationResult) {
    println!("Terminal Value:            {}", format_money(result.terminal_value));
    println!(
        "Discounted Terminal Value: {}",
        format_money(result.discounted_terminal_value)
    );
    println!("Enterprise Value:          {}", format_money(result.enterprise_value));
}

/// Formats a monetary amount as `$1,234,567.89`, with the sign ahead of
/// the currency symbol.
fn format_money(value: Decimal) -> String {
    let rounded = value.round_dp(DISPLAY_DECIMAL_PRECISION);
    let unsigned = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${}.{}", grouped, frac_part)
    } else {
        format!("${}.{}", grouped, frac_part)
    }
}
