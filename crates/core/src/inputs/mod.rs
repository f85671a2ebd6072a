//! Valuation inputs - base-year figures, assumptions, and resolution.

mod inputs_model;
mod inputs_resolver;

pub use inputs_model::{
    Assumptions, FieldSource, FinancialInputs, InputOverrides, ResolvedField, ResolvedInputs,
};
pub use inputs_resolver::{parse_or_default, resolve_inputs};
