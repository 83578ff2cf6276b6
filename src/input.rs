//! Parsing of the numeric text fields a user types in.
//!
//! Every numeric entry point goes through [`parse_number`], so a bad rate,
//! quantity or hours value is reported the same way and never reaches the
//! catalog.

use crate::error::InputError;

pub fn parse_rate(text: &str) -> Result<f64, InputError> {
    parse_number("rate", text)
}

pub fn parse_quantity(text: &str) -> Result<f64, InputError> {
    parse_number("quantity", text)
}

pub fn parse_hours(text: &str) -> Result<f64, InputError> {
    parse_number("hours", text)
}

/// Parses `text` as a finite `f64`. Negative values pass through.
pub fn parse_number(field: &'static str, text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::InvalidNumericInput {
            field,
            input: trimmed.to_string(),
        }),
    }
}
