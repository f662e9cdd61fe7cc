//! Prices

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use thiserror::Error;

/// A monthly subscription cost.
pub type MonthlyCost = Money<'static, Currency>;

/// Errors raised while reading amounts and currencies from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is not a non-negative decimal number.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The currency code is not one we price in.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// Look up a supported currency by its ISO code.
///
/// # Errors
///
/// Returns [`PriceError::UnknownCurrency`] for anything other than GBP, USD or EUR.
pub fn parse_currency(code: &str) -> Result<&'static Currency, PriceError> {
    match code.trim() {
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(PriceError::UnknownCurrency(other.to_string())),
    }
}

/// Parse a numeric string (e.g. `"19.99"`) into a cost, rounded to minor units.
///
/// # Errors
///
/// Returns [`PriceError::InvalidAmount`] if the string is not a decimal number,
/// is negative, or does not fit in minor units.
pub fn parse_amount(s: &str, currency: &'static Currency) -> Result<MonthlyCost, PriceError> {
    let amount = s
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| PriceError::InvalidAmount(s.to_string()))?;

    if amount.is_sign_negative() {
        return Err(PriceError::InvalidAmount(s.to_string()));
    }

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| PriceError::InvalidAmount(s.to_string()))?;

    Ok(Money::from_minor(minor_units, currency))
}

/// Format a cost with exactly two decimal places and no currency symbol (`"39.98"`).
pub fn format_amount(cost: &MonthlyCost) -> String {
    let minor_units = cost.to_minor_units();
    let abs_minor = minor_units.unsigned_abs();
    let sign = if minor_units < 0 { "-" } else { "" };

    format!("{sign}{}.{:02}", abs_minor / 100, abs_minor % 100)
}

/// Format a cost for display, prefixed with its currency symbol (`"£39.98"`).
pub fn format_price(cost: &MonthlyCost) -> String {
    let code = cost.currency().iso_alpha_code;

    let symbol = match code {
        "GBP" => "£",
        "USD" => "$",
        "EUR" => "€",
        _ => "",
    };

    if symbol.is_empty() {
        format!("{} {code}", format_amount(cost))
    } else {
        let amount = format_amount(cost);

        match amount.strip_prefix('-') {
            Some(unsigned) => format!("-{symbol}{unsigned}"),
            None => format!("{symbol}{amount}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_amount_rounds_to_minor_units() -> TestResult {
        let cost = parse_amount("19.999", GBP)?;

        assert_eq!(cost.to_minor_units(), 2000);

        Ok(())
    }

    #[test]
    fn parse_amount_accepts_whole_numbers() -> TestResult {
        let cost = parse_amount(" 18 ", GBP)?;

        assert_eq!(cost, Money::from_minor(1800, GBP));

        Ok(())
    }

    #[test]
    fn parse_amount_rejects_text() {
        let result = parse_amount("free", GBP);

        assert_eq!(result, Err(PriceError::InvalidAmount("free".to_string())));
    }

    #[test]
    fn parse_amount_rejects_negative_values() {
        let result = parse_amount("-1.00", GBP);

        assert!(matches!(result, Err(PriceError::InvalidAmount(_))));
    }

    #[test]
    fn parse_currency_accepts_supported_codes() -> TestResult {
        assert_eq!(parse_currency("GBP")?, GBP);
        assert_eq!(parse_currency("USD")?, USD);
        assert_eq!(parse_currency(" EUR ")?, EUR);

        Ok(())
    }

    #[test]
    fn parse_currency_rejects_unknown_codes() {
        let result = parse_currency("ABC");

        assert!(matches!(result, Err(PriceError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn format_amount_pads_to_two_places() {
        assert_eq!(format_amount(&Money::from_minor(3998, GBP)), "39.98");
        assert_eq!(format_amount(&Money::from_minor(0, GBP)), "0.00");
        assert_eq!(format_amount(&Money::from_minor(1805, GBP)), "18.05");
    }

    #[test]
    fn format_price_prefixes_symbol() {
        assert_eq!(format_price(&Money::from_minor(1999, GBP)), "£19.99");
        assert_eq!(format_price(&Money::from_minor(250, USD)), "$2.50");
        assert_eq!(format_price(&Money::from_minor(-250, EUR)), "-€2.50");
    }
}
