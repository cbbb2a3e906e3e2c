//! Account / total value detection.

use anyhow::Result;
use regex::Regex;

/// Used when no account value is found in the statement text.
pub const DEFAULT_ACCOUNT_VALUE: f64 = 50_000.0;

/// Find the account value in normalized statement text.
///
/// Tries a labeled form first ("Account Value ... $123,456.78", also
/// "Total Balance"), then a trailing-label form ("$123,456.78 total
/// value"). Returns [`DEFAULT_ACCOUNT_VALUE`] when neither is present or
/// the matched amount does not parse.
pub fn extract_account_value(text: &str) -> Result<f64> {
    let labeled = Regex::new(
        r"(?i)(?:account|total)\s+(?:value|balance)[^$]*\$(?P<amount>[\d,]+(?:\.\d+)?)",
    )?;
    let trailing = Regex::new(
        r"(?i)\$(?P<amount>[\d,]+(?:\.\d+)?)\s+(?:total\s+value|account\s+value)",
    )?;

    let found = labeled
        .captures(text)
        .or_else(|| trailing.captures(text))
        .and_then(|caps| parse_amount(&caps["amount"]));
    Ok(found.unwrap_or(DEFAULT_ACCOUNT_VALUE))
}

/// Parse a currency amount, tolerating thousands separators.
pub(crate) fn parse_amount(s: &str) -> Option<f64> {
    s.replace(',', "").parse().ok()
}
