//! Holdings-line extraction.
//!
//! Scans normalized text for spans shaped like
//! `Vanguard 500 Index Admiral (VFIAX) 25.00% ER 0.04%`, with the ticker
//! and expense ratio both optional. Matches are collected left to right,
//! each scan resuming after the end of the previous match. This is a
//! heuristic: a percentage in unrelated prose can produce a candidate, and
//! the post-filter only drops clearly implausible ones.

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

use plandecoder_core::infer_expense_ratio;

/// A holding candidate before classification and cost computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawHolding {
    pub name: String,
    /// Ticker symbol; empty when the statement lists none.
    pub symbol: String,
    /// Percent of portfolio.
    pub weight: f64,
    /// Explicit ER from the statement, or inferred from the name.
    pub expense_ratio: f64,
}

/// Extract holding candidates from normalized statement text.
///
/// A candidate whose ER column is missing gets one inferred from its name;
/// a matched weight that fails to parse drops the candidate entirely.
pub fn extract_holdings(text: &str) -> Result<Vec<RawHolding>> {
    // name, optional (TICKER), weight%, optional ER label, optional ER
    // value with or without its own % sign. The ER label is
    // case-insensitive; the ticker is not.
    let re = Regex::new(concat!(
        r"(?P<name>[A-Za-z][A-Za-z0-9&,.\- ]+?)\s*",
        r"(?:\((?P<symbol>[A-Z]{2,6})\))?\s+",
        r"(?P<weight>\d{1,3}(?:\.\d{1,2})?)%\s*",
        r"(?i:er|expense ratio)?\s*",
        r"(?P<er>\d{1,2}(?:\.\d{1,2})?)?%?",
    ))?;

    let mut out = Vec::new();
    for caps in re.captures_iter(text) {
        let name = caps["name"].trim().to_string();
        let symbol = caps
            .name("symbol")
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        let weight: f64 = match caps["weight"].parse() {
            Ok(w) => w,
            Err(_) => continue,
        };
        // An ER that fails to parse counts as absent, not as an error.
        let expense_ratio = caps
            .name("er")
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or_else(|| infer_expense_ratio(&name));

        // Drop implausible candidates: stray percentages and fragments.
        if weight > 0.0 && weight <= 100.0 && name.len() > 2 {
            out.push(RawHolding {
                name,
                symbol,
                weight,
                expense_ratio,
            });
        }
    }
    Ok(out)
}
