//! Statement analysis pipeline: normalize, extract, classify, aggregate,
//! flag.

use anyhow::Result;

use plandecoder_core::{
    Allocation, AnalysisResult, Category, Fees, FundClassifier, Holding, Meta, zeroed_allocation,
};

use crate::account_value::extract_account_value;
use crate::admin_fee::extract_admin_fee_pct;
use crate::holdings::extract_holdings;

/// Advisory note on the no-holdings result. Part of the report contract.
pub const NO_HOLDINGS_NOTE: &str =
    "No holdings detected. Try uploading a higher-quality PDF or a text-based statement.";

/// Collapse whitespace runs to single spaces and trim the ends.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Analyze raw statement text into a complete result model.
///
/// Pure function of its input: the same text always yields the same
/// result. Statement content never makes this fail — extractors fall back
/// to fixed defaults, and text with no recognizable holdings yields the
/// no-holdings result.
pub fn analyze(raw_text: &str) -> Result<AnalysisResult> {
    let text = normalize(raw_text);

    let account_value = extract_account_value(&text)?;
    let raw_holdings = extract_holdings(&text)?;

    if raw_holdings.is_empty() {
        return Ok(AnalysisResult::no_holdings(account_value, NO_HOLDINGS_NOTE));
    }

    let classifier = FundClassifier::new()?;
    let holdings: Vec<Holding> = raw_holdings
        .into_iter()
        .map(|raw| {
            let category = classifier.classify(&raw.name, &raw.symbol);
            let cost_dollar = (raw.expense_ratio / 100.0) * account_value * (raw.weight / 100.0);
            Holding {
                name: raw.name,
                symbol: raw.symbol,
                weight: raw.weight,
                expense_ratio: raw.expense_ratio,
                category,
                cost_dollar,
            }
        })
        .collect();

    let admin_fee_pct = extract_admin_fee_pct(&text)?;
    let admin_fee_dollar = account_value * (admin_fee_pct / 100.0);

    let mut blended_er = 0.0;
    let mut allocation = zeroed_allocation();
    for h in &holdings {
        blended_er += h.expense_ratio * (h.weight / 100.0);
        *allocation.entry(h.category).or_insert(0.0) += h.weight;
    }

    let total_cost_pct = blended_er + admin_fee_pct;
    let annual_cost_dollar = account_value * (total_cost_pct / 100.0);

    let flags = evaluate_flags(&holdings, &allocation);

    Ok(AnalysisResult {
        meta: Meta { account_value },
        fees: Fees {
            blended_er,
            admin_fee_pct,
            admin_fee_dollar,
            total_cost_pct,
            annual_cost_dollar,
        },
        holdings,
        allocation,
        flags,
    })
}

/// Advisory flags over the aggregated portfolio, in fixed order. Zero or
/// more may fire independently.
fn evaluate_flags(holdings: &[Holding], allocation: &Allocation) -> Vec<String> {
    let mut flags = Vec::new();

    let cash = allocation.get(&Category::Cash).copied().unwrap_or(0.0);
    if cash > 10.0 {
        flags.push(format!("High cash balance detected ({cash:.1}%)."));
    }

    let pricey = holdings.iter().filter(|h| h.expense_ratio > 0.75).count();
    if pricey > 0 {
        flags.push(format!("{pricey} high-fee fund(s) over 0.75% ER."));
    }

    let target_date = allocation
        .get(&Category::TargetDate)
        .copied()
        .unwrap_or(0.0);
    if target_date > 50.0 && holdings.len() > 3 {
        flags.push("Target-date fund overlap with other holdings.".to_string());
    }

    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  a\t\tb\n\nc  "), "a b c");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_empty_text_yields_no_holdings_result() {
        let r = analyze("").unwrap();
        assert_eq!(r.meta.account_value, crate::DEFAULT_ACCOUNT_VALUE);
        assert!(r.holdings.is_empty());
        assert!(r.allocation.is_empty());
        assert_eq!(r.fees, Fees::zeroed());
        assert_eq!(r.flags, vec![NO_HOLDINGS_NOTE.to_string()]);
    }

    #[test]
    fn test_garbage_text_yields_no_holdings_result() {
        let r = analyze("@@@@ 1234 $$$$ ....").unwrap();
        assert_eq!(r.flags, vec![NO_HOLDINGS_NOTE.to_string()]);
    }

    #[test]
    fn test_allocation_seeds_all_categories() {
        let r = analyze("S&P 500 Index 100.0%").unwrap();
        assert_eq!(r.allocation.len(), Category::ALL.len());
        assert_eq!(r.allocation[&Category::UsStock], 100.0);
        assert_eq!(r.allocation[&Category::Bonds], 0.0);
    }

    #[test]
    fn test_cash_flag_formats_one_decimal() {
        let r = analyze("Money Market Fund 15.3% S&P 500 Index 84.7%").unwrap();
        assert!(r.flags.contains(&"High cash balance detected (15.3%).".to_string()));
    }
}
