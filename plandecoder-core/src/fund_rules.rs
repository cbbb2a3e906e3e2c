//! Ordered keyword rules for fund classification and expense-ratio
//! inference.
//!
//! Both rule sets are first-match-wins over an ordered list. The category
//! vocabularies overlap ("Target Retirement 2045 Bond" is a target-date
//! fund, not a bond fund), so rule order is load-bearing.

use anyhow::Result;
use regex::Regex;

use crate::model::Category;

/// Maps a fund's name and ticker to an asset class via ordered
/// word-boundary keyword patterns.
pub struct FundClassifier {
    target_words: Regex,
    year_token: Regex,
    rules: Vec<(Regex, Category)>,
}

impl FundClassifier {
    pub fn new() -> Result<Self> {
        let rules = vec![
            (
                Regex::new(
                    r"\b(s&p|sp|500|total stock|index|russell|mid cap|small cap|extended market)\b",
                )?,
                Category::UsStock,
            ),
            (
                Regex::new(r"\b(international|intl|eafe|developed ex|emerging)\b")?,
                Category::IntlStock,
            ),
            (
                Regex::new(r"\b(bond|treasury|aggregate|credit|tips|income)\b")?,
                Category::Bonds,
            ),
            (
                Regex::new(r"\b(stable value|money market|cash|capital preservation)\b")?,
                Category::Cash,
            ),
            (
                Regex::new(r"\b(reit|real estate|commodit(?:y|ies)|natural resources)\b")?,
                Category::RealAssets,
            ),
        ];
        Ok(Self {
            target_words: Regex::new(r"\b(target|retirement)\b")?,
            year_token: Regex::new(r"\d{4}")?,
            rules,
        })
    }

    /// Classify a fund by name and ticker. Always returns a category;
    /// nothing recognized means [`Category::Other`].
    pub fn classify(&self, name: &str, symbol: &str) -> Category {
        let n = format!("{name} {symbol}").to_lowercase();

        // Target-date funds name a year; checked before the stock/bond
        // vocabulary because their names borrow from it.
        if self.target_words.is_match(&n) && self.year_token.is_match(&n) {
            return Category::TargetDate;
        }
        for (pattern, category) in &self.rules {
            if pattern.is_match(&n) {
                return *category;
            }
        }
        Category::Other
    }
}

/// Estimate an annual expense ratio (percent) from a fund name alone.
///
/// Used when a statement lists a holding without an ER column. Plain
/// substring checks, first match wins.
pub fn infer_expense_ratio(name: &str) -> f64 {
    let n = name.to_lowercase();

    if n.contains("index") || n.contains("collective trust") || n.contains("instl idx") {
        return 0.05;
    }
    if n.contains("target") || n.contains("retirement") {
        return 0.35;
    }
    if n.contains("bond") || n.contains("treasury") || n.contains("aggregate") {
        return 0.10;
    }
    if n.contains("growth")
        || n.contains("value")
        || n.contains("cap")
        || n.contains("international")
        || n.contains("emerging")
        || n.contains("real estate")
        || n.contains("reit")
    {
        return 0.45;
    }
    if n.contains("annuity") || n.contains("subaccount") || n.contains("separate account") {
        return 1.10;
    }
    0.40
}
