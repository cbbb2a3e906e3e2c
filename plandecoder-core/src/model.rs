//! Analysis result model: holdings, fees, allocation, and advisory flags.
//!
//! Serialized field names are the wire contract with the report/transport
//! layers and must not change.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Asset class assigned to a holding, exactly once at creation.
///
/// Declaration order drives allocation map ordering; the serialized names
/// are the display labels used in reports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    #[serde(rename = "US Stock")]
    UsStock,
    #[serde(rename = "Intl Stock")]
    IntlStock,
    #[serde(rename = "Bonds")]
    Bonds,
    #[serde(rename = "Cash")]
    Cash,
    #[serde(rename = "Real Assets")]
    RealAssets,
    #[serde(rename = "Target Date")]
    TargetDate,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 7] = [
        Category::UsStock,
        Category::IntlStock,
        Category::Bonds,
        Category::Cash,
        Category::RealAssets,
        Category::TargetDate,
        Category::Other,
    ];

    /// Display label, identical to the serialized name.
    pub fn label(&self) -> &'static str {
        match self {
            Category::UsStock => "US Stock",
            Category::IntlStock => "Intl Stock",
            Category::Bonds => "Bonds",
            Category::Cash => "Cash",
            Category::RealAssets => "Real Assets",
            Category::TargetDate => "Target Date",
            Category::Other => "Other",
        }
    }
}

/// Portfolio weight (percent) summed per category.
pub type Allocation = BTreeMap<Category, f64>;

/// Allocation with all seven categories present at zero.
pub fn zeroed_allocation() -> Allocation {
    Category::ALL.iter().map(|c| (*c, 0.0)).collect()
}

/// A single fund position extracted from a statement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Holding {
    pub name: String,
    /// Ticker symbol; empty when the statement lists none.
    pub symbol: String,
    /// Percent of portfolio, in (0, 100].
    pub weight: f64,
    /// Annual expense ratio in percent, explicit or inferred.
    #[serde(rename = "er")]
    pub expense_ratio: f64,
    pub category: Category,
    /// Annual dollar cost of this position:
    /// (er/100) * account value * (weight/100).
    #[serde(rename = "costDollar")]
    pub cost_dollar: f64,
}

/// Derived cost metrics, recomputed in full on every analysis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Fees {
    /// Weighted-average expense ratio across holdings, percent.
    #[serde(rename = "blendedER")]
    pub blended_er: f64,
    /// Plan-level administrative fee, percent of assets.
    #[serde(rename = "adminFeePct")]
    pub admin_fee_pct: f64,
    #[serde(rename = "adminFeeDollar")]
    pub admin_fee_dollar: f64,
    /// Blended ER plus admin fee, percent.
    #[serde(rename = "totalCostPct")]
    pub total_cost_pct: f64,
    #[serde(rename = "annualCostDollar")]
    pub annual_cost_dollar: f64,
}

impl Fees {
    pub fn zeroed() -> Self {
        Self {
            blended_er: 0.0,
            admin_fee_pct: 0.0,
            admin_fee_dollar: 0.0,
            total_cost_pct: 0.0,
            annual_cost_dollar: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Meta {
    #[serde(rename = "accountValue")]
    pub account_value: f64,
}

/// Complete output of one statement analysis. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub meta: Meta,
    pub fees: Fees,
    pub holdings: Vec<Holding>,
    pub allocation: Allocation,
    pub flags: Vec<String>,
}

impl AnalysisResult {
    /// Terminal result for statements with no recognizable holdings:
    /// zeroed fees, empty allocation, and a single explanatory note.
    pub fn no_holdings(account_value: f64, note: impl Into<String>) -> Self {
        Self {
            meta: Meta { account_value },
            fees: Fees::zeroed(),
            holdings: Vec::new(),
            allocation: Allocation::new(),
            flags: vec![note.into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> AnalysisResult {
        let mut allocation = zeroed_allocation();
        allocation.insert(Category::UsStock, 100.0);
        AnalysisResult {
            meta: Meta {
                account_value: 50_000.0,
            },
            fees: Fees {
                blended_er: 0.02,
                admin_fee_pct: 0.25,
                admin_fee_dollar: 125.0,
                total_cost_pct: 0.27,
                annual_cost_dollar: 135.0,
            },
            holdings: vec![Holding {
                name: "S&P 500 Index".to_string(),
                symbol: "FXAIX".to_string(),
                weight: 100.0,
                expense_ratio: 0.02,
                category: Category::UsStock,
                cost_dollar: 10.0,
            }],
            allocation,
            flags: vec![],
        }
    }

    #[test]
    fn test_json_contract_field_names() {
        let v = serde_json::to_value(sample_result()).unwrap();

        assert_eq!(v["meta"]["accountValue"], 50_000.0);
        for key in [
            "blendedER",
            "adminFeePct",
            "adminFeeDollar",
            "totalCostPct",
            "annualCostDollar",
        ] {
            assert!(v["fees"].get(key).is_some(), "missing fees.{key}");
        }
        let h = &v["holdings"][0];
        for key in ["name", "symbol", "weight", "er", "category", "costDollar"] {
            assert!(h.get(key).is_some(), "missing holdings[].{key}");
        }
        assert_eq!(h["category"], "US Stock");
        assert_eq!(v["allocation"]["US Stock"], 100.0);
        assert_eq!(v["allocation"]["Cash"], 0.0);
        assert!(v["flags"].is_array());
    }

    #[test]
    fn test_allocation_serializes_in_declaration_order() {
        let json = serde_json::to_string(&zeroed_allocation()).unwrap();
        let us = json.find("US Stock").unwrap();
        let intl = json.find("Intl Stock").unwrap();
        let other = json.find("Other").unwrap();
        assert!(us < intl && intl < other);
    }

    #[test]
    fn test_no_holdings_result_is_empty_but_renderable() {
        let r = AnalysisResult::no_holdings(50_000.0, "nothing found");
        assert!(r.holdings.is_empty());
        assert!(r.allocation.is_empty());
        assert_eq!(r.fees, Fees::zeroed());
        assert_eq!(r.flags, vec!["nothing found".to_string()]);

        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["allocation"], serde_json::json!({}));
    }

    #[test]
    fn test_category_labels_match_serialized_names() {
        for c in Category::ALL {
            let v = serde_json::to_value(c).unwrap();
            assert_eq!(v, c.label());
        }
    }
}
