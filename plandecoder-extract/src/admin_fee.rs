//! Plan-level administrative fee detection.

use anyhow::Result;
use regex::Regex;

/// Used when no recordkeeping/advisory fee is found in the statement text.
pub const DEFAULT_ADMIN_FEE_PCT: f64 = 0.25;

/// Find the plan-level fee (percent of assets) in normalized statement
/// text: a recordkeeping/admin/plan/advisory label followed by "fee" and a
/// percentage. Returns [`DEFAULT_ADMIN_FEE_PCT`] when no such line exists.
pub fn extract_admin_fee_pct(text: &str) -> Result<f64> {
    let re = Regex::new(
        r"(?i)(?:recordkeeping|admin|plan|advis(?:ory|er))\s*fee[^%]*?(?P<pct>\d{1,2}(?:\.\d{1,2})?)%",
    )?;

    let found = re
        .captures(text)
        .and_then(|caps| caps["pct"].parse().ok());
    Ok(found.unwrap_or(DEFAULT_ADMIN_FEE_PCT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recordkeeping_fee() {
        let pct = extract_admin_fee_pct("Recordkeeping fee: 0.18% annually").unwrap();
        assert_eq!(pct, 0.18);
    }

    #[test]
    fn test_advisory_fee_with_intervening_text() {
        let pct = extract_admin_fee_pct("Advisory Fee (annual, all tiers): 1.25%").unwrap();
        assert_eq!(pct, 1.25);
    }

    #[test]
    fn test_plan_fee() {
        assert_eq!(extract_admin_fee_pct("plan fee 0.3%").unwrap(), 0.3);
    }

    #[test]
    fn test_label_must_directly_precede_fee() {
        // "administration fee" has text between "admin" and "fee".
        let pct = extract_admin_fee_pct("administration fee 0.2%").unwrap();
        assert_eq!(pct, DEFAULT_ADMIN_FEE_PCT);
    }

    #[test]
    fn test_default_when_absent() {
        let pct = extract_admin_fee_pct("no fees mentioned").unwrap();
        assert_eq!(pct, DEFAULT_ADMIN_FEE_PCT);
    }
}
