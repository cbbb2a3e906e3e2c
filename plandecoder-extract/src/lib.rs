//! plandecoder-extract: heuristic extraction of account value, fees, and
//! holdings from statement text, and the analysis pipeline over them.
//!
//! Input is the plain-text content of a retirement-plan statement
//! (PDF/image conversion happens upstream). Extraction is best-effort:
//! every extractor falls back to a fixed default instead of failing, and
//! text with no recognizable holdings produces a terminal no-holdings
//! result rather than an error.

pub mod account_value;
pub mod admin_fee;
pub mod analyzer;
pub mod holdings;

pub use account_value::{DEFAULT_ACCOUNT_VALUE, extract_account_value};
pub use admin_fee::{DEFAULT_ADMIN_FEE_PCT, extract_admin_fee_pct};
pub use analyzer::{NO_HOLDINGS_NOTE, analyze, normalize};
pub use holdings::{RawHolding, extract_holdings};
