//! plandecoder-core: result model and fund rules for retirement-plan
//! statement analysis.

pub mod fund_rules;
pub mod model;

pub use fund_rules::{FundClassifier, infer_expense_ratio};
pub use model::{
    Allocation, AnalysisResult, Category, Fees, Holding, Meta, zeroed_allocation,
};
