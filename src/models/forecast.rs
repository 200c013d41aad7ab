use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::budget::categories::CATEGORY_COUNT;

/// Reference budget per display-name category, plus the synthetic
/// `total_budget` key. Derived once per analysis run and immutable after.
pub type BudgetMap = BTreeMap<String, f32>;

/// Combined output of the ratio and total models over one horizon.
///
/// `category_ratios` are the raw model outputs; they are not normalized
/// here, so consumers that require an exact sum of 1 must normalize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub horizon_days: u32,
    pub total_amount: f32,
    pub category_ratios: [f32; CATEGORY_COUNT],
}

/// Budget-risk tier for a (predicted, budget) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Display marker matching the app's report output.
    pub fn marker(&self) -> &'static str {
        match self {
            RiskLevel::Low => "🟢 低リスク",
            RiskLevel::Medium => "🟠 中リスク",
            RiskLevel::High => "🔴 高リスク",
        }
    }
}
