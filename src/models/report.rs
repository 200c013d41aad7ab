use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::forecast::RiskLevel;

/// One category's projected spend against its reference budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProjection {
    pub category: String,
    pub projected: f32,
    pub budget: f32,
    pub risk: RiskLevel,
}

/// Full forecast report for one horizon: total plus per-category
/// projections and risk tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    pub horizon_days: u32,
    pub total_amount: f32,
    pub categories: Vec<CategoryProjection>,
}

impl ForecastReport {
    /// Predicted spend keyed by category, as consumed by the rebalance
    /// allocator.
    pub fn predicted_by_category(&self) -> BTreeMap<String, f32> {
        self.categories
            .iter()
            .map(|c| (c.category.clone(), c.projected))
            .collect()
    }
}
