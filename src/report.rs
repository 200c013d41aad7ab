//! Forecast report assembly: per-category projections and risk tiers.

use crate::budget::categories::CATEGORY_DISPLAY_NAMES;
use crate::budget::risk::classify;
use crate::models::{BudgetMap, CategoryProjection, ForecastReport, ForecastResult};

/// Combine a forecast with the reference budget into a report.
///
/// Projected yen per category is `ratio * total_amount` with the raw
/// model ratios; budgets are looked up by display name and default to 0.
pub fn build_report(result: &ForecastResult, budget: &BudgetMap) -> ForecastReport {
    let categories = CATEGORY_DISPLAY_NAMES
        .iter()
        .zip(result.category_ratios.iter())
        .map(|(&name, &ratio)| {
            let projected = ratio * result.total_amount;
            let allowance = budget.get(name).copied().unwrap_or(0.0);
            CategoryProjection {
                category: name.to_string(),
                projected,
                budget: allowance,
                risk: classify(projected, allowance),
            }
        })
        .collect();

    ForecastReport {
        horizon_days: result.horizon_days,
        total_amount: result.total_amount,
        categories,
    }
}
