//! Budget-risk classification.

use crate::models::RiskLevel;

/// Predicted spend beyond this multiple of the budget is high risk.
pub const HIGH_RISK_MULTIPLIER: f32 = 1.2;

/// Classify predicted spend against a reference budget.
///
/// High when `predicted > budget * 1.2`; Medium when over budget but at
/// or under the 1.2 boundary; Low otherwise. A zero budget with zero
/// predicted is Low. Pure and deterministic.
pub fn classify(predicted: f32, budget: f32) -> RiskLevel {
    if predicted > budget * HIGH_RISK_MULTIPLIER {
        RiskLevel::High
    } else if predicted > budget {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
