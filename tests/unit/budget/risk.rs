//! Unit tests for risk classification

use kakeibo::budget::classify;
use kakeibo::models::RiskLevel;

#[test]
fn test_exactly_at_high_boundary_is_medium() {
    // The boundary at exactly x1.2 stays Medium.
    assert_eq!(classify(1200.0, 1000.0), RiskLevel::Medium);
}

#[test]
fn test_above_high_boundary_is_high() {
    assert_eq!(classify(1201.0, 1000.0), RiskLevel::High);
}

#[test]
fn test_under_budget_is_low() {
    assert_eq!(classify(999.0, 1000.0), RiskLevel::Low);
    assert_eq!(classify(1000.0, 1000.0), RiskLevel::Low);
}

#[test]
fn test_zero_budget_zero_predicted_is_low() {
    assert_eq!(classify(0.0, 0.0), RiskLevel::Low);
}

#[test]
fn test_zero_budget_with_spend_is_high() {
    assert_eq!(classify(1.0, 0.0), RiskLevel::High);
}
