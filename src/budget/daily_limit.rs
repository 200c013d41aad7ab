//! Remaining daily spending allowance.

use chrono::NaiveDate;

use crate::features::calendar::days_remaining_in_month;

/// Divide a remaining budget across the remaining days of the month.
/// The denominator floors at 1, so the last day never divides by zero.
pub fn daily_limit(budget: f32, days_remaining: u32) -> f32 {
    budget / days_remaining.max(1) as f32
}

/// Daily limit for `date`, counting `date` itself as a remaining day.
pub fn daily_limit_for_date(budget: f32, date: NaiveDate) -> f32 {
    daily_limit(budget, days_remaining_in_month(date))
}
