//! Unit tests for the daily limit calculator

use chrono::NaiveDate;
use kakeibo::budget::{daily_limit, daily_limit_for_date};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_even_split_over_month() {
    assert_eq!(daily_limit(3100.0, 31), 100.0);
}

#[test]
fn test_last_day_gets_full_budget() {
    assert_eq!(daily_limit(500.0, 1), 500.0);
}

#[test]
fn test_zero_days_floors_to_one() {
    assert_eq!(daily_limit(500.0, 0), 500.0);
}

#[test]
fn test_first_of_month_by_date() {
    // July has 31 days, all remaining on the 1st.
    assert_eq!(daily_limit_for_date(3100.0, date(2026, 7, 1)), 100.0);
}

#[test]
fn test_last_of_month_by_date() {
    assert_eq!(daily_limit_for_date(500.0, date(2026, 7, 31)), 500.0);
    // February 2026 is not a leap month.
    assert_eq!(daily_limit_for_date(500.0, date(2026, 2, 28)), 500.0);
}

#[test]
fn test_december_crosses_year_for_month_length() {
    assert_eq!(daily_limit_for_date(3100.0, date(2026, 12, 1)), 100.0);
}
