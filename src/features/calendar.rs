//! Calendar-derived feature helpers shared by both builders.

use chrono::{Datelike, NaiveDate, Weekday};

/// Fixed monthly-income constant fed to the ratio model.
pub const MONTHLY_INCOME: f32 = 300_000.0;
/// Day of the month salary arrives.
pub const PAYDAY: u32 = 25;

/// ISO week number of the week-based year.
pub fn iso_week(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Day-of-week index with Sunday at 0 (ISO weekday number mod 7).
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().number_from_monday() as usize % 7
}

pub fn is_payday(date: NaiveDate) -> bool {
    date.day() == PAYDAY
}

/// Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn is_month_start(date: NaiveDate) -> bool {
    date.day() <= 5
}

pub fn is_month_end(date: NaiveDate) -> bool {
    date.day() >= PAYDAY
}

/// Signed distance from payday in days.
pub fn days_from_payday(date: NaiveDate) -> f32 {
    date.day() as f32 - PAYDAY as f32
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    match next_month.and_then(|d| d.pred_opt()) {
        Some(last_day) => last_day.day(),
        None => 31,
    }
}

/// Days left in the month, counting `date` itself. At least 1.
pub fn days_remaining_in_month(date: NaiveDate) -> u32 {
    (days_in_month(date) - date.day() + 1).max(1)
}

pub fn flag(condition: bool) -> f32 {
    if condition {
        1.0
    } else {
        0.0
    }
}
