//! Feature builder for the category-ratio model (21 days × 29 features).
//!
//! Per-day layout:
//!   0..8   calendar: day, month, ISO week, monthly income, payday flag,
//!          weekend flag, month-start flag, month-end flag
//!   8..15  day-of-week one-hot (Sunday at 0)
//!   15..22 rolling mean of each fixed category over the trailing 3 days
//!   22..29 spike flag per category
//!
//! The raw matrix is z-score scaled with the fixed tables before use.

use chrono::Datelike;

use crate::budget::categories::CATEGORY_KEYS;
use crate::features::calendar::{
    flag, is_month_end, is_month_start, is_payday, is_weekend, iso_week, weekday_index,
    MONTHLY_INCOME,
};
use crate::features::error::FeatureError;
use crate::features::rolling::RollingHistory;
use crate::features::scaling::RATIO_SCALING;
use crate::ledger::LedgerStore;
use crate::models::{DailyTotals, FeatureWindow, RATIO_FEATURES, SEQUENCE_DAYS};

/// Trailing window for rolling statistics, in days.
pub const ROLLING_WINDOW: usize = 3;
/// Spike threshold: diff must exceed this many rolling stds.
const SPIKE_STD_FACTOR: f32 = 2.0;

/// Build the scaled ratio-model input from the most recent 21 ledger dates.
pub fn build_ratio_window(store: &LedgerStore) -> Result<FeatureWindow, FeatureError> {
    let dates = store.recent_dates(SEQUENCE_DAYS);
    if dates.len() < SEQUENCE_DAYS {
        return Err(FeatureError::InsufficientHistory {
            have: dates.len(),
            need: SEQUENCE_DAYS,
        });
    }

    let mut history = RollingHistory::new(ROLLING_WINDOW);
    let mut previous: Option<DailyTotals> = None;
    let mut raw = Vec::with_capacity(SEQUENCE_DAYS * RATIO_FEATURES);

    for &date in &dates {
        let totals = store.totals_for(date).cloned().unwrap_or_default();
        history.push(totals.clone());

        raw.push(date.day() as f32);
        raw.push(date.month() as f32);
        raw.push(iso_week(date) as f32);
        raw.push(MONTHLY_INCOME);
        raw.push(flag(is_payday(date)));
        raw.push(flag(is_weekend(date)));
        raw.push(flag(is_month_start(date)));
        raw.push(flag(is_month_end(date)));

        let dow = weekday_index(date);
        for slot in 0..7 {
            raw.push(flag(slot == dow));
        }

        for category in CATEGORY_KEYS {
            raw.push(history.mean(category));
        }

        for category in CATEGORY_KEYS {
            raw.push(spike_flag(category, &totals, previous.as_ref(), &history));
        }

        previous = Some(totals);
    }

    Ok(FeatureWindow::new(
        SEQUENCE_DAYS,
        RATIO_FEATURES,
        RATIO_SCALING.scale(&raw),
    ))
}

/// 1 when today's change from yesterday exceeds twice the rolling std.
///
/// A zero std never flags (guards the degenerate always-true comparison),
/// and the first day has no yesterday so its diff is 0.
fn spike_flag(
    category: &str,
    today: &DailyTotals,
    yesterday: Option<&DailyTotals>,
    history: &RollingHistory,
) -> f32 {
    let diff = match yesterday {
        Some(prev) => {
            let current = today.get(category).copied().unwrap_or(0.0);
            let before = prev.get(category).copied().unwrap_or(0.0);
            (current - before).abs()
        }
        None => 0.0,
    };
    let std = history.std(category);
    flag(std != 0.0 && diff > SPIKE_STD_FACTOR * std)
}
