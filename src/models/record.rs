use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One dated, categorized spending entry parsed from a ledger line.
///
/// Records are re-parsed from storage on every pipeline run and never
/// cached across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingRecord {
    pub date: NaiveDate,
    pub category: String,
    pub amount: f32,
}

impl SpendingRecord {
    pub fn new(date: NaiveDate, category: impl Into<String>, amount: f32) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
        }
    }
}

/// Per-category summed amounts for a single date.
pub type DailyTotals = BTreeMap<String, f32>;
