//! Append-only spending ledger: parsing, grouping, and appending.
//!
//! One reader serves every consumer: category at column 1, amount at the
//! last column, minimum 3 columns. Extra interior columns are tolerated so
//! older multi-column lines still parse.

use chrono::{DateTime, Datelike, NaiveDate};
use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::ledger::error::LedgerError;
use crate::models::{DailyTotals, SpendingRecord};

/// Column index holding the category name.
pub const CATEGORY_COLUMN: usize = 1;
/// Minimum columns a line must have to be considered a record.
pub const MIN_COLUMNS: usize = 3;

/// Parse one ledger line into a record.
///
/// Returns `None` (the line is skipped) when the date is unparseable or
/// fewer than [`MIN_COLUMNS`] columns are present. An unparseable amount
/// defaults to 0, not a skip.
pub fn parse_line(line: &str) -> Option<SpendingRecord> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() < MIN_COLUMNS {
        return None;
    }
    let date = parse_date(parts[0].trim())?;
    let category = parts[CATEGORY_COLUMN].trim();
    if category.is_empty() {
        return None;
    }
    let amount = parts[parts.len() - 1].trim().parse::<f32>().unwrap_or(0.0);
    Some(SpendingRecord::new(date, category, amount))
}

/// Accept a plain ISO date or an RFC 3339 timestamp, normalized to a date.
fn parse_date(field: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(field, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(field)
        .map(|ts| ts.date_naive())
        .ok()
}

/// In-memory view of the ledger, grouped by date and category.
///
/// Grouping is purely additive: duplicate (date, category) entries sum,
/// and the result is deterministic regardless of line order.
#[derive(Debug, Clone, Default)]
pub struct LedgerStore {
    totals: BTreeMap<NaiveDate, DailyTotals>,
}

impl LedgerStore {
    /// Load and group the ledger file.
    pub fn load(path: &Path) -> Result<Self, LedgerError> {
        if !path.exists() {
            return Err(LedgerError::Missing(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_lines(content.lines()))
    }

    /// Group an in-memory sequence of ledger lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut totals: BTreeMap<NaiveDate, DailyTotals> = BTreeMap::new();
        let mut skipped = 0usize;
        for line in lines {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(line) {
                Some(record) => {
                    *totals
                        .entry(record.date)
                        .or_default()
                        .entry(record.category)
                        .or_insert(0.0) += record.amount;
                }
                None => {
                    skipped += 1;
                    debug!(line, "skipping unparseable ledger line");
                }
            }
        }
        if skipped > 0 {
            debug!(skipped, "ledger lines skipped during parse");
        }
        Self { totals }
    }

    /// All dates with at least one record, ascending.
    pub fn sorted_dates(&self) -> Vec<NaiveDate> {
        self.totals.keys().copied().collect()
    }

    /// The most recent up-to-`n` dates, oldest first.
    pub fn recent_dates(&self, n: usize) -> Vec<NaiveDate> {
        let dates = self.sorted_dates();
        let start = dates.len().saturating_sub(n);
        dates[start..].to_vec()
    }

    pub fn daily_category_totals(&self) -> &BTreeMap<NaiveDate, DailyTotals> {
        &self.totals
    }

    /// Per-category totals of one date, if any records exist for it.
    pub fn totals_for(&self, date: NaiveDate) -> Option<&DailyTotals> {
        self.totals.get(&date)
    }

    /// Total amount spent on one date (0 when absent).
    pub fn daily_total(&self, date: NaiveDate) -> f32 {
        self.totals
            .get(&date)
            .map(|t| t.values().sum())
            .unwrap_or(0.0)
    }

    /// Per-category sums restricted to one calendar month.
    pub fn month_totals(&self, year: i32, month: u32) -> BTreeMap<String, f32> {
        let mut sums: BTreeMap<String, f32> = BTreeMap::new();
        for (date, daily) in &self.totals {
            if date.year() != year || date.month() != month {
                continue;
            }
            for (category, amount) in daily {
                *sums.entry(category.clone()).or_insert(0.0) += amount;
            }
        }
        sums
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// Append one record to the ledger file, creating it if absent.
///
/// Rejects non-positive amounts before touching the file.
pub fn append(
    path: &Path,
    date: NaiveDate,
    category: &str,
    amount: f32,
) -> Result<(), LedgerError> {
    if !(amount > 0.0) {
        return Err(LedgerError::InvalidAmount(amount));
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{},{},{}", date.format("%Y-%m-%d"), category, amount)?;
    debug!(%date, category, amount, "appended ledger entry");
    Ok(())
}
