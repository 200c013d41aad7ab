//! Reference budget derived from last month's actuals.

use chrono::{Datelike, NaiveDate};
use std::path::Path;
use tracing::warn;

use crate::budget::categories::{display_name, CATEGORY_DISPLAY_NAMES, TOTAL_BUDGET_KEY};
use crate::ledger::{LedgerError, LedgerStore};
use crate::models::BudgetMap;

/// Calendar month immediately preceding the month containing `today`.
fn previous_month(today: NaiveDate) -> (i32, u32) {
    if today.month() == 1 {
        (today.year() - 1, 12)
    } else {
        (today.year(), today.month() - 1)
    }
}

/// Budget map with every display category (and the total) at zero.
fn zero_budget() -> BudgetMap {
    let mut budget: BudgetMap = CATEGORY_DISPLAY_NAMES
        .iter()
        .map(|name| (name.to_string(), 0.0))
        .collect();
    budget.insert(TOTAL_BUDGET_KEY.to_string(), 0.0);
    budget
}

/// Sum last month's actuals per display-name category and add the
/// synthetic `total_budget` entry. An empty month yields the zero map.
pub fn derive_last_month_budget(store: &LedgerStore, today: NaiveDate) -> BudgetMap {
    let (year, month) = previous_month(today);
    let mut budget = zero_budget();

    for (category, amount) in store.month_totals(year, month) {
        *budget
            .entry(display_name(&category).to_string())
            .or_insert(0.0) += amount;
    }

    let total: f32 = budget
        .iter()
        .filter(|(name, _)| name.as_str() != TOTAL_BUDGET_KEY)
        .map(|(_, amount)| amount)
        .sum();
    budget.insert(TOTAL_BUDGET_KEY.to_string(), total);
    budget
}

/// Load the ledger and derive last month's budget.
///
/// A missing ledger degrades to the all-zero budget instead of failing;
/// other I/O failures propagate.
pub fn load_last_month_budget(
    path: &Path,
    today: NaiveDate,
) -> Result<BudgetMap, LedgerError> {
    match LedgerStore::load(path) {
        Ok(store) => Ok(derive_last_month_budget(&store, today)),
        Err(LedgerError::Missing(path)) => {
            warn!(path = %path.display(), "no ledger file, using zero budget");
            Ok(zero_budget())
        }
        Err(err) => Err(err),
    }
}
