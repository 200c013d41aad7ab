//! Unit tests for budget derivation

use chrono::NaiveDate;
use kakeibo::budget::{
    derive_last_month_budget, load_last_month_budget, CATEGORY_DISPLAY_NAMES, TOTAL_BUDGET_KEY,
};
use kakeibo::ledger::LedgerStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_sums_previous_month_only() {
    let store = LedgerStore::from_lines([
        "2026-06-30,食費,999",  // two months back, excluded
        "2026-07-05,食費,1000",
        "2026-07-20,食費,500",
        "2026-07-10,交通,300",
        "2026-08-01,食費,777",  // current month, excluded
    ]);
    let budget = derive_last_month_budget(&store, date(2026, 8, 15));

    assert_eq!(budget["食費"], 1500.0);
    assert_eq!(budget["交通"], 300.0);
    assert_eq!(budget[TOTAL_BUDGET_KEY], 1800.0);
}

#[test]
fn test_internal_keys_map_to_display_names() {
    let store = LedgerStore::from_lines([
        "2026-07-05,food,1000",
        "2026-07-06,食費,200",
        "2026-07-07,utilities,800",
    ]);
    let budget = derive_last_month_budget(&store, date(2026, 8, 1));

    // Internal key and display name land in the same bucket.
    assert_eq!(budget["食費"], 1200.0);
    assert_eq!(budget["光熱費"], 800.0);
}

#[test]
fn test_unknown_category_passes_through() {
    let store = LedgerStore::from_lines(["2026-07-05,旅行,5000"]);
    let budget = derive_last_month_budget(&store, date(2026, 8, 1));
    assert_eq!(budget["旅行"], 5000.0);
    assert_eq!(budget[TOTAL_BUDGET_KEY], 5000.0);
}

#[test]
fn test_january_looks_at_previous_december() {
    let store = LedgerStore::from_lines([
        "2025-12-20,食費,2500",
        "2026-01-05,食費,100",
    ]);
    let budget = derive_last_month_budget(&store, date(2026, 1, 10));
    assert_eq!(budget["食費"], 2500.0);
}

#[test]
fn test_empty_month_yields_zero_map() {
    let store = LedgerStore::from_lines(["2026-05-01,食費,100"]);
    let budget = derive_last_month_budget(&store, date(2026, 8, 15));

    for name in CATEGORY_DISPLAY_NAMES {
        assert_eq!(budget[name], 0.0);
    }
    assert_eq!(budget[TOTAL_BUDGET_KEY], 0.0);
}

#[test]
fn test_missing_ledger_degrades_to_zero_budget() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");
    let budget = load_last_month_budget(&path, date(2026, 8, 15)).unwrap();

    assert_eq!(budget[TOTAL_BUDGET_KEY], 0.0);
    for name in CATEGORY_DISPLAY_NAMES {
        assert_eq!(budget[name], 0.0);
    }
}

#[test]
fn test_existing_ledger_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spending.csv");
    std::fs::write(&path, "2026-07-05,food,1000\n").unwrap();

    let budget = load_last_month_budget(&path, date(2026, 8, 15)).unwrap();
    assert_eq!(budget["食費"], 1000.0);
}
