//! Unit tests for the total-model feature builder

use kakeibo::features::{build_total_window, FeatureError};
use kakeibo::ledger::LedgerStore;
use kakeibo::models::{SEQUENCE_DAYS, TOTAL_FEATURES};

fn july_ledger() -> LedgerStore {
    let mut lines = Vec::new();
    for day in 1..=21u32 {
        lines.push(format!("2026-07-{day:02},food,1000"));
        lines.push(format!("2026-07-{day:02},transport,200"));
    }
    LedgerStore::from_lines(lines)
}

#[test]
fn test_window_shape() {
    let window = build_total_window(&july_ledger()).unwrap();
    assert_eq!(window.days(), SEQUENCE_DAYS);
    assert_eq!(window.features(), TOTAL_FEATURES);
}

#[test]
fn test_insufficient_history_is_rejected() {
    let store = LedgerStore::from_lines(["2026-07-01,food,1000"]);
    assert!(matches!(
        build_total_window(&store),
        Err(FeatureError::InsufficientHistory { have: 1, .. })
    ));
}

#[test]
fn test_first_day_row() {
    let window = build_total_window(&july_ledger()).unwrap();
    let row = window.row(0); // 2026-07-01, a Wednesday

    assert_eq!(row[0], 1200.0); // categories summed into the daily total
    assert_eq!(row[1], 3.0); // weekday with Sunday at 0
    assert_eq!(row[2], 0.0); // holiday flag
    assert_eq!(row[3], 0.0); // weekend flag
    assert_eq!(row[4], 1.0); // month start
    assert_eq!(row[5], 0.0); // month end
    assert_eq!(row[6], 1.0 - 25.0); // days from payday
}

#[test]
fn test_weekday_flag_quirks() {
    let window = build_total_window(&july_ledger()).unwrap();

    // 2026-07-03, Friday: zero-based weekday 5 counts as "weekend" in the
    // model's contract, but not as a holiday.
    let friday = window.row(2);
    assert_eq!(friday[1], 5.0);
    assert_eq!(friday[2], 0.0);
    assert_eq!(friday[3], 1.0);

    // 2026-07-04, Saturday: both flags.
    let saturday = window.row(3);
    assert_eq!(saturday[1], 6.0);
    assert_eq!(saturday[2], 1.0);
    assert_eq!(saturday[3], 1.0);

    // 2026-07-05, Sunday: holiday but weekday 0 is below the weekend cut.
    let sunday = window.row(4);
    assert_eq!(sunday[1], 0.0);
    assert_eq!(sunday[2], 1.0);
    assert_eq!(sunday[3], 0.0);
}

#[test]
fn test_reserved_slots_stay_zero() {
    let window = build_total_window(&july_ledger()).unwrap();
    for day in 0..SEQUENCE_DAYS {
        let row = window.row(day);
        for slot in 7..TOTAL_FEATURES {
            assert_eq!(row[slot], 0.0, "day {day} slot {slot}");
        }
    }
}
