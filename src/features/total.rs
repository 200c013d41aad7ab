//! Feature builder for the total-amount model (21 days × 17 features).
//!
//! Only the first 7 slots of each row are populated; the remaining 10 are
//! reserved and stay zero. No scaling happens here: standardization is
//! folded into the forecast engine's post-processing.

use crate::features::calendar::{
    days_from_payday, flag, is_month_end, is_month_start, weekday_index,
};
use crate::features::error::FeatureError;
use crate::ledger::LedgerStore;
use crate::models::{FeatureWindow, SEQUENCE_DAYS, TOTAL_FEATURES};

/// Build the unscaled total-model input from the most recent 21 ledger dates.
pub fn build_total_window(store: &LedgerStore) -> Result<FeatureWindow, FeatureError> {
    let dates = store.recent_dates(SEQUENCE_DAYS);
    if dates.len() < SEQUENCE_DAYS {
        return Err(FeatureError::InsufficientHistory {
            have: dates.len(),
            need: SEQUENCE_DAYS,
        });
    }

    let mut data = vec![0.0f32; SEQUENCE_DAYS * TOTAL_FEATURES];
    for (i, &date) in dates.iter().enumerate() {
        let dow = weekday_index(date);
        let row = &mut data[i * TOTAL_FEATURES..(i + 1) * TOTAL_FEATURES];
        row[0] = store.daily_total(date);
        row[1] = dow as f32;
        // Sunday/Saturday flag, then the model's zero-based weekday >= 5 flag.
        row[2] = flag(dow == 0 || dow == 6);
        row[3] = flag(dow >= 5);
        row[4] = flag(is_month_start(date));
        row[5] = flag(is_month_end(date));
        row[6] = days_from_payday(date);
    }

    Ok(FeatureWindow::new(SEQUENCE_DAYS, TOTAL_FEATURES, data))
}
