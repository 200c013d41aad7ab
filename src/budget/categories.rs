//! Fixed spending categories shared by the models, the ledger, and the
//! budget analysis. The order is part of the ratio model's output contract.

pub const CATEGORY_COUNT: usize = 7;

/// Internal category keys, in model output order.
pub const CATEGORY_KEYS: [&str; CATEGORY_COUNT] = [
    "food",
    "transport",
    "entertainment",
    "clothing_beauty_daily",
    "utilities",
    "social",
    "other",
];

/// Display names mapped 1:1 to [`CATEGORY_KEYS`].
pub const CATEGORY_DISPLAY_NAMES: [&str; CATEGORY_COUNT] = [
    "食費",
    "交通",
    "娯楽",
    "衣類・美容・日用品",
    "光熱費",
    "交際費",
    "その他",
];

/// Synthetic budget-map key holding the sum across all categories.
pub const TOTAL_BUDGET_KEY: &str = "total_budget";

/// Map an internal category key to its display name. Categories outside
/// the fixed table (already display names, or user-defined) pass through.
pub fn display_name(category: &str) -> &str {
    CATEGORY_KEYS
        .iter()
        .position(|&key| key == category)
        .map(|i| CATEGORY_DISPLAY_NAMES[i])
        .unwrap_or(category)
}
