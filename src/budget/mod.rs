pub mod categories;
pub mod daily_limit;
pub mod derive;
pub mod rebalance;
pub mod risk;

pub use categories::{display_name, CATEGORY_COUNT, CATEGORY_DISPLAY_NAMES, CATEGORY_KEYS, TOTAL_BUDGET_KEY};
pub use daily_limit::{daily_limit, daily_limit_for_date};
pub use derive::{derive_last_month_budget, load_last_month_budget};
pub use rebalance::{plan_rebalance, RebalancePlan};
pub use risk::classify;
