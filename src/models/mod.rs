//! Shared data models spanning the pipeline layers.

pub mod forecast;
pub mod record;
pub mod report;
pub mod window;

pub use forecast::{BudgetMap, ForecastResult, RiskLevel};
pub use record::{DailyTotals, SpendingRecord};
pub use report::{CategoryProjection, ForecastReport};
pub use window::{FeatureWindow, RATIO_FEATURES, SEQUENCE_DAYS, TOTAL_FEATURES};
