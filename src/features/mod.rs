pub mod calendar;
pub mod error;
pub mod ratio;
pub mod rolling;
pub mod scaling;
pub mod total;

pub use error::FeatureError;
pub use ratio::build_ratio_window;
pub use rolling::RollingHistory;
pub use scaling::{ScalingParams, RATIO_SCALING};
pub use total::build_total_window;
