pub mod engine;
pub mod error;
pub mod inference;

pub use engine::{ForecastEngine, TOTAL_MEAN, TOTAL_STD};
pub use error::{ForecastError, InferenceError};
pub use inference::{InferenceService, ModelId, PlaceholderInferenceService};
