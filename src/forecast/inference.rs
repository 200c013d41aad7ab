//! Injected model-execution capability.
//!
//! The execution engine itself (ONNX runtime or otherwise) is opaque to the
//! pipeline: tensor in, tensor out. Callers open a service once, reuse it
//! across forecasts, and drop it on shutdown; the engine only borrows it.

use serde::{Deserialize, Serialize};

use crate::budget::categories::CATEGORY_COUNT;
use crate::forecast::error::InferenceError;
use crate::models::{FeatureWindow, RATIO_FEATURES, TOTAL_FEATURES};

/// Identifies which pretrained model an inference call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelId {
    /// Per-category proportion model, input (1, 21, 29), output 7 floats.
    Ratio,
    /// Next-day standardized total model, input (1, 21, 17), output 1 float.
    Total,
}

impl ModelId {
    /// Features per day the model's input window must carry.
    pub fn input_features(&self) -> usize {
        match self {
            ModelId::Ratio => RATIO_FEATURES,
            ModelId::Total => TOTAL_FEATURES,
        }
    }

    /// Length of the model's output row.
    pub fn output_len(&self) -> usize {
        match self {
            ModelId::Ratio => CATEGORY_COUNT,
            ModelId::Total => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ModelId::Ratio => "ratio",
            ModelId::Total => "total",
        }
    }
}

/// Opaque model execution: one window in, one output row out.
///
/// Calls may block for an unbounded time; failures are surfaced to the
/// caller rather than retried.
pub trait InferenceService {
    fn run(&self, model: ModelId, window: &FeatureWindow) -> Result<Vec<f32>, InferenceError>;
}

/// Zero-output stand-in for wiring and tests while no real backend is
/// attached.
pub struct PlaceholderInferenceService;

impl InferenceService for PlaceholderInferenceService {
    fn run(&self, model: ModelId, window: &FeatureWindow) -> Result<Vec<f32>, InferenceError> {
        if window.features() != model.input_features() {
            return Err(InferenceError::ShapeMismatch {
                model: model.name(),
                expected: model.input_features(),
                actual: window.features(),
            });
        }
        Ok(vec![0.0; model.output_len()])
    }
}
