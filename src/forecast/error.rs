/// Error types surfaced by inference backends.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    /// Input window shape does not match the model's contract.
    #[error("model {model} expects {expected} features per day, got {actual}")]
    ShapeMismatch {
        model: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Opaque failure inside the model-execution backend.
    #[error("inference backend error: {0}")]
    Backend(String),
}

/// Error types for forecast operations.
#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    #[error(transparent)]
    Inference(#[from] InferenceError),

    /// Backend returned a tensor of the wrong size.
    #[error("model returned {actual} outputs, expected {expected}")]
    BadOutput { expected: usize, actual: usize },
}
