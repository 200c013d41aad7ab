use serde::{Deserialize, Serialize};

/// Number of days in one model input window.
pub const SEQUENCE_DAYS: usize = 21;
/// Features per day for the category-ratio model.
pub const RATIO_FEATURES: usize = 29;
/// Features per day for the total-amount model.
pub const TOTAL_FEATURES: usize = 17;

/// A fixed-shape sequence of per-day feature vectors, flattened row-major.
///
/// One `FeatureWindow` is one model input; the tensor shape is
/// `(1, days, features)` of 32-bit floats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureWindow {
    days: usize,
    features: usize,
    data: Vec<f32>,
}

impl FeatureWindow {
    /// Build a window from pre-flattened row-major data.
    ///
    /// # Panics
    /// Panics when the buffer length does not equal `days * features`.
    pub fn new(days: usize, features: usize, data: Vec<f32>) -> Self {
        assert_eq!(
            data.len(),
            days * features,
            "feature window buffer must be days * features"
        );
        Self {
            days,
            features,
            data,
        }
    }

    /// All-zero window of the given shape.
    pub fn zeroed(days: usize, features: usize) -> Self {
        Self::new(days, features, vec![0.0; days * features])
    }

    pub fn days(&self) -> usize {
        self.days
    }

    pub fn features(&self) -> usize {
        self.features
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Feature vector of one day (0 = oldest).
    pub fn row(&self, day: usize) -> &[f32] {
        let start = day * self.features;
        &self.data[start..start + self.features]
    }

    /// Shift the window forward one day: drop the oldest day and append
    /// `next_day`. The row count stays fixed.
    ///
    /// # Panics
    /// Panics when `next_day` has the wrong width.
    pub fn advance(&mut self, next_day: &[f32]) {
        assert_eq!(
            next_day.len(),
            self.features,
            "appended day must match the window's feature width"
        );
        self.data.drain(..self.features);
        self.data.extend_from_slice(next_day);
    }
}
