//! Z-score scaling with the ratio model's fixed per-feature constants.
//!
//! The mean/scale tables are training-time artifacts and must match the
//! deployed model bit-for-bit. They are applied cyclically by feature
//! position across the flattened window.

use crate::models::RATIO_FEATURES;

/// Fixed per-feature standardization constants.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingParams {
    pub mean: [f32; RATIO_FEATURES],
    pub scale: [f32; RATIO_FEATURES],
}

/// Scaling constants for the category-ratio model.
pub const RATIO_SCALING: ScalingParams = ScalingParams {
    mean: [
        5.173333,
        1.000000,
        3.833333,
        100000.000000,
        0.011111,
        0.093333,
        0.055556,
        0.066667,
        0.046667,
        0.046667,
        0.048889,
        0.048889,
        0.048889,
        0.046667,
        0.046667,
        1265.651852,
        974.277778,
        110.688889,
        15.777778,
        791.200000,
        16.000000,
        80.288889,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
    ],
    scale: [
        8.870986,
        1.634353,
        6.494870,
        141421.356237,
        0.104822,
        0.290899,
        0.229061,
        0.249444,
        0.210924,
        0.210924,
        0.215636,
        0.215636,
        0.215636,
        0.210924,
        0.210924,
        2351.353313,
        2026.558654,
        546.360524,
        159.568245,
        1735.756338,
        99.947394,
        869.605099,
        1.0,
        1.0,
        1.0,
        1.0,
        1.0,
        1.0,
        1.0,
    ],
};

impl ScalingParams {
    /// `scaled[i] = (raw[i] - mean[i % width]) / scale[i % width]`
    pub fn scale(&self, raw: &[f32]) -> Vec<f32> {
        raw.iter()
            .enumerate()
            .map(|(i, x)| {
                let j = i % RATIO_FEATURES;
                (x - self.mean[j]) / self.scale[j]
            })
            .collect()
    }

    /// Inverse of [`scale`](Self::scale), up to floating-point error.
    pub fn descale(&self, scaled: &[f32]) -> Vec<f32> {
        scaled
            .iter()
            .enumerate()
            .map(|(i, z)| {
                let j = i % RATIO_FEATURES;
                z * self.scale[j] + self.mean[j]
            })
            .collect()
    }
}
