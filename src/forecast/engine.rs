//! Forecast engine over an injected inference service.
//!
//! The ratio model is a single forward pass. The total model is driven
//! autoregressively: each step's standardized prediction is written back
//! into the window the next step consumes, so the loop is strictly
//! sequential and errors compound with no smoothing pass.

use tracing::debug;

use crate::budget::categories::CATEGORY_COUNT;
use crate::forecast::error::ForecastError;
use crate::forecast::inference::{InferenceService, ModelId};
use crate::models::{FeatureWindow, ForecastResult};

/// De-standardization constants of the total model's training data.
/// Must match the deployed model bit-for-bit.
pub const TOTAL_MEAN: f32 = 9871.933333;
pub const TOTAL_STD: f32 = 7781.569396;

pub struct ForecastEngine<'a> {
    inference: &'a dyn InferenceService,
}

impl<'a> ForecastEngine<'a> {
    pub fn new(inference: &'a dyn InferenceService) -> Self {
        Self { inference }
    }

    /// Single forward pass of the ratio model.
    ///
    /// The 7 outputs are returned untouched; they are treated as category
    /// proportions and consumers normalize if the model's output does not
    /// already sum to 1.
    pub fn predict_ratios(
        &self,
        window: &FeatureWindow,
    ) -> Result<[f32; CATEGORY_COUNT], ForecastError> {
        let output = self.inference.run(ModelId::Ratio, window)?;
        if output.len() < CATEGORY_COUNT {
            return Err(ForecastError::BadOutput {
                expected: CATEGORY_COUNT,
                actual: output.len(),
            });
        }
        let mut ratios = [0.0; CATEGORY_COUNT];
        ratios.copy_from_slice(&output[..CATEGORY_COUNT]);
        Ok(ratios)
    }

    /// Cumulative total forecast over `days` via the autoregressive loop.
    ///
    /// Each step predicts one standardized value `z`, accumulates its yen
    /// equivalent `z * TOTAL_STD + TOTAL_MEAN`, and shifts the window: the
    /// oldest day is dropped and an all-zero day is appended whose first
    /// slot carries `z` itself — the model consumes standardized history,
    /// not yen.
    pub fn predict_days(
        &self,
        window: &FeatureWindow,
        days: u32,
    ) -> Result<f32, ForecastError> {
        let mut current = window.clone();
        let mut total = 0.0f32;

        for step in 0..days {
            let output = self.inference.run(ModelId::Total, &current)?;
            let z = match output.first() {
                Some(&z) => z,
                None => {
                    return Err(ForecastError::BadOutput {
                        expected: 1,
                        actual: 0,
                    })
                }
            };
            let yen = z * TOTAL_STD + TOTAL_MEAN;
            total += yen;
            debug!(step, z, yen, "autoregressive step");

            let mut next_day = vec![0.0f32; current.features()];
            next_day[0] = z;
            current.advance(&next_day);
        }

        Ok(total)
    }

    /// Run both models and combine them into one result.
    pub fn forecast(
        &self,
        ratio_window: &FeatureWindow,
        total_window: &FeatureWindow,
        horizon_days: u32,
    ) -> Result<ForecastResult, ForecastError> {
        let total_amount = self.predict_days(total_window, horizon_days)?;
        let category_ratios = self.predict_ratios(ratio_window)?;
        Ok(ForecastResult {
            horizon_days,
            total_amount,
            category_ratios,
        })
    }
}
