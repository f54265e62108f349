use serde::{Deserialize, Serialize};

use crate::features::FEATURE_COUNT;

/// Previously fit per-column transform applied before scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scaler", rename_all = "snake_case")]
pub enum FeatureScaler {
    /// `(x - mean) / scale`; a zero scale leaves the centered value as is.
    Standard {
        mean: [f64; FEATURE_COUNT],
        scale: [f64; FEATURE_COUNT],
    },
    /// `x * scale + min`
    MinMax {
        min: [f64; FEATURE_COUNT],
        scale: [f64; FEATURE_COUNT],
    },
}

impl FeatureScaler {
    pub fn transform(&self, row: &[f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
        match self {
            FeatureScaler::Standard { mean, scale } => std::array::from_fn(|i| {
                let s = if scale[i] == 0.0 { 1.0 } else { scale[i] };
                (row[i] - mean[i]) / s
            }),
            FeatureScaler::MinMax { min, scale } => {
                std::array::from_fn(|i| row[i] * scale[i] + min[i])
            }
        }
    }
}
