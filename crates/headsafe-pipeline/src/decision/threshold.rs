use crate::error::PipelineError;

/// The user-adjustable decision threshold.
///
/// Starts at the artifact's stored default clamped into `[MIN, MAX]`; values
/// set by the user must already be in range and snap to `STEP`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdControl {
    value: f64,
}

impl ThresholdControl {
    pub const MIN: f64 = 0.1;
    pub const MAX: f64 = 0.9;
    pub const STEP: f64 = 0.01;

    pub fn from_default(stored: f64) -> Self {
        Self {
            value: stored.clamp(Self::MIN, Self::MAX),
        }
    }

    pub fn set(&mut self, value: f64) -> Result<f64, PipelineError> {
        self.value = Self::validate(value)?;
        Ok(self.value)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Range check plus snapping, without touching any control.
    pub fn validate(value: f64) -> Result<f64, PipelineError> {
        if !(value.is_finite() && (Self::MIN..=Self::MAX).contains(&value)) {
            return Err(PipelineError::ThresholdOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        let per_unit = (1.0 / Self::STEP).round();
        let snapped = (value * per_unit).round() / per_unit;
        Ok(snapped.clamp(Self::MIN, Self::MAX))
    }
}
