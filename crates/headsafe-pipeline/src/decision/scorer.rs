use headsafe_models::{Classifier, FEATURE_COUNT};

use crate::error::PipelineError;

/// Positive-class probability for one already-scaled row.
pub fn score(classifier: &dyn Classifier, row: &[f64; FEATURE_COUNT]) -> Result<f64, PipelineError> {
    let probability = classifier.predict_proba(row);
    if probability.is_nan() {
        return Err(PipelineError::InvalidProbability(probability));
    }
    Ok(probability.clamp(0.0, 1.0))
}
