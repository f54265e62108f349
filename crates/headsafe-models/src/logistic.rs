use serde::{Deserialize, Serialize};

use crate::features::FEATURE_COUNT;
use crate::{Classifier, ModelKind};

pub(crate) fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub coef: [f64; FEATURE_COUNT],
    pub intercept: f64,
}

impl LogisticRegression {
    pub fn decision_function(&self, row: &[f64; FEATURE_COUNT]) -> f64 {
        self.coef
            .iter()
            .zip(row.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }
}

impl Classifier for LogisticRegression {
    fn kind(&self) -> ModelKind {
        ModelKind::LogisticRegression
    }

    fn predict_proba(&self, row: &[f64; FEATURE_COUNT]) -> f64 {
        sigmoid(self.decision_function(row))
    }
}
