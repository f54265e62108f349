use serde::{Deserialize, Serialize};

use crate::features::FEATURE_COUNT;
use crate::{Classifier, ModelKind};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Kernel {
    Linear,
    Rbf { gamma: f64 },
    Poly { gamma: f64, coef0: f64, degree: i32 },
    Sigmoid { gamma: f64, coef0: f64 },
}

impl Kernel {
    fn apply(&self, x: &[f64; FEATURE_COUNT], y: &[f64; FEATURE_COUNT]) -> f64 {
        let dot = || x.iter().zip(y.iter()).map(|(a, b)| a * b).sum::<f64>();
        match *self {
            Kernel::Linear => dot(),
            Kernel::Rbf { gamma } => {
                let sq_dist: f64 = x.iter().zip(y.iter()).map(|(a, b)| (a - b) * (a - b)).sum();
                (-gamma * sq_dist).exp()
            }
            Kernel::Poly {
                gamma,
                coef0,
                degree,
            } => (gamma * dot() + coef0).powi(degree),
            Kernel::Sigmoid { gamma, coef0 } => (gamma * dot() + coef0).tanh(),
        }
    }
}

/// Kernel SVM with Platt-calibrated probabilities.
///
/// Decision value: f(x) = Σ dual_coef_i · K(sv_i, x) + intercept, positive
/// towards the High class. Probability: 1 / (1 + exp(prob_a · f + prob_b)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportVectorClassifier {
    pub kernel: Kernel,
    pub support_vectors: Vec<[f64; FEATURE_COUNT]>,
    pub dual_coef: Vec<f64>,
    pub intercept: f64,
    pub prob_a: f64,
    pub prob_b: f64,
}

impl SupportVectorClassifier {
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.support_vectors.is_empty() {
            return Err("svm has no support vectors".to_string());
        }
        if self.support_vectors.len() != self.dual_coef.len() {
            return Err(format!(
                "svm has {} support vectors but {} dual coefficients",
                self.support_vectors.len(),
                self.dual_coef.len()
            ));
        }
        Ok(())
    }

    pub fn decision_function(&self, row: &[f64; FEATURE_COUNT]) -> f64 {
        self.support_vectors
            .iter()
            .zip(self.dual_coef.iter())
            .map(|(sv, alpha)| alpha * self.kernel.apply(sv, row))
            .sum::<f64>()
            + self.intercept
    }
}

impl Classifier for SupportVectorClassifier {
    fn kind(&self) -> ModelKind {
        ModelKind::Svm
    }

    fn predict_proba(&self, row: &[f64; FEATURE_COUNT]) -> f64 {
        let f = self.decision_function(row);
        1.0 / (1.0 + (self.prob_a * f + self.prob_b).exp())
    }
}
