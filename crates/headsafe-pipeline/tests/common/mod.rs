#![allow(dead_code)]

use std::path::Path;

use headsafe_models::{Classifier, ModelKind, FEATURE_COUNT};
use headsafe_pipeline::ArtifactKey;

/// Classifier stub that ignores its input.
#[derive(Debug)]
pub struct FixedScore {
    pub kind: ModelKind,
    pub probability: f64,
}

impl Classifier for FixedScore {
    fn kind(&self) -> ModelKind {
        self.kind
    }

    fn predict_proba(&self, _row: &[f64; FEATURE_COUNT]) -> f64 {
        self.probability
    }
}

/// Logistic model whose probability is `sigmoid(coef · x + intercept)`.
pub fn logistic_json(coef: [f64; FEATURE_COUNT], intercept: f64) -> String {
    serde_json::json!({
        "estimator": "logistic_regression",
        "coef": coef,
        "intercept": intercept,
    })
    .to_string()
}

pub fn identity_scaler_json() -> String {
    serde_json::json!({
        "scaler": "standard",
        "mean": ([0.0; FEATURE_COUNT]),
        "scale": ([1.0; FEATURE_COUNT]),
    })
    .to_string()
}

pub fn write_model(dir: &Path, key: ArtifactKey, body: &str) {
    std::fs::write(dir.join(key.model_file_name()), body).expect("write model");
}

pub fn write_threshold(dir: &Path, key: ArtifactKey, threshold: f64) {
    std::fs::write(dir.join(key.threshold_file_name()), threshold.to_string())
        .expect("write threshold");
}

pub fn write_scaler(dir: &Path, key: ArtifactKey, body: &str) {
    std::fs::write(dir.join(key.scaler_file_name()), body).expect("write scaler");
}

/// Writes a complete logistic bundle with an identity scaler.
pub fn write_logistic_bundle(dir: &Path, key: ArtifactKey, intercept: f64, threshold: f64) {
    assert_eq!(key.model, ModelKind::LogisticRegression);
    write_model(dir, key, &logistic_json([0.0; FEATURE_COUNT], intercept));
    write_threshold(dir, key, threshold);
    write_scaler(dir, key, &identity_scaler_json());
}

/// ln(p / (1 - p))
pub fn logit(p: f64) -> f64 {
    (p / (1.0 - p)).ln()
}
