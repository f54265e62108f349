use serde::{Deserialize, Serialize};

use crate::features::FEATURE_COUNT;

/// Classifier family that produced a trained artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    RandomForest,
    #[serde(rename = "SVM")]
    Svm,
    LogisticRegression,
    #[serde(rename = "XGBoost")]
    XgBoost,
}

impl ModelKind {
    pub const ALL: [ModelKind; 4] = [
        ModelKind::RandomForest,
        ModelKind::Svm,
        ModelKind::LogisticRegression,
        ModelKind::XgBoost,
    ];

    /// Lowercase stem used in artifact file names.
    pub fn file_stem(self) -> &'static str {
        match self {
            ModelKind::RandomForest => "randomforest",
            ModelKind::Svm => "svm",
            ModelKind::LogisticRegression => "logisticregression",
            ModelKind::XgBoost => "xgboost",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::RandomForest => "RandomForest",
            ModelKind::Svm => "SVM",
            ModelKind::LogisticRegression => "LogisticRegression",
            ModelKind::XgBoost => "XGBoost",
        }
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for ModelKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ModelKind::ALL
            .into_iter()
            .find(|kind| {
                kind.display_name().eq_ignore_ascii_case(wanted)
                    || kind.file_stem().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownVariant {
                what: "model kind",
                value: wanted.to_string(),
            })
    }
}

/// Ground-truth outcome a classifier was trained to predict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetLabel {
    #[serde(rename = "PLA")]
    Pla,
    #[serde(rename = "PAA")]
    Paa,
}

impl TargetLabel {
    pub const ALL: [TargetLabel; 2] = [TargetLabel::Pla, TargetLabel::Paa];

    pub fn as_str(self) -> &'static str {
        match self {
            TargetLabel::Pla => "PLA",
            TargetLabel::Paa => "PAA",
        }
    }
}

impl std::fmt::Display for TargetLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TargetLabel {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TargetLabel::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownVariant {
                what: "target label",
                value: wanted.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {what}: {value:?}")]
pub struct UnknownVariant {
    pub what: &'static str,
    pub value: String,
}

/// A trained binary classifier scoring one row at a time.
///
/// `predict_proba` returns the estimated probability of the positive class
/// (High impact). Inputs must already be in canonical feature order and in
/// the representation the model was fit on (post-scaling when a scaler
/// applies).
pub trait Classifier: Send + Sync + std::fmt::Debug {
    fn kind(&self) -> ModelKind;
    fn predict_proba(&self, row: &[f64; FEATURE_COUNT]) -> f64;
}
