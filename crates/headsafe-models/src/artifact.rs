use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::boosted::BoostedTrees;
use crate::forest::RandomForest;
use crate::logistic::LogisticRegression;
use crate::scaler::FeatureScaler;
use crate::svm::SupportVectorClassifier;
use crate::{Classifier, ModelKind};

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid artifact {}: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },
    #[error("{} holds a {found} model, expected {expected}", .path.display())]
    KindMismatch {
        path: PathBuf,
        expected: ModelKind,
        found: ModelKind,
    },
}

/// On-disk JSON export of a fitted classifier, tagged by `"estimator"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "estimator", rename_all = "snake_case")]
pub enum ModelArtifact {
    RandomForest(RandomForest),
    Svm(SupportVectorClassifier),
    LogisticRegression(LogisticRegression),
    Xgboost(BoostedTrees),
}

impl ModelArtifact {
    pub fn kind(&self) -> ModelKind {
        match self {
            ModelArtifact::RandomForest(_) => ModelKind::RandomForest,
            ModelArtifact::Svm(_) => ModelKind::Svm,
            ModelArtifact::LogisticRegression(_) => ModelKind::LogisticRegression,
            ModelArtifact::Xgboost(_) => ModelKind::XgBoost,
        }
    }

    fn validate(&self) -> Result<(), String> {
        match self {
            ModelArtifact::RandomForest(model) => model.validate(),
            ModelArtifact::Svm(model) => model.validate(),
            ModelArtifact::LogisticRegression(_) | ModelArtifact::Xgboost(_) => Ok(()),
        }
    }

    pub fn into_classifier(self) -> Box<dyn Classifier> {
        match self {
            ModelArtifact::RandomForest(model) => Box::new(model),
            ModelArtifact::Svm(model) => Box::new(model),
            ModelArtifact::LogisticRegression(model) => Box::new(model),
            ModelArtifact::Xgboost(model) => Box::new(model),
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let text = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a classifier and checks it is the family the caller asked for.
pub fn load_model(path: &Path, expected: ModelKind) -> Result<Box<dyn Classifier>, ArtifactError> {
    tracing::debug!(target: "headsafe_models", path = %path.display(), %expected, "loading model");
    let artifact: ModelArtifact = read_json(path)?;
    if artifact.kind() != expected {
        return Err(ArtifactError::KindMismatch {
            path: path.to_path_buf(),
            expected,
            found: artifact.kind(),
        });
    }
    artifact.validate().map_err(|reason| ArtifactError::Invalid {
        path: path.to_path_buf(),
        reason,
    })?;
    Ok(artifact.into_classifier())
}

pub fn load_scaler(path: &Path) -> Result<FeatureScaler, ArtifactError> {
    tracing::debug!(target: "headsafe_models", path = %path.display(), "loading scaler");
    read_json(path)
}

/// Reads a stored default threshold; must lie strictly inside (0, 1).
pub fn load_threshold(path: &Path) -> Result<f64, ArtifactError> {
    tracing::debug!(target: "headsafe_models", path = %path.display(), "loading threshold");
    let threshold: f64 = read_json(path)?;
    if !(threshold > 0.0 && threshold < 1.0) {
        return Err(ArtifactError::Invalid {
            path: path.to_path_buf(),
            reason: format!("threshold {threshold} is outside (0, 1)"),
        });
    }
    Ok(threshold)
}
