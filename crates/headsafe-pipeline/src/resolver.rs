use std::path::{Path, PathBuf};

use headsafe_models::{ModelKind, TargetLabel};
use serde::Serialize;

use crate::profile::ScalerPolicy;

pub const ARTIFACT_EXTENSION: &str = "json";

/// Closed `(model kind, target label)` pair; every value names a valid bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ArtifactKey {
    pub model: ModelKind,
    pub target: TargetLabel,
}

impl ArtifactKey {
    pub fn new(model: ModelKind, target: TargetLabel) -> Self {
        Self { model, target }
    }

    /// All eight keys, targets outermost.
    pub fn all() -> impl Iterator<Item = ArtifactKey> {
        TargetLabel::ALL.into_iter().flat_map(|target| {
            ModelKind::ALL
                .into_iter()
                .map(move |model| ArtifactKey::new(model, target))
        })
    }

    pub fn model_file_name(&self) -> String {
        format!(
            "{}_{}.{ARTIFACT_EXTENSION}",
            self.model.file_stem(),
            self.target
        )
    }

    pub fn scaler_file_name(&self) -> String {
        format!("scaler_{}.{ARTIFACT_EXTENSION}", self.target)
    }

    pub fn threshold_file_name(&self) -> String {
        format!(
            "threshold_{}_{}.{ARTIFACT_EXTENSION}",
            self.model.file_stem(),
            self.target
        )
    }
}

impl std::fmt::Display for ArtifactKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.model, self.target)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub scaler: Option<PathBuf>,
    pub threshold: PathBuf,
}

impl ArtifactPaths {
    /// Files that must exist before anything is read.
    pub fn required(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.model.as_path())
            .chain(self.scaler.as_deref())
            .chain(std::iter::once(self.threshold.as_path()))
    }
}

/// Maps keys to files under one artifact directory.
#[derive(Debug, Clone)]
pub struct ArtifactResolver {
    root: PathBuf,
    scaler: ScalerPolicy,
}

impl ArtifactResolver {
    pub fn new(root: impl Into<PathBuf>, scaler: ScalerPolicy) -> Self {
        Self {
            root: root.into(),
            scaler,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, key: ArtifactKey) -> ArtifactPaths {
        let scaler = match self.scaler {
            ScalerPolicy::Required => Some(self.root.join(key.scaler_file_name())),
            ScalerPolicy::Disabled => None,
        };
        ArtifactPaths {
            model: self.root.join(key.model_file_name()),
            scaler,
            threshold: self.root.join(key.threshold_file_name()),
        }
    }
}
