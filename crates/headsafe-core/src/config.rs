use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use headsafe_models::{ModelKind, TargetLabel};
use headsafe_pipeline::{ArtifactKey, DeploymentProfile, FeatureSchema, ScalerPolicy};
use serde::Deserialize;

use crate::cli::Args;

pub const DEFAULT_CONFIG_FILE: &str = "headsafe.toml";

/// Contents of the optional TOML configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub artifact_dir: Option<PathBuf>,
    pub schema: Option<FeatureSchema>,
    pub scaler: Option<ScalerPolicy>,
    pub default_target: Option<TargetLabel>,
    pub default_model: Option<ModelKind>,
}

impl FileConfig {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads `explicit` when given, otherwise `./headsafe.toml` if it exists.
    ///
    /// A relative `artifact_dir` is taken relative to the file's directory.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config =
            Self::parse(&text).with_context(|| format!("invalid config {}", path.display()))?;
        if let (Some(dir), Some(parent)) = (config.artifact_dir.as_mut(), path.parent()) {
            if dir.is_relative() {
                *dir = parent.join(&*dir);
            }
        }
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }
}

/// Effective settings after layering CLI flags over the config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub artifact_dir: PathBuf,
    pub profile: DeploymentProfile,
    pub default_key: ArtifactKey,
}

impl Settings {
    pub fn resolve(args: &Args, file: FileConfig) -> Self {
        let schema = args
            .schema
            .map(FeatureSchema::from)
            .or(file.schema)
            .unwrap_or(FeatureSchema::Continuous);
        let mut profile = DeploymentProfile::new(schema);
        if let Some(scaler) = file.scaler {
            profile = profile.with_scaler(scaler);
        }

        Self {
            artifact_dir: args
                .artifact_dir
                .clone()
                .or(file.artifact_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            profile,
            default_key: ArtifactKey::new(
                file.default_model.unwrap_or(ModelKind::RandomForest),
                file.default_target.unwrap_or(TargetLabel::Pla),
            ),
        }
    }

    /// Applies per-command `--model` / `--target` overrides.
    pub fn key(&self, model: Option<ModelKind>, target: Option<TargetLabel>) -> ArtifactKey {
        ArtifactKey::new(
            model.unwrap_or(self.default_key.model),
            target.unwrap_or(self.default_key.target),
        )
    }
}
