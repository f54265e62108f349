use std::path::PathBuf;

use headsafe_models::ArtifactError;

use crate::features::FeatureSchema;
use crate::resolver::ArtifactKey;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("missing artifact file(s) for {key}: {}", join_paths(.missing))]
    ArtifactNotFound {
        key: ArtifactKey,
        missing: Vec<PathBuf>,
    },
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    #[error("{field} = {value} is outside [{min}, {max}]")]
    FeatureOutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("threshold {value} is outside [{min}, {max}]")]
    ThresholdOutOfRange { value: f64, min: f64, max: f64 },
    #[error("classifier returned an invalid probability ({0})")]
    InvalidProbability(f64),
    #[error("invalid command: {0}")]
    InvalidCommand(String),
    #[error("{operation} is not available with the {schema} feature schema")]
    SchemaMismatch {
        schema: FeatureSchema,
        operation: &'static str,
    },
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
