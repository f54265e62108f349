
use headsafe_models::{FeatureVector, ModelKind, TargetLabel};
use serde::Serialize;

use crate::decision::{decide, score, ImpactLabel, ThresholdControl};
use crate::error::PipelineError;
use crate::features::FeatureInputs;
use crate::profile::DeploymentProfile;
use crate::resolver::{ArtifactKey, ArtifactResolver};
use crate::store::{ArtifactBundle, ArtifactStore};

/// One render's worth of selections.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    pub key: ArtifactKey,
    /// `None` uses the bundle's stored default.
    pub threshold: Option<f64>,
    pub inputs: FeatureInputs,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub model: ModelKind,
    pub target: TargetLabel,
    pub threshold: f64,
    pub probability: f64,
    pub label: ImpactLabel,
    pub features: FeatureVector,
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} impact predicted (probability: {:.2})",
            self.label, self.probability
        )
    }
}

/// Runs resolve, load, build, scale, score and decide for one request.
#[derive(Debug)]
pub struct Predictor {
    profile: DeploymentProfile,
    store: ArtifactStore,
}

impl Predictor {
    pub fn new(profile: DeploymentProfile, store: ArtifactStore) -> Self {
        Self { profile, store }
    }

    pub fn open(profile: DeploymentProfile, artifact_dir: impl Into<std::path::PathBuf>) -> Self {
        let resolver = ArtifactResolver::new(artifact_dir, profile.scaler);
        Self::new(profile, ArtifactStore::new(resolver))
    }

    pub fn profile(&self) -> DeploymentProfile {
        self.profile
    }

    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    pub fn predict(&self, request: &PredictionRequest) -> Result<Prediction, PipelineError> {
        if request.inputs.schema() != self.profile.schema {
            return Err(PipelineError::SchemaMismatch {
                schema: self.profile.schema,
                operation: match request.inputs {
                    FeatureInputs::Continuous(_) => "continuous measurements",
                    FeatureInputs::Binary(_) => "yes/no answers",
                },
            });
        }

        let bundle = self.store.load_or_fetch(request.key)?;
        let mut control = ThresholdControl::from_default(bundle.default_threshold);
        if let Some(value) = request.threshold {
            control.set(value)?;
        }
        let vector = request.inputs.build()?;
        Self::evaluate(&bundle, &vector, control.value())
    }

    /// Scores an already-built vector against a loaded bundle.
    ///
    /// The threshold may be anything in `[0, 1]`; the `[0.1, 0.9]` bounds only
    /// apply to the interactive control.
    pub fn evaluate(
        bundle: &ArtifactBundle,
        vector: &FeatureVector,
        threshold: f64,
    ) -> Result<Prediction, PipelineError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(PipelineError::ThresholdOutOfRange {
                value: threshold,
                min: 0.0,
                max: 1.0,
            });
        }

        let raw = vector.to_array();
        let row = match &bundle.scaler {
            Some(scaler) => scaler.transform(&raw),
            None => raw,
        };
        let probability = score(bundle.classifier.as_ref(), &row)?;
        let label = decide(probability, threshold);

        tracing::debug!(
            target: "headsafe_pipeline",
            key = %bundle.key,
            probability,
            threshold,
            %label,
            "scored header event"
        );

        Ok(Prediction {
            model: bundle.key.model,
            target: bundle.key.target,
            threshold,
            probability,
            label,
            features: *vector,
        })
    }
}
