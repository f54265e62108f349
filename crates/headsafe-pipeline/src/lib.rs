//! Scored binary decision pipeline for football header impacts.
//!
//! A request names a `(model kind, target label)` pair, a threshold and five
//! feature inputs. [`Predictor::predict`] resolves and loads the artifact
//! bundle (cached per pair), builds the canonical feature vector, applies the
//! optional scaler, scores it and labels the impact High or Low.

pub mod decision;
pub mod error;
pub mod features;
pub mod form;
pub mod predictor;
pub mod profile;
pub mod resolver;
pub mod store;

pub use decision::{decide, ImpactLabel, ThresholdControl};
pub use error::PipelineError;
pub use features::{
    Answer, BinaryAnswers, ContinuousField, ContinuousInputs, FeatureInputs, FeatureSchema,
    HeaderType,
};
pub use form::{FormCommand, FormOutcome, FormState};
pub use predictor::{Prediction, PredictionRequest, Predictor};
pub use profile::{DeploymentProfile, ScalerPolicy};
pub use resolver::{ArtifactKey, ArtifactPaths, ArtifactResolver};
pub use store::{ArtifactBundle, ArtifactStore, InventoryEntry};
