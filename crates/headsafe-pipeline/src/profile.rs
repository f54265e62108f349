use serde::{Deserialize, Serialize};

use crate::features::FeatureSchema;

/// Whether the active deployment applies a fitted scaler before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalerPolicy {
    Required,
    #[serde(rename = "none")]
    Disabled,
}

/// One schema per deployment. Continuous and binary inputs are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeploymentProfile {
    pub schema: FeatureSchema,
    pub scaler: ScalerPolicy,
}

impl DeploymentProfile {
    pub fn new(schema: FeatureSchema) -> Self {
        let scaler = match schema {
            FeatureSchema::Continuous => ScalerPolicy::Required,
            FeatureSchema::Binary => ScalerPolicy::Disabled,
        };
        Self { schema, scaler }
    }

    pub fn with_scaler(mut self, scaler: ScalerPolicy) -> Self {
        self.scaler = scaler;
        self
    }
}

impl Default for DeploymentProfile {
    fn default() -> Self {
        Self::new(FeatureSchema::Continuous)
    }
}
