use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use headsafe_models::{load_model, load_scaler, load_threshold, Classifier, FeatureScaler};
use parking_lot::RwLock;
use serde::Serialize;

use crate::error::PipelineError;
use crate::resolver::{ArtifactKey, ArtifactPaths, ArtifactResolver};

/// Everything needed to score one `(model kind, target label)` pair.
/// Read-only once loaded.
#[derive(Debug)]
pub struct ArtifactBundle {
    pub key: ArtifactKey,
    pub classifier: Box<dyn Classifier>,
    pub scaler: Option<FeatureScaler>,
    pub default_threshold: f64,
}

impl ArtifactBundle {
    pub fn new(
        key: ArtifactKey,
        classifier: Box<dyn Classifier>,
        scaler: Option<FeatureScaler>,
        default_threshold: f64,
    ) -> Self {
        Self {
            key,
            classifier,
            scaler,
            default_threshold,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InventoryEntry {
    pub key: ArtifactKey,
    pub paths: ArtifactPaths,
    pub missing: Vec<PathBuf>,
}

impl InventoryEntry {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Bundle cache keyed by `(model kind, target label)`.
///
/// Failed loads are not cached, so fixing the artifact directory takes
/// effect on the next fetch.
#[derive(Debug)]
pub struct ArtifactStore {
    resolver: ArtifactResolver,
    bundles: RwLock<HashMap<ArtifactKey, Arc<ArtifactBundle>>>,
}

impl ArtifactStore {
    pub fn new(resolver: ArtifactResolver) -> Self {
        Self {
            resolver,
            bundles: RwLock::new(HashMap::new()),
        }
    }

    pub fn resolver(&self) -> &ArtifactResolver {
        &self.resolver
    }

    pub fn load_or_fetch(&self, key: ArtifactKey) -> Result<Arc<ArtifactBundle>, PipelineError> {
        if let Some(bundle) = self.bundles.read().get(&key) {
            tracing::debug!(target: "headsafe_pipeline", %key, "artifact cache hit");
            return Ok(Arc::clone(bundle));
        }

        let loaded = Arc::new(self.load(key)?);
        let mut bundles = self.bundles.write();
        let bundle = bundles.entry(key).or_insert(loaded);
        Ok(Arc::clone(bundle))
    }

    pub fn is_cached(&self, key: ArtifactKey) -> bool {
        self.bundles.read().contains_key(&key)
    }

    pub fn inventory(&self) -> Vec<InventoryEntry> {
        ArtifactKey::all()
            .map(|key| {
                let paths = self.resolver.resolve(key);
                let missing = missing_files(&paths);
                InventoryEntry {
                    key,
                    paths,
                    missing,
                }
            })
            .collect()
    }

    fn load(&self, key: ArtifactKey) -> Result<ArtifactBundle, PipelineError> {
        let paths = self.resolver.resolve(key);
        let missing = missing_files(&paths);
        if !missing.is_empty() {
            tracing::warn!(
                target: "headsafe_pipeline",
                %key,
                missing = missing.len(),
                "artifact bundle incomplete"
            );
            return Err(PipelineError::ArtifactNotFound { key, missing });
        }

        let classifier = load_model(&paths.model, key.model)?;
        let scaler = paths.scaler.as_deref().map(load_scaler).transpose()?;
        let default_threshold = load_threshold(&paths.threshold)?;

        tracing::info!(
            target: "headsafe_pipeline",
            %key,
            scaled = scaler.is_some(),
            default_threshold,
            "artifact bundle loaded"
        );
        Ok(ArtifactBundle::new(key, classifier, scaler, default_threshold))
    }
}

fn missing_files(paths: &ArtifactPaths) -> Vec<PathBuf> {
    paths
        .required()
        .filter(|path| !path.is_file())
        .map(PathBuf::from)
        .collect()
}
