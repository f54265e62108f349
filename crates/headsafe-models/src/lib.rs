//! Fitted classifier families, feature scalers and their JSON artifact
//! formats for header impact scoring.

pub mod artifact;
pub mod boosted;
pub mod features;
pub mod forest;
pub mod logistic;
pub mod scaler;
pub mod svm;
pub mod traits;
pub mod tree;

pub use artifact::{load_model, load_scaler, load_threshold, ArtifactError, ModelArtifact};
pub use boosted::BoostedTrees;
pub use features::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use forest::RandomForest;
pub use logistic::LogisticRegression;
pub use scaler::FeatureScaler;
pub use svm::{Kernel, SupportVectorClassifier};
pub use traits::{Classifier, ModelKind, TargetLabel, UnknownVariant};
pub use tree::{DecisionTree, SplitRule, TreeNode};
