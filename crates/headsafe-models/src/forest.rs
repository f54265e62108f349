use serde::{Deserialize, Serialize};

use crate::features::FEATURE_COUNT;
use crate::tree::{DecisionTree, SplitRule};
use crate::{Classifier, ModelKind};

/// Bagged CART trees; each leaf stores the High-class fraction of its samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    pub trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.trees.is_empty() {
            return Err("random forest has no trees".to_string());
        }
        for (index, tree) in self.trees.iter().enumerate() {
            if let Some(bad) = tree.leaves().find(|p| !(0.0..=1.0).contains(p)) {
                return Err(format!("tree {index} has leaf probability {bad} outside [0, 1]"));
            }
        }
        Ok(())
    }
}

impl Classifier for RandomForest {
    fn kind(&self) -> ModelKind {
        ModelKind::RandomForest
    }

    fn predict_proba(&self, row: &[f64; FEATURE_COUNT]) -> f64 {
        let total: f64 = self
            .trees
            .iter()
            .map(|tree| tree.evaluate(row, SplitRule::LessOrEqual))
            .sum();
        total / self.trees.len() as f64
    }
}
