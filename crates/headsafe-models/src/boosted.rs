use serde::{Deserialize, Serialize};

use crate::features::FEATURE_COUNT;
use crate::logistic::sigmoid;
use crate::tree::{DecisionTree, SplitRule};
use crate::{Classifier, ModelKind};

/// Gradient-boosted trees with a logistic objective; leaves hold margins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostedTrees {
    #[serde(default)]
    pub base_margin: f64,
    pub trees: Vec<DecisionTree>,
}

impl BoostedTrees {
    pub fn margin(&self, row: &[f64; FEATURE_COUNT]) -> f64 {
        self.base_margin
            + self
                .trees
                .iter()
                .map(|tree| tree.evaluate(row, SplitRule::LessThan))
                .sum::<f64>()
    }
}

impl Classifier for BoostedTrees {
    fn kind(&self) -> ModelKind {
        ModelKind::XgBoost
    }

    fn predict_proba(&self, row: &[f64; FEATURE_COUNT]) -> f64 {
        sigmoid(self.margin(row))
    }
}
