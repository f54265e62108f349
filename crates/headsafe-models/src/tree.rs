use serde::{Deserialize, Serialize};

use crate::features::FEATURE_COUNT;

/// How a split node compares a feature against its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitRule {
    /// `x <= threshold` goes left (bagged CART trees).
    LessOrEqual,
    /// `x < threshold` goes left (gradient-boosted trees).
    LessThan,
}

impl SplitRule {
    fn goes_left(self, value: f64, threshold: f64) -> bool {
        match self {
            SplitRule::LessOrEqual => value <= threshold,
            SplitRule::LessThan => value < threshold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf(f64),
}

/// Flat node array rooted at index 0.
///
/// Construction checks that every child index points forward and stays in
/// bounds, so walking a tree always terminates at a leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TreeNode>", into = "Vec<TreeNode>")]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
}

impl DecisionTree {
    pub fn new(nodes: Vec<TreeNode>) -> Result<Self, String> {
        if nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }
        for (index, node) in nodes.iter().enumerate() {
            let TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } = *node
            else {
                continue;
            };
            if feature >= FEATURE_COUNT {
                return Err(format!(
                    "node {index} splits on feature {feature}, only {FEATURE_COUNT} exist"
                ));
            }
            if !threshold.is_finite() {
                return Err(format!("node {index} has a non-finite threshold"));
            }
            for child in [left, right] {
                if child <= index || child >= nodes.len() {
                    return Err(format!("node {index} points at invalid child {child}"));
                }
            }
        }
        Ok(Self { nodes })
    }

    pub fn leaves(&self) -> impl Iterator<Item = f64> + '_ {
        self.nodes.iter().filter_map(|node| match node {
            TreeNode::Leaf(value) => Some(*value),
            TreeNode::Split { .. } => None,
        })
    }

    pub fn evaluate(&self, row: &[f64; FEATURE_COUNT], rule: SplitRule) -> f64 {
        let mut index = 0;
        loop {
            match self.nodes[index] {
                TreeNode::Leaf(value) => return value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if rule.goes_left(row[feature], threshold) {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }
}

impl TryFrom<Vec<TreeNode>> for DecisionTree {
    type Error = String;

    fn try_from(nodes: Vec<TreeNode>) -> Result<Self, Self::Error> {
        Self::new(nodes)
    }
}

impl From<DecisionTree> for Vec<TreeNode> {
    fn from(tree: DecisionTree) -> Self {
        tree.nodes
    }
}
