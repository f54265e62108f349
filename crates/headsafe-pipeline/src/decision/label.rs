use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactLabel {
    High,
    Low,
}

impl std::fmt::Display for ImpactLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImpactLabel::High => f.write_str("High"),
            ImpactLabel::Low => f.write_str("Low"),
        }
    }
}

/// High iff `probability > threshold`; equality is Low.
pub fn decide(probability: f64, threshold: f64) -> ImpactLabel {
    if probability > threshold {
        ImpactLabel::High
    } else {
        ImpactLabel::Low
    }
}
