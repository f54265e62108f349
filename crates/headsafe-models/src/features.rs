use serde::{Deserialize, Serialize};

pub const FEATURE_COUNT: usize = 5;

/// Column order every artifact was fit on. Reordering silently corrupts scores.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "dist_before",
    "flight_before",
    "flight_after",
    "dist_after",
    "header_type",
];

/// One header event, in canonical slot order.
///
/// Depending on the deployment schema the slots hold continuous measurements
/// (meters, seconds, seconds, meters, header type code) or 0/1 answers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub dist_before: f64,
    pub flight_before: f64,
    pub flight_after: f64,
    pub dist_after: f64,
    pub header_type: f64,
}

impl FeatureVector {
    pub fn from_array(values: [f64; FEATURE_COUNT]) -> Self {
        let [dist_before, flight_before, flight_after, dist_after, header_type] = values;
        Self {
            dist_before,
            flight_before,
            flight_after,
            dist_after,
            header_type,
        }
    }

    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.dist_before,
            self.flight_before,
            self.flight_after,
            self.dist_after,
            self.header_type,
        ]
    }

    /// `(name, value)` pairs in scoring order.
    pub fn named(&self) -> [(&'static str, f64); FEATURE_COUNT] {
        let values = self.to_array();
        std::array::from_fn(|i| (FEATURE_NAMES[i], values[i]))
    }
}
