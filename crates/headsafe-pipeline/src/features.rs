use headsafe_models::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Which kind of input populates the five slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureSchema {
    /// Four measurements plus a categorical header type.
    Continuous,
    /// Five yes/no proxy answers.
    Binary,
}

impl std::fmt::Display for FeatureSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureSchema::Continuous => f.write_str("continuous"),
            FeatureSchema::Binary => f.write_str("binary"),
        }
    }
}

impl std::str::FromStr for FeatureSchema {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continuous" => Ok(FeatureSchema::Continuous),
            "binary" => Ok(FeatureSchema::Binary),
            other => Err(PipelineError::InvalidCommand(format!(
                "unknown feature schema {other:?}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeaderType {
    #[default]
    Frontal,
    Lateral,
    Other,
}

impl HeaderType {
    pub const ALL: [HeaderType; 3] = [HeaderType::Frontal, HeaderType::Lateral, HeaderType::Other];

    pub fn code(self) -> f64 {
        match self {
            HeaderType::Frontal => 0.0,
            HeaderType::Lateral => 1.0,
            HeaderType::Other => 2.0,
        }
    }
}

impl std::fmt::Display for HeaderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            HeaderType::Frontal => "Frontal",
            HeaderType::Lateral => "Lateral",
            HeaderType::Other => "Other",
        };
        f.write_str(label)
    }
}

impl std::str::FromStr for HeaderType {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        HeaderType::ALL
            .into_iter()
            .find(|kind| kind.to_string().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PipelineError::InvalidCommand(format!("unknown header type {wanted:?}")))
    }
}

/// Range, step and default of one continuous input control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureBounds {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl FeatureBounds {
    /// Rejects values outside `[min, max]` and snaps the rest to the
    /// nearest step, so the stored value is the one shown and scored.
    pub fn check(&self, value: f64) -> Result<f64, PipelineError> {
        if !(value.is_finite() && (self.min..=self.max).contains(&value)) {
            return Err(PipelineError::FeatureOutOfRange {
                field: self.name,
                value,
                min: self.min,
                max: self.max,
            });
        }
        let per_unit = (1.0 / self.step).round();
        Ok(((value * per_unit).round() / per_unit).clamp(self.min, self.max))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinuousField {
    DistBefore,
    FlightBefore,
    FlightAfter,
    DistAfter,
}

impl ContinuousField {
    pub const ALL: [ContinuousField; 4] = [
        ContinuousField::DistBefore,
        ContinuousField::FlightBefore,
        ContinuousField::FlightAfter,
        ContinuousField::DistAfter,
    ];

    pub fn bounds(self) -> &'static FeatureBounds {
        &CONTINUOUS_BOUNDS[self as usize]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim();
        ContinuousField::ALL
            .into_iter()
            .find(|field| field.bounds().name.eq_ignore_ascii_case(wanted))
    }
}

pub static CONTINUOUS_BOUNDS: [FeatureBounds; 4] = [
    FeatureBounds {
        name: "dist_before",
        min: 0.0,
        max: 10.0,
        step: 0.1,
        default: 2.0,
    },
    FeatureBounds {
        name: "flight_before",
        min: 0.0,
        max: 2.0,
        step: 0.05,
        default: 0.5,
    },
    FeatureBounds {
        name: "flight_after",
        min: 0.0,
        max: 2.0,
        step: 0.05,
        default: 0.5,
    },
    FeatureBounds {
        name: "dist_after",
        min: 0.0,
        max: 10.0,
        step: 0.1,
        default: 2.0,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContinuousInputs {
    pub dist_before: f64,
    pub flight_before: f64,
    pub flight_after: f64,
    pub dist_after: f64,
    pub header_type: HeaderType,
}

impl Default for ContinuousInputs {
    fn default() -> Self {
        Self {
            dist_before: CONTINUOUS_BOUNDS[0].default,
            flight_before: CONTINUOUS_BOUNDS[1].default,
            flight_after: CONTINUOUS_BOUNDS[2].default,
            dist_after: CONTINUOUS_BOUNDS[3].default,
            header_type: HeaderType::default(),
        }
    }
}

impl ContinuousInputs {
    fn slot_mut(&mut self, field: ContinuousField) -> &mut f64 {
        match field {
            ContinuousField::DistBefore => &mut self.dist_before,
            ContinuousField::FlightBefore => &mut self.flight_before,
            ContinuousField::FlightAfter => &mut self.flight_after,
            ContinuousField::DistAfter => &mut self.dist_after,
        }
    }

    /// Updates one measurement; out-of-range values leave the inputs untouched.
    pub fn set(&mut self, field: ContinuousField, value: f64) -> Result<(), PipelineError> {
        *self.slot_mut(field) = field.bounds().check(value)?;
        Ok(())
    }

    pub fn to_vector(&self) -> Result<FeatureVector, PipelineError> {
        Ok(FeatureVector {
            dist_before: CONTINUOUS_BOUNDS[0].check(self.dist_before)?,
            flight_before: CONTINUOUS_BOUNDS[1].check(self.flight_before)?,
            flight_after: CONTINUOUS_BOUNDS[2].check(self.flight_after)?,
            dist_after: CONTINUOUS_BOUNDS[3].check(self.dist_after)?,
            header_type: self.header_type.code(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Answer {
    #[default]
    No,
    Yes,
}

impl Answer {
    pub fn value(self) -> f64 {
        match self {
            Answer::No => 0.0,
            Answer::Yes => 1.0,
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::No => f.write_str("No"),
            Answer::Yes => f.write_str("Yes"),
        }
    }
}

impl std::str::FromStr for Answer {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "1" | "true" => Ok(Answer::Yes),
            "no" | "n" | "0" | "false" => Ok(Answer::No),
            other => Err(PipelineError::InvalidCommand(format!(
                "expected yes or no, got {other:?}"
            ))),
        }
    }
}

/// Fixed proxy questions, one per slot in scoring order. Slot 5 collapses
/// the header type into a flick-on indicator.
pub const BINARY_QUESTIONS: [&str; FEATURE_COUNT] = [
    "Did the player cover a long distance before the header?",
    "Was the ball in the air for a long time before the header?",
    "Was the ball in the air for a long time after the header?",
    "Did the ball travel a long distance after the header?",
    "Was the header a flick-on?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BinaryAnswers(pub [Answer; FEATURE_COUNT]);

impl BinaryAnswers {
    /// Resolves a 1-based question number or a feature name to a slot.
    pub fn slot(name: &str) -> Option<usize> {
        let wanted = name.trim();
        if let Ok(number) = wanted.parse::<usize>() {
            return (1..=FEATURE_COUNT).contains(&number).then(|| number - 1);
        }
        FEATURE_NAMES
            .iter()
            .position(|feature| feature.eq_ignore_ascii_case(wanted))
    }

    pub fn set(&mut self, slot: usize, answer: Answer) {
        self.0[slot] = answer;
    }

    pub fn to_vector(&self) -> FeatureVector {
        FeatureVector::from_array(self.0.map(Answer::value))
    }
}

impl std::str::FromStr for BinaryAnswers {
    type Err = PipelineError;

    /// Parses five comma-separated answers, e.g. `y,n,n,y,n`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let answers = s
            .split(',')
            .map(str::parse::<Answer>)
            .collect::<Result<Vec<_>, _>>()?;
        let answers: [Answer; FEATURE_COUNT] = answers.try_into().map_err(|given: Vec<Answer>| {
            PipelineError::InvalidCommand(format!(
                "expected {FEATURE_COUNT} answers, got {}",
                given.len()
            ))
        })?;
        Ok(Self(answers))
    }
}

/// The active input mode's values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "values", rename_all = "snake_case")]
pub enum FeatureInputs {
    Continuous(ContinuousInputs),
    Binary(BinaryAnswers),
}

impl FeatureInputs {
    pub fn defaults_for(schema: FeatureSchema) -> Self {
        match schema {
            FeatureSchema::Continuous => FeatureInputs::Continuous(ContinuousInputs::default()),
            FeatureSchema::Binary => FeatureInputs::Binary(BinaryAnswers::default()),
        }
    }

    pub fn schema(&self) -> FeatureSchema {
        match self {
            FeatureInputs::Continuous(_) => FeatureSchema::Continuous,
            FeatureInputs::Binary(_) => FeatureSchema::Binary,
        }
    }

    pub fn build(&self) -> Result<FeatureVector, PipelineError> {
        match self {
            FeatureInputs::Continuous(inputs) => inputs.to_vector(),
            FeatureInputs::Binary(answers) => Ok(answers.to_vector()),
        }
    }
}

const CONTINUOUS_ABOUT: &str = "\
About the features
  dist_before    Distance covered before the header (meters)
  flight_before  Ball flight duration before the header (seconds)
  flight_after   Ball flight duration after the header (seconds)
  dist_after     Distance covered after the header (meters)
  header_type    Type of header: Frontal = 0, Lateral = 1, Other = 2";

const BINARY_ABOUT: &str = "\
About the questions
  Each answer stands in for one measured feature: No = 0, Yes = 1.
  1  dist_before    long run-up before the header
  2  flight_before  long ball flight before the header
  3  flight_after   long ball flight after the header
  4  dist_after     ball travelled far after the header
  5  header_type    flick-on header";

pub fn about(schema: FeatureSchema) -> &'static str {
    match schema {
        FeatureSchema::Continuous => CONTINUOUS_ABOUT,
        FeatureSchema::Binary => BINARY_ABOUT,
    }
}
