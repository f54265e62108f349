use headsafe_models::{ModelKind, TargetLabel};

use crate::decision::ThresholdControl;
use crate::error::PipelineError;
use crate::features::{Answer, BinaryAnswers, ContinuousField, FeatureInputs, FeatureSchema, HeaderType};
use crate::predictor::PredictionRequest;
use crate::resolver::ArtifactKey;

pub const FORM_HELP: &str = "\
commands:
  target <PLA|PAA>             choose the target label
  model <kind>                 RandomForest | SVM | LogisticRegression | XGBoost
  threshold <0.10..0.90>       override the decision threshold
  set <field> <value>          continuous schema: dist_before, flight_before,
                               flight_after, dist_after, header_type
  answer <1-5|field> <yes|no>  binary schema
  show                         re-run the prediction
  about                        describe the features
  help                         this text
  quit                         leave the form";

/// One line of user input to the form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormCommand {
    Target(TargetLabel),
    Model(ModelKind),
    Threshold(f64),
    Set { field: ContinuousField, value: f64 },
    HeaderType(HeaderType),
    Answer { slot: usize, answer: Answer },
    Show,
    About,
    Help,
    Quit,
}

fn invalid(message: impl Into<String>) -> PipelineError {
    PipelineError::InvalidCommand(message.into())
}

fn parse_number(text: &str) -> Result<f64, PipelineError> {
    text.parse::<f64>()
        .map_err(|_| invalid(format!("{text:?} is not a number")))
}

impl std::str::FromStr for FormCommand {
    type Err = PipelineError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((verb, args)) = words.split_first() else {
            return Err(invalid("empty command"));
        };

        match (verb.to_ascii_lowercase().as_str(), args) {
            ("target", [label]) => label
                .parse()
                .map(FormCommand::Target)
                .map_err(|err: headsafe_models::UnknownVariant| invalid(err.to_string())),
            ("model", [kind]) => kind
                .parse()
                .map(FormCommand::Model)
                .map_err(|err: headsafe_models::UnknownVariant| invalid(err.to_string())),
            ("threshold", [value]) => parse_number(value).map(FormCommand::Threshold),
            ("set", [field, value]) if field.eq_ignore_ascii_case("header_type") => {
                value.parse().map(FormCommand::HeaderType)
            }
            ("set", [field, value]) => {
                let field = ContinuousField::from_name(field)
                    .ok_or_else(|| invalid(format!("unknown feature {field:?}")))?;
                Ok(FormCommand::Set {
                    field,
                    value: parse_number(value)?,
                })
            }
            ("answer", [question, answer]) => {
                let slot = BinaryAnswers::slot(question)
                    .ok_or_else(|| invalid(format!("unknown question {question:?}")))?;
                Ok(FormCommand::Answer {
                    slot,
                    answer: answer.parse()?,
                })
            }
            ("show", []) => Ok(FormCommand::Show),
            ("about", []) => Ok(FormCommand::About),
            ("help" | "?", []) => Ok(FormCommand::Help),
            ("quit" | "exit" | "q", []) => Ok(FormCommand::Quit),
            (other, _) => Err(invalid(format!("unrecognised command {other:?}, try help"))),
        }
    }
}

/// What the caller should do after a command was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Render,
    About,
    Help,
    Quit,
}

/// Current selections of the interactive form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    key: ArtifactKey,
    threshold: Option<f64>,
    inputs: FeatureInputs,
}

impl FormState {
    pub fn new(schema: FeatureSchema, key: ArtifactKey) -> Self {
        Self {
            key,
            threshold: None,
            inputs: FeatureInputs::defaults_for(schema),
        }
    }

    pub fn key(&self) -> ArtifactKey {
        self.key
    }

    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }

    pub fn inputs(&self) -> &FeatureInputs {
        &self.inputs
    }

    /// Applies a command. Rejected commands leave the state unchanged.
    ///
    /// Switching model or target drops the threshold override so the new
    /// bundle's stored default takes effect.
    pub fn apply(&mut self, command: FormCommand) -> Result<FormOutcome, PipelineError> {
        let schema = self.inputs.schema();
        match (command, &mut self.inputs) {
            (FormCommand::Target(target), _) => {
                self.key.target = target;
                self.threshold = None;
            }
            (FormCommand::Model(model), _) => {
                self.key.model = model;
                self.threshold = None;
            }
            (FormCommand::Threshold(value), _) => {
                self.threshold = Some(ThresholdControl::validate(value)?);
            }
            (FormCommand::Set { field, value }, FeatureInputs::Continuous(inputs)) => {
                inputs.set(field, value)?;
            }
            (FormCommand::HeaderType(header_type), FeatureInputs::Continuous(inputs)) => {
                inputs.header_type = header_type;
            }
            (FormCommand::Answer { slot, answer }, FeatureInputs::Binary(answers)) => {
                answers.set(slot, answer);
            }
            (FormCommand::Set { .. } | FormCommand::HeaderType(_), FeatureInputs::Binary(_)) => {
                return Err(PipelineError::SchemaMismatch {
                    schema,
                    operation: "set",
                });
            }
            (FormCommand::Answer { .. }, FeatureInputs::Continuous(_)) => {
                return Err(PipelineError::SchemaMismatch {
                    schema,
                    operation: "answer",
                });
            }
            (FormCommand::Show, _) => {}
            (FormCommand::About, _) => return Ok(FormOutcome::About),
            (FormCommand::Help, _) => return Ok(FormOutcome::Help),
            (FormCommand::Quit, _) => return Ok(FormOutcome::Quit),
        }
        Ok(FormOutcome::Render)
    }

    pub fn request(&self) -> PredictionRequest {
        PredictionRequest {
            key: self.key,
            threshold: self.threshold,
            inputs: self.inputs,
        }
    }
}
