use clap::{Parser, Subcommand, ValueEnum};
use headsafe_models::{ModelKind, TargetLabel};
use headsafe_pipeline::{BinaryAnswers, FeatureSchema, HeaderType};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "headsafe",
    version,
    about = "Classifies football header impacts as High or Low severity"
)]
pub struct Args {
    /// TOML configuration file (defaults to ./headsafe.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Directory holding model, scaler and threshold artifacts
    #[arg(long, global = true)]
    pub artifact_dir: Option<PathBuf>,
    /// Input schema: four measurements plus header type, or five yes/no answers
    #[arg(long, global = true, value_enum)]
    pub schema: Option<SchemaChoice>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a single header event
    Predict {
        #[arg(long, value_enum, ignore_case = true)]
        target: Option<TargetChoice>,
        #[arg(long, value_enum, ignore_case = true)]
        model: Option<ModelChoice>,
        /// Decision threshold in [0.1, 0.9]; defaults to the stored value
        #[arg(long)]
        threshold: Option<f64>,
        /// Distance before impact in meters [0, 10]
        #[arg(long)]
        dist_before: Option<f64>,
        /// Ball flight time before the header in seconds [0, 2]
        #[arg(long)]
        flight_before: Option<f64>,
        /// Ball flight time after the header in seconds [0, 2]
        #[arg(long)]
        flight_after: Option<f64>,
        /// Distance after impact in meters [0, 10]
        #[arg(long)]
        dist_after: Option<f64>,
        #[arg(long, value_enum, ignore_case = true)]
        header_type: Option<HeaderTypeChoice>,
        /// Five yes/no answers for the binary schema, e.g. y,n,n,y,n
        #[arg(long, value_parser = parse_answers)]
        answers: Option<BinaryAnswers>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Interactive form on stdin; every change re-runs the prediction
    Form {
        #[arg(long, value_enum, ignore_case = true)]
        target: Option<TargetChoice>,
        #[arg(long, value_enum, ignore_case = true)]
        model: Option<ModelChoice>,
    },
    /// Show which artifacts are present for every model and target
    Artifacts {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Describe the five features of the active schema
    About,
}

fn parse_answers(value: &str) -> Result<BinaryAnswers, String> {
    value.parse().map_err(|err: headsafe_pipeline::PipelineError| err.to_string())
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SchemaChoice {
    Continuous,
    Binary,
}

impl From<SchemaChoice> for FeatureSchema {
    fn from(value: SchemaChoice) -> Self {
        match value {
            SchemaChoice::Continuous => FeatureSchema::Continuous,
            SchemaChoice::Binary => FeatureSchema::Binary,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TargetChoice {
    #[value(name = "PLA")]
    Pla,
    #[value(name = "PAA")]
    Paa,
}

impl From<TargetChoice> for TargetLabel {
    fn from(value: TargetChoice) -> Self {
        match value {
            TargetChoice::Pla => TargetLabel::Pla,
            TargetChoice::Paa => TargetLabel::Paa,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModelChoice {
    #[value(name = "RandomForest")]
    RandomForest,
    #[value(name = "SVM")]
    Svm,
    #[value(name = "LogisticRegression")]
    LogisticRegression,
    #[value(name = "XGBoost")]
    XgBoost,
}

impl From<ModelChoice> for ModelKind {
    fn from(value: ModelChoice) -> Self {
        match value {
            ModelChoice::RandomForest => ModelKind::RandomForest,
            ModelChoice::Svm => ModelKind::Svm,
            ModelChoice::LogisticRegression => ModelKind::LogisticRegression,
            ModelChoice::XgBoost => ModelKind::XgBoost,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeaderTypeChoice {
    Frontal,
    Lateral,
    Other,
}

impl From<HeaderTypeChoice> for HeaderType {
    fn from(value: HeaderTypeChoice) -> Self {
        match value {
            HeaderTypeChoice::Frontal => HeaderType::Frontal,
            HeaderTypeChoice::Lateral => HeaderType::Lateral,
            HeaderTypeChoice::Other => HeaderType::Other,
        }
    }
}
