use anyhow::{bail, Context, Result};
use clap::Parser;
use headsafe_models::{ModelKind, TargetLabel};
use headsafe_pipeline::features::about;
use headsafe_pipeline::form::FORM_HELP;
use headsafe_pipeline::{
    BinaryAnswers, ContinuousField, ContinuousInputs, FeatureInputs, FeatureSchema, FormCommand,
    FormOutcome, FormState, HeaderType, PredictionRequest, Predictor,
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

mod cli;
mod config;
mod render;

use cli::{Args, OutputFormat};
use config::{FileConfig, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("HEADSAFE_LOG").unwrap_or_else(|_| "headsafe=info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let file = FileConfig::discover(args.config.as_deref())?;
    let settings = Settings::resolve(&args, file);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        schema = %settings.profile.schema,
        artifact_dir = %settings.artifact_dir.display(),
        "headsafe starting"
    );

    let predictor = Predictor::open(settings.profile, &settings.artifact_dir);

    match args.command {
        cli::Command::Predict {
            target,
            model,
            threshold,
            dist_before,
            flight_before,
            flight_after,
            dist_after,
            header_type,
            answers,
            format,
        } => {
            let measurements = Measurements {
                dist_before,
                flight_before,
                flight_after,
                dist_after,
                header_type: header_type.map(HeaderType::from),
            };
            let inputs = build_inputs(settings.profile.schema, measurements, answers)?;
            let request = PredictionRequest {
                key: settings.key(model.map(ModelKind::from), target.map(TargetLabel::from)),
                threshold,
                inputs,
            };
            predict(&predictor, &request, format)
        }
        cli::Command::Form { target, model } => {
            let key = settings.key(model.map(ModelKind::from), target.map(TargetLabel::from));
            run_form(&predictor, FormState::new(settings.profile.schema, key)).await
        }
        cli::Command::Artifacts { format } => list_artifacts(&predictor, format),
        cli::Command::About => {
            println!("{}", about(settings.profile.schema));
            Ok(())
        }
    }
}

struct Measurements {
    dist_before: Option<f64>,
    flight_before: Option<f64>,
    flight_after: Option<f64>,
    dist_after: Option<f64>,
    header_type: Option<HeaderType>,
}

impl Measurements {
    fn is_empty(&self) -> bool {
        self.dist_before.is_none()
            && self.flight_before.is_none()
            && self.flight_after.is_none()
            && self.dist_after.is_none()
            && self.header_type.is_none()
    }
}

fn build_inputs(
    schema: FeatureSchema,
    measurements: Measurements,
    answers: Option<BinaryAnswers>,
) -> Result<FeatureInputs> {
    match schema {
        FeatureSchema::Continuous => {
            if answers.is_some() {
                bail!("--answers needs the binary schema; pass the measurement flags instead");
            }
            let mut inputs = ContinuousInputs::default();
            let values = [
                measurements.dist_before,
                measurements.flight_before,
                measurements.flight_after,
                measurements.dist_after,
            ];
            for (field, value) in ContinuousField::ALL.into_iter().zip(values) {
                if let Some(value) = value {
                    inputs.set(field, value)?;
                }
            }
            if let Some(header_type) = measurements.header_type {
                inputs.header_type = header_type;
            }
            Ok(FeatureInputs::Continuous(inputs))
        }
        FeatureSchema::Binary => {
            if !measurements.is_empty() {
                bail!("measurement flags need the continuous schema; pass --answers instead");
            }
            Ok(FeatureInputs::Binary(answers.unwrap_or_default()))
        }
    }
}

fn predict(predictor: &Predictor, request: &PredictionRequest, format: OutputFormat) -> Result<()> {
    let prediction = predictor
        .predict(request)
        .with_context(|| format!("prediction failed for {}", request.key))?;
    match format {
        OutputFormat::Text => println!("{}", render::prediction_text(&prediction)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&prediction)?),
    }
    Ok(())
}

fn list_artifacts(predictor: &Predictor, format: OutputFormat) -> Result<()> {
    let entries = predictor.store().inventory();
    match format {
        OutputFormat::Text => print!(
            "{}",
            render::inventory_text(
                &entries,
                predictor.store().resolver().root(),
                predictor.profile().scaler
            )
        ),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
    }
    Ok(())
}

fn render_form(predictor: &Predictor, state: &FormState) {
    println!("{}", render::form_inputs(state));
    match predictor.predict(&state.request()) {
        Ok(prediction) => println!("{}", render::prediction_text(&prediction)),
        Err(error) => {
            tracing::warn!(key = %state.key(), error = %error, "render halted");
            println!("error: {error}");
        }
    }
}

async fn run_form(predictor: &Predictor, mut state: FormState) -> Result<()> {
    let schema = predictor.profile().schema;
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Football header impact classifier ({schema} schema). Type help for commands.");
    render_form(predictor, &state);

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let outcome = line
            .parse::<FormCommand>()
            .and_then(|command| state.apply(command));
        match outcome {
            Ok(FormOutcome::Render) => render_form(predictor, &state),
            Ok(FormOutcome::About) => println!("{}", about(schema)),
            Ok(FormOutcome::Help) => println!("{FORM_HELP}"),
            Ok(FormOutcome::Quit) => break,
            Err(error) => println!("error: {error}"),
        }
    }

    tracing::info!("form session ended");
    Ok(())
}
