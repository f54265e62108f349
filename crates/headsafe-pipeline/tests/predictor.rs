mod common;

use anyhow::Result;
use common::{logit, write_logistic_bundle, write_model, write_scaler, write_threshold};
use headsafe_models::{ModelKind, TargetLabel};
use headsafe_pipeline::{
    ArtifactKey, BinaryAnswers, ContinuousInputs, DeploymentProfile, FeatureInputs, FeatureSchema,
    ImpactLabel, PipelineError, PredictionRequest, Predictor,
};

fn paa_logistic() -> ArtifactKey {
    ArtifactKey::new(ModelKind::LogisticRegression, TargetLabel::Paa)
}

fn continuous_request(threshold: Option<f64>) -> PredictionRequest {
    PredictionRequest {
        key: paa_logistic(),
        threshold,
        inputs: FeatureInputs::Continuous(ContinuousInputs::default()),
    }
}

#[test]
fn predicts_from_artifacts_on_disk() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    write_logistic_bundle(tmp.path(), paa_logistic(), logit(0.62), 0.5);
    let predictor = Predictor::open(DeploymentProfile::new(FeatureSchema::Continuous), tmp.path());

    let prediction = predictor.predict(&continuous_request(None))?;
    assert_eq!(prediction.label, ImpactLabel::High);
    assert_eq!(prediction.threshold, 0.5);
    assert_eq!(
        prediction.to_string(),
        "High impact predicted (probability: 0.62)"
    );
    Ok(())
}

#[test]
fn user_threshold_overrides_stored_default() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    write_logistic_bundle(tmp.path(), paa_logistic(), logit(0.62), 0.5);
    let predictor = Predictor::open(DeploymentProfile::new(FeatureSchema::Continuous), tmp.path());

    let prediction = predictor.predict(&continuous_request(Some(0.7)))?;
    assert_eq!(prediction.threshold, 0.7);
    assert_eq!(prediction.label, ImpactLabel::Low);

    let err = predictor.predict(&continuous_request(Some(0.05))).unwrap_err();
    assert!(matches!(err, PipelineError::ThresholdOutOfRange { .. }));
    Ok(())
}

#[test]
fn stored_default_outside_control_range_is_clamped() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    write_logistic_bundle(tmp.path(), paa_logistic(), logit(0.95), 0.97);
    let predictor = Predictor::open(DeploymentProfile::new(FeatureSchema::Continuous), tmp.path());

    let prediction = predictor.predict(&continuous_request(None))?;
    assert_eq!(prediction.threshold, 0.9);
    assert_eq!(prediction.label, ImpactLabel::High);
    Ok(())
}

#[test]
fn scaler_is_applied_before_scoring() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let key = paa_logistic();
    // Only slot 1 carries weight; the scaler maps the default 2.0 to 0.
    write_model(
        tmp.path(),
        key,
        &common::logistic_json([5.0, 0.0, 0.0, 0.0, 0.0], 0.0),
    );
    write_threshold(tmp.path(), key, 0.5);
    write_scaler(
        tmp.path(),
        key,
        r#"{"scaler":"standard","mean":[2,0,0,0,0],"scale":[1,1,1,1,1]}"#,
    );
    let predictor = Predictor::open(DeploymentProfile::new(FeatureSchema::Continuous), tmp.path());

    let prediction = predictor.predict(&continuous_request(None))?;
    assert_eq!(prediction.probability, 0.5);
    assert_eq!(prediction.label, ImpactLabel::Low);
    // The report keeps the unscaled inputs.
    assert_eq!(prediction.features.dist_before, 2.0);
    Ok(())
}

#[test]
fn binary_schema_scores_answers_without_scaler() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let key = paa_logistic();
    write_model(
        tmp.path(),
        key,
        &common::logistic_json([0.0, 0.0, 0.0, 0.0, 4.0], -2.0),
    );
    write_threshold(tmp.path(), key, 0.5);
    let predictor = Predictor::open(DeploymentProfile::new(FeatureSchema::Binary), tmp.path());

    let flick: BinaryAnswers = "n,n,n,n,y".parse()?;
    let prediction = predictor.predict(&PredictionRequest {
        key,
        threshold: None,
        inputs: FeatureInputs::Binary(flick),
    })?;
    assert_eq!(prediction.features.header_type, 1.0);
    assert_eq!(prediction.label, ImpactLabel::High);

    let prediction = predictor.predict(&PredictionRequest {
        key,
        threshold: None,
        inputs: FeatureInputs::Binary(BinaryAnswers::default()),
    })?;
    assert_eq!(prediction.label, ImpactLabel::Low);
    Ok(())
}

#[test]
fn inputs_must_match_deployment_schema() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    let predictor = Predictor::open(DeploymentProfile::new(FeatureSchema::Binary), tmp.path());

    let err = predictor.predict(&continuous_request(None)).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::SchemaMismatch {
            schema: FeatureSchema::Binary,
            ..
        }
    ));
}

#[test]
fn missing_artifacts_produce_no_prediction() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    let predictor = Predictor::open(DeploymentProfile::new(FeatureSchema::Continuous), tmp.path());

    let err = predictor.predict(&continuous_request(None)).unwrap_err();
    assert!(matches!(err, PipelineError::ArtifactNotFound { .. }));
}
