mod common;

use common::FixedScore;
use headsafe_models::{FeatureVector, ModelKind, TargetLabel};
use headsafe_pipeline::decision::score;
use headsafe_pipeline::{
    decide, ArtifactBundle, ArtifactKey, ImpactLabel, PipelineError, Predictor, ThresholdControl,
};

fn bundle(kind: ModelKind, probability: f64) -> ArtifactBundle {
    ArtifactBundle::new(
        ArtifactKey::new(kind, TargetLabel::Paa),
        Box::new(FixedScore { kind, probability }),
        None,
        0.5,
    )
}

fn vector() -> FeatureVector {
    FeatureVector::from_array([2.0, 0.5, 0.5, 2.0, 0.0])
}

#[test]
fn equal_probability_and_threshold_is_low() {
    assert_eq!(decide(0.5, 0.5), ImpactLabel::Low);
    assert_eq!(decide(0.0, 0.0), ImpactLabel::Low);
    assert_eq!(decide(1.0, 1.0), ImpactLabel::Low);
}

#[test]
fn high_only_when_strictly_above_threshold() {
    let points = [0.0, 0.1, 0.25, 0.5, 0.62, 0.9, 1.0];
    for p in points {
        for t in points {
            let expected = if p > t { ImpactLabel::High } else { ImpactLabel::Low };
            assert_eq!(decide(p, t), expected, "p={p} t={t}");
        }
    }
    assert_eq!(decide(0.5000001, 0.5), ImpactLabel::High);
}

#[test]
fn logistic_paa_at_point_six_two_is_high() {
    let bundle = bundle(ModelKind::LogisticRegression, 0.62);
    let prediction = Predictor::evaluate(&bundle, &vector(), 0.50).expect("prediction");
    assert_eq!(prediction.label, ImpactLabel::High);
    assert_eq!(format!("{:.2}", prediction.probability), "0.62");
    assert_eq!(
        prediction.to_string(),
        "High impact predicted (probability: 0.62)"
    );
    assert_eq!(prediction.model, ModelKind::LogisticRegression);
    assert_eq!(prediction.target, TargetLabel::Paa);
}

#[test]
fn logistic_paa_at_the_boundary_is_low() {
    let bundle = bundle(ModelKind::LogisticRegression, 0.50);
    let prediction = Predictor::evaluate(&bundle, &vector(), 0.50).expect("prediction");
    assert_eq!(prediction.label, ImpactLabel::Low);
    assert_eq!(
        prediction.to_string(),
        "Low impact predicted (probability: 0.50)"
    );
}

#[test]
fn evaluation_accepts_thresholds_beyond_the_control_bounds() {
    let bundle = bundle(ModelKind::Svm, 0.05);
    let prediction = Predictor::evaluate(&bundle, &vector(), 0.0).expect("prediction");
    assert_eq!(prediction.label, ImpactLabel::High);

    let err = Predictor::evaluate(&bundle, &vector(), 1.5).unwrap_err();
    assert!(matches!(err, PipelineError::ThresholdOutOfRange { .. }));
}

#[test]
fn repeated_evaluation_is_identical() {
    let bundle = bundle(ModelKind::RandomForest, 0.73);
    let first = Predictor::evaluate(&bundle, &vector(), 0.4).expect("first");
    let second = Predictor::evaluate(&bundle, &vector(), 0.4).expect("second");
    assert_eq!(first, second);
}

#[test]
fn scorer_rejects_nan_and_clamps_overshoot() {
    let nan = FixedScore {
        kind: ModelKind::XgBoost,
        probability: f64::NAN,
    };
    assert!(matches!(
        score(&nan, &[0.0; 5]),
        Err(PipelineError::InvalidProbability(_))
    ));

    let over = FixedScore {
        kind: ModelKind::XgBoost,
        probability: 1.2,
    };
    assert_eq!(score(&over, &[0.0; 5]).expect("score"), 1.0);
}

#[test]
fn threshold_control_clamps_stored_default() {
    assert_eq!(ThresholdControl::from_default(0.95).value(), 0.9);
    assert_eq!(ThresholdControl::from_default(0.02).value(), 0.1);
    assert_eq!(ThresholdControl::from_default(0.37).value(), 0.37);
}

#[test]
fn threshold_control_rejects_out_of_range_and_snaps_to_step() {
    let mut control = ThresholdControl::from_default(0.5);
    assert!(matches!(
        control.set(0.95),
        Err(PipelineError::ThresholdOutOfRange { .. })
    ));
    assert_eq!(control.value(), 0.5);

    assert_eq!(control.set(0.456).expect("in range"), 0.46);
    assert_eq!(control.value(), 0.46);
    assert!(control.set(f64::NAN).is_err());
}
