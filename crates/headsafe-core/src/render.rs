use headsafe_pipeline::{FeatureInputs, FormState, InventoryEntry, Prediction, ScalerPolicy};

pub fn selection_line(prediction: &Prediction) -> String {
    format!(
        "target {} | model {} | threshold {:.2}",
        prediction.target, prediction.model, prediction.threshold
    )
}

pub fn prediction_text(prediction: &Prediction) -> String {
    format!("{}\n{prediction}", selection_line(prediction))
}

pub fn form_inputs(state: &FormState) -> String {
    match state.inputs() {
        FeatureInputs::Continuous(inputs) => format!(
            "dist_before {:.1} m | flight_before {:.2} s | flight_after {:.2} s | dist_after {:.1} m | header_type {}",
            inputs.dist_before,
            inputs.flight_before,
            inputs.flight_after,
            inputs.dist_after,
            inputs.header_type
        ),
        FeatureInputs::Binary(answers) => answers
            .0
            .iter()
            .enumerate()
            .map(|(slot, answer)| format!("q{} {answer}", slot + 1))
            .collect::<Vec<_>>()
            .join(" | "),
    }
}

pub fn inventory_text(entries: &[InventoryEntry], root: &std::path::Path, scaler: ScalerPolicy) -> String {
    let scaler = match scaler {
        ScalerPolicy::Required => "required",
        ScalerPolicy::Disabled => "none",
    };
    let mut out = format!("artifact dir: {} (scaler: {scaler})\n", root.display());
    for entry in entries {
        let status = if entry.is_complete() {
            "ok".to_string()
        } else {
            let missing: Vec<String> = entry
                .missing
                .iter()
                .map(|path| {
                    path.file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string())
                })
                .collect();
            format!("missing {}", missing.join(", "))
        };
        out.push_str(&format!(
            "{:<4} {:<20} {status}\n",
            entry.key.target.as_str(),
            entry.key.model.display_name()
        ));
    }
    out
}
