//! Assessment pipeline and output generation
//!
//! Global invariants enforced:
//! - Deterministic output
//! - The score is recomputed from scratch on every evaluation, never cached

use crate::error::AssessmentError;
use crate::indicator::{indicate, Tier};
use crate::params::{ParameterSet, DEFAULT_RED_FLAG_LABELS};
use crate::radar::{project_parameters, RadarPolygon};
use crate::score::compute_risk_score;
use serde::{Deserialize, Serialize};

/// Complete result of one assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AssessmentReport {
    pub parameters: ParameterSet,
    pub red_flag_ratio: f64,
    pub score: f64,
    pub tier: Tier,
    pub sweep_degrees: f64,
    pub advice: String,
    pub radar: RadarPolygon,
}

/// Run the full pipeline over a read-only snapshot
///
/// Validates first, then scores, classifies, and projects. The snapshot is
/// never mutated; the report is freshly allocated per call.
pub fn assess(params: &ParameterSet) -> Result<AssessmentReport, AssessmentError> {
    params.validate()?;
    let red_flag_ratio = params.red_flag_ratio()?;
    let score = compute_risk_score(params)?;
    let arc = indicate(score);
    let radar = project_parameters(params)?;

    Ok(AssessmentReport {
        parameters: params.clone(),
        red_flag_ratio,
        score,
        tier: arc.tier,
        sweep_degrees: arc.sweep_degrees,
        advice: arc.tier.advice().to_string(),
        radar,
    })
}

/// Render the parameter table alone (also used for the defaults listing)
pub fn render_parameter_table(params: &ParameterSet) -> String {
    let mut output = String::new();

    output.push_str(&format!("{:<24} {:>5}\n", "PARAMETER", "VALUE"));
    for (label, value) in [
        ("Attraction", params.attraction),
        ("Emotional dependence", params.emotional_dependence),
        ("Idealization", params.idealization),
        ("Rationality", params.rationality),
        ("External feedback", params.external_feedback),
    ] {
        output.push_str(&format!("{:<24} {:>5.2}\n", label, value));
    }

    output.push('\n');
    for (i, raised) in params.red_flags.iter().enumerate() {
        let mark = if *raised { "x" } else { " " };
        match DEFAULT_RED_FLAG_LABELS.get(i) {
            Some(label) => output.push_str(&format!("[{}] {}\n", mark, label)),
            None => output.push_str(&format!("[{}] Red flag {}\n", mark, i + 1)),
        }
    }

    output.push_str(&format!(
        "\nTime in relationship: {} months\n",
        params.time_in_relationship_months
    ));
    output
}

/// Render a report as text output
pub fn render_text(report: &AssessmentReport) -> String {
    let mut output = render_parameter_table(&report.parameters);

    output.push_str(&format!("\n{:<8} {:<8} {}\n", "SCORE", "TIER", "SWEEP"));
    output.push_str(&format!(
        "{:<8.2} {:<8} {:.1}\n",
        report.score,
        report.tier.as_str(),
        report.sweep_degrees
    ));

    output.push('\n');
    output.push_str(&report.advice);
    output.push('\n');
    output
}

/// Render a report as JSON output
pub fn render_json(report: &AssessmentReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

/// Render a parameter set alone as JSON (defaults listing)
pub fn render_parameters_json(params: &ParameterSet) -> String {
    serde_json::to_string_pretty(params).unwrap_or_else(|_| "{}".to_string())
}
