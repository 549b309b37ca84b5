//! Radar (spider) chart projection
//!
//! Global invariants enforced:
//! - Axes are evenly spaced in one rotational direction starting at angle 0
//! - The point list always closes (the last point repeats the first)
//! - The axis range is fixed at [0, 1]; no auto-scaling, so shapes stay
//!   visually comparable across sessions

use crate::error::AssessmentError;
use crate::params::ParameterSet;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Minimum axis count for a non-degenerate chart
pub const MIN_AXES: usize = 3;

/// Axis labels in reference order
///
/// The red-flag axis plots `1 - ratio` so that more red flags shrink the
/// polygon on that spoke (larger area = healthier on that one dimension).
pub const AXIS_LABELS: [&str; 6] = [
    "Attraction",
    "Emotional dependence",
    "Idealization",
    "Rationality",
    "External feedback",
    "Red flags (inverted)",
];

/// One vertex of the radar polygon, in polar coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RadarPoint {
    /// Radians from the first axis, increasing counter-clockwise
    pub angle: f64,
    /// Distance from center, in [0, 1]
    pub magnitude: f64,
}

/// Closed polygon over evenly spaced spokes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RadarPolygon {
    pub labels: Vec<String>,
    /// One point per axis plus the closing duplicate
    pub points: Vec<RadarPoint>,
}

/// Project labeled magnitudes onto evenly spaced spokes
///
/// Axis `i` of `n` gets angle `2*pi*i/n`. The closing duplicate is mandatory
/// so a line-drawing consumer produces a closed polygon, not an open path.
pub fn project(labels: &[&str], values: &[f64]) -> Result<RadarPolygon, AssessmentError> {
    if labels.len() != values.len() {
        return Err(AssessmentError::AxisCountMismatch {
            labels: labels.len(),
            values: values.len(),
        });
    }
    if labels.len() < MIN_AXES {
        return Err(AssessmentError::TooFewAxes {
            count: labels.len(),
        });
    }

    let n = labels.len();
    let mut points: Vec<RadarPoint> = values
        .iter()
        .enumerate()
        .map(|(i, value)| RadarPoint {
            angle: TAU * i as f64 / n as f64,
            magnitude: *value,
        })
        .collect();
    let first = points[0];
    points.push(first);

    Ok(RadarPolygon {
        labels: labels.iter().map(|label| label.to_string()).collect(),
        points,
    })
}

/// Derive the reference axis labels and values from a parameter set
pub fn radar_axes(
    params: &ParameterSet,
) -> Result<(Vec<&'static str>, Vec<f64>), AssessmentError> {
    let ratio = params.red_flag_ratio()?;
    Ok((
        AXIS_LABELS.to_vec(),
        vec![
            params.attraction,
            params.emotional_dependence,
            params.idealization,
            params.rationality,
            params.external_feedback,
            1.0 - ratio,
        ],
    ))
}

/// Project a parameter set onto the reference axes
pub fn project_parameters(params: &ParameterSet) -> Result<RadarPolygon, AssessmentError> {
    let (labels, values) = radar_axes(params)?;
    project(&labels, &values)
}
