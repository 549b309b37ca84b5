//! Parameter set data model and boundary validation
//!
//! Global invariants enforced:
//! - Scalar parameters stay within the closed unit interval
//! - The red-flag list is never empty
//! - Validation runs before any engine sees a snapshot

use crate::error::AssessmentError;
use serde::{Deserialize, Serialize};

/// Maximum supported relationship length, in months
pub const MAX_MONTHS: u32 = 24;

/// Display labels for the default red-flag indicators, in input order
pub const DEFAULT_RED_FLAG_LABELS: [&str; 4] = [
    "Severe personality mismatch",
    "Frequent miscommunication",
    "Financial disputes",
    "Family opposition",
];

/// Sentiment/behavior inputs for one assessment
///
/// Owned by [`crate::session::SessionStore`]; the scoring and projection
/// engines only ever receive read-only snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ParameterSet {
    pub attraction: f64,
    pub emotional_dependence: f64,
    pub idealization: f64,
    pub rationality: f64,
    pub external_feedback: f64,
    /// One boolean per red-flag indicator; cardinality is fixed per session
    pub red_flags: Vec<bool>,
    /// Display-only; never part of the score
    pub time_in_relationship_months: u32,
}

impl Default for ParameterSet {
    fn default() -> Self {
        ParameterSet {
            attraction: 0.9,
            emotional_dependence: 0.8,
            idealization: 0.85,
            rationality: 0.4,
            external_feedback: 0.6,
            red_flags: vec![true, false, false, true],
            time_in_relationship_months: 3,
        }
    }
}

impl ParameterSet {
    /// Validate every field against its documented range
    ///
    /// Out-of-range input is rejected rather than clamped so that upstream
    /// input-collection bugs surface immediately. NaN fails the range check.
    pub fn validate(&self) -> Result<(), AssessmentError> {
        for (name, value) in [
            ("attraction", self.attraction),
            ("emotional_dependence", self.emotional_dependence),
            ("idealization", self.idealization),
            ("rationality", self.rationality),
            ("external_feedback", self.external_feedback),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(AssessmentError::ParameterOutOfRange { name, value });
            }
        }
        if self.red_flags.is_empty() {
            return Err(AssessmentError::NoRedFlags);
        }
        if self.time_in_relationship_months > MAX_MONTHS {
            return Err(AssessmentError::MonthsOutOfRange {
                value: self.time_in_relationship_months,
                max: MAX_MONTHS,
            });
        }
        Ok(())
    }

    /// Share of red flags currently raised, in [0, 1]
    pub fn red_flag_ratio(&self) -> Result<f64, AssessmentError> {
        if self.red_flags.is_empty() {
            return Err(AssessmentError::NoRedFlags);
        }
        let raised = self.red_flags.iter().filter(|flag| **flag).count();
        Ok(raised as f64 / self.red_flags.len() as f64)
    }
}

/// Partial overlay over a [`ParameterSet`]
///
/// Unset fields keep their current value. Doubles as the JSON parameter-file
/// format; unknown fields are rejected to catch typos early.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct ParameterUpdate {
    #[serde(default)]
    pub attraction: Option<f64>,
    #[serde(default)]
    pub emotional_dependence: Option<f64>,
    #[serde(default)]
    pub idealization: Option<f64>,
    #[serde(default)]
    pub rationality: Option<f64>,
    #[serde(default)]
    pub external_feedback: Option<f64>,
    #[serde(default)]
    pub red_flags: Option<Vec<bool>>,
    #[serde(default)]
    pub time_in_relationship_months: Option<u32>,
}

impl ParameterUpdate {
    /// Merge over a base set, returning the candidate (not yet validated)
    pub fn apply_to(&self, base: &ParameterSet) -> ParameterSet {
        ParameterSet {
            attraction: self.attraction.unwrap_or(base.attraction),
            emotional_dependence: self
                .emotional_dependence
                .unwrap_or(base.emotional_dependence),
            idealization: self.idealization.unwrap_or(base.idealization),
            rationality: self.rationality.unwrap_or(base.rationality),
            external_feedback: self.external_feedback.unwrap_or(base.external_feedback),
            red_flags: self
                .red_flags
                .clone()
                .unwrap_or_else(|| base.red_flags.clone()),
            time_in_relationship_months: self
                .time_in_relationship_months
                .unwrap_or(base.time_in_relationship_months),
        }
    }
}
