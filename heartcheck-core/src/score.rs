//! Relationship Risk Score (RRS) calculation
//!
//! Global invariants enforced:
//! - Deterministic score calculation
//! - Scores stay within [0.0, 1.0]; negative raw values saturate at zero
//! - Monotonic in every input (non-decreasing in risk factors,
//!   non-increasing in mitigators)

use crate::error::AssessmentError;
use crate::params::ParameterSet;

/// Configurable weights for RRS calculation
///
/// One weight per factor group: the risk-increasing factors (attraction,
/// emotional dependence, idealization, red-flag ratio) and the mitigating
/// factors (rationality, external feedback).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub risk_factor: f64,
    pub mitigator: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        // Four risk factors averaged equally, two mitigators averaged at
        // full weight: mitigators at maximum cancel all risk signal.
        ScoreWeights {
            risk_factor: 0.25,
            mitigator: 0.5,
        }
    }
}

/// Compute the Relationship Risk Score with default weights
///
/// Formula:
/// raw = (attraction + emotional_dependence + idealization + red_flag_ratio) / 4
///     - (rationality + external_feedback) / 2
/// RRS = clamp(raw, 0, 1)
pub fn compute_risk_score(params: &ParameterSet) -> Result<f64, AssessmentError> {
    compute_risk_score_with_weights(params, &ScoreWeights::default())
}

/// Compute the RRS with custom weights
pub fn compute_risk_score_with_weights(
    params: &ParameterSet,
    weights: &ScoreWeights,
) -> Result<f64, AssessmentError> {
    let ratio = params.red_flag_ratio()?;
    let driving =
        params.attraction + params.emotional_dependence + params.idealization + ratio;
    let mitigating = params.rationality + params.external_feedback;
    // The raw value legitimately goes negative when mitigators dominate;
    // it must saturate at zero, not wrap or error.
    let raw = weights.risk_factor * driving - weights.mitigator * mitigating;
    Ok(raw.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(
        attraction: f64,
        emotional_dependence: f64,
        idealization: f64,
        rationality: f64,
        external_feedback: f64,
        red_flags: Vec<bool>,
    ) -> ParameterSet {
        ParameterSet {
            attraction,
            emotional_dependence,
            idealization,
            rationality,
            external_feedback,
            red_flags,
            time_in_relationship_months: 3,
        }
    }

    #[test]
    fn test_default_parameters_score() {
        // raw = (0.9 + 0.8 + 0.85 + 0.5) / 4 - (0.4 + 0.6) / 2
        //     = 3.05 / 4 - 0.5 = 0.7625 - 0.5 = 0.2625
        let score = compute_risk_score(&ParameterSet::default()).unwrap();
        assert_eq!(score, 0.2625);
    }

    #[test]
    fn test_maximum_risk_scores_one() {
        let p = params(1.0, 1.0, 1.0, 0.0, 0.0, vec![true, true, true, true]);
        // raw = 4/4 - 0 = 1.0
        assert_eq!(compute_risk_score(&p).unwrap(), 1.0);
    }

    #[test]
    fn test_dominant_mitigators_saturate_at_zero() {
        let p = params(0.0, 0.0, 0.0, 1.0, 1.0, vec![false, false, false, false]);
        // raw = 0/4 - 1.0 = -1.0, clamped to 0
        assert_eq!(compute_risk_score(&p).unwrap(), 0.0);
    }

    #[test]
    fn test_score_stays_bounded() {
        for a in [0.0, 0.5, 1.0] {
            for r in [0.0, 0.5, 1.0] {
                let p = params(a, a, a, r, r, vec![true, false]);
                let score = compute_risk_score(&p).unwrap();
                assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
            }
        }
    }

    #[test]
    fn test_monotonic_in_each_input() {
        let base = params(0.5, 0.5, 0.5, 0.5, 0.5, vec![true, false]);
        let base_score = compute_risk_score(&base).unwrap();

        let mut more_attraction = base.clone();
        more_attraction.attraction = 0.9;
        assert!(compute_risk_score(&more_attraction).unwrap() >= base_score);

        let mut more_flags = base.clone();
        more_flags.red_flags = vec![true, true];
        assert!(compute_risk_score(&more_flags).unwrap() >= base_score);

        let mut more_rationality = base.clone();
        more_rationality.rationality = 0.9;
        assert!(compute_risk_score(&more_rationality).unwrap() <= base_score);

        let mut more_feedback = base;
        more_feedback.external_feedback = 0.9;
        assert!(compute_risk_score(&more_feedback).unwrap() <= base_score);
    }

    #[test]
    fn test_empty_red_flags_error() {
        let p = params(0.5, 0.5, 0.5, 0.5, 0.5, vec![]);
        assert_eq!(
            compute_risk_score(&p),
            Err(AssessmentError::NoRedFlags)
        );
    }
}
