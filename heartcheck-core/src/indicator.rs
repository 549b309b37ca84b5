//! Circular risk gauge derivation
//!
//! Maps a score in [0, 1] to an arc sweep plus a discrete severity tier.
//! Tier boundaries are strict: a score exactly on a threshold belongs to
//! the lower tier.

use serde::{Deserialize, Serialize};

/// Severity tier classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Low,    // <= 0.3
    Medium, // <= 0.6
    High,   // > 0.6
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Low => "low",
            Tier::Medium => "medium",
            Tier::High => "high",
        }
    }

    /// Presentation hint only; the tier itself drives message selection
    pub fn color(&self) -> &'static str {
        match self {
            Tier::Low => "#4CAF50",
            Tier::Medium => "#FFA500",
            Tier::High => "#FF4B4B",
        }
    }

    /// User-facing conclusion for this tier
    pub fn advice(&self) -> &'static str {
        match self {
            Tier::Low => "Low risk. The relationship looks comparatively healthy.",
            Tier::Medium => {
                "Moderate risk. Stay alert and keep a measure of rational analysis."
            }
            Tier::High => {
                "High risk! Proceed with caution; lean on rational judgment and outside opinions."
            }
        }
    }
}

/// Configurable tier thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierThresholds {
    pub medium: f64,
    pub high: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        TierThresholds {
            medium: 0.3,
            high: 0.6,
        }
    }
}

/// Gauge geometry plus classification for one score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RiskArc {
    /// Arc sweep in degrees, score * 360
    pub sweep_degrees: f64,
    pub tier: Tier,
}

/// Assign a tier with default thresholds
pub fn assign_tier(score: f64) -> Tier {
    assign_tier_with_thresholds(score, &TierThresholds::default())
}

/// Assign a tier with custom thresholds
///
/// First match wins, evaluated high-first with strict comparisons: a score
/// exactly at a threshold falls into the lower tier.
pub fn assign_tier_with_thresholds(score: f64, thresholds: &TierThresholds) -> Tier {
    if score > thresholds.high {
        Tier::High
    } else if score > thresholds.medium {
        Tier::Medium
    } else {
        Tier::Low
    }
}

/// Derive the gauge arc for a score
pub fn indicate(score: f64) -> RiskArc {
    RiskArc {
        sweep_degrees: score * 360.0,
        tier: assign_tier(score),
    }
}
