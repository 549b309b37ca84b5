//! Heartcheck core library - relationship risk scoring and radar chart projection

#![deny(warnings)]

// Global invariants enforced in this crate:
// - Scoring, projection, and gauge derivation are pure functions
// - No global mutable state; mutable session state lives only in SessionStore
// - Engines receive read-only snapshots and never mutate them
// - No randomness, clocks, threads, or async
// - Identical input yields identical output

pub mod chart;
pub mod config;
pub mod error;
pub mod indicator;
pub mod params;
pub mod radar;
pub mod report;
pub mod score;
pub mod session;

pub use error::AssessmentError;
pub use indicator::{assign_tier, indicate, RiskArc, Tier};
pub use params::{ParameterSet, ParameterUpdate};
pub use radar::{project, project_parameters, RadarPolygon};
pub use report::{assess, render_json, render_text, AssessmentReport};
pub use score::compute_risk_score;
pub use session::SessionStore;
