//! Typed failures for parameter validation and chart projection
//!
//! All errors are deterministic for a given input and surface immediately.
//! None are fatal to the process; a bad evaluation must not prevent the
//! next one.

use thiserror::Error;

/// Errors produced by validation and projection
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssessmentError {
    /// A sentiment/behavior parameter fell outside the closed unit interval
    #[error("parameter `{name}` must be within [0.0, 1.0] (got {value})")]
    ParameterOutOfRange { name: &'static str, value: f64 },

    /// Relationship length exceeds the supported display range
    #[error("time_in_relationship_months must be at most {max} (got {value})")]
    MonthsOutOfRange { value: u32, max: u32 },

    /// The red-flag ratio is undefined for an empty indicator list
    #[error("at least one red-flag indicator is required")]
    NoRedFlags,

    /// Radar projection received unequal label and value counts
    #[error("label/value counts must match (got {labels} labels, {values} values)")]
    AxisCountMismatch { labels: usize, values: usize },

    /// A radar chart with fewer than 3 axes is degenerate
    #[error("a radar chart needs at least 3 axes (got {count})")]
    TooFewAxes { count: usize },
}
