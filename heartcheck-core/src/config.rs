//! Parameter file support
//!
//! Loads assessment parameters from a JSON file of partial overrides.
//! All fields are optional; callers layer CLI flags on top, so flag values
//! take precedence over file values.

use crate::params::ParameterUpdate;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a parameter file
///
/// The file is a JSON object with any subset of the parameter fields.
/// Unknown fields are rejected to catch typos early; range checks happen
/// when the update is applied to a session.
pub fn load_parameter_file(path: &Path) -> Result<ParameterUpdate> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read parameter file: {}", path.display()))?;
    let update: ParameterUpdate = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse parameter file: {}", path.display()))?;
    Ok(update)
}
