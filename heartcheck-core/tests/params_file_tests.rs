//! Parameter file loading and session update tests

use heartcheck_core::config::load_parameter_file;
use heartcheck_core::{ParameterSet, SessionStore};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_params(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_partial_file_overrides_defaults() {
    let file = write_params(r#"{"rationality": 0.9, "red_flags": [false, false, false, false]}"#);
    let update = load_parameter_file(file.path()).unwrap();

    let mut store = SessionStore::new();
    store.apply(&update).unwrap();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.rationality, 0.9);
    assert_eq!(snapshot.red_flags, vec![false, false, false, false]);
    // Unset fields keep their defaults
    assert_eq!(snapshot.attraction, 0.9);
    assert_eq!(snapshot.time_in_relationship_months, 3);
}

#[test]
fn test_unknown_field_rejected() {
    // Typo: "atraction"
    let file = write_params(r#"{"atraction": 0.5}"#);
    let err = load_parameter_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse parameter file"));
}

#[test]
fn test_out_of_range_file_value_rejected_on_apply() {
    let file = write_params(r#"{"attraction": 1.5}"#);
    // Parsing succeeds; range checking happens at the session boundary
    let update = load_parameter_file(file.path()).unwrap();

    let mut store = SessionStore::new();
    assert!(store.apply(&update).is_err());
    assert_eq!(store.snapshot(), ParameterSet::default());
}

#[test]
fn test_missing_file_reports_path() {
    let err = load_parameter_file(std::path::Path::new("does-not-exist.json")).unwrap_err();
    assert!(err.to_string().contains("does-not-exist.json"));
}
