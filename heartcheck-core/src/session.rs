//! Session-scoped parameter store
//!
//! Owns the one mutable [`ParameterSet`]; the scoring and projection engines
//! only ever see read-only snapshots. An update is validated in full before
//! it replaces the current set, so a failed update leaves state untouched,
//! and reset swaps every field at once.

use crate::error::AssessmentError;
use crate::params::{ParameterSet, ParameterUpdate};

/// Holds the current parameter set across interactions
#[derive(Debug, Default)]
pub struct SessionStore {
    current: ParameterSet,
}

impl SessionStore {
    /// Start a session at the documented defaults
    pub fn new() -> Self {
        SessionStore {
            current: ParameterSet::default(),
        }
    }

    /// Read-only copy of the current state
    pub fn snapshot(&self) -> ParameterSet {
        self.current.clone()
    }

    /// Merge a partial update; commits only if the merged set validates
    pub fn apply(&mut self, update: &ParameterUpdate) -> Result<&ParameterSet, AssessmentError> {
        let candidate = update.apply_to(&self.current);
        candidate.validate()?;
        self.current = candidate;
        Ok(&self.current)
    }

    /// Restore the documented defaults, replacing every field at once
    pub fn reset_to_default(&mut self) -> &ParameterSet {
        self.current = ParameterSet::default();
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_at_defaults() {
        let store = SessionStore::new();
        assert_eq!(store.snapshot(), ParameterSet::default());
    }

    #[test]
    fn test_failed_update_leaves_state_untouched() {
        let mut store = SessionStore::new();
        let before = store.snapshot();

        let update = ParameterUpdate {
            attraction: Some(0.2),
            rationality: Some(1.5), // out of range
            ..ParameterUpdate::default()
        };
        assert!(store.apply(&update).is_err());
        // Atomic: the valid attraction change must not land either
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut store = SessionStore::new();
        let update = ParameterUpdate {
            attraction: Some(0.1),
            red_flags: Some(vec![true]),
            ..ParameterUpdate::default()
        };
        store.apply(&update).unwrap();
        assert_ne!(store.snapshot(), ParameterSet::default());

        store.reset_to_default();
        assert_eq!(store.snapshot(), ParameterSet::default());
    }
}
