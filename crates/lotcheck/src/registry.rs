//! Shared progress registry for concurrent validation runs.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Progress of a single run, as observed by pollers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunState {
    /// 0–100. Stays below 100 until the run reaches a terminal state.
    pub percent: u8,
    /// True once the run has finished, successfully or not.
    pub done: bool,
    /// File name of the primary artifact, set on completion.
    pub artifact: Option<String>,
    /// Failure message, set when the run failed.
    pub error: Option<String>,
}

/// Registry of run states keyed by run id. Cheap to clone; all clones
/// share the same map.
#[derive(Clone, Default)]
pub struct ProgressRegistry {
    inner: Arc<Mutex<HashMap<String, RunState>>>,
}

impl ProgressRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, RunState>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a fresh run and returns its generated id.
    pub fn create(&self) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.register(&id);
        id
    }

    /// Registers a run under a caller-chosen id, resetting any prior
    /// state stored under it.
    pub fn register(&self, id: &str) {
        self.lock().insert(id.to_string(), RunState::default());
    }

    /// Advances progress. Percent never decreases and terminal runs are
    /// left untouched.
    pub fn set_percent(&self, id: &str, percent: u8) {
        let mut map = self.lock();
        if let Some(state) = map.get_mut(id) {
            if !state.done && percent > state.percent {
                state.percent = percent.min(100);
            }
        }
    }

    /// Marks the run finished with its primary artifact.
    pub fn complete(&self, id: &str, artifact: &str) {
        let mut map = self.lock();
        if let Some(state) = map.get_mut(id) {
            if !state.done {
                state.percent = 100;
                state.done = true;
                state.artifact = Some(artifact.to_string());
            }
        }
    }

    /// Marks the run failed. The artifact, when present, names the
    /// error report written for the run.
    pub fn fail(&self, id: &str, message: &str, artifact: Option<&str>) {
        let mut map = self.lock();
        if let Some(state) = map.get_mut(id) {
            if !state.done {
                state.percent = 100;
                state.done = true;
                state.error = Some(message.to_string());
                state.artifact = artifact.map(str::to_string);
            }
        }
    }

    /// Current state of a run. Unknown ids read as an untouched run.
    pub fn snapshot(&self, id: &str) -> RunState {
        self.lock().get(id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_run_reads_as_default() {
        let registry = ProgressRegistry::new();
        let state = registry.snapshot("nope");
        assert_eq!(state, RunState::default());
    }

    #[test]
    fn create_returns_distinct_ids() {
        let registry = ProgressRegistry::new();
        let a = registry.create();
        let b = registry.create();
        assert_ne!(a, b);
        assert_eq!(registry.snapshot(&a).percent, 0);
    }

    #[test]
    fn percent_is_monotone() {
        let registry = ProgressRegistry::new();
        let id = registry.create();
        registry.set_percent(&id, 40);
        registry.set_percent(&id, 20);
        assert_eq!(registry.snapshot(&id).percent, 40);
        registry.set_percent(&id, 99);
        assert_eq!(registry.snapshot(&id).percent, 99);
    }

    #[test]
    fn complete_is_terminal() {
        let registry = ProgressRegistry::new();
        let id = registry.create();
        registry.complete(&id, "lot_validation_summary.csv");
        let state = registry.snapshot(&id);
        assert_eq!(state.percent, 100);
        assert!(state.done);
        assert_eq!(state.artifact.as_deref(), Some("lot_validation_summary.csv"));

        registry.set_percent(&id, 10);
        registry.fail(&id, "late failure", None);
        assert_eq!(registry.snapshot(&id), state);
    }

    #[test]
    fn fail_records_message_and_artifact() {
        let registry = ProgressRegistry::new();
        let id = registry.create();
        registry.fail(&id, "could not parse document", Some("lot_validation_summary.csv"));
        let state = registry.snapshot(&id);
        assert!(state.done);
        assert_eq!(state.percent, 100);
        assert_eq!(state.error.as_deref(), Some("could not parse document"));
        assert_eq!(state.artifact.as_deref(), Some("lot_validation_summary.csv"));
    }

    #[test]
    fn clones_share_state() {
        let registry = ProgressRegistry::new();
        let clone = registry.clone();
        let id = registry.create();
        clone.set_percent(&id, 55);
        assert_eq!(registry.snapshot(&id).percent, 55);
    }
}
