use std::collections::{BTreeMap, HashMap};

use nightswitch_core::prelude::*;

use super::PreferenceStore;

/// Process-local preference store.
///
/// Keeps committed values separate from staged ones so tests can observe
/// exactly what a commit made durable.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    committed: HashMap<String, HashMap<String, bool>>,
    staged: BTreeMap<(String, String), bool>,
    commits: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a committed value.
    pub fn with_value(mut self, namespace: &str, key: &str, value: bool) -> Self {
        self.committed
            .entry(namespace.to_string())
            .or_default()
            .insert(key.to_string(), value);
        self
    }

    /// Committed value, `None` if the key was never written.
    pub fn committed_value(&self, namespace: &str, key: &str) -> Option<bool> {
        self.committed
            .get(namespace)
            .and_then(|values| values.get(key))
            .copied()
    }

    pub fn has_staged(&self) -> bool {
        !self.staged.is_empty()
    }

    /// Number of successful commits
    pub fn commit_count(&self) -> usize {
        self.commits
    }
}

impl PreferenceStore for InMemoryStore {
    fn get_bool(&self, namespace: &str, key: &str, default: bool) -> bool {
        self.committed_value(namespace, key).unwrap_or(default)
    }

    fn put_bool(&mut self, namespace: &str, key: &str, value: bool) {
        self.staged
            .insert((namespace.to_string(), key.to_string()), value);
    }

    fn commit(&mut self) -> Result<()> {
        for ((namespace, key), value) in std::mem::take(&mut self.staged) {
            self.committed
                .entry(namespace)
                .or_default()
                .insert(key, value);
        }
        self.commits += 1;
        trace!("In-memory preferences committed ({} commits)", self.commits);
        Ok(())
    }
}
