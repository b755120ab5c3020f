//! Key-value preference storage
//!
//! The controller only sees the narrow [`PreferenceStore`] trait:
//! - [`InMemoryStore`] - process-local store, used by tests and as a fallback
//! - [`TomlPreferenceStore`] - on-disk store, one TOML table per namespace

mod file;
mod memory;

pub use file::TomlPreferenceStore;
pub use memory::InMemoryStore;

use crate::config::StoreSettings;
use nightswitch_core::prelude::*;

/// Namespaced boolean preference storage.
///
/// Writes made with [`put_bool`](PreferenceStore::put_bool) are staged and
/// only become visible to [`get_bool`](PreferenceStore::get_bool) once
/// [`commit`](PreferenceStore::commit) succeeds.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore {
    /// Read a boolean, falling back to `default` when absent.
    fn get_bool(&self, namespace: &str, key: &str, default: bool) -> bool;

    /// Stage a boolean write.
    fn put_bool(&mut self, namespace: &str, key: &str, value: bool);

    /// Make staged writes durable.
    fn commit(&mut self) -> Result<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get_bool(&self, namespace: &str, key: &str, default: bool) -> bool {
        (**self).get_bool(namespace, key, default)
    }

    fn put_bool(&mut self, namespace: &str, key: &str, value: bool) {
        (**self).put_bool(namespace, key, value)
    }

    fn commit(&mut self) -> Result<()> {
        (**self).commit()
    }
}

/// Location of a single preference: `namespace` + `key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceKey {
    pub namespace: String,
    pub key: String,
}

impl PreferenceKey {
    pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
        }
    }

    /// The night-mode key named in the `[store]` settings.
    pub fn from_settings(store: &StoreSettings) -> Self {
        Self::new(store.namespace.clone(), store.key.clone())
    }
}

impl Default for PreferenceKey {
    fn default() -> Self {
        Self::from_settings(&StoreSettings::default())
    }
}

impl std::fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.namespace, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key_is_mode_night_mode() {
        let key = PreferenceKey::default();
        assert_eq!(key.namespace, "MODE");
        assert_eq!(key.key, "nightMode");
        assert_eq!(key.to_string(), "MODE.nightMode");
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut store: Box<dyn PreferenceStore> = Box::new(InMemoryStore::new());
        store.put_bool("MODE", "nightMode", true);
        store.commit().unwrap();
        assert!(store.get_bool("MODE", "nightMode", false));
    }
}
