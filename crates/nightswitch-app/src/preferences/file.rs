use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use nightswitch_core::prelude::*;
use toml::{Table, Value};

use super::PreferenceStore;

const HEADER: &str = "# nightswitch preferences\n\
                      # Managed by nightswitch - one table per namespace\n\n";

/// TOML-backed preference store.
///
/// ```toml
/// [MODE]
/// nightMode = true
/// ```
///
/// Reads never fail: a missing, unreadable or malformed file behaves like an
/// empty store. Commits rewrite the whole file atomically (temp file +
/// rename) while holding an exclusive lock on a sibling `.lock` file.
#[derive(Debug)]
pub struct TomlPreferenceStore {
    path: PathBuf,
    data: Table,
    /// Pending writes, last value per `(namespace, key)`
    staged: BTreeMap<(String, String), bool>,
}

impl TomlPreferenceStore {
    /// Open the store at `path`, loading whatever is there.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = load_table(&path);
        Self {
            path,
            data,
            staged: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Staged writes waiting for a successful commit
    pub fn staged_len(&self) -> usize {
        self.staged.len()
    }

    /// Merge the staged writes into the file as it is on disk now and write
    /// it back. Returns the table that was written.
    fn write_staged(&self) -> Result<Table> {
        let commit_err = |reason: String| Error::preference_commit(&self.path, reason);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| commit_err(format!("failed to create directory: {}", e)))?;
        }

        let lock_path = sibling_path(&self.path, ".lock");
        let lock_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| commit_err(format!("failed to open lock file: {}", e)))?;

        // Blocks if another instance is mid-commit
        lock_file
            .lock_exclusive()
            .map_err(|e| commit_err(format!("failed to lock: {}", e)))?;

        // Re-read under the lock so writes from other instances survive
        let mut table = load_table(&self.path);
        apply_staged(&mut table, &self.staged);

        let body = toml::to_string_pretty(&table)
            .map_err(|e| commit_err(format!("failed to serialize: {}", e)))?;

        let temp_path = sibling_path(&self.path, ".tmp");
        let mut temp = std::fs::File::create(&temp_path)
            .map_err(|e| commit_err(format!("failed to create temp file: {}", e)))?;
        temp.write_all(HEADER.as_bytes())
            .and_then(|_| temp.write_all(body.as_bytes()))
            .and_then(|_| temp.sync_all())
            .map_err(|e| commit_err(format!("failed to write temp file: {}", e)))?;
        drop(temp);

        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| commit_err(format!("failed to rename temp file: {}", e)))?;

        // Lock is released when lock_file is dropped
        Ok(table)
    }
}

impl PreferenceStore for TomlPreferenceStore {
    fn get_bool(&self, namespace: &str, key: &str, default: bool) -> bool {
        let value = self
            .data
            .get(namespace)
            .and_then(Value::as_table)
            .and_then(|table| table.get(key));

        match value {
            Some(Value::Boolean(b)) => *b,
            Some(other) => {
                warn!(
                    "Preference {}.{} is not a boolean ({}), using default {}",
                    namespace,
                    key,
                    other.type_str(),
                    default
                );
                default
            }
            None => default,
        }
    }

    fn put_bool(&mut self, namespace: &str, key: &str, value: bool) {
        self.staged
            .insert((namespace.to_string(), key.to_string()), value);
    }

    fn commit(&mut self) -> Result<()> {
        if self.staged.is_empty() {
            return Ok(());
        }

        // On failure the staged writes are kept and retried by the next commit
        let written = self.write_staged()?;

        debug!(
            "Committed {} preference write(s) to {:?}",
            self.staged.len(),
            self.path
        );
        self.data = written;
        self.staged.clear();
        Ok(())
    }
}

fn apply_staged(table: &mut Table, staged: &BTreeMap<(String, String), bool>) {
    for ((namespace, key), value) in staged {
        let slot = table
            .entry(namespace.clone())
            .or_insert(Value::Table(Table::new()));
        if !slot.is_table() {
            warn!("Replacing non-table namespace {:?} in preferences", namespace);
            *slot = Value::Table(Table::new());
        }
        if let Value::Table(namespace_table) = slot {
            namespace_table.insert(key.clone(), Value::Boolean(*value));
        }
    }
}

fn load_table(path: &Path) -> Table {
    if !path.exists() {
        debug!("No preference file at {:?}, starting empty", path);
        return Table::new();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str::<Table>(&content) {
            Ok(table) => {
                debug!("Loaded preferences from {:?}", path);
                table
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Table::new()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Table::new()
        }
    }
}

/// `dir/.name<suffix>` next to `path`
fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "preferences.toml".to_string());
    path.with_file_name(format!(".{}{}", name, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_reads_default() {
        let temp = tempdir().unwrap();
        let store = TomlPreferenceStore::open(temp.path().join("preferences.toml"));
        assert!(!store.get_bool("MODE", "nightMode", false));
    }

    #[test]
    fn test_commit_writes_namespace_table() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("preferences.toml");
        let mut store = TomlPreferenceStore::open(&path);

        store.put_bool("MODE", "nightMode", true);
        store.commit().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[MODE]"));
        assert!(content.contains("nightMode = true"));
        assert_eq!(store.staged_len(), 0);
    }

    #[test]
    fn test_value_survives_reopen() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("preferences.toml");

        let mut store = TomlPreferenceStore::open(&path);
        store.put_bool("MODE", "nightMode", true);
        store.commit().unwrap();
        drop(store);

        let reopened = TomlPreferenceStore::open(&path);
        assert!(reopened.get_bool("MODE", "nightMode", false));
    }

    #[test]
    fn test_commit_creates_parent_directories() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("dir").join("preferences.toml");
        let mut store = TomlPreferenceStore::open(&path);

        store.put_bool("MODE", "nightMode", false);
        store.commit().unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_staged_write_invisible_until_commit() {
        let temp = tempdir().unwrap();
        let mut store = TomlPreferenceStore::open(temp.path().join("preferences.toml"));

        store.put_bool("MODE", "nightMode", true);
        assert!(!store.get_bool("MODE", "nightMode", false));
    }

    #[test]
    fn test_unrelated_entries_preserved() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("preferences.toml");
        std::fs::write(&path, "[MODE]\nfontScale = 1.5\n\n[OTHER]\nflag = false\n").unwrap();

        let mut store = TomlPreferenceStore::open(&path);
        store.put_bool("MODE", "nightMode", true);
        store.commit().unwrap();

        let table: Table = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(table["MODE"]["fontScale"].as_float(), Some(1.5));
        assert_eq!(table["MODE"]["nightMode"].as_bool(), Some(true));
        assert_eq!(table["OTHER"]["flag"].as_bool(), Some(false));
    }

    #[test]
    fn test_malformed_file_reads_default() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("preferences.toml");
        std::fs::write(&path, "[MODE\nnightMode = ").unwrap();

        let store = TomlPreferenceStore::open(&path);
        assert!(!store.get_bool("MODE", "nightMode", false));
    }

    #[test]
    fn test_non_boolean_value_reads_default() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("preferences.toml");
        std::fs::write(&path, "[MODE]\nnightMode = \"yes\"\n").unwrap();

        let store = TomlPreferenceStore::open(&path);
        assert!(!store.get_bool("MODE", "nightMode", false));
        assert!(store.get_bool("MODE", "nightMode", true));
    }

    #[test]
    fn test_non_table_namespace_replaced_on_commit() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("preferences.toml");
        std::fs::write(&path, "MODE = 3\n").unwrap();

        let mut store = TomlPreferenceStore::open(&path);
        store.put_bool("MODE", "nightMode", true);
        store.commit().unwrap();

        assert!(store.get_bool("MODE", "nightMode", false));
    }

    #[test]
    fn test_commit_failure_keeps_staged_writes() {
        let temp = tempdir().unwrap();
        // A regular file where a directory is needed makes the commit fail
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let mut store = TomlPreferenceStore::open(blocker.join("preferences.toml"));

        store.put_bool("MODE", "nightMode", true);
        let err = store.commit().unwrap_err();

        assert!(matches!(err, Error::PreferenceCommit { .. }));
        assert!(err.is_recoverable());
        assert_eq!(store.staged_len(), 1);
        assert!(!store.get_bool("MODE", "nightMode", false));
    }

    #[test]
    fn test_empty_commit_does_not_touch_disk() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("preferences.toml");
        let mut store = TomlPreferenceStore::open(&path);

        store.commit().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_commit_keeps_writes_from_other_instances() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("preferences.toml");
        let mut first = TomlPreferenceStore::open(&path);
        let mut second = TomlPreferenceStore::open(&path);

        first.put_bool("OTHER", "flag", true);
        first.commit().unwrap();
        second.put_bool("MODE", "nightMode", true);
        second.commit().unwrap();

        let reopened = TomlPreferenceStore::open(&path);
        assert!(reopened.get_bool("OTHER", "flag", false));
        assert!(reopened.get_bool("MODE", "nightMode", false));
        // The committing store sees the merged file too
        assert!(second.get_bool("OTHER", "flag", false));
    }

    #[test]
    fn test_repeated_failed_commits_keep_one_write_per_key() {
        let temp = tempdir().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let mut store = TomlPreferenceStore::open(blocker.join("preferences.toml"));

        for value in [true, false, true] {
            store.put_bool("MODE", "nightMode", value);
            assert!(store.commit().is_err());
        }
        store.put_bool("MODE", "other", false);

        assert_eq!(store.staged_len(), 2);
    }

    #[test]
    fn test_last_staged_value_wins() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("preferences.toml");
        let mut store = TomlPreferenceStore::open(&path);

        store.put_bool("MODE", "nightMode", true);
        store.put_bool("MODE", "nightMode", false);
        store.commit().unwrap();

        assert!(!TomlPreferenceStore::open(&path).get_bool("MODE", "nightMode", true));
    }

    #[test]
    fn test_sibling_path() {
        let p = sibling_path(Path::new("/a/b/preferences.toml"), ".lock");
        assert_eq!(p, PathBuf::from("/a/b/.preferences.toml.lock"));
    }
}
