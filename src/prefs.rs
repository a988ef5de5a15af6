//! Named preference groups backing the persisted server configuration.
//!
//! A preference group is an opaque string-to-string map. Writes are batched so
//! that callers persisting several related keys never leave a partially
//! updated group behind.

use crate::error::StorageError;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Key-value storage for a single preference group.
pub trait PreferenceStore {
    /// Read the current value of `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Apply every entry of `changes` atomically.
    ///
    /// On `Ok` all entries are visible to subsequent `get` calls; on `Err`
    /// none of them are.
    fn write(&mut self, changes: &BTreeMap<String, String>) -> Result<(), StorageError>;

    /// Write a single key.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut changes = BTreeMap::new();
        changes.insert(key.to_string(), value.to_string());
        self.write(&changes)
    }
}

/// In-process preference group
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, changes: &BTreeMap<String, String>) -> Result<(), StorageError> {
        self.entries
            .extend(changes.iter().map(|(k, v)| (k.clone(), v.clone())));
        Ok(())
    }
}

/// Preference group persisted as `<dir>/<group>.json`.
///
/// Every read goes to disk, so several handles on the same group (the main
/// screen and the settings screen) always observe the latest committed write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open the group `group` inside `dir`. The file is created on first write.
    pub fn open(dir: impl AsRef<Path>, group: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", group)),
        }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole group. Missing or unreadable files yield an empty map.
    fn read_entries(&self) -> BTreeMap<String, String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(
                        "Ignoring corrupt preference file {}: {}",
                        self.path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!(
                    "Cannot read preference file {}: {}",
                    self.path.display(),
                    e
                );
                BTreeMap::new()
            }
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_entries().remove(key)
    }

    fn write(&mut self, changes: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let mut entries = self.read_entries();
        entries.extend(changes.iter().map(|(k, v)| (k.clone(), v.clone())));
        let contents = serde_json::to_string_pretty(&entries)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Replace the group in one rename so readers see old or new, never a mix.
        let temp = self.temp_path();
        if let Err(e) = write_and_replace(&temp, &self.path, contents.as_bytes()) {
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }

        debug!(
            "Wrote {} preference(s) to {}",
            changes.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Write `contents` to `temp`, flush it to disk and rename it over `target`.
fn write_and_replace(temp: &Path, target: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(temp)?;
    file.write_all(contents)?;
    file.sync_all()?;
    drop(file);
    fs::rename(temp, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_and_get() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("server_ip"), None);

        store.set("server_ip", "10.0.0.5").unwrap();
        assert_eq!(store.get("server_ip").as_deref(), Some("10.0.0.5"));

        store.set("server_ip", "10.0.0.6").unwrap();
        assert_eq!(store.get("server_ip").as_deref(), Some("10.0.0.6"));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path(), "ShellPrefs");
        assert_eq!(store.get("server_ip"), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_file_store_batch_write_persists_all_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path(), "ShellPrefs");

        let mut changes = BTreeMap::new();
        changes.insert("server_ip".to_string(), "host.local".to_string());
        changes.insert("server_port".to_string(), "8080".to_string());
        store.write(&changes).unwrap();

        let reopened = FileStore::open(dir.path(), "ShellPrefs");
        assert_eq!(reopened.get("server_ip").as_deref(), Some("host.local"));
        assert_eq!(reopened.get("server_port").as_deref(), Some("8080"));
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_file_store_keeps_unrelated_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path(), "ShellPrefs");
        store.set("theme", "dark").unwrap();
        store.set("server_ip", "10.0.0.5").unwrap();

        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert_eq!(store.get("server_ip").as_deref(), Some("10.0.0.5"));
    }

    #[test]
    fn test_file_store_corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path(), "ShellPrefs");
        fs::write(store.path(), "{not json").unwrap();

        assert_eq!(store.get("server_ip"), None);
    }

    #[test]
    fn test_file_store_failed_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path(), "ShellPrefs");
        // A directory at the target path makes the final rename fail.
        fs::create_dir(store.path()).unwrap();

        assert!(store.set("server_ip", "10.0.0.5").is_err());
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_file_store_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut store = FileStore::open(&nested, "ShellPrefs");
        store.set("server_port", "5173").unwrap();

        assert!(nested.join("ShellPrefs.json").exists());
    }
}
