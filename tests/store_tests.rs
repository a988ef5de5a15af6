//! Configuration persistence tests.
//!
//! These tests drive `ConfigStore` against real preference files and a
//! failing mock store.

use mockall::mock;
use std::collections::BTreeMap;
use webshell::error::{AppError, StorageError, ValidationError};
use webshell::models::Configuration;
use webshell::prefs::{FileStore, PreferenceStore};
use webshell::resolver::{has_changed, resolve};
use webshell::store::{ConfigStore, DEFAULT_PORT, KEY_SERVER_IP, KEY_SERVER_PORT};

mock! {
    pub Prefs {}

    impl PreferenceStore for Prefs {
        fn get(&self, key: &str) -> Option<String>;
        fn write(&mut self, changes: &BTreeMap<String, String>) -> Result<(), StorageError>;
    }
}

/// Test module for file-backed persistence
mod file_store_tests {
    use super::*;

    #[test]
    fn test_saved_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ConfigStore::new(FileStore::open(dir.path(), "ShellPrefs"));
        store.save(" 192.168.1.10 ", "8080").unwrap();

        let reopened = ConfigStore::new(FileStore::open(dir.path(), "ShellPrefs"));
        assert_eq!(
            reopened.load(),
            Configuration::new("192.168.1.10", "8080")
        );
    }

    #[test]
    fn test_first_run_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(FileStore::open(dir.path(), "ShellPrefs"));

        let config = store.load();
        assert!(!config.is_configured());
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_file_uses_documented_keys() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = FileStore::open(dir.path(), "ShellPrefs");
        let path = prefs.path().to_path_buf();
        let mut store = ConfigStore::new(prefs);
        store.save("erp.local", "").unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(json[KEY_SERVER_IP], "erp.local");
        assert_eq!(json[KEY_SERVER_PORT], "5173");
    }

    #[test]
    fn test_second_handle_sees_latest_save() {
        let dir = tempfile::tempdir().unwrap();
        let reader = ConfigStore::new(FileStore::open(dir.path(), "ShellPrefs"));
        let mut writer = ConfigStore::new(FileStore::open(dir.path(), "ShellPrefs"));

        writer.save("10.0.0.5", "5173").unwrap();
        let first = resolve(&reader.load());

        writer.save("10.0.0.6", "5173").unwrap();
        assert!(has_changed(Some(&first), &reader.load()));
    }

    #[test]
    fn test_groups_are_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let mut a = ConfigStore::new(FileStore::open(dir.path(), "GroupA"));
        let b = ConfigStore::new(FileStore::open(dir.path(), "GroupB"));

        a.save("10.0.0.5", "").unwrap();
        assert!(!b.load().is_configured());
    }
}

/// Test module for validation outcomes
mod validation_tests {
    use super::*;
    use webshell::prefs::MemoryStore;

    #[test]
    fn test_valid_pairs_round_trip() {
        let hosts = ["localhost", "erp.example.com", "10.0.0.5", "srv-01.lan"];
        let ports = ["1", "80", "5173", "65535"];
        let mut store = ConfigStore::new(MemoryStore::new());

        for host in hosts {
            for port in ports {
                store.save(host, port).unwrap();
                assert_eq!(store.load(), Configuration::new(host, port));
            }
        }
    }

    #[test]
    fn test_error_kinds() {
        let mut store = ConfigStore::new(MemoryStore::new());
        let cases = [
            ("", "8080", ValidationError::EmptyHost),
            ("not a host!", "8080", ValidationError::InvalidHost),
            ("10.0.0.5", "http", ValidationError::InvalidPort),
            ("10.0.0.5", "0", ValidationError::PortOutOfRange),
            ("10.0.0.5", "65536", ValidationError::PortOutOfRange),
        ];

        for (host, port, expected) in cases {
            match store.save(host, port) {
                Err(AppError::Validation(kind)) => assert_eq!(kind, expected, "{}:{}", host, port),
                other => panic!("{}:{} gave {:?}", host, port, other),
            }
        }
        assert!(!store.load().is_configured());
    }
}

/// Test module for storage failures
mod storage_failure_tests {
    use super::*;

    #[test]
    fn test_write_failure_is_reported() {
        let mut prefs = MockPrefs::new();
        prefs.expect_write().times(1).returning(|_| {
            Err(StorageError::Io(std::io::Error::other("disk full")))
        });

        let mut store = ConfigStore::new(prefs);
        let err = store.save("10.0.0.5", "8080").unwrap_err();

        assert!(matches!(err, AppError::Storage(_)));
        assert_eq!(err.advisory(), "Could not save settings");
    }

    #[test]
    fn test_both_keys_written_in_one_batch() {
        let mut prefs = MockPrefs::new();
        prefs
            .expect_write()
            .withf(|changes| {
                changes.len() == 2
                    && changes.get(KEY_SERVER_IP).map(String::as_str) == Some("10.0.0.5")
                    && changes.get(KEY_SERVER_PORT).map(String::as_str) == Some("5173")
            })
            .times(1)
            .returning(|_| Ok(()));

        let mut store = ConfigStore::new(prefs);
        store.save("10.0.0.5", "").unwrap();
    }

    #[test]
    fn test_invalid_input_never_reaches_storage() {
        let mut prefs = MockPrefs::new();
        prefs.expect_write().never();

        let mut store = ConfigStore::new(prefs);
        assert!(store.save("10.0.0.5", "65536").is_err());
    }
}
