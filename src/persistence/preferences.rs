use std::{
    collections::BTreeMap,
    path::{
        Path,
        PathBuf,
    },
};

use super::{
    load_json_or_default,
    save_json,
};
use crate::core::FolioError;

pub const PREFERENCES_FILE: &str = "preferences.json";

/// String key/value storage that survives restarts.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), FolioError>;
}

/// Preferences kept as one flat JSON object on disk. Every `set` rewrites the file.
pub struct JsonPreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonPreferenceStore {
    pub fn open(data_dir: &Path) -> Self {
        let path = data_dir.join(PREFERENCES_FILE);
        let values = load_json_or_default(&path);
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FolioError> {
        self.values.insert(key.to_string(), value.to_string());
        save_json(&self.values, &self.path)
    }
}

#[derive(Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FolioError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = JsonPreferenceStore::open(dir.path());
            assert_eq!(store.get("theme"), None);
            store.set("theme", "dark").unwrap();
        }

        let reopened = JsonPreferenceStore::open(dir.path());
        assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
        assert!(reopened.path().ends_with(PREFERENCES_FILE));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryPreferenceStore::with("theme", "light");
        assert_eq!(store.get("theme").as_deref(), Some("light"));
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }
}
