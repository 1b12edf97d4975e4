//! JSON file-backed key-value store.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use vf_core::errors::StoreError;
use vf_core::services::verification::PhoneStore;

/// Key-value store persisted as a single JSON object on disk.
///
/// The durable analog of browser local storage: small, flat, and
/// read-modify-written as a whole on every put. A mutex serializes
/// writers within the process.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn load(&self) -> Result<HashMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| StoreError::Read {
                message: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(StoreError::Read {
                message: e.to_string(),
            }),
        }
    }

    fn save(&self, values: &HashMap<String, String>) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(values).map_err(|e| StoreError::Write {
            message: e.to_string(),
        })?;
        fs::write(&self.path, contents).map_err(|e| StoreError::Write {
            message: e.to_string(),
        })
    }
}

impl PhoneStore for FileStore {
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap();
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        self.save(&values)
    }

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = self.lock.lock().unwrap();
        Ok(self.load()?.get(key).cloned())
    }
}
