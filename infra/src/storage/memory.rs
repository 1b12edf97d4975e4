//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::Mutex;

use vf_core::errors::StoreError;
use vf_core::services::verification::PhoneStore;

/// In-memory store for development and tests. Values last for the
/// process lifetime only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PhoneStore for MemoryStore {
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }
}
