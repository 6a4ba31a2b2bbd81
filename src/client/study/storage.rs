use std::collections::HashMap;

use serde_json::Value;

#[derive(Clone, Debug, PartialEq)]
pub struct StorageError {
    pub message: String,
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// JSON key-value store backing the study history.
pub trait KeyValueStorage {
    /// Gets the value at `key`, or `None` when it is missing or unreadable.
    fn get(&self, key: &str) -> Option<Value>;

    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, Value>,
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Browser `localStorage`.
#[cfg(feature = "web")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "web")]
impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<Value> {
        use gloo_storage::{LocalStorage, Storage};

        LocalStorage::get::<Value>(key).ok()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError> {
        use gloo_storage::{LocalStorage, Storage};

        LocalStorage::set(key, value).map_err(|e| StorageError {
            message: format!("Failed to save to local storage: {}", e),
        })
    }
}
