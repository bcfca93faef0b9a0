//! Key-value store wrapper with automatic serialization.

use crate::StorageError;
use serde::{de::DeserializeOwned, Serialize};

/// Type-safe store backed by the browser's `localStorage`.
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`. Opening never fails: a browser
/// profile with storage disabled yields a handle whose operations report
/// [`StorageError::Unavailable`], letting callers degrade instead of
/// failing to initialize.
///
/// Clones share the same storage area. On native targets the backing is
/// an in-process map with identical semantics.
#[derive(Clone)]
pub struct BrowserStore {
    #[cfg(target_arch = "wasm32")]
    storage: Option<web_sys::Storage>,
    #[cfg(not(target_arch = "wasm32"))]
    slots: std::sync::Arc<std::sync::Mutex<std::collections::HashMap<String, String>>>,
}

impl BrowserStore {
    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist. Content that fails to
    /// parse surfaces as `Err`, never as a panic.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.get_raw(key)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the store.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json)
    }
}

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    /// Open the window's `localStorage` area.
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }

    fn backend(&self) -> Result<&web_sys::Storage, StorageError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("localStorage is not accessible".into()))
    }

    /// Get the raw string content of a slot.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.backend()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    /// Set the raw string content of a slot.
    pub fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.backend()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    /// Delete a slot.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.backend()?
            .remove_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl BrowserStore {
    /// Open a fresh in-process storage area.
    pub fn open() -> Self {
        Self {
            slots: std::sync::Arc::default(),
        }
    }

    /// Get the raw string content of a slot.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self
            .slots
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(slots.get(key).cloned())
    }

    /// Set the raw string content of a slot.
    pub fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Delete a slot.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Payload {
        label: String,
        count: u32,
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = BrowserStore::open();
        let value: Option<Payload> = store.get("nothing-here").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_set_get_round_trip() {
        let store = BrowserStore::open();
        let payload = Payload {
            label: "hello".to_string(),
            count: 3,
        };

        store.set("slot", &payload).unwrap();
        let back: Option<Payload> = store.get("slot").unwrap();
        assert_eq!(back, Some(payload));
    }

    #[test]
    fn test_remove_clears_slot() {
        let store = BrowserStore::open();
        store.set("slot", &1u32).unwrap();
        store.remove("slot").unwrap();

        let back: Option<u32> = store.get("slot").unwrap();
        assert!(back.is_none());
    }

    #[test]
    fn test_corrupt_content_is_an_error_not_a_panic() {
        let store = BrowserStore::open();
        store.set_raw("slot", "{definitely not json").unwrap();

        let result: Result<Option<Payload>, _> = store.get("slot");
        assert!(matches!(result, Err(StorageError::Serialize(_))));
    }

    #[test]
    fn test_clones_share_the_storage_area() {
        let store = BrowserStore::open();
        let alias = store.clone();

        store.set("slot", &41u32).unwrap();
        let seen: Option<u32> = alias.get("slot").unwrap();
        assert_eq!(seen, Some(41));
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let store = BrowserStore::open();
        store.set("slot", &1u32).unwrap();
        store.set("slot", &2u32).unwrap();

        let back: Option<u32> = store.get("slot").unwrap();
        assert_eq!(back, Some(2));
    }
}
