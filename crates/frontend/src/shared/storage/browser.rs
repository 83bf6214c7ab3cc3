use super::{KeyValueStorage, StorageError};
use web_sys::window;

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn is_available() -> bool {
        get_local_storage().is_some()
    }
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        storage.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: format!("{e:?}"),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        // QuotaExceededError and disabled storage both surface here
        storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: format!("{e:?}"),
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        storage.remove_item(key).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: format!("{e:?}"),
        })
    }
}
