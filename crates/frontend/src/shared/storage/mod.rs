//! Local persistence adapter.
//!
//! - `KeyValueStorage` - string key/value backend (`BrowserStorage`, `MemoryStorage`)
//! - `LocalStore<T>` - typed record list under one storage key (load once, save on change)

mod browser;
mod local_store;
mod memory;

pub use browser::BrowserStorage;
pub use local_store::{Damage, LoadOutcome, LoadReport, LocalStore};
pub use memory::MemoryStorage;

use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is not available in this browser")]
    Unavailable,
    #[error("failed to read key '{key}': {message}")]
    Read { key: String, message: String },
    #[error("failed to write key '{key}': {message}")]
    Write { key: String, message: String },
    #[error("failed to serialize records for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String key/value storage backend
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

pub type SharedStorage = Arc<dyn KeyValueStorage>;

/// Browser `localStorage` when the page has one, in-memory map otherwise
pub fn default_storage() -> SharedStorage {
    if BrowserStorage::is_available() {
        Arc::new(BrowserStorage)
    } else {
        log::warn!("localStorage unavailable, records will not survive a reload");
        Arc::new(MemoryStorage::new())
    }
}
