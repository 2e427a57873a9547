//! Key-value persistence for palettes and preferences.
//!
//! Services never touch files directly; they are handed a `KeyValueStore`
//! and read or write string blobs by key. The backend is picked from
//! `Settings::storage` at startup.

mod json_file;
mod memory;
mod sqlite;

use std::path::Path;

use anyhow::Result;

use crate::models::settings::StorageBackend;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// String blobs addressed by key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
    /// Remove every key.
    fn clear(&mut self) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }
}

/// Open the configured backend inside `data_dir`.
pub fn open_store(backend: StorageBackend, data_dir: &Path) -> Result<Box<dyn KeyValueStore>> {
    let store: Box<dyn KeyValueStore> = match backend {
        StorageBackend::Json => Box::new(JsonFileStore::open(data_dir.join("store.json"))?),
        StorageBackend::Sqlite => Box::new(SqliteStore::open(data_dir.join("store.db"))?),
    };
    log::debug!("Opened {:?} store in {}", backend, data_dir.display());
    Ok(store)
}
