use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{IntoCore, StorageError};
use rentslip_core::Result;

const CURRENT_VERSION: u32 = 1;

/// Minimal persistent key-value interface.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>>;
    fn set(&self, key: &str, value: Value) -> Result<()>;
}

/// Key-value store backed by one JSON file.
///
/// The file is read on every access and rewritten on every change. A
/// missing or empty file reads as an empty store; parent directories are
/// created on first write.
#[derive(Debug)]
pub struct JsonKeyValueStore {
    path: PathBuf,
    lock: Mutex<()>,
}

#[derive(Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    #[serde(default)]
    entries: BTreeMap<String, Value>,
}

impl JsonKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn guard(&self) -> std::result::Result<MutexGuard<'_, ()>, StorageError> {
        self.lock.lock().map_err(|_| StorageError::LockPoisoned)
    }

    fn with_store<F>(&self, op: F) -> std::result::Result<(), StorageError>
    where
        F: FnOnce(&mut BTreeMap<String, Value>),
    {
        let _guard = self.guard()?;
        let mut store = self.load_store_locked()?;
        op(&mut store);
        self.persist_store_locked(store)
    }

    fn load_store_locked(&self) -> std::result::Result<BTreeMap<String, Value>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let raw = fs::read(&self.path)?;
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(BTreeMap::new());
        }

        let file: StoreFile = serde_json::from_slice(&raw)?;
        if file.version > CURRENT_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: file.version,
                supported: CURRENT_VERSION,
            });
        }
        Ok(file.entries)
    }

    fn persist_store_locked(
        &self,
        entries: BTreeMap<String, Value>,
    ) -> std::result::Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = StoreFile {
            version: CURRENT_VERSION,
            entries,
        };
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, json)?;
        debug!("Wrote store file {}", self.path.display());
        Ok(())
    }
}

impl KeyValueStore for JsonKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let store = self
            .guard()
            .and_then(|_guard| self.load_store_locked())
            .into_core()?;
        Ok(store.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        self.with_store(|store| {
            store.insert(key.to_string(), value);
        })
        .into_core()
    }
}
