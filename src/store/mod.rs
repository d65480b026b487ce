//! Persistent local key-value store.
//!
//! Widgets never touch raw keys: [`LocalStore`] exposes one typed accessor per
//! [`StoreKey`] on top of a synchronous [`KeyValueBackend`].

pub mod file;
pub mod memory;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::core::family::Family;

pub use file::FileBackend;
pub use memory::MemoryBackend;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize {key}: {source}")]
    Serialize {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("stored value for {key} is corrupt: {source}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKey {
    Token,
    Notes,
    Families,
}

impl StoreKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::Notes => "notes",
            Self::Families => "families",
        }
    }
}

/// Raw string storage. Implementations serialize their own writes.
pub trait KeyValueBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
    fn keys(&self) -> Vec<String>;
}

/// Cheaply cloneable handle shared by every widget and the API client.
#[derive(Clone)]
pub struct LocalStore {
    backend: Arc<dyn KeyValueBackend>,
}

impl std::fmt::Debug for LocalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalStore")
            .field("keys", &self.backend.keys())
            .finish()
    }
}

impl LocalStore {
    pub fn new(backend: impl KeyValueBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::default())
    }

    pub fn token(&self) -> Option<String> {
        self.backend
            .get(StoreKey::Token.as_str())
            .filter(|t| !t.trim().is_empty())
    }

    pub fn set_token(&self, token: &str) -> Result<(), StoreError> {
        self.backend
            .set(StoreKey::Token.as_str(), token.trim().to_string())
    }

    /// Stored notes, `Ok(None)` when never written.
    pub fn notes(&self) -> Result<Option<Vec<String>>, StoreError> {
        self.get_json(StoreKey::Notes)
    }

    pub fn set_notes(&self, notes: &[String]) -> Result<(), StoreError> {
        self.set_json(StoreKey::Notes, notes)
    }

    /// Cached families, `Ok(None)` when never written.
    pub fn families(&self) -> Result<Option<Vec<Family>>, StoreError> {
        self.get_json(StoreKey::Families)
    }

    pub fn set_families(&self, families: &[Family]) -> Result<(), StoreError> {
        self.set_json(StoreKey::Families, families)
    }

    pub fn remove(&self, key: StoreKey) -> Result<(), StoreError> {
        self.backend.remove(key.as_str())
    }

    /// Drop every key, including ones this client did not write.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.backend.clear()
    }

    pub fn is_empty(&self) -> bool {
        self.backend.keys().is_empty()
    }

    fn get_json<T: DeserializeOwned>(&self, key: StoreKey) -> Result<Option<T>, StoreError> {
        match self.backend.get(key.as_str()) {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StoreError::Corrupt {
                    key: key.as_str(),
                    source,
                }),
            None => Ok(None),
        }
    }

    fn set_json<T: Serialize + ?Sized>(&self, key: StoreKey, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            key: key.as_str(),
            source,
        })?;
        self.backend.set(key.as_str(), raw)
    }
}
