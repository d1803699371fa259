//! Durable mirror: tiny persisted key-value storage for the session flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser the mirror is `localStorage` (implemented in the `client`
//! crate). Natively the flag lives in one file per key under a state
//! directory, and tests use the in-memory map.

#[cfg(test)]
#[path = "mirror_test.rs"]
mod mirror_test;

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Errors produced by durable mirror access.
#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    /// The backing storage cannot be reached at all.
    #[error("durable storage unavailable: {0}")]
    Unavailable(String),

    /// A filesystem operation failed.
    #[error("durable storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The key cannot be stored by this backend.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Synchronous, local key-value persistence.
pub trait DurableMirror {
    /// Read the value stored for `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the storage cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, MirrorError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the storage cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<(), MirrorError>;

    /// Remove `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error when the storage cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), MirrorError>;
}

// =============================================================================
// IN-MEMORY
// =============================================================================

/// Process-local mirror; contents vanish with the value.
#[derive(Clone, Debug, Default)]
pub struct MemoryMirror {
    entries: HashMap<String, String>,
}

impl MemoryMirror {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with one pre-existing entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut mirror = Self::new();
        mirror.entries.insert(key.to_owned(), value.to_owned());
        mirror
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl DurableMirror for MemoryMirror {
    fn read(&self, key: &str) -> Result<Option<String>, MirrorError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), MirrorError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), MirrorError> {
        self.entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// FILE-BACKED
// =============================================================================

/// One file per key inside `dir`; the file body is the stored value.
#[derive(Clone, Debug)]
pub struct FileMirror {
    dir: PathBuf,
}

impl FileMirror {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, MirrorError> {
        let usable = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            && key != "."
            && key != "..";
        if !usable {
            return Err(MirrorError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(key))
    }
}

impl DurableMirror for FileMirror {
    fn read(&self, key: &str) -> Result<Option<String>, MirrorError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), MirrorError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(path, value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), MirrorError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
