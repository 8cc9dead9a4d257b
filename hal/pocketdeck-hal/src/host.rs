//! Host implementations for tests and desktop simulators

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::storage::{KeyValueStorage, StorageError, StorageKey};

/// In-memory storage
///
/// Reads and writes can be made to fail to exercise recovery paths.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<StorageKey, Vec<u8>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStorage {
    /// Create empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-populated with one document
    pub fn with_entry(key: StorageKey, data: &[u8]) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key, data.to_vec());
        storage
    }

    /// Make every subsequent read fail with [`StorageError::Read`]
    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Make every subsequent write fail with [`StorageError::Write`]
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw stored bytes for a key
    pub fn get(&self, key: StorageKey) -> Option<&[u8]> {
        self.entries.get(&key).map(Vec::as_slice)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Read);
        }
        let data = self.entries.get(&key).ok_or(StorageError::NotFound)?;
        if data.len() > buffer.len() {
            return Err(StorageError::BufferTooSmall);
        }
        buffer[..data.len()].copy_from_slice(data);
        Ok(data.len())
    }

    fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write);
        }
        self.entries.insert(key, data.to_vec());
        Ok(())
    }

    fn exists(&mut self, key: StorageKey) -> bool {
        self.entries.contains_key(&key)
    }
}

/// File-backed storage rooted at a directory
///
/// Each key maps to [`StorageKey::path`] below the root.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: StorageKey) -> PathBuf {
        self.root.join(key.path())
    }
}

impl KeyValueStorage for FileStorage {
    fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, StorageError> {
        let data = fs::read(self.path_for(key)).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::NotFound,
            _ => StorageError::Read,
        })?;
        if data.len() > buffer.len() {
            return Err(StorageError::BufferTooSmall);
        }
        buffer[..data.len()].copy_from_slice(&data);
        Ok(data.len())
    }

    fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|_| StorageError::Write)?;
        }
        fs::write(path, data).map_err(|_| StorageError::Write)
    }

    fn exists(&mut self, key: StorageKey) -> bool {
        self.path_for(key).is_file()
    }
}
