//! Launcher preference persistence
//!
//! The preference document is a small TOML table stored under
//! [`StorageKey::LauncherPreferences`]:
//!
//! ```toml
//! launcher = "fidget"
//! ```
//!
//! Other keys in the document belong to other features and survive a save.
//! [`PreferenceStore::load`] and [`PreferenceStore::save`] never fail; the
//! `try_` variants report what went wrong.

use alloc::string::{String, ToString};
use alloc::vec;
use core::str;

use pocketdeck_hal::{KeyValueStorage, StorageError, StorageKey};
use toml::{Table, Value};

use crate::launcher::{default_launcher_name, launcher_name, LauncherName};

/// Key holding the launcher name
pub const LAUNCHER_KEY: &str = "launcher";

/// Largest preference document read or written
///
/// The document is shared with other features' settings, so this is a
/// ceiling, not the expected size.
pub const MAX_PREFERENCES_SIZE: usize = 16 * 1024;

/// First read attempt; doubled until the document fits
const INITIAL_READ_SIZE: usize = 1024;

const KEY: StorageKey = StorageKey::LauncherPreferences;

/// Preference persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PersistenceError {
    /// No preference document stored
    NotFound,
    /// Storage operation failed
    Storage(StorageError),
    /// Document is not UTF-8
    InvalidUtf8,
    /// Document is not a TOML table, or `launcher` is not a valid name
    Malformed,
    /// Document has no `launcher` key
    MissingKey,
    /// Document could not be serialized within [`MAX_PREFERENCES_SIZE`]
    Serialize,
}

impl From<StorageError> for PersistenceError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound => PersistenceError::NotFound,
            e => PersistenceError::Storage(e),
        }
    }
}

/// Durable launcher preference
pub struct PreferenceStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> PreferenceStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Get access to the underlying storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Get mutable access to the underlying storage
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Release the underlying storage
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Load the preferred launcher
    ///
    /// Falls back to the default launcher on any failure.
    pub fn load(&mut self) -> LauncherName {
        self.try_load().unwrap_or_else(|_| default_launcher_name())
    }

    /// Load the preferred launcher, reporting why it is unavailable
    pub fn try_load(&mut self) -> Result<LauncherName, PersistenceError> {
        let document = self.read_document()?;
        let value = document
            .get(LAUNCHER_KEY)
            .ok_or(PersistenceError::MissingKey)?;
        let name = value.as_str().ok_or(PersistenceError::Malformed)?;
        launcher_name(name).ok_or(PersistenceError::Malformed)
    }

    /// Persist the preferred launcher
    ///
    /// Returns false if nothing was written; the previous document is then
    /// left untouched.
    pub fn save(&mut self, name: &str) -> bool {
        self.try_save(name).is_ok()
    }

    /// Persist the preferred launcher (read-merge-write)
    ///
    /// A missing or unreadable-as-TOML document is replaced; a document the
    /// storage cannot read is not overwritten.
    pub fn try_save(&mut self, name: &str) -> Result<(), PersistenceError> {
        let mut document = match self.read_document() {
            Ok(document) => document,
            Err(
                PersistenceError::NotFound
                | PersistenceError::InvalidUtf8
                | PersistenceError::Malformed,
            ) => Table::new(),
            Err(e) => return Err(e),
        };
        document.insert(LAUNCHER_KEY.to_string(), Value::String(name.to_string()));

        let text: String = toml::to_string(&document).map_err(|_| PersistenceError::Serialize)?;
        if text.len() > MAX_PREFERENCES_SIZE {
            return Err(PersistenceError::Serialize);
        }
        self.storage.write(KEY, text.as_bytes())?;
        Ok(())
    }

    fn read_document(&mut self) -> Result<Table, PersistenceError> {
        let mut buffer = vec![0u8; INITIAL_READ_SIZE];
        let len = loop {
            match self.storage.read(KEY, &mut buffer) {
                Ok(len) => break len,
                Err(StorageError::BufferTooSmall) if buffer.len() < MAX_PREFERENCES_SIZE => {
                    let size = (buffer.len() * 2).min(MAX_PREFERENCES_SIZE);
                    buffer.resize(size, 0);
                }
                Err(e) => return Err(e.into()),
            }
        };
        let text = str::from_utf8(&buffer[..len]).map_err(|_| PersistenceError::InvalidUtf8)?;
        toml::from_str::<Table>(text).map_err(|_| PersistenceError::Malformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocketdeck_hal::host::MemoryStorage;

    fn stored(storage: &MemoryStorage) -> &str {
        str::from_utf8(storage.get(KEY).unwrap()).unwrap()
    }

    #[test]
    fn test_roundtrip() {
        let mut store = PreferenceStore::new(MemoryStorage::new());
        assert!(store.save("fidget"));
        assert_eq!(store.load().as_str(), "fidget");
    }

    #[test]
    fn test_missing_document() {
        let mut store = PreferenceStore::new(MemoryStorage::new());
        assert_eq!(store.try_load(), Err(PersistenceError::NotFound));
        assert_eq!(store.load().as_str(), "standard");
    }

    #[test]
    fn test_corrupt_document() {
        let mut store = PreferenceStore::new(MemoryStorage::with_entry(KEY, b"launcher = [oops"));
        assert_eq!(store.try_load(), Err(PersistenceError::Malformed));
        assert_eq!(store.load().as_str(), "standard");

        let mut store = PreferenceStore::new(MemoryStorage::with_entry(KEY, &[0xFF, 0xFE]));
        assert_eq!(store.try_load(), Err(PersistenceError::InvalidUtf8));
    }

    #[test]
    fn test_wrong_shapes() {
        let mut store = PreferenceStore::new(MemoryStorage::with_entry(KEY, b"brightness = 3"));
        assert_eq!(store.try_load(), Err(PersistenceError::MissingKey));

        let mut store = PreferenceStore::new(MemoryStorage::with_entry(KEY, b"launcher = 7"));
        assert_eq!(store.try_load(), Err(PersistenceError::Malformed));

        let mut store = PreferenceStore::new(MemoryStorage::with_entry(
            KEY,
            b"launcher = \"a-very-long-launcher-name\"",
        ));
        assert_eq!(store.try_load(), Err(PersistenceError::Malformed));
    }

    #[test]
    fn test_save_preserves_unknown_keys() {
        let mut store = PreferenceStore::new(MemoryStorage::with_entry(
            KEY,
            b"launcher = \"standard\"\nbrightness = 3\n\n[clock]\nformat = \"24h\"\n",
        ));
        assert!(store.save("mindful"));

        let document: Table = toml::from_str(stored(store.storage())).unwrap();
        assert_eq!(document.get("launcher").and_then(Value::as_str), Some("mindful"));
        assert_eq!(document.get("brightness").and_then(Value::as_integer), Some(3));
        assert_eq!(
            document
                .get("clock")
                .and_then(|c| c.get("format"))
                .and_then(Value::as_str),
            Some("24h")
        );
    }

    #[test]
    fn test_save_replaces_corrupt_document() {
        let mut store = PreferenceStore::new(MemoryStorage::with_entry(KEY, b"{{{ not toml"));
        assert!(store.save("fidget"));
        assert_eq!(store.load().as_str(), "fidget");
    }

    #[test]
    fn test_write_failure_keeps_previous() {
        let mut store = PreferenceStore::new(MemoryStorage::new());
        assert!(store.save("mindful"));

        store.storage_mut().fail_writes(true);
        assert!(!store.save("fidget"));
        assert_eq!(
            store.try_save("fidget"),
            Err(PersistenceError::Storage(StorageError::Write))
        );
        assert_eq!(store.load().as_str(), "mindful");
    }

    /// `launcher` plus `extra` settings owned by other features
    fn shared_document(launcher: &str, extra: usize) -> String {
        let mut text = alloc::format!("launcher = \"{}\"\n", launcher);
        for i in 0..extra {
            text.push_str(&alloc::format!("setting_{:03} = \"value number {:03}\"\n", i, i));
        }
        text
    }

    #[test]
    fn test_large_document_roundtrip() {
        let document = shared_document("fidget", 60);
        assert!(document.len() > 1024);
        let mut store = PreferenceStore::new(MemoryStorage::with_entry(KEY, document.as_bytes()));

        assert_eq!(store.try_load().map(|n| n.as_str() == "fidget"), Ok(true));
        assert!(store.save("mindful"));
        assert_eq!(store.load().as_str(), "mindful");

        let saved: Table = toml::from_str(stored(store.storage())).unwrap();
        assert_eq!(saved.len(), 61);
        assert_eq!(
            saved.get("setting_059").and_then(Value::as_str),
            Some("value number 059")
        );
    }

    #[test]
    fn test_oversized_document_is_not_overwritten() {
        let document = shared_document("fidget", 600);
        assert!(document.len() > MAX_PREFERENCES_SIZE);
        let mut store = PreferenceStore::new(MemoryStorage::with_entry(KEY, document.as_bytes()));

        assert_eq!(
            store.try_load(),
            Err(PersistenceError::Storage(StorageError::BufferTooSmall))
        );
        assert!(!store.save("mindful"));
        assert_eq!(stored(store.storage()), document);
    }

    #[test]
    fn test_read_failure_does_not_overwrite() {
        let mut store = PreferenceStore::new(MemoryStorage::with_entry(
            KEY,
            b"launcher = \"mindful\"\nbrightness = 3\n",
        ));
        store.storage_mut().fail_reads(true);
        assert_eq!(
            store.try_save("fidget"),
            Err(PersistenceError::Storage(StorageError::Read))
        );
        assert_eq!(store.load().as_str(), "standard");

        store.storage_mut().fail_reads(false);
        assert!(stored(store.storage()).contains("brightness"));
        assert_eq!(store.load().as_str(), "mindful");
    }
}
