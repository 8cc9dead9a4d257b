//! Persistent storage abstractions
//!
//! Provides a trait for durable key-value storage that ports implement on
//! top of their flash filesystem or a wear-levelled flash map.

/// Storage keys for persisted data
///
/// Each key is an independent document; writing one never touches
/// another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StorageKey {
    /// Launcher/theme preferences (TOML text)
    LauncherPreferences = 0,
    /// Reserved for future use
    Reserved1 = 1,
    /// Reserved for future use
    Reserved2 = 2,
}

impl StorageKey {
    /// Get the key as a byte value
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Create a key from a byte value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(StorageKey::LauncherPreferences),
            1 => Some(StorageKey::Reserved1),
            2 => Some(StorageKey::Reserved2),
            _ => None,
        }
    }

    /// Logical path of the document on filesystem-backed ports
    pub fn path(self) -> &'static str {
        match self {
            StorageKey::LauncherPreferences => "stores/theme.toml",
            StorageKey::Reserved1 => "stores/reserved1.bin",
            StorageKey::Reserved2 => "stores/reserved2.bin",
        }
    }
}

/// Errors from storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Key not found
    NotFound,
    /// Buffer too small for the data
    BufferTooSmall,
    /// Underlying read failed
    Read,
    /// Underlying write failed
    Write,
    /// Storage is full
    Full,
}

/// Key-value storage trait
///
/// Operations complete synchronously; the launcher loop is single-threaded
/// and touches storage only when the user changes a preference.
pub trait KeyValueStorage {
    /// Read a value by key into the provided buffer
    ///
    /// # Returns
    /// The number of bytes read, or an error.
    fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, StorageError>;

    /// Write (replace) a value by key
    fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StorageError>;

    /// Check if a key exists in storage
    fn exists(&mut self, key: StorageKey) -> bool;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &mut T {
    fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, StorageError> {
        (**self).read(key, buffer)
    }

    fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StorageError> {
        (**self).write(key, data)
    }

    fn exists(&mut self, key: StorageKey) -> bool {
        (**self).exists(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_roundtrip() {
        for key in [
            StorageKey::LauncherPreferences,
            StorageKey::Reserved1,
            StorageKey::Reserved2,
        ] {
            assert_eq!(StorageKey::from_u8(key.as_u8()), Some(key));
        }
        assert_eq!(StorageKey::from_u8(0xFF), None);
    }

    #[test]
    fn test_preferences_path() {
        assert_eq!(StorageKey::LauncherPreferences.path(), "stores/theme.toml");
    }
}
