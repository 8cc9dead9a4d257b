//! User preferences

pub mod store;

pub use store::{PersistenceError, PreferenceStore, LAUNCHER_KEY, MAX_PREFERENCES_SIZE};
