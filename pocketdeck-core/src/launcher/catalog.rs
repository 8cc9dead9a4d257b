//! App catalog
//!
//! The launcher only needs each app's label; starting the app is the host
//! loop's job once a variant answers [`Launch`](super::LauncherResponse::Launch).

use heapless::{String, Vec};

/// Maximum apps in a catalog
pub const MAX_APPS: usize = 24;

/// Maximum app label length
pub const MAX_APP_LABEL_LEN: usize = 20;

/// Catalog errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CatalogError {
    /// Catalog already holds [`MAX_APPS`] entries
    Full,
    /// Label longer than [`MAX_APP_LABEL_LEN`]
    LabelTooLong,
}

/// One launchable app
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AppEntry {
    pub label: String<MAX_APP_LABEL_LEN>,
}

/// Ordered list of launchable apps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AppCatalog {
    apps: Vec<AppEntry, MAX_APPS>,
}

impl AppCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from labels
    pub fn from_labels(labels: &[&str]) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for label in labels {
            catalog.push(label)?;
        }
        Ok(catalog)
    }

    /// Append an app, returning its index
    pub fn push(&mut self, label: &str) -> Result<usize, CatalogError> {
        let label = String::try_from(label).map_err(|_| CatalogError::LabelTooLong)?;
        self.apps
            .push(AppEntry { label })
            .map_err(|_| CatalogError::Full)?;
        Ok(self.apps.len() - 1)
    }

    pub fn get(&self, index: usize) -> Option<&AppEntry> {
        self.apps.get(index)
    }

    /// Label of the app at `index`
    pub fn label(&self, index: usize) -> Option<&str> {
        self.get(index).map(|app| app.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppEntry> {
        self.apps.iter()
    }
}
