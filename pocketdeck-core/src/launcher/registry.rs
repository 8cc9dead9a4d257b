//! Variant registry
//!
//! Maps variant names to factories. The default variant is registered at
//! construction, so a fallback always exists.

use alloc::boxed::Box;
use heapless::Vec;

use super::variant::{Launcher, DEFAULT_LAUNCHER, MAX_LAUNCHER_NAME_LEN};
use super::{FidgetLauncher, MindfulLauncher, StandardLauncher};

/// Maximum registered variants
pub const MAX_VARIANTS: usize = 8;

/// Builds a fresh launcher instance
pub type LauncherFactory = fn() -> Box<dyn Launcher>;

/// Registry errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// No room for another variant
    Full,
    /// Name longer than [`MAX_LAUNCHER_NAME_LEN`]
    NameTooLong,
}

/// Name → factory map
#[derive(Clone)]
pub struct VariantRegistry {
    entries: Vec<(&'static str, LauncherFactory), MAX_VARIANTS>,
}

impl VariantRegistry {
    /// Create a registry containing only the default variant
    pub fn new(default: LauncherFactory) -> Self {
        let mut entries = Vec::new();
        let _ = entries.push((DEFAULT_LAUNCHER, default));
        Self { entries }
    }

    /// Registry with the built-in variants: standard, mindful, fidget
    pub fn builtin() -> Self {
        let mut registry = Self::new(StandardLauncher::boxed);
        let _ = registry.register(MindfulLauncher::NAME, MindfulLauncher::boxed);
        let _ = registry.register(FidgetLauncher::NAME, FidgetLauncher::boxed);
        registry
    }

    /// Register (or replace) a variant
    pub fn register(
        &mut self,
        name: &'static str,
        factory: LauncherFactory,
    ) -> Result<(), RegistryError> {
        if name.len() > MAX_LAUNCHER_NAME_LEN {
            return Err(RegistryError::NameTooLong);
        }
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = factory;
            return Ok(());
        }
        self.entries
            .push((name, factory))
            .map_err(|_| RegistryError::Full)
    }

    /// Check whether a variant is registered
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| *n == name)
    }

    /// Resolve a requested name: itself if registered, else the default
    pub fn resolve(&self, name: &str) -> &'static str {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map_or(DEFAULT_LAUNCHER, |(n, _)| *n)
    }

    /// Build a fresh instance of a registered variant
    pub fn create(&self, name: &str) -> Option<Box<dyn Launcher>> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, factory)| factory())
    }

    /// Registered names in registration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl core::fmt::Debug for VariantRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        let registry = VariantRegistry::builtin();
        let names: Vec<&str, MAX_VARIANTS> = registry.names().collect();
        assert_eq!(names.as_slice(), &["standard", "mindful", "fidget"]);
    }

    #[test]
    fn test_resolve_unknown_is_default() {
        let registry = VariantRegistry::builtin();
        assert_eq!(registry.resolve("fidget"), "fidget");
        assert_eq!(registry.resolve("unknown_xyz"), DEFAULT_LAUNCHER);
        assert!(registry.create("unknown_xyz").is_none());
    }

    #[test]
    fn test_create_builds_named_variant() {
        let registry = VariantRegistry::builtin();
        for name in ["standard", "mindful", "fidget"] {
            assert_eq!(registry.create(name).map(|l| l.name()), Some(name));
        }
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = VariantRegistry::new(StandardLauncher::boxed);
        registry
            .register("zen", MindfulLauncher::boxed)
            .unwrap();
        registry
            .register("zen", FidgetLauncher::boxed)
            .unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.create("zen").map(|l| l.name()), Some("fidget"));
    }

    #[test]
    fn test_register_limits() {
        let mut registry = VariantRegistry::new(StandardLauncher::boxed);
        assert_eq!(
            registry.register("a-very-long-launcher-name", StandardLauncher::boxed),
            Err(RegistryError::NameTooLong)
        );
        const NAMES: [&str; 7] = ["v1", "v2", "v3", "v4", "v5", "v6", "v7"];
        for name in NAMES {
            registry
                .register(name, StandardLauncher::boxed)
                .unwrap();
        }
        assert_eq!(
            registry.register("v8", StandardLauncher::boxed),
            Err(RegistryError::Full)
        );
    }
}
