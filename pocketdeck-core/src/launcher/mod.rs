//! Launcher orchestration
//!
//! Interchangeable launcher variants share one lifecycle contract
//! ([`Launcher`]); the [`LauncherOrchestrator`] runs exactly one of them.

pub mod catalog;
pub mod fidget;
pub mod mindful;
pub mod orchestrator;
pub mod registry;
pub mod standard;
pub mod variant;

pub use catalog::{AppCatalog, AppEntry, CatalogError, MAX_APPS};
pub use fidget::FidgetLauncher;
pub use mindful::MindfulLauncher;
pub use orchestrator::{LauncherOrchestrator, OrchestratorState};
pub use registry::{LauncherFactory, RegistryError, VariantRegistry};
pub use standard::StandardLauncher;
pub use variant::{
    default_launcher_name, launcher_name, Launcher, LauncherContext, LauncherName,
    LauncherResponse, DEFAULT_LAUNCHER,
};
