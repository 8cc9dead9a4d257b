//! Launcher orchestrator
//!
//! Owns the active launcher variant and forwards the host loop's calls to
//! it. Switching replaces the variant wholesale: the old instance is
//! dropped before the new one is built, so nothing it held outlives it.

use alloc::boxed::Box;

use super::catalog::AppCatalog;
use super::registry::VariantRegistry;
use super::variant::{
    default_launcher_name, launcher_name, Launcher, LauncherContext, LauncherName,
    LauncherResponse,
};
use crate::input::InputSource;
use crate::profile::Capabilities;
use crate::traits::{Surface, SurfaceError};

/// Orchestrator lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OrchestratorState {
    /// No variant instance exists
    Uninitialized,
    /// A variant is live
    Active,
}

/// Runs one launcher variant at a time
pub struct LauncherOrchestrator<S, I> {
    registry: VariantRegistry,
    apps: AppCatalog,
    capabilities: Capabilities,
    surface: S,
    input: I,
    current: Option<Box<dyn Launcher>>,
    current_name: LauncherName,
    recent: Option<usize>,
}

impl<S: Surface, I: InputSource> LauncherOrchestrator<S, I> {
    /// Create an orchestrator running `initial` (or the default variant)
    ///
    /// The variant is constructed but not initialized; call
    /// [`init`](Self::init) before the first frame.
    pub fn new(
        registry: VariantRegistry,
        apps: AppCatalog,
        capabilities: Capabilities,
        surface: S,
        input: I,
        initial: &str,
    ) -> Self {
        let mut orchestrator = Self {
            registry,
            apps,
            capabilities,
            surface,
            input,
            current: None,
            current_name: default_launcher_name(),
            recent: None,
        };
        orchestrator.switch_launcher(initial);
        orchestrator
    }

    /// Replace the active variant
    ///
    /// Unknown names fall back to the default variant. Returns true when
    /// the requested variant was found.
    pub fn switch_launcher(&mut self, name: &str) -> bool {
        let resolved = self.registry.resolve(name);
        // Release the old instance before building its replacement
        self.current = None;
        self.current = self.registry.create(resolved);
        self.current_name = launcher_name(resolved).unwrap_or_else(default_launcher_name);
        resolved == name
    }

    /// Initialize the active variant
    ///
    /// Not idempotent: each call re-runs the variant's setup.
    pub fn init(&mut self) {
        let ctx = LauncherContext {
            apps: &self.apps,
            capabilities: self.capabilities,
            recent: self.recent,
        };
        if let Some(launcher) = self.current.as_mut() {
            launcher.init(&ctx);
        }
    }

    /// Poll input once and let the active variant react
    ///
    /// Returns the first non-`Continue` response; any event left in the
    /// same poll result is discarded with it.
    pub fn handle_input(&mut self) -> LauncherResponse {
        let Some(launcher) = self.current.as_mut() else {
            return LauncherResponse::Continue;
        };
        let ctx = LauncherContext {
            apps: &self.apps,
            capabilities: self.capabilities,
            recent: self.recent,
        };

        let polled = self.input.poll();
        for event in polled.events() {
            let response = launcher.handle_input(event, &ctx);
            if let LauncherResponse::Launch(index) = response {
                self.recent = Some(index);
            }
            if !response.is_continue() {
                return response;
            }
        }
        LauncherResponse::Continue
    }

    /// Render one frame of the active variant
    pub fn draw_screen(&mut self) -> Result<(), SurfaceError> {
        let ctx = LauncherContext {
            apps: &self.apps,
            capabilities: self.capabilities,
            recent: self.recent,
        };
        match self.current.as_ref() {
            Some(launcher) => launcher.draw_screen(&mut self.surface, &ctx),
            None => Ok(()),
        }
    }

    /// Name of the active variant
    pub fn get_launcher_type(&self) -> &str {
        self.current_name.as_str()
    }

    /// Every registered variant, whether active or not
    pub fn available_launchers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.registry.names()
    }

    pub fn state(&self) -> OrchestratorState {
        if self.current.is_some() {
            OrchestratorState::Active
        } else {
            OrchestratorState::Uninitialized
        }
    }

    /// Catalog index of the app launched most recently
    pub fn recent_app(&self) -> Option<usize> {
        self.recent
    }

    pub fn apps(&self) -> &AppCatalog {
        &self.apps
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}
