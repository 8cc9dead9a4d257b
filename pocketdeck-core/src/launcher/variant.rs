//! Launcher variant contract

use heapless::String;

use crate::input::InputEvent;
use crate::launcher::catalog::AppCatalog;
use crate::profile::{Capabilities, Capability};
use crate::traits::{Surface, SurfaceError};

/// Maximum launcher name length
pub const MAX_LAUNCHER_NAME_LEN: usize = 16;

/// Name the orchestrator falls back to
pub const DEFAULT_LAUNCHER: &str = "standard";

/// Owned launcher name
pub type LauncherName = String<MAX_LAUNCHER_NAME_LEN>;

/// Build a launcher name, or `None` if `name` is too long to be a variant
pub fn launcher_name(name: &str) -> Option<LauncherName> {
    LauncherName::try_from(name).ok()
}

/// The default launcher's name
pub fn default_launcher_name() -> LauncherName {
    let mut name = LauncherName::new();
    // "standard" always fits
    let _ = name.push_str(DEFAULT_LAUNCHER);
    name
}

/// What the host loop should do after an input cycle
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LauncherResponse {
    /// Keep running
    Continue,
    /// Leave the launcher
    Exit,
    /// Replace the active launcher with the named variant
    Switch(LauncherName),
    /// Start the app at this catalog index
    Launch(usize),
    /// Put the device to sleep
    Sleep,
}

impl LauncherResponse {
    /// Switch response for a static variant name
    pub fn switch_to(name: &str) -> Self {
        match launcher_name(name) {
            Some(name) => LauncherResponse::Switch(name),
            None => LauncherResponse::Switch(default_launcher_name()),
        }
    }

    /// Returns true for [`LauncherResponse::Continue`]
    pub fn is_continue(&self) -> bool {
        matches!(self, LauncherResponse::Continue)
    }
}

/// Shared, read-only state every variant sees
#[derive(Debug, Clone, Copy)]
pub struct LauncherContext<'a> {
    pub apps: &'a AppCatalog,
    pub capabilities: Capabilities,
    /// Catalog index of the app launched most recently
    pub recent: Option<usize>,
}

impl LauncherContext<'_> {
    /// Whether the board has a touch panel
    pub fn has_touch(&self) -> bool {
        self.capabilities.contains(Capability::Touch)
    }
}

/// Interchangeable launcher behavior
///
/// The orchestrator calls `init` once after each switch, then
/// `handle_input` and `draw_screen` once per delivered event and frame.
pub trait Launcher {
    /// Registry name of this variant
    fn name(&self) -> &'static str;

    /// Reset view state; called after construction and on every re-entry
    fn init(&mut self, ctx: &LauncherContext<'_>);

    /// React to one canonical input event
    fn handle_input(&mut self, event: InputEvent, ctx: &LauncherContext<'_>) -> LauncherResponse;

    /// Render one frame
    fn draw_screen(
        &self,
        surface: &mut dyn Surface,
        ctx: &LauncherContext<'_>,
    ) -> Result<(), SurfaceError>;
}
