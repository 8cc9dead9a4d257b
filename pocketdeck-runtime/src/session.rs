//! Launcher session
//!
//! Runs the launcher one frame at a time. Each [`Session::tick`] polls
//! input, applies the active variant's response, and draws a frame.
//! Variant switches are persisted so the next boot starts in the same
//! launcher.
//!
//! After [`Tick::Launch`] the caller runs the app and hands the screen
//! back with [`Session::resume`]. After [`Tick::Sleep`] the session only
//! watches for a press; the press that wakes it is not forwarded.
//!
//! Nothing in here fails outward: unreadable preferences fall back to the
//! default launcher, failed saves and draws are logged and skipped.

use pocketdeck_core::input::{InputSource, Polled};
use pocketdeck_core::launcher::{
    default_launcher_name, launcher_name, AppCatalog, LauncherName, LauncherOrchestrator,
    LauncherResponse, VariantRegistry,
};
use pocketdeck_core::prefs::{PersistenceError, PreferenceStore};
use pocketdeck_core::profile::{CapabilityQuery, DeviceProfile};
use pocketdeck_core::traits::Surface;
use pocketdeck_hal::KeyValueStorage;

/// Outcome of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tick {
    /// Launcher keeps running
    Running,
    /// User left the launcher
    Exit,
    /// Start the app at this catalog index
    Launch(usize),
    /// Device is asleep; repeated every tick until a press wakes it
    Sleep,
    /// A press ended sleep and the launcher redrew
    Wake,
}

/// A running launcher with persisted variant choice
pub struct Session<S, I, K> {
    orchestrator: LauncherOrchestrator<S, I>,
    preferences: PreferenceStore<K>,
    asleep: bool,
}

impl<S: Surface, I: InputSource, K: KeyValueStorage> Session<S, I, K> {
    /// Start the built-in variants in the preferred launcher
    pub fn start(profile: &DeviceProfile, apps: AppCatalog, surface: S, input: I, storage: K) -> Self {
        Self::with_registry(VariantRegistry::builtin(), profile, apps, surface, input, storage)
    }

    /// Start a custom set of variants in the preferred launcher
    pub fn with_registry(
        registry: VariantRegistry,
        profile: &DeviceProfile,
        apps: AppCatalog,
        surface: S,
        input: I,
        storage: K,
    ) -> Self {
        let mut preferences = PreferenceStore::new(storage);
        let preferred = load_preference(&mut preferences);

        let mut orchestrator = LauncherOrchestrator::new(
            registry,
            apps,
            profile.capabilities(),
            surface,
            input,
            &preferred,
        );
        if orchestrator.get_launcher_type() != preferred.as_str() {
            warn!(
                "Launcher {} not available, using {}",
                preferred.as_str(),
                orchestrator.get_launcher_type()
            );
        }
        orchestrator.init();
        info!("Launcher {} started", orchestrator.get_launcher_type());

        Self {
            orchestrator,
            preferences,
            asleep: false,
        }
    }

    /// Run one frame
    ///
    /// A frame is only drawn while the launcher keeps the screen; on
    /// launch, sleep or exit the caller takes over.
    pub fn tick(&mut self) -> Tick {
        if self.asleep {
            return self.watch_for_wake();
        }

        let tick = match self.orchestrator.handle_input() {
            LauncherResponse::Continue => Tick::Running,
            LauncherResponse::Switch(name) => {
                self.switch_to(&name);
                Tick::Running
            }
            LauncherResponse::Launch(index) => {
                info!("Launching app {}", index);
                return Tick::Launch(index);
            }
            LauncherResponse::Sleep => {
                info!("Going to sleep");
                self.asleep = true;
                return Tick::Sleep;
            }
            LauncherResponse::Exit => return Tick::Exit,
        };

        self.draw();
        tick
    }

    /// Take the screen back after an app exits
    ///
    /// Re-initializes the active variant, which may restore its selection
    /// from the last launched app, and draws a frame.
    pub fn resume(&mut self) {
        debug!("Resuming launcher {}", self.orchestrator.get_launcher_type());
        self.asleep = false;
        self.orchestrator.init();
        self.draw();
    }

    /// Whether the session is waiting for a press to wake
    pub fn is_asleep(&self) -> bool {
        self.asleep
    }

    fn watch_for_wake(&mut self) -> Tick {
        let woken = match self.orchestrator.input_mut().poll() {
            Polled::Idle => false,
            Polled::Momentary(_) => true,
            Polled::Event(event) => event.is_press(),
        };
        if !woken {
            return Tick::Sleep;
        }

        info!("Waking up");
        self.asleep = false;
        self.draw();
        Tick::Wake
    }

    fn draw(&mut self) {
        if let Err(e) = self.orchestrator.draw_screen() {
            warn!("Frame draw failed: {}", e);
        }
    }

    /// Switch to a launcher variant, persist the choice and initialize it
    ///
    /// Unknown names fall back to the default variant, which is what gets
    /// persisted. Returns true if the requested variant was found.
    pub fn switch_to(&mut self, name: &str) -> bool {
        let found = self.orchestrator.switch_launcher(name);
        let active: LauncherName = launcher_name(self.orchestrator.get_launcher_type())
            .unwrap_or_else(default_launcher_name);
        if found {
            info!("Switched to launcher {}", active.as_str());
        } else {
            warn!("Unknown launcher {}, using {}", name, active.as_str());
        }

        if let Err(e) = self.preferences.try_save(&active) {
            warn!("Failed to save launcher preference: {}", e);
        }
        self.orchestrator.init();
        found
    }

    /// Name of the active launcher variant
    pub fn launcher(&self) -> &str {
        self.orchestrator.get_launcher_type()
    }

    pub fn orchestrator(&self) -> &LauncherOrchestrator<S, I> {
        &self.orchestrator
    }

    pub fn orchestrator_mut(&mut self) -> &mut LauncherOrchestrator<S, I> {
        &mut self.orchestrator
    }

    pub fn preferences(&self) -> &PreferenceStore<K> {
        &self.preferences
    }

    pub fn preferences_mut(&mut self) -> &mut PreferenceStore<K> {
        &mut self.preferences
    }
}

/// Read the stored launcher preference, defaulting on any failure
fn load_preference<K: KeyValueStorage>(preferences: &mut PreferenceStore<K>) -> LauncherName {
    match preferences.try_load() {
        Ok(name) => {
            debug!("Stored launcher preference: {}", name.as_str());
            name
        }
        Err(PersistenceError::NotFound) => {
            debug!("No launcher preference stored");
            default_launcher_name()
        }
        Err(e) => {
            warn!("Launcher preference unreadable: {}, using default", e);
            default_launcher_name()
        }
    }
}
