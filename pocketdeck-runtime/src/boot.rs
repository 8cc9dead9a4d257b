//! Boot-time profile loading
//!
//! A board that cannot produce a valid profile cannot run the launcher, so
//! a [`ConfigError`] here is fatal. It is reported once and handed back to
//! the port, which decides how to halt.

use pocketdeck_core::profile::{Capability, CapabilityQuery, ConfigError, DeviceProfile};

/// Load, validate and summarize the profile of a shipped board
pub fn load_profile(board_id: &str) -> Result<DeviceProfile, ConfigError> {
    info!("Loading board profile {}", board_id);

    match pocketdeck_boards::load(board_id) {
        Ok(profile) => {
            log_profile_summary(&profile);
            Ok(profile)
        }
        Err(e) => {
            error!("Board profile {} rejected: {}", board_id, e);
            Err(e)
        }
    }
}

/// Log a summary of the loaded profile
fn log_profile_summary(profile: &DeviceProfile) {
    info!("Board: {} ({})", profile.name(), profile.id());
    info!("  Input: {}", profile.input_kind());
    debug!("  Debounce: {} polls", profile.input.debounce_polls);

    if let Some(display) = &profile.display {
        info!(
            "  Display: {} {}x{}",
            display.driver.as_str(),
            display.width,
            display.height
        );
    }
    for bus in &profile.i2c {
        debug!(
            "  I2C{}: sda={} scl={} @ {} Hz",
            bus.id,
            bus.sda,
            bus.scl,
            bus.frequency_hz
        );
    }

    let capabilities = profile.capabilities();
    info!("  {} capabilities", capabilities.len());
    for cap in capabilities.iter() {
        debug!("    {}", cap.name());
    }
    if !capabilities.contains(Capability::Display) {
        warn!("Board has no display; launcher frames go nowhere");
    }
}
