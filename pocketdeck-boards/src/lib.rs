//! Shipped board tables for the pocketdeck launcher
//!
//! Each supported board is a TOML table under `boards/`, embedded at compile
//! time and validated by `build.rs`. [`load`] turns a board id into a
//! validated [`DeviceProfile`]:
//!
//! ```ignore
//! let profile = pocketdeck_boards::load("GEEKPI_3_5")?;
//! assert_eq!(profile.input_kind(), InputKind::AnalogJoystick);
//! ```

#![no_std]
#![deny(unsafe_code)]

use pocketdeck_core::profile::{ConfigError, DeviceProfile};

/// A shipped board table
struct Board {
    id: &'static str,
    source: &'static str,
}

const BOARDS: &[Board] = &[
    Board {
        id: "WAVESHARE_1.3",
        source: include_str!("../boards/waveshare_1_3.toml"),
    },
    Board {
        id: "GEEKPI_3_5",
        source: include_str!("../boards/geekpi_3_5.toml"),
    },
    Board {
        id: "WAVESHARE_S3_AMOLED_2.06",
        source: include_str!("../boards/waveshare_s3_amoled_2_06.toml"),
    },
];

/// Ids of every shipped board
pub fn available() -> impl Iterator<Item = &'static str> {
    BOARDS.iter().map(|b| b.id)
}

/// Raw TOML table for a board id
pub fn source(board_id: &str) -> Option<&'static str> {
    BOARDS.iter().find(|b| b.id == board_id).map(|b| b.source)
}

/// Load and validate the profile of a shipped board
pub fn load(board_id: &str) -> Result<DeviceProfile, ConfigError> {
    let source = source(board_id).ok_or(ConfigError::UnknownBoard)?;
    parse(source)
}

/// Parse and validate a board table
///
/// Accepts tables that are not shipped with this crate, e.g. a board file
/// read from storage on a development unit.
pub fn parse(source: &str) -> Result<DeviceProfile, ConfigError> {
    let profile: DeviceProfile = toml::from_str(source).map_err(|_| ConfigError::Parse)?;
    profile.validate()?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocketdeck_core::input::{Button, Direction};
    use pocketdeck_core::profile::{
        BusUser, Capability, CapabilityQuery, InputKind, JoystickConfig, PinRole,
    };

    #[test]
    fn test_every_board_loads() {
        for id in available() {
            let profile = load(id).unwrap_or_else(|e| panic!("{}: {:?}", id, e));
            assert_eq!(profile.id(), id);
        }
    }

    #[test]
    fn test_unknown_board() {
        assert_eq!(load("NOPE").unwrap_err(), ConfigError::UnknownBoard);
    }

    #[test]
    fn test_waveshare_1_3() {
        let p = load("WAVESHARE_1.3").unwrap();
        assert_eq!(p.input_kind(), InputKind::DigitalJoystick);
        assert_eq!(p.buttons.pin(Button::Y), Some(21));
        assert!(p.has(Capability::Display));
        assert!(p.has(Capability::BatteryMonitor));
        assert!(p.has(Capability::Wifi));
        assert!(!p.has(Capability::Touch));
        assert!(!p.has(Capability::Audio));
    }

    #[test]
    fn test_geekpi_3_5() {
        let p = load("GEEKPI_3_5").unwrap();
        let JoystickConfig::Analog(analog) = &p.joystick else {
            panic!("expected analog joystick");
        };
        assert_eq!(analog.threshold_low, 20000);
        assert_eq!(analog.center_value, 32768);
        assert_eq!(p.buttons.pin(Button::X), None);
        assert!(p.has(Capability::Touch));
        assert!(p.has(Capability::Audio));
        assert!(p.has(Capability::StatusLeds));
        assert!(p.has(Capability::RgbLed));
        assert!(!p.has(Capability::BatteryMonitor));
    }

    #[test]
    fn test_amoled_shares_i2c_bus() {
        let p = load("WAVESHARE_S3_AMOLED_2.06").unwrap();
        assert_eq!(p.input_kind(), InputKind::TouchEmulatedJoystick);
        assert_eq!(p.i2c.len(), 1);
        for cap in [
            Capability::Touch,
            Capability::Imu,
            Capability::Rtc,
            Capability::PowerManagement,
        ] {
            assert!(p.has(cap), "{:?}", cap);
        }
        // Touch zones stand in for the physical buttons
        for button in Button::ALL {
            assert_eq!(p.buttons.pin(button), None);
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse("not = [toml").unwrap_err(), ConfigError::Parse);
        // Missing joystick section
        assert_eq!(
            parse("[device]\nid = \"X\"\nname = \"X\"\n").unwrap_err(),
            ConfigError::Parse
        );
    }

    #[test]
    fn test_parse_rejects_pin_conflict() {
        let table = "\
[device]
id = \"BAD\"
name = \"Bad\"

[joystick]
kind = \"digital\"
up = 2
down = 3
left = 4
right = 5
center = 6

[buttons]
a = 4
";
        assert_eq!(
            parse(table).unwrap_err(),
            ConfigError::PinConflict {
                pin: 4,
                first: PinRole::Joystick(Direction::Left),
                second: PinRole::Button(Button::A),
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_bus() {
        let table = "\
[device]
id = \"BAD\"
name = \"Bad\"

[joystick]
kind = \"touch\"
swipe_threshold = 40

[touch]
driver = \"ft3168\"
bus = 1
address = 0x38
";
        assert_eq!(
            parse(table).unwrap_err(),
            ConfigError::UnknownBus {
                user: BusUser::Touch,
                bus: 1,
            }
        );
    }

    #[test]
    fn test_parse_rejects_touch_without_controller() {
        let table = "\
[device]
id = \"BAD\"
name = \"Bad\"

[joystick]
kind = \"touch\"
swipe_threshold = 40
";
        assert_eq!(parse(table).unwrap_err(), ConfigError::CapabilityMismatch);
    }
}
