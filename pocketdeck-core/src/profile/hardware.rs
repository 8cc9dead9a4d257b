//! Peripheral hardware configuration and the top-level device profile
//!
//! Every optional peripheral is an `Option` parameter block: present means
//! the board has it. Drivers outside this crate read the blocks; the core
//! only validates them and answers capability queries.

use heapless::{String, Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{
    ButtonsConfig, DeviceIdentity, DigitalLine, FeatureFlags, InputKind, InputTuning,
    JoystickConfig, PerformanceConfig,
};
use crate::input::{Button, Direction, Input};

/// Maximum I2C buses per board
pub const MAX_I2C_BUSES: usize = 2;

/// Maximum status LEDs per board
pub const MAX_STATUS_LEDS: usize = 4;

/// Maximum driver name length
pub const MAX_DRIVER_LEN: usize = 16;

/// Maximum digital input lines (5 directions + 4 buttons)
pub const MAX_DIGITAL_LINES: usize = Input::COUNT;

/// I2C bus; its pins belong to the bus, not to the devices on it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct I2cBusConfig {
    pub id: u8,
    pub sda: u8,
    pub scl: u8,
    pub frequency_hz: u32,
}

/// Display panel on an SPI/QSPI bus
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayHwConfig {
    /// Panel driver (e.g., "st7789", "co5300")
    pub driver: String<MAX_DRIVER_LEN>,
    pub width: u16,
    pub height: u16,
    /// SPI peripheral number
    pub bus: u8,
    pub sck: u8,
    pub mosi: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub miso: Option<u8>,
    pub cs: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dc: Option<u8>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub reset: Option<u8>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub backlight: Option<u8>,
    /// Rotation in degrees
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotation: u16,
}

/// Touch controller
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TouchHwConfig {
    /// Controller driver (e.g., "ft3168", "gt911")
    pub driver: String<MAX_DRIVER_LEN>,
    /// I2C bus id
    pub bus: u8,
    pub address: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub int_pin: Option<u8>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub reset_pin: Option<u8>,
}

/// Plain I2C device (battery gauge, RTC, power management)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct I2cDeviceConfig {
    /// I2C bus id
    pub bus: u8,
    pub address: u8,
}

/// Inertial measurement unit
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImuHwConfig {
    pub driver: String<MAX_DRIVER_LEN>,
    /// I2C bus id
    pub bus: u8,
    pub address: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub int_pin: Option<u8>,
    pub sample_rate_hz: u16,
}

/// Single-pin output peripheral (LED, buzzer)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OutputPinConfig {
    pub pin: u8,
}

/// Complete device profile
///
/// Built once at boot from the board table, validated, then only ever
/// borrowed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceProfile {
    pub device: DeviceIdentity,
    pub joystick: JoystickConfig,
    #[cfg_attr(feature = "serde", serde(default))]
    pub buttons: ButtonsConfig,
    #[cfg_attr(feature = "serde", serde(default))]
    pub input: InputTuning,
    #[cfg_attr(feature = "serde", serde(default))]
    pub i2c: Vec<I2cBusConfig, MAX_I2C_BUSES>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub display: Option<DisplayHwConfig>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub touch: Option<TouchHwConfig>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub battery: Option<I2cDeviceConfig>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub imu: Option<ImuHwConfig>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rtc: Option<I2cDeviceConfig>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub power: Option<I2cDeviceConfig>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rgb_led: Option<OutputPinConfig>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status_leds: Vec<OutputPinConfig, MAX_STATUS_LEDS>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub buzzer: Option<OutputPinConfig>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub features: FeatureFlags,
    #[cfg_attr(feature = "serde", serde(default))]
    pub performance: PerformanceConfig,
}

impl DeviceProfile {
    /// Create a profile with the given identity and joystick and nothing else
    pub fn new(id: &str, name: &str, joystick: JoystickConfig) -> Self {
        let mut device = DeviceIdentity::default();
        let _ = device.id.push_str(id);
        let _ = device.name.push_str(name);
        Self {
            device,
            joystick,
            buttons: ButtonsConfig::default(),
            input: InputTuning::default(),
            i2c: Vec::new(),
            display: None,
            touch: None,
            battery: None,
            imu: None,
            rtc: None,
            power: None,
            rgb_led: None,
            status_leds: Vec::new(),
            buzzer: None,
            features: FeatureFlags::default(),
            performance: PerformanceConfig::default(),
        }
    }

    /// Board id
    pub fn id(&self) -> &str {
        self.device.id.as_str()
    }

    /// Board display name
    pub fn name(&self) -> &str {
        self.device.name.as_str()
    }

    /// Active joystick kind
    pub fn input_kind(&self) -> InputKind {
        self.joystick.kind()
    }

    /// Find an I2C bus by id
    pub fn find_bus(&self, id: u8) -> Option<&I2cBusConfig> {
        self.i2c.iter().find(|bus| bus.id == id)
    }

    /// Digital input lines to sample, in priority order
    ///
    /// Joystick switches (or the analog stick's push button) followed by
    /// the wired face buttons.
    pub fn digital_lines(&self) -> Vec<DigitalLine, MAX_DIGITAL_LINES> {
        let mut lines = Vec::new();
        match &self.joystick {
            JoystickConfig::Digital(d) => {
                for input in Input::PRIORITY {
                    if let Input::Direction(dir) = input {
                        let _ = lines.push(DigitalLine {
                            input,
                            pin: d.pin(dir),
                            pull_up: d.pull_up,
                        });
                    }
                }
            }
            JoystickConfig::Analog(a) => {
                let _ = lines.push(DigitalLine {
                    input: Input::Direction(Direction::Center),
                    pin: a.center,
                    pull_up: a.pull_up,
                });
            }
            JoystickConfig::Touch(_) => {}
        }
        for button in Button::ALL {
            if let Some(pin) = self.buttons.pin(button) {
                let _ = lines.push(DigitalLine {
                    input: Input::Button(button),
                    pin,
                    pull_up: self.buttons.pull_up,
                });
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::types::DigitalJoystickConfig;

    fn digital() -> DeviceProfile {
        let mut profile = DeviceProfile::new(
            "TEST",
            "Test board",
            JoystickConfig::Digital(DigitalJoystickConfig {
                up: 2,
                down: 18,
                left: 16,
                right: 20,
                center: 3,
                pull_up: true,
            }),
        );
        profile.buttons.a = Some(15);
        profile.buttons.y = Some(21);
        profile
    }

    #[test]
    fn test_new_profile_is_bare() {
        let profile = digital();
        assert_eq!(profile.id(), "TEST");
        assert_eq!(profile.input_kind(), InputKind::DigitalJoystick);
        assert!(profile.display.is_none());
        assert!(profile.i2c.is_empty());
    }

    #[test]
    fn test_digital_lines_priority_order() {
        let lines = digital().digital_lines();
        let inputs: Vec<Input, MAX_DIGITAL_LINES> = lines.iter().map(|l| l.input).collect();
        assert_eq!(
            inputs.as_slice(),
            &[
                Input::Direction(Direction::Center),
                Input::Direction(Direction::Up),
                Input::Direction(Direction::Down),
                Input::Direction(Direction::Left),
                Input::Direction(Direction::Right),
                Input::Button(Button::A),
                Input::Button(Button::Y),
            ]
        );
        assert_eq!(lines[0].pin, 3);
        assert_eq!(lines[6].pin, 21);
    }

    #[test]
    fn test_find_bus() {
        let mut profile = digital();
        profile
            .i2c
            .push(I2cBusConfig {
                id: 0,
                sda: 42,
                scl: 41,
                frequency_hz: 400_000,
            })
            .unwrap();
        assert_eq!(profile.find_bus(0).map(|b| b.sda), Some(42));
        assert!(profile.find_bus(1).is_none());
    }
}
