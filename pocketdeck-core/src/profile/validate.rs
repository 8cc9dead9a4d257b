//! Profile validation
//!
//! Run once at load time. A profile that fails here never reaches the
//! input or launcher layers.

use heapless::Vec;

use super::hardware::DeviceProfile;
use super::types::{AnalogJoystickConfig, JoystickConfig};
use crate::input::{Button, Direction};

/// Upper bound on pin roles a profile can declare
const MAX_PIN_ROLES: usize = 48;

/// What a pin is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinRole {
    Joystick(Direction),
    AxisX,
    AxisY,
    Button(Button),
    DisplaySck,
    DisplayMosi,
    DisplayMiso,
    DisplayCs,
    DisplayDc,
    DisplayReset,
    DisplayBacklight,
    /// SDA of the I2C bus with this id
    I2cSda(u8),
    /// SCL of the I2C bus with this id
    I2cScl(u8),
    TouchInterrupt,
    TouchReset,
    ImuInterrupt,
    RgbLed,
    /// Status LED at this index
    StatusLed(u8),
    Buzzer,
}

/// Peripheral that references an I2C bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusUser {
    Touch,
    Battery,
    Imu,
    Rtc,
    Power,
}

/// Board profile errors (fatal at boot)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// No board table with the requested id
    UnknownBoard,
    /// Board table is not valid TOML or does not match the schema
    Parse,
    /// Two roles claim the same pin
    PinConflict {
        pin: u8,
        first: PinRole,
        second: PinRole,
    },
    /// Analog thresholds are not strictly ordered around the neutral window
    ThresholdRange,
    /// Touch-emulated joystick without a touch controller
    CapabilityMismatch,
    /// Peripheral references an undeclared I2C bus
    UnknownBus { user: BusUser, bus: u8 },
    /// Two I2C buses share an id
    DuplicateBus(u8),
    /// `debounce_polls` must be at least 1
    InvalidDebounce,
}

/// Records which role claimed each pin
struct PinLedger {
    claims: Vec<(u8, PinRole), MAX_PIN_ROLES>,
}

impl PinLedger {
    fn new() -> Self {
        Self { claims: Vec::new() }
    }

    fn claim(&mut self, pin: u8, role: PinRole) -> Result<(), ConfigError> {
        if let Some(&(_, first)) = self.claims.iter().find(|(p, _)| *p == pin) {
            return Err(ConfigError::PinConflict {
                pin,
                first,
                second: role,
            });
        }
        // Capacity covers every role a profile can declare
        let _ = self.claims.push((pin, role));
        Ok(())
    }

    fn claim_opt(&mut self, pin: Option<u8>, role: PinRole) -> Result<(), ConfigError> {
        match pin {
            Some(pin) => self.claim(pin, role),
            None => Ok(()),
        }
    }
}

/// Check `low < center - range < center + range < high`
pub fn check_thresholds(analog: &AnalogJoystickConfig) -> Result<(), ConfigError> {
    let (lower, upper) = analog.neutral_window();
    let low = analog.threshold_low as i32;
    let high = analog.threshold_high as i32;
    if low < lower && lower < upper && upper < high {
        Ok(())
    } else {
        Err(ConfigError::ThresholdRange)
    }
}

impl DeviceProfile {
    /// Validate the profile
    ///
    /// Checks debounce tuning, input kind consistency, I2C bus references
    /// and pin uniqueness across every enabled role.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.debounce_polls == 0 {
            return Err(ConfigError::InvalidDebounce);
        }

        match &self.joystick {
            JoystickConfig::Analog(analog) => check_thresholds(analog)?,
            JoystickConfig::Touch(_) if self.touch.is_none() => {
                return Err(ConfigError::CapabilityMismatch);
            }
            _ => {}
        }

        self.check_buses()?;
        self.check_pins()
    }

    fn check_buses(&self) -> Result<(), ConfigError> {
        for (i, bus) in self.i2c.iter().enumerate() {
            if self.i2c[..i].iter().any(|b| b.id == bus.id) {
                return Err(ConfigError::DuplicateBus(bus.id));
            }
        }

        let users = [
            (BusUser::Touch, self.touch.as_ref().map(|t| t.bus)),
            (BusUser::Battery, self.battery.map(|b| b.bus)),
            (BusUser::Imu, self.imu.as_ref().map(|i| i.bus)),
            (BusUser::Rtc, self.rtc.map(|r| r.bus)),
            (BusUser::Power, self.power.map(|p| p.bus)),
        ];
        for (user, bus) in users {
            if let Some(bus) = bus {
                if self.find_bus(bus).is_none() {
                    return Err(ConfigError::UnknownBus { user, bus });
                }
            }
        }
        Ok(())
    }

    fn check_pins(&self) -> Result<(), ConfigError> {
        let mut ledger = PinLedger::new();

        match &self.joystick {
            JoystickConfig::Digital(d) => {
                for dir in [
                    Direction::Up,
                    Direction::Down,
                    Direction::Left,
                    Direction::Right,
                    Direction::Center,
                ] {
                    ledger.claim(d.pin(dir), PinRole::Joystick(dir))?;
                }
            }
            JoystickConfig::Analog(a) => {
                ledger.claim(a.x_pin, PinRole::AxisX)?;
                ledger.claim(a.y_pin, PinRole::AxisY)?;
                ledger.claim(a.center, PinRole::Joystick(Direction::Center))?;
            }
            JoystickConfig::Touch(_) => {}
        }

        for button in Button::ALL {
            ledger.claim_opt(self.buttons.pin(button), PinRole::Button(button))?;
        }

        if let Some(display) = &self.display {
            ledger.claim(display.sck, PinRole::DisplaySck)?;
            ledger.claim(display.mosi, PinRole::DisplayMosi)?;
            ledger.claim_opt(display.miso, PinRole::DisplayMiso)?;
            ledger.claim(display.cs, PinRole::DisplayCs)?;
            ledger.claim_opt(display.dc, PinRole::DisplayDc)?;
            ledger.claim_opt(display.reset, PinRole::DisplayReset)?;
            ledger.claim_opt(display.backlight, PinRole::DisplayBacklight)?;
        }

        for bus in &self.i2c {
            ledger.claim(bus.sda, PinRole::I2cSda(bus.id))?;
            ledger.claim(bus.scl, PinRole::I2cScl(bus.id))?;
        }

        if let Some(touch) = &self.touch {
            ledger.claim_opt(touch.int_pin, PinRole::TouchInterrupt)?;
            ledger.claim_opt(touch.reset_pin, PinRole::TouchReset)?;
        }
        if let Some(imu) = &self.imu {
            ledger.claim_opt(imu.int_pin, PinRole::ImuInterrupt)?;
        }
        if let Some(rgb) = self.rgb_led {
            ledger.claim(rgb.pin, PinRole::RgbLed)?;
        }
        for (i, led) in self.status_leds.iter().enumerate() {
            ledger.claim(led.pin, PinRole::StatusLed(i as u8))?;
        }
        if let Some(buzzer) = self.buzzer {
            ledger.claim(buzzer.pin, PinRole::Buzzer)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::hardware::{
        I2cBusConfig, I2cDeviceConfig, OutputPinConfig, TouchHwConfig,
    };
    use crate::profile::types::{DigitalJoystickConfig, TouchJoystickConfig};
    use heapless::String;

    fn digital() -> DeviceProfile {
        DeviceProfile::new(
            "TEST",
            "Test",
            JoystickConfig::Digital(DigitalJoystickConfig {
                up: 2,
                down: 18,
                left: 16,
                right: 20,
                center: 3,
                pull_up: true,
            }),
        )
    }

    fn analog(low: u16, high: u16, range: u16) -> DeviceProfile {
        DeviceProfile::new(
            "ANALOG",
            "Analog",
            JoystickConfig::Analog(AnalogJoystickConfig {
                x_pin: 27,
                y_pin: 26,
                center: 22,
                pull_up: true,
                threshold_low: low,
                threshold_high: high,
                center_range: range,
                center_value: 32768,
                invert_x: false,
                invert_y: false,
            }),
        )
    }

    fn touch_controller(bus: u8) -> TouchHwConfig {
        TouchHwConfig {
            driver: String::try_from("ft3168").unwrap(),
            bus,
            address: 0x38,
            int_pin: Some(40),
            reset_pin: Some(39),
        }
    }

    #[test]
    fn test_valid_digital() {
        assert_eq!(digital().validate(), Ok(()));
    }

    #[test]
    fn test_button_conflicts_with_joystick() {
        let mut profile = digital();
        profile.buttons.a = Some(16);
        assert_eq!(
            profile.validate(),
            Err(ConfigError::PinConflict {
                pin: 16,
                first: PinRole::Joystick(Direction::Left),
                second: PinRole::Button(Button::A),
            })
        );
    }

    #[test]
    fn test_buzzer_conflicts_with_led() {
        let mut profile = digital();
        profile.rgb_led = Some(OutputPinConfig { pin: 12 });
        profile.buzzer = Some(OutputPinConfig { pin: 12 });
        assert!(matches!(
            profile.validate(),
            Err(ConfigError::PinConflict {
                pin: 12,
                first: PinRole::RgbLed,
                second: PinRole::Buzzer
            })
        ));
    }

    #[test]
    fn test_thresholds_ordered() {
        assert_eq!(analog(20000, 45000, 5000).validate(), Ok(()));
    }

    #[test]
    fn test_threshold_inside_neutral_window() {
        // low (30000) above center - range (27768)
        assert_eq!(
            analog(30000, 45000, 5000).validate(),
            Err(ConfigError::ThresholdRange)
        );
        // high (36000) below center + range (37768)
        assert_eq!(
            analog(20000, 36000, 5000).validate(),
            Err(ConfigError::ThresholdRange)
        );
    }

    #[test]
    fn test_zero_range_is_rejected() {
        assert_eq!(
            analog(20000, 45000, 0).validate(),
            Err(ConfigError::ThresholdRange)
        );
    }

    #[test]
    fn test_huge_range_does_not_overflow() {
        assert_eq!(
            analog(0, u16::MAX, u16::MAX).validate(),
            Err(ConfigError::ThresholdRange)
        );
    }

    #[test]
    fn test_touch_requires_controller() {
        let mut profile = DeviceProfile::new(
            "TOUCH",
            "Touch",
            JoystickConfig::Touch(TouchJoystickConfig {
                swipe_threshold: 50,
                zones: heapless::Vec::new(),
            }),
        );
        assert_eq!(profile.validate(), Err(ConfigError::CapabilityMismatch));

        profile.touch = Some(touch_controller(0));
        assert_eq!(
            profile.validate(),
            Err(ConfigError::UnknownBus {
                user: BusUser::Touch,
                bus: 0
            })
        );

        profile
            .i2c
            .push(I2cBusConfig {
                id: 0,
                sda: 42,
                scl: 41,
                frequency_hz: 400_000,
            })
            .unwrap();
        assert_eq!(profile.validate(), Ok(()));
    }

    #[test]
    fn test_shared_bus_devices_do_not_conflict() {
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
        profile.touch = Some(touch_controller(0));
        profile.rtc = Some(I2cDeviceConfig {
            bus: 0,
            address: 0x51,
        });
        profile.power = Some(I2cDeviceConfig {
            bus: 0,
            address: 0x34,
        });
        assert_eq!(profile.validate(), Ok(()));
    }

    #[test]
    fn test_duplicate_bus_id() {
        let mut profile = digital();
        for (sda, scl) in [(0, 1), (4, 5)] {
            profile
                .i2c
                .push(I2cBusConfig {
                    id: 0,
                    sda,
                    scl,
                    frequency_hz: 100_000,
                })
                .unwrap();
        }
        assert_eq!(profile.validate(), Err(ConfigError::DuplicateBus(0)));
    }

    #[test]
    fn test_zero_debounce() {
        let mut profile = digital();
        profile.input.debounce_polls = 0;
        assert_eq!(profile.validate(), Err(ConfigError::InvalidDebounce));
    }
}
