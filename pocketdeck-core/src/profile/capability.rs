//! Capability query
//!
//! Launchers and apps ask what the board can do instead of branching on
//! board identity.

use super::hardware::{
    DeviceProfile, DisplayHwConfig, I2cDeviceConfig, ImuHwConfig, OutputPinConfig,
    TouchHwConfig,
};

/// Optional board capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Capability {
    Display = 0,
    Touch = 1,
    BatteryMonitor = 2,
    Wifi = 3,
    Bluetooth = 4,
    Audio = 5,
    Imu = 6,
    Rtc = 7,
    PowerManagement = 8,
    RgbLed = 9,
    StatusLeds = 10,
}

impl Capability {
    /// Every capability
    pub const ALL: [Capability; 11] = [
        Capability::Display,
        Capability::Touch,
        Capability::BatteryMonitor,
        Capability::Wifi,
        Capability::Bluetooth,
        Capability::Audio,
        Capability::Imu,
        Capability::Rtc,
        Capability::PowerManagement,
        Capability::RgbLed,
        Capability::StatusLeds,
    ];

    /// Lookup by snake_case name (e.g., "battery_monitor")
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cap| cap.name() == name)
    }

    /// snake_case name
    pub fn name(self) -> &'static str {
        match self {
            Capability::Display => "display",
            Capability::Touch => "touch",
            Capability::BatteryMonitor => "battery_monitor",
            Capability::Wifi => "wifi",
            Capability::Bluetooth => "bluetooth",
            Capability::Audio => "audio",
            Capability::Imu => "imu",
            Capability::Rtc => "rtc",
            Capability::PowerManagement => "power_management",
            Capability::RgbLed => "rgb_led",
            Capability::StatusLeds => "status_leds",
        }
    }

    fn bit(self) -> u16 {
        1 << (self as u8)
    }
}

/// Set of capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Capabilities(u16);

impl Capabilities {
    /// Empty set
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Set with the given capabilities
    pub fn from_slice(caps: &[Capability]) -> Self {
        let mut set = Self::empty();
        for &cap in caps {
            set.insert(cap);
        }
        set
    }

    /// Add a capability
    pub fn insert(&mut self, cap: Capability) {
        self.0 |= cap.bit();
    }

    /// Check membership
    pub fn contains(&self, cap: Capability) -> bool {
        self.0 & cap.bit() != 0
    }

    /// Iterate members in [`Capability::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL.into_iter().filter(|cap| self.contains(*cap))
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true when no capability is present
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// Borrowed parameter block of a present peripheral
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeripheralParams<'a> {
    Display(&'a DisplayHwConfig),
    Touch(&'a TouchHwConfig),
    Battery(&'a I2cDeviceConfig),
    Imu(&'a ImuHwConfig),
    Rtc(&'a I2cDeviceConfig),
    Power(&'a I2cDeviceConfig),
    RgbLed(&'a OutputPinConfig),
    StatusLeds(&'a [OutputPinConfig]),
    /// Audio present; the buzzer pin if one is wired
    Audio(Option<&'a OutputPinConfig>),
    /// Capability has no parameter block (wifi, bluetooth)
    Flag,
}

/// Read-only capability lookups
pub trait CapabilityQuery {
    /// Check a capability
    fn has(&self, cap: Capability) -> bool;

    /// All present capabilities
    fn capabilities(&self) -> Capabilities;

    /// Parameter block of a present capability
    fn peripheral(&self, cap: Capability) -> Option<PeripheralParams<'_>>;

    /// Check a capability by name; unknown names are absent
    fn has_named(&self, name: &str) -> bool {
        Capability::from_name(name).is_some_and(|cap| self.has(cap))
    }
}

impl CapabilityQuery for DeviceProfile {
    fn has(&self, cap: Capability) -> bool {
        match cap {
            Capability::Display => self.display.is_some(),
            Capability::Touch => self.touch.is_some(),
            Capability::BatteryMonitor => self.battery.is_some(),
            Capability::Wifi => self.features.wifi,
            Capability::Bluetooth => self.features.bluetooth,
            Capability::Audio => self.features.audio || self.buzzer.is_some(),
            Capability::Imu => self.imu.is_some(),
            Capability::Rtc => self.rtc.is_some(),
            Capability::PowerManagement => self.power.is_some(),
            Capability::RgbLed => self.rgb_led.is_some(),
            Capability::StatusLeds => !self.status_leds.is_empty(),
        }
    }

    fn capabilities(&self) -> Capabilities {
        let mut set = Capabilities::empty();
        for cap in Capability::ALL {
            if self.has(cap) {
                set.insert(cap);
            }
        }
        set
    }

    fn peripheral(&self, cap: Capability) -> Option<PeripheralParams<'_>> {
        if !self.has(cap) {
            return None;
        }
        let params = match cap {
            Capability::Display => PeripheralParams::Display(self.display.as_ref()?),
            Capability::Touch => PeripheralParams::Touch(self.touch.as_ref()?),
            Capability::BatteryMonitor => PeripheralParams::Battery(self.battery.as_ref()?),
            Capability::Imu => PeripheralParams::Imu(self.imu.as_ref()?),
            Capability::Rtc => PeripheralParams::Rtc(self.rtc.as_ref()?),
            Capability::PowerManagement => PeripheralParams::Power(self.power.as_ref()?),
            Capability::RgbLed => PeripheralParams::RgbLed(self.rgb_led.as_ref()?),
            Capability::StatusLeds => PeripheralParams::StatusLeds(&self.status_leds),
            Capability::Audio => PeripheralParams::Audio(self.buzzer.as_ref()),
            Capability::Wifi | Capability::Bluetooth => PeripheralParams::Flag,
        };
        Some(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::types::{DigitalJoystickConfig, JoystickConfig};

    fn bare() -> DeviceProfile {
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

    #[test]
    fn test_name_roundtrip() {
        for cap in Capability::ALL {
            assert_eq!(Capability::from_name(cap.name()), Some(cap));
        }
        assert_eq!(Capability::from_name("jetpack"), None);
    }

    #[test]
    fn test_bare_profile_has_nothing() {
        let profile = bare();
        assert!(profile.capabilities().is_empty());
        assert!(!profile.has_named("touch"));
        assert!(profile.peripheral(Capability::Display).is_none());
    }

    #[test]
    fn test_buzzer_implies_audio() {
        let mut profile = bare();
        profile.buzzer = Some(OutputPinConfig { pin: 13 });
        assert!(profile.has(Capability::Audio));
        assert_eq!(
            profile.peripheral(Capability::Audio),
            Some(PeripheralParams::Audio(Some(&OutputPinConfig { pin: 13 })))
        );
    }

    #[test]
    fn test_flags_and_blocks() {
        let mut profile = bare();
        profile.features.wifi = true;
        profile.rtc = Some(I2cDeviceConfig {
            bus: 0,
            address: 0x51,
        });
        let caps = profile.capabilities();
        assert_eq!(caps.len(), 2);
        assert!(caps.contains(Capability::Wifi));
        assert!(caps.contains(Capability::Rtc));
        assert_eq!(
            profile.peripheral(Capability::Wifi),
            Some(PeripheralParams::Flag)
        );
        match profile.peripheral(Capability::Rtc) {
            Some(PeripheralParams::Rtc(rtc)) => assert_eq!(rtc.address, 0x51),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_capabilities_iter_order() {
        let caps = Capabilities::from_slice(&[Capability::Imu, Capability::Display]);
        let mut iter = caps.iter();
        assert_eq!(iter.next(), Some(Capability::Display));
        assert_eq!(iter.next(), Some(Capability::Imu));
        assert_eq!(iter.next(), None);
    }
}
