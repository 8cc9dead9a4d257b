//! Device profile type definitions: identity and input hardware
//!
//! These types describe how the user's input reaches the board. Exactly one
//! joystick kind is active per profile, which [`JoystickConfig`] guarantees
//! by being a single tagged enum.

use heapless::{String, Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::input::{Button, Direction, Input};
use pocketdeck_hal::TouchPoint;

/// Maximum board id length
pub const MAX_ID_LEN: usize = 32;

/// Maximum display name length
pub const MAX_NAME_LEN: usize = 48;

/// Maximum touch button zones
pub const MAX_TOUCH_ZONES: usize = 4;

/// Default number of consecutive polls a digital level must hold
pub const DEFAULT_DEBOUNCE_POLLS: u8 = 2;

#[cfg(feature = "serde")]
fn default_true() -> bool {
    true
}

#[cfg(feature = "serde")]
fn default_center_value() -> u16 {
    pocketdeck_hal::ADC_CENTER
}

#[cfg(feature = "serde")]
fn default_debounce_polls() -> u8 {
    DEFAULT_DEBOUNCE_POLLS
}

/// Board identity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceIdentity {
    /// Unique board id (e.g., "WAVESHARE_1.3")
    pub id: String<MAX_ID_LEN>,
    /// Human-readable name
    pub name: String<MAX_NAME_LEN>,
}

/// Which joystick hardware a board carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputKind {
    DigitalJoystick,
    AnalogJoystick,
    TouchEmulatedJoystick,
}

/// 5-way digital joystick, one switch per direction
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DigitalJoystickConfig {
    pub up: u8,
    pub down: u8,
    pub left: u8,
    pub right: u8,
    pub center: u8,
    /// Enable internal pull-ups (switches then read active-low)
    #[cfg_attr(feature = "serde", serde(default = "default_true"))]
    pub pull_up: bool,
}

impl DigitalJoystickConfig {
    /// Pin wired to a direction
    pub fn pin(&self, direction: Direction) -> u8 {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Center => self.center,
        }
    }
}

/// Two-axis analog joystick with a digital push button
///
/// Samples are on the 0..=65535 scale. The thresholds are per-board
/// calibration and only their ordering is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalogJoystickConfig {
    /// X-axis ADC pin
    pub x_pin: u8,
    /// Y-axis ADC pin
    pub y_pin: u8,
    /// Push-button pin (reported as Center)
    pub center: u8,
    #[cfg_attr(feature = "serde", serde(default = "default_true"))]
    pub pull_up: bool,
    /// Below this a sample counts as pushed toward the negative direction
    pub threshold_low: u16,
    /// Above this a sample counts as pushed toward the positive direction
    pub threshold_high: u16,
    /// Half-width of the neutral window around `center_value`
    pub center_range: u16,
    /// Resting sample value
    #[cfg_attr(feature = "serde", serde(default = "default_center_value"))]
    pub center_value: u16,
    /// Swap Left/Right
    #[cfg_attr(feature = "serde", serde(default))]
    pub invert_x: bool,
    /// Swap Up/Down
    #[cfg_attr(feature = "serde", serde(default))]
    pub invert_y: bool,
}

impl AnalogJoystickConfig {
    /// Neutral window as `(lower, upper)`, widened to avoid overflow
    pub fn neutral_window(&self) -> (i32, i32) {
        let center = self.center_value as i32;
        let range = self.center_range as i32;
        (center - range, center + range)
    }
}

/// Rectangular touch region acting as a face button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TouchZone {
    pub button: Button,
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl TouchZone {
    /// Check whether a point lies inside the zone (right/bottom edges excluded)
    pub fn contains(&self, point: TouchPoint) -> bool {
        let (px, py) = (point.x as u32, point.y as u32);
        let (x, y) = (self.x as u32, self.y as u32);
        px >= x && px < x + self.width as u32 && py >= y && py < y + self.height as u32
    }
}

/// Touch panel emulating a joystick with swipes and button zones
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TouchJoystickConfig {
    /// Minimum displacement (pixels) for a swipe
    pub swipe_threshold: u16,
    /// Button zones, checked in order
    #[cfg_attr(feature = "serde", serde(default))]
    pub zones: Vec<TouchZone, MAX_TOUCH_ZONES>,
}

impl TouchJoystickConfig {
    /// First zone containing `point`
    pub fn zone_at(&self, point: TouchPoint) -> Option<&TouchZone> {
        self.zones.iter().find(|z| z.contains(point))
    }
}

/// Joystick configuration, tagged by `kind` in board tables
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum JoystickConfig {
    Digital(DigitalJoystickConfig),
    Analog(AnalogJoystickConfig),
    Touch(TouchJoystickConfig),
}

impl JoystickConfig {
    /// Joystick kind
    pub fn kind(&self) -> InputKind {
        match self {
            JoystickConfig::Digital(_) => InputKind::DigitalJoystick,
            JoystickConfig::Analog(_) => InputKind::AnalogJoystick,
            JoystickConfig::Touch(_) => InputKind::TouchEmulatedJoystick,
        }
    }
}

/// Face buttons
///
/// A button without a pin is unavailable on this board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ButtonsConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub a: Option<u8>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub b: Option<u8>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub x: Option<u8>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub y: Option<u8>,
    #[cfg_attr(feature = "serde", serde(default = "default_true"))]
    pub pull_up: bool,
}

impl Default for ButtonsConfig {
    fn default() -> Self {
        Self {
            a: None,
            b: None,
            x: None,
            y: None,
            pull_up: true,
        }
    }
}

impl ButtonsConfig {
    /// Pin wired to a button, if any
    pub fn pin(&self, button: Button) -> Option<u8> {
        match button {
            Button::A => self.a,
            Button::B => self.b,
            Button::X => self.x,
            Button::Y => self.y,
        }
    }
}

/// Input normalization tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InputTuning {
    /// Consecutive polls a digital level must hold before it is reported
    #[cfg_attr(feature = "serde", serde(default = "default_debounce_polls"))]
    pub debounce_polls: u8,
}

impl Default for InputTuning {
    fn default() -> Self {
        Self {
            debounce_polls: DEFAULT_DEBOUNCE_POLLS,
        }
    }
}

/// A digital input line: which logical input, which pin, active level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitalLine {
    pub input: Input,
    pub pin: u8,
    pub pull_up: bool,
}

/// Wireless and audio capability flags without parameter blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeatureFlags {
    #[cfg_attr(feature = "serde", serde(default))]
    pub wifi: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bluetooth: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub audio: bool,
}

/// Performance envelope (advisory)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PerformanceConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub cpu_freq_hz: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub memory_bytes: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flash_bytes: u32,
}
