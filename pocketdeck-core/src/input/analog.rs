//! Analog stick classification
//!
//! Each axis sample falls in one of five bands:
//!
//! ```text
//! 0 ... low | dead band | neutral window | dead band | high ... 65535
//!  negative                 released                   positive
//! ```
//!
//! Samples in a dead band keep whatever the axis reported last, so a stick
//! resting near a threshold does not chatter.

use crate::input::Direction;
use crate::profile::AnalogJoystickConfig;

/// Position of one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisState {
    Negative,
    #[default]
    Neutral,
    Positive,
}

/// Band a single sample falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Band {
    Negative,
    Neutral,
    Positive,
    Dead,
}

/// Classify one sample against the profile's thresholds
pub fn classify(value: u16, config: &AnalogJoystickConfig) -> Band {
    if value < config.threshold_low {
        return Band::Negative;
    }
    if value > config.threshold_high {
        return Band::Positive;
    }
    let offset = (value as i32 - config.center_value as i32).unsigned_abs();
    if offset < config.center_range as u32 {
        Band::Neutral
    } else {
        Band::Dead
    }
}

/// Stateful classifier for both axes
#[derive(Debug, Clone)]
pub struct AnalogStick {
    config: AnalogJoystickConfig,
    x: AxisState,
    y: AxisState,
}

impl AnalogStick {
    /// Create a stick at rest
    pub fn new(config: AnalogJoystickConfig) -> Self {
        Self {
            config,
            x: AxisState::Neutral,
            y: AxisState::Neutral,
        }
    }

    /// Feed one sample pair; returns the current `(x, y)` axis states
    pub fn update(&mut self, x: u16, y: u16) -> (AxisState, AxisState) {
        self.x = step(self.x, classify(x, &self.config));
        self.y = step(self.y, classify(y, &self.config));
        (self.x, self.y)
    }

    /// Whether a direction is currently held by the stick
    ///
    /// X negative is Left; Y negative is Down (ADC reads low when the stick
    /// is pulled toward the user). Inversion swaps each pair.
    pub fn is_held(&self, direction: Direction) -> bool {
        let (axis, positive, invert) = match direction {
            Direction::Left => (self.x, false, self.config.invert_x),
            Direction::Right => (self.x, true, self.config.invert_x),
            Direction::Down => (self.y, false, self.config.invert_y),
            Direction::Up => (self.y, true, self.config.invert_y),
            Direction::Center => return false,
        };
        let want = if positive != invert {
            AxisState::Positive
        } else {
            AxisState::Negative
        };
        axis == want
    }
}

fn step(previous: AxisState, band: Band) -> AxisState {
    match band {
        Band::Negative => AxisState::Negative,
        Band::Positive => AxisState::Positive,
        Band::Neutral => AxisState::Neutral,
        Band::Dead => previous,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AnalogJoystickConfig {
        AnalogJoystickConfig {
            x_pin: 27,
            y_pin: 26,
            center: 22,
            pull_up: true,
            threshold_low: 20000,
            threshold_high: 45000,
            center_range: 5000,
            center_value: 32768,
            invert_x: false,
            invert_y: false,
        }
    }

    #[test]
    fn test_classify_bands() {
        let c = config();
        assert_eq!(classify(0, &c), Band::Negative);
        assert_eq!(classify(19999, &c), Band::Negative);
        assert_eq!(classify(20000, &c), Band::Dead);
        assert_eq!(classify(27768, &c), Band::Dead);
        assert_eq!(classify(27769, &c), Band::Neutral);
        assert_eq!(classify(32768, &c), Band::Neutral);
        assert_eq!(classify(37767, &c), Band::Neutral);
        assert_eq!(classify(37768, &c), Band::Dead);
        assert_eq!(classify(45000, &c), Band::Dead);
        assert_eq!(classify(45001, &c), Band::Positive);
        assert_eq!(classify(u16::MAX, &c), Band::Positive);
    }

    #[test]
    fn test_dead_band_holds_previous() {
        let mut stick = AnalogStick::new(config());
        stick.update(32768, 10000);
        assert!(stick.is_held(Direction::Down));

        // Drifting back into the dead band keeps Down held
        stick.update(32768, 24000);
        assert!(stick.is_held(Direction::Down));

        // Only the neutral window releases it
        stick.update(32768, 32768);
        assert!(!stick.is_held(Direction::Down));

        // Dead band from neutral stays neutral
        stick.update(32768, 24000);
        assert!(!stick.is_held(Direction::Down));
    }

    #[test]
    fn test_axis_mapping() {
        let mut stick = AnalogStick::new(config());
        stick.update(10000, 60000);
        assert!(stick.is_held(Direction::Left));
        assert!(stick.is_held(Direction::Up));
        assert!(!stick.is_held(Direction::Right));
        assert!(!stick.is_held(Direction::Down));
        assert!(!stick.is_held(Direction::Center));
    }

    #[test]
    fn test_inversion_swaps_directions() {
        let mut c = config();
        c.invert_x = true;
        c.invert_y = true;
        let mut stick = AnalogStick::new(c);
        stick.update(10000, 60000);
        assert!(stick.is_held(Direction::Right));
        assert!(stick.is_held(Direction::Down));
    }
}
