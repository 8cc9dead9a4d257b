//! Pin claiming for profile-driven hardware setup
//!
//! Board profiles name their pins by number. A port exposes its GPIOs
//! through a [`PinBank`] so that input pins can be claimed at runtime from
//! those numbers instead of being hardcoded per board.

use crate::adc::AnalogInput;
use crate::gpio::InputPin;

/// Error when claiming a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number does not exist on this chip
    InvalidPin(u8),
    /// Pin already claimed
    AlreadyTaken(u8),
    /// Pin has no ADC channel
    NotAnalogCapable(u8),
}

/// Owner of the chip's GPIOs
///
/// Claimed pins are released when the returned handle is dropped, so a
/// discarded consumer never leaks a hardware claim.
pub trait PinBank {
    /// Digital input handle
    type Input: InputPin;
    /// Analog input handle
    type Analog: AnalogInput;

    /// Claim a digital input, optionally enabling the internal pull-up
    fn take_input(&mut self, pin: u8, pull_up: bool) -> Result<Self::Input, PinError>;

    /// Claim an analog input
    fn take_analog(&mut self, pin: u8) -> Result<Self::Analog, PinError>;
}
