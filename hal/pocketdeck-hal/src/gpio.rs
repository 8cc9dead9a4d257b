//! GPIO pin abstractions
//!
//! Launcher input is read-only: joystick switches and user buttons are
//! sampled as raw levels and normalized further up the stack.

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip. Reads must never block.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

impl<T: InputPin + ?Sized> InputPin for &T {
    fn is_high(&self) -> bool {
        (**self).is_high()
    }
}
