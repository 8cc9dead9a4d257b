//! Touch panel abstraction
//!
//! Controllers such as the FT3168 and GT911 report up to five contacts;
//! the launcher only ever needs the primary one.

/// A touch contact in display coordinates (origin top-left, y grows down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

impl TouchPoint {
    /// Create a new touch point
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Signed displacement from `origin` to this point
    pub fn delta_from(&self, origin: TouchPoint) -> (i32, i32) {
        (
            self.x as i32 - origin.x as i32,
            self.y as i32 - origin.y as i32,
        )
    }
}

/// Touch panel driver
pub trait TouchPanel {
    /// Read the primary contact, or `None` when nothing touches the panel
    ///
    /// Must return the latest known state without waiting for the
    /// controller's next report.
    fn primary_contact(&mut self) -> Option<TouchPoint>;
}
