//! Drawing surface trait
//!
//! Launchers draw through this narrow interface; the panel driver behind it
//! (ST7789 over SPI, CO5300 over QSPI, a host framebuffer) is out of reach
//! of the core.

/// RGB565 color
pub type Color = u16;

/// Common RGB565 colors
pub mod colors {
    use super::Color;

    pub const BLACK: Color = 0x0000;
    pub const WHITE: Color = 0xFFFF;
    pub const GRAY: Color = 0x8410;
    pub const ACCENT: Color = 0x05FF;
    pub const HIGHLIGHT: Color = 0xFD20;
    pub const CALM: Color = 0x4D6A;
}

/// Width of one glyph in pixels
pub const CHAR_WIDTH: u16 = 8;

/// Height of one text line in pixels
pub const LINE_HEIGHT: u16 = 12;

/// Errors reported by a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SurfaceError {
    /// Bus transfer to the panel failed
    Bus,
    /// Panel not ready
    Busy,
}

/// Trait for a drawable display surface
///
/// Drawing outside the surface is clipped, not an error.
pub trait Surface {
    /// Size in pixels as `(width, height)`
    fn size(&self) -> (u16, u16);

    /// Fill the whole surface
    fn clear(&mut self, color: Color) -> Result<(), SurfaceError>;

    /// Draw text with its top-left corner at `(x, y)`
    fn text(&mut self, x: u16, y: u16, text: &str, color: Color) -> Result<(), SurfaceError>;

    /// Fill a rectangle
    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), SurfaceError>;

    /// Push the frame to the panel
    fn flush(&mut self) -> Result<(), SurfaceError>;
}

impl<T: Surface + ?Sized> Surface for &mut T {
    fn size(&self) -> (u16, u16) {
        (**self).size()
    }

    fn clear(&mut self, color: Color) -> Result<(), SurfaceError> {
        (**self).clear(color)
    }

    fn text(&mut self, x: u16, y: u16, text: &str, color: Color) -> Result<(), SurfaceError> {
        (**self).text(x, y, text, color)
    }

    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), SurfaceError> {
        (**self).fill_rect(x, y, width, height, color)
    }

    fn flush(&mut self) -> Result<(), SurfaceError> {
        (**self).flush()
    }
}

/// Pixel width of `text` in the surface font
pub fn text_width(text: &str) -> u16 {
    let chars = text.chars().count().min(u16::MAX as usize / CHAR_WIDTH as usize);
    chars as u16 * CHAR_WIDTH
}

/// Helper trait for drawing common UI elements
pub trait SurfaceExt: Surface {
    /// Draw text horizontally centered on row `y`
    fn draw_centered(&mut self, y: u16, text: &str, color: Color) -> Result<(), SurfaceError> {
        let (width, _) = self.size();
        let x = width.saturating_sub(text_width(text)) / 2;
        self.text(x, y, text, color)
    }

    /// Draw a labelled tile, filled when selected
    fn draw_tile(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        label: &str,
        selected: bool,
    ) -> Result<(), SurfaceError> {
        let (fill, ink) = if selected {
            (colors::HIGHLIGHT, colors::BLACK)
        } else {
            (colors::GRAY, colors::WHITE)
        };
        self.fill_rect(x, y, width, height, fill)?;

        let text_x = x.saturating_add(width.saturating_sub(text_width(label)) / 2);
        let text_y = y.saturating_add(height.saturating_sub(LINE_HEIGHT) / 2);
        self.text(text_x, text_y, label, ink)
    }

    /// Draw a hint line along the bottom edge
    fn draw_footer(&mut self, text: &str) -> Result<(), SurfaceError> {
        let (_, height) = self.size();
        self.draw_centered(height.saturating_sub(LINE_HEIGHT), text, colors::GRAY)
    }
}

impl<T: Surface + ?Sized> SurfaceExt for T {}
