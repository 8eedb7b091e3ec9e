//! Drawing surface trait
//!
//! Defines the interface the UI renders through.

use crate::palette::Color;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the panel
    Communication,
    /// Frame buffer smaller than the requested dimensions
    BufferOverflow,
    /// Text scale of zero
    InvalidScale,
}

/// Pixel drawing surface
///
/// Drawing calls only touch the surface's own buffer; nothing reaches the
/// physical display until [`DrawSurface::flush`].
pub trait DrawSurface {
    /// Fill the whole surface with `color`
    fn clear(&mut self, color: Color) -> Result<(), DisplayError>;

    /// Select the pen used by subsequent text drawing
    fn set_color(&mut self, color: Color);

    /// Draw text with its top-left corner at (`x`, `y`)
    ///
    /// - `max_width`: pixel width after which remaining characters are dropped
    /// - `scale`: integer magnification of the base font (1 = 5x8 pixels)
    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        max_width: Option<u32>,
        scale: u32,
    ) -> Result<(), DisplayError>;

    /// Push buffered content to the display
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Surface size in pixels (width, height)
    fn dimensions(&self) -> (u32, u32);
}
