//! UI colors

use embedded_graphics::pixelcolor::Rgb565;

/// Pixel color used throughout the UI
pub type Color = Rgb565;

/// Dark grey backdrop, RGB (40, 40, 40)
pub const BACKGROUND: Color = Rgb565::new(40 >> 3, 40 >> 2, 40 >> 3);

/// Text color
pub const FOREGROUND: Color = Rgb565::new(31, 63, 31);

pub const BLACK: Color = Rgb565::new(0, 0, 0);
