//! Integer-scaled text
//!
//! Glyphs come from the 5x8 `embedded-graphics` mono font. Each font pixel
//! is drawn as a `scale x scale` block, so scale 2 gives 16 px tall text and
//! scale 3 gives 24 px.

use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};

/// Base font
pub const FONT: &MonoFont<'static> = &FONT_5X8;

/// Horizontal advance of one character at `scale`
pub fn char_advance(scale: u32) -> u32 {
    (FONT.character_size.width + FONT.character_spacing) * scale
}

/// Pixel width of `text` at `scale`
pub fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * char_advance(scale)
}

/// Largest scale up to `preferred` at which `text` is at most `available` wide
///
/// Never goes below 1; text too wide even then is left to clip.
pub fn fit_scale(text: &str, preferred: u32, available: u32) -> u32 {
    (1..=preferred.max(1))
        .rev()
        .find(|&scale| text_width(text, scale) <= available)
        .unwrap_or(1)
}

/// Longest prefix of `text` whose characters all end within `max_width`
pub fn fit_width(text: &str, max_width: Option<u32>, scale: u32) -> &str {
    let Some(max_width) = max_width else {
        return text;
    };
    let advance = char_advance(scale);
    if advance == 0 {
        return text;
    }
    let fits = (max_width / advance) as usize;
    match text.char_indices().nth(fits) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Draw `text` with its top-left corner at `origin`
pub fn draw_scaled<D>(
    target: &mut D,
    text: &str,
    origin: Point,
    color: D::Color,
    scale: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget,
{
    let style = MonoTextStyle::new(FONT, color);
    let mut scaled = Scaled {
        target,
        origin,
        scale,
    };
    Text::with_baseline(text, Point::zero(), style, Baseline::Top).draw(&mut scaled)?;
    Ok(())
}

/// Draw target adapter that magnifies every pixel into a square block
struct Scaled<'a, D> {
    target: &'a mut D,
    origin: Point,
    scale: u32,
}

impl<D: DrawTarget> DrawTarget for Scaled<'_, D> {
    type Color = D::Color;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let step = self.scale as i32;
        let block = Size::new_equal(self.scale);
        for Pixel(point, color) in pixels {
            let top_left = self.origin + Point::new(point.x * step, point.y * step);
            self.target
                .fill_solid(&Rectangle::new(top_left, block), color)?;
        }
        Ok(())
    }
}

impl<D: DrawTarget> Dimensions for Scaled<'_, D> {
    fn bounding_box(&self) -> Rectangle {
        let size = self.target.bounding_box().size;
        Rectangle::new(
            Point::zero(),
            Size::new(size.width / self.scale, size.height / self.scale),
        )
    }
}
