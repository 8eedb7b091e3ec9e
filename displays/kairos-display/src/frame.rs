//! Frame-buffered drawing surface
//!
//! All drawing lands in a RAM frame; `flush` sends the whole frame to the
//! panel as one contiguous transfer. A full clear-and-redraw every tick
//! therefore never shows up as flicker on the glass.

use core::convert::Infallible;

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::backend::{DisplayError, DrawSurface};
use crate::palette::{Color, BLACK, FOREGROUND};
use crate::text;

/// RAM frame buffer (row-major, one `Color` per pixel)
pub struct Frame<'a> {
    pixels: &'a mut [Color],
    size: Size,
}

impl<'a> Frame<'a> {
    /// Use `pixels` as a `width` x `height` frame
    pub fn new(pixels: &'a mut [Color], width: u32, height: u32) -> Result<Self, DisplayError> {
        let needed = (width as usize) * (height as usize);
        if pixels.len() < needed {
            return Err(DisplayError::BufferOverflow);
        }
        Ok(Self {
            pixels: &mut pixels[..needed],
            size: Size::new(width, height),
        })
    }

    /// Fill every pixel
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Read back one pixel
    pub fn pixel(&self, point: Point) -> Option<Color> {
        self.index(point).map(|i| self.pixels[i])
    }

    /// All pixels, row-major
    pub fn pixels(&self) -> &[Color] {
        &*self.pixels
    }

    fn index(&self, point: Point) -> Option<usize> {
        let (w, h) = (self.size.width as i32, self.size.height as i32);
        if point.x < 0 || point.y < 0 || point.x >= w || point.y >= h {
            return None;
        }
        Some((point.y * w + point.x) as usize)
    }
}

impl DrawTarget for Frame<'_> {
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = self.index(point) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let width = self.size.width as usize;
        for y in area.rows() {
            let row = y as usize * width;
            for x in area.columns() {
                self.pixels[row + x as usize] = color;
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Frame<'_> {
    fn size(&self) -> Size {
        self.size
    }
}

/// [`DrawSurface`] that buffers into a [`Frame`] and flushes to `panel`
pub struct FrameSurface<'a, P> {
    panel: P,
    frame: Frame<'a>,
    pen: Color,
}

impl<'a, P> FrameSurface<'a, P>
where
    P: DrawTarget<Color = Color>,
{
    pub fn new(panel: P, mut frame: Frame<'a>) -> Self {
        frame.fill(BLACK);
        Self {
            panel,
            frame,
            pen: FOREGROUND,
        }
    }

    /// Current frame contents (not necessarily flushed)
    #[cfg(test)]
    fn frame(&self) -> &Frame<'a> {
        &self.frame
    }

    #[cfg(test)]
    fn panel(&self) -> &P {
        &self.panel
    }
}

impl<P> DrawSurface for FrameSurface<'_, P>
where
    P: DrawTarget<Color = Color>,
{
    fn clear(&mut self, color: Color) -> Result<(), DisplayError> {
        self.frame.fill(color);
        Ok(())
    }

    fn set_color(&mut self, color: Color) {
        self.pen = color;
    }

    fn draw_text(
        &mut self,
        content: &str,
        x: i32,
        y: i32,
        max_width: Option<u32>,
        scale: u32,
    ) -> Result<(), DisplayError> {
        if scale == 0 {
            return Err(DisplayError::InvalidScale);
        }
        let visible = text::fit_width(content, max_width, scale);
        match text::draw_scaled(&mut self.frame, visible, Point::new(x, y), self.pen, scale) {
            Ok(()) => Ok(()),
            Err(never) => match never {},
        }
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        let area = Rectangle::new(Point::zero(), self.frame.size);
        self.panel
            .fill_contiguous(&area, self.frame.pixels.iter().copied())
            .map_err(|_| DisplayError::Communication)
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.frame.size.width, self.frame.size.height)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;
    use std::vec::Vec;

    use super::*;
    use crate::palette::BACKGROUND;

    /// Panel fake that records every transfer
    struct RecordingPanel {
        size: Size,
        transfers: Vec<(Rectangle, Vec<Color>)>,
        fail: bool,
    }

    impl RecordingPanel {
        fn new(width: u32, height: u32) -> Self {
            Self {
                size: Size::new(width, height),
                transfers: Vec::new(),
                fail: false,
            }
        }
    }

    impl DrawTarget for RecordingPanel {
        type Color = Color;
        type Error = ();

        fn draw_iter<I>(&mut self, _pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            Ok(())
        }

        fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Self::Color>,
        {
            if self.fail {
                return Err(());
            }
            self.transfers.push((*area, colors.into_iter().collect()));
            Ok(())
        }
    }

    impl OriginDimensions for RecordingPanel {
        fn size(&self) -> Size {
            self.size
        }
    }

    #[test]
    fn test_frame_rejects_short_buffer() {
        let mut pixels = vec![BLACK; 10];
        assert!(matches!(
            Frame::new(&mut pixels, 4, 4),
            Err(DisplayError::BufferOverflow)
        ));
    }

    #[test]
    fn test_draw_does_not_touch_panel_until_flush() {
        let mut pixels = vec![BLACK; 64 * 32];
        let frame = Frame::new(&mut pixels, 64, 32).unwrap();
        let mut surface = FrameSurface::new(RecordingPanel::new(64, 32), frame);

        surface.clear(BACKGROUND).unwrap();
        surface.set_color(FOREGROUND);
        surface.draw_text("8", 2, 2, None, 2).unwrap();
        assert!(surface.panel().transfers.is_empty());

        surface.flush().unwrap();
        let transfers = &surface.panel().transfers;
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].0.size, Size::new(64, 32));
        assert_eq!(transfers[0].1.len(), 64 * 32);
        assert!(transfers[0].1.contains(&FOREGROUND));
        assert!(transfers[0].1.contains(&BACKGROUND));
    }

    #[test]
    fn test_clear_fills_frame() {
        let mut pixels = vec![BLACK; 16 * 16];
        let frame = Frame::new(&mut pixels, 16, 16).unwrap();
        let mut surface = FrameSurface::new(RecordingPanel::new(16, 16), frame);

        surface.clear(BACKGROUND).unwrap();
        assert!(surface.frame().pixels().iter().all(|&c| c == BACKGROUND));
    }

    #[test]
    fn test_text_uses_pen_and_clips_to_frame() {
        let mut pixels = vec![BLACK; 20 * 10];
        let frame = Frame::new(&mut pixels, 20, 10).unwrap();
        let mut surface = FrameSurface::new(RecordingPanel::new(20, 10), frame);

        surface.clear(BACKGROUND).unwrap();
        surface.set_color(BLACK);
        // Much wider than the frame; must not panic
        surface.draw_text("00000000", 5, 0, None, 3).unwrap();
        assert!(surface.frame().pixels().contains(&BLACK));
        assert_eq!(surface.frame().pixel(Point::new(0, 0)), Some(BACKGROUND));
        assert_eq!(surface.frame().pixel(Point::new(20, 0)), None);
    }

    #[test]
    fn test_max_width_drops_characters() {
        let mut pixels = vec![BLACK; 40 * 8];
        let frame = Frame::new(&mut pixels, 40, 8).unwrap();
        let mut surface = FrameSurface::new(RecordingPanel::new(40, 8), frame);

        surface.clear(BACKGROUND).unwrap();
        surface.draw_text("8888", 0, 0, Some(10), 1).unwrap();
        // Only the first two characters (x < 10) are drawn
        for x in 10..40 {
            for y in 0..8 {
                assert_eq!(surface.frame().pixel(Point::new(x, y)), Some(BACKGROUND));
            }
        }
        assert!(surface.frame().pixels().contains(&FOREGROUND));
    }

    #[test]
    fn test_zero_scale_rejected() {
        let mut pixels = vec![BLACK; 8 * 8];
        let frame = Frame::new(&mut pixels, 8, 8).unwrap();
        let mut surface = FrameSurface::new(RecordingPanel::new(8, 8), frame);
        assert_eq!(
            surface.draw_text("1", 0, 0, None, 0),
            Err(DisplayError::InvalidScale)
        );
    }

    #[test]
    fn test_flush_error_maps_to_communication() {
        let mut pixels = vec![BLACK; 8 * 8];
        let frame = Frame::new(&mut pixels, 8, 8).unwrap();
        let mut panel = RecordingPanel::new(8, 8);
        panel.fail = true;
        let mut surface = FrameSurface::new(panel, frame);
        assert_eq!(surface.flush(), Err(DisplayError::Communication));
    }
}
