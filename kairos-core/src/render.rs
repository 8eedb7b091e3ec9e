//! Screen layout
//!
//! Every tick the whole screen is rebuilt: background, pen, one or two text
//! lines, flush.

use heapless::String;
use kairos_display::palette::{BACKGROUND, FOREGROUND};
use kairos_display::text::fit_scale;
use kairos_display::{DisplayError, DrawSurface};
use kairos_hal::DateTime;

use crate::state::{ClockFields, Mode};
use crate::time::format::{DATETIME_LEN, ELAPSED_LEN};
use crate::time::{
    format_date, format_datetime, format_elapsed, format_time, format_year, unix_timestamp,
    Elapsed,
};

pub const MARGIN_X: i32 = 10;
pub const FIRST_LINE_Y: i32 = 10;
pub const SECOND_LINE_Y: i32 = 40;
pub const FIRST_LINE_SCALE: u32 = 2;
/// Preferred scale of the second line; long values step down to fit
pub const SECOND_LINE_SCALE: u32 = 3;
/// Clip width for adjust-mode labels
pub const LABEL_MAX_WIDTH: u32 = 240;

/// Shown in place of the clock when the RTC cannot be read
pub const CLOCK_UNAVAILABLE: &str = "Clock unavailable";

/// What one frame shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Live clock over the elapsed duration
    Live {
        clock: String<DATETIME_LEN>,
        elapsed: String<ELAPSED_LEN>,
    },
    /// RTC read failed
    ClockUnavailable,
    /// Adjust-mode label over the value being edited
    Adjust {
        label: &'static str,
        value: String<5>,
    },
}

impl View {
    /// Normal-mode view for the RTC reading `now`
    pub fn live(now: &DateTime, epoch_anchor: i64) -> Self {
        let elapsed = Elapsed::between(unix_timestamp(now), epoch_anchor);
        View::Live {
            clock: format_datetime(now),
            elapsed: format_elapsed(&elapsed),
        }
    }

    /// Adjust-mode view, `None` in Normal
    pub fn adjust(mode: Mode, fields: &ClockFields) -> Option<Self> {
        let value = match mode {
            Mode::Normal => return None,
            Mode::AdjustTime => format_time(fields.hour, fields.minute),
            Mode::AdjustDate => format_date(fields.month, fields.day),
            Mode::AdjustYear => format_year(fields.year),
        };
        Some(View::Adjust {
            label: mode.label()?,
            value,
        })
    }
}

/// Draw `view` and flush it to the panel
pub fn render<S: DrawSurface>(view: &View, surface: &mut S) -> Result<(), DisplayError> {
    surface.clear(BACKGROUND)?;
    surface.set_color(FOREGROUND);

    match view {
        View::Live { clock, elapsed } => {
            surface.draw_text(clock, MARGIN_X, FIRST_LINE_Y, None, FIRST_LINE_SCALE)?;
            let scale = second_line_scale(surface, elapsed);
            surface.draw_text(elapsed, MARGIN_X, SECOND_LINE_Y, None, scale)?;
        }
        View::ClockUnavailable => {
            surface.draw_text(
                CLOCK_UNAVAILABLE,
                MARGIN_X,
                FIRST_LINE_Y,
                Some(LABEL_MAX_WIDTH),
                FIRST_LINE_SCALE,
            )?;
        }
        View::Adjust { label, value } => {
            surface.draw_text(
                label,
                MARGIN_X,
                FIRST_LINE_Y,
                Some(LABEL_MAX_WIDTH),
                FIRST_LINE_SCALE,
            )?;
            let scale = second_line_scale(surface, value);
            surface.draw_text(value, MARGIN_X, SECOND_LINE_Y, None, scale)?;
        }
    }

    surface.flush()
}

/// Largest scale up to [`SECOND_LINE_SCALE`] that keeps `text` on screen
fn second_line_scale<S: DrawSurface>(surface: &S, text: &str) -> u32 {
    let available = surface.dimensions().0.saturating_sub(MARGIN_X as u32);
    fit_scale(text, SECOND_LINE_SCALE, available)
}

#[cfg(test)]
pub(crate) mod tests {
    extern crate std;

    use std::string::{String as StdString, ToString};
    use std::vec::Vec;

    use super::*;
    use kairos_display::Color;
    use kairos_hal::Weekday;

    /// Operations seen by [`RecordingSurface`]
    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Clear(Color),
        Pen(Color),
        Text {
            text: StdString,
            x: i32,
            y: i32,
            max_width: Option<u32>,
            scale: u32,
        },
        Flush,
    }

    /// Surface fake that records every call
    #[derive(Default)]
    pub struct RecordingSurface {
        pub ops: Vec<Op>,
        pub fail_flush: bool,
    }

    impl RecordingSurface {
        /// Text lines drawn since the last clear
        pub fn lines(&self) -> Vec<StdString> {
            let start = self
                .ops
                .iter()
                .rposition(|op| matches!(op, Op::Clear(_)))
                .unwrap_or(0);
            self.ops[start..]
                .iter()
                .filter_map(|op| match op {
                    Op::Text { text, .. } => Some(text.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    impl DrawSurface for RecordingSurface {
        fn clear(&mut self, color: Color) -> Result<(), DisplayError> {
            self.ops.push(Op::Clear(color));
            Ok(())
        }

        fn set_color(&mut self, color: Color) {
            self.ops.push(Op::Pen(color));
        }

        fn draw_text(
            &mut self,
            text: &str,
            x: i32,
            y: i32,
            max_width: Option<u32>,
            scale: u32,
        ) -> Result<(), DisplayError> {
            self.ops.push(Op::Text {
                text: text.to_string(),
                x,
                y,
                max_width,
                scale,
            });
            Ok(())
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            if self.fail_flush {
                return Err(DisplayError::Communication);
            }
            self.ops.push(Op::Flush);
            Ok(())
        }

        fn dimensions(&self) -> (u32, u32) {
            (240, 135)
        }
    }

    fn reference_now() -> DateTime {
        DateTime {
            year: 2023,
            month: 9,
            day: 16,
            weekday: Weekday::Saturday,
            hour: 15,
            minute: 44,
            second: 49,
        }
    }

    #[test]
    fn test_live_layout() {
        let mut surface = RecordingSurface::default();
        let view = View::live(&reference_now(), 1_694_879_089 - 90_061);
        render(&view, &mut surface).unwrap();

        assert_eq!(
            surface.ops,
            std::vec![
                Op::Clear(BACKGROUND),
                Op::Pen(FOREGROUND),
                Op::Text {
                    text: "09/16/2023 15:44:49".to_string(),
                    x: 10,
                    y: 10,
                    max_width: None,
                    scale: 2,
                },
                Op::Text {
                    text: "1d 1h 1m 1s".to_string(),
                    x: 10,
                    y: 40,
                    max_width: None,
                    scale: 3,
                },
                Op::Flush,
            ]
        );
    }

    #[test]
    fn test_long_elapsed_stays_on_screen() {
        // 1127 days after the default anchor
        let now = DateTime {
            year: 2026,
            month: 10,
            day: 18,
            weekday: Weekday::Sunday,
            hour: 12,
            minute: 34,
            second: 56,
        };
        let mut surface = RecordingSurface::default();
        render(&View::live(&now, 1_694_879_089), &mut surface).unwrap();

        let (width, _) = surface.dimensions();
        let texts: Vec<_> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, x, scale, .. } => Some((text.clone(), *x, *scale)),
                _ => None,
            })
            .collect();
        assert_eq!(texts[1], ("1127d 20h 50m 7s".to_string(), 10, 2));
        for (text, x, scale) in texts {
            let right = x as u32 + kairos_display::text::text_width(&text, scale);
            assert!(right <= width, "{:?} ends at {}", text, right);
        }
    }

    #[test]
    fn test_adjust_layout() {
        let mut surface = RecordingSurface::default();
        let fields = ClockFields::new(2023, 9, 16, 14, 12, 30);
        let view = View::adjust(Mode::AdjustTime, &fields).unwrap();
        render(&view, &mut surface).unwrap();

        assert_eq!(
            surface.ops[2],
            Op::Text {
                text: "Adjusting Time".to_string(),
                x: 10,
                y: 10,
                max_width: Some(240),
                scale: 2,
            }
        );
        assert_eq!(surface.lines(), ["Adjusting Time", "14:12"]);
        assert_eq!(surface.ops.last(), Some(&Op::Flush));
    }

    #[test]
    fn test_adjust_values_per_mode() {
        let fields = ClockFields::new(2023, 9, 6, 4, 5, 0);
        let value = |mode| match View::adjust(mode, &fields) {
            Some(View::Adjust { value, .. }) => value,
            _ => panic!("no adjust view"),
        };
        assert_eq!(value(Mode::AdjustTime).as_str(), "04:05");
        assert_eq!(value(Mode::AdjustDate).as_str(), "09/06");
        assert_eq!(value(Mode::AdjustYear).as_str(), "2023");
        assert_eq!(View::adjust(Mode::Normal, &fields), None);
    }

    #[test]
    fn test_clock_unavailable_is_single_line() {
        let mut surface = RecordingSurface::default();
        render(&View::ClockUnavailable, &mut surface).unwrap();
        assert_eq!(surface.lines(), [CLOCK_UNAVAILABLE]);
    }

    #[test]
    fn test_flush_error_propagates() {
        let mut surface = RecordingSurface {
            fail_flush: true,
            ..Default::default()
        };
        let fields = ClockFields::default();
        let view = View::adjust(Mode::AdjustYear, &fields).unwrap();
        assert_eq!(render(&view, &mut surface), Err(DisplayError::Communication));
    }
}
