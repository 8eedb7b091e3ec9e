//! Clock fields edited in the adjust modes

use kairos_hal::DateTime;

use crate::time::calendar::{days_in_month, weekday};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Earliest year the RTC accepts
pub const YEAR_MIN: u16 = 1970;

/// Latest year the RTC accepts
pub const YEAR_MAX: u16 = 4095;

/// Date and time being edited
///
/// `day` never exceeds [`days_in_month`] for the current `month`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockFields {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl ClockFields {
    /// Build fields, clamping every value into range
    pub fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        let month = month.clamp(1, 12);
        Self {
            year: year.clamp(YEAR_MIN, YEAR_MAX),
            month,
            day: day.clamp(1, days_in_month(month)),
            hour: hour.min(23),
            minute: minute.min(59),
            second: second.min(59),
        }
    }

    /// Seed from an RTC reading
    ///
    /// February 29th becomes the 28th since the edit table has no leap day.
    pub fn from_datetime(dt: &DateTime) -> Self {
        Self::new(dt.year, dt.month, dt.day, dt.hour, dt.minute, dt.second)
    }

    /// Full RTC value, weekday included
    pub fn to_datetime(&self) -> DateTime {
        DateTime {
            year: self.year,
            month: self.month,
            day: self.day,
            weekday: weekday(self.year, self.month, self.day),
            hour: self.hour,
            minute: self.minute,
            second: self.second,
        }
    }

    /// Hour + 1, wrapping 23 -> 0
    pub fn increment_hour(&mut self) {
        self.hour = (self.hour + 1) % 24;
    }

    /// Minute + 1, wrapping 59 -> 0
    pub fn increment_minute(&mut self) {
        self.minute = (self.minute + 1) % 60;
    }

    /// Day + 1, wrapping to 1 past the end of the month
    pub fn increment_day(&mut self) {
        self.day = if self.day >= days_in_month(self.month) {
            1
        } else {
            self.day + 1
        };
    }

    /// Month + 1, wrapping 12 -> 1; clamps the day to the new month
    pub fn increment_month(&mut self) {
        self.month = self.month % 12 + 1;
        self.day = self.day.min(days_in_month(self.month));
    }

    pub fn increment_year(&mut self) {
        if self.year < YEAR_MAX {
            self.year += 1;
        }
    }

    pub fn decrement_year(&mut self) {
        if self.year > YEAR_MIN {
            self.year -= 1;
        }
    }
}

impl Default for ClockFields {
    fn default() -> Self {
        Self::new(2023, 9, 16, 14, 12, 0)
    }
}
