//! Elapsed-duration decomposition

use super::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Split `total_seconds` into (days, hours, minutes, seconds)
///
/// `days * 86400 + hours * 3600 + minutes * 60 + seconds == total_seconds`
pub fn decompose(total_seconds: u64) -> (u64, u8, u8, u8) {
    let days = total_seconds / SECONDS_PER_DAY;
    let rest = total_seconds % SECONDS_PER_DAY;
    let hours = rest / SECONDS_PER_HOUR;
    let rest = rest % SECONDS_PER_HOUR;
    let minutes = rest / SECONDS_PER_MINUTE;
    let seconds = rest % SECONDS_PER_MINUTE;
    (days, hours as u8, minutes as u8, seconds as u8)
}

/// Signed distance from the epoch anchor, split into components
///
/// When the anchor lies in the future the magnitude is decomposed and
/// `negative` is set, so the display counts down towards it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Elapsed {
    pub negative: bool,
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl Elapsed {
    /// Duration from `anchor` to `now` (both unix seconds)
    pub fn between(now: i64, anchor: i64) -> Self {
        Self::from_seconds(i128::from(now) - i128::from(anchor))
    }

    pub fn from_seconds(seconds: i128) -> Self {
        let magnitude = u64::try_from(seconds.unsigned_abs()).unwrap_or(u64::MAX);
        let (days, hours, minutes, seconds_part) = decompose(magnitude);
        Self {
            negative: seconds < 0,
            days,
            hours,
            minutes,
            seconds: seconds_part,
        }
    }

    /// Magnitude in seconds
    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + u64::from(self.hours) * SECONDS_PER_HOUR
            + u64::from(self.minutes) * SECONDS_PER_MINUTE
            + u64::from(self.seconds)
    }
}
