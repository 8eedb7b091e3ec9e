//! On-chip RTC
//!
//! Adapts `embassy_rp::rtc::Rtc` to the shared [`RealTimeClock`] trait.
//! The RP2040 RTC keeps no sub-second state and its day-of-week register
//! uses `0 = Sunday`, which is the encoding of [`Weekday`].

use embassy_rp::peripherals::RTC;
use embassy_rp::rtc::{DateTime as RpDateTime, DayOfWeek, Rtc, RtcError};
use embassy_rp::Peri;
use kairos_hal::{DateTime, RealTimeClock, Weekday};

/// RTC access errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RtcFault {
    /// The RTC was given (or holds) an out-of-range date
    InvalidDateTime,
    /// The RTC has not been started since power-on
    NotRunning,
}

impl From<RtcError> for RtcFault {
    fn from(e: RtcError) -> Self {
        match e {
            RtcError::NotRunning => RtcFault::NotRunning,
            _ => RtcFault::InvalidDateTime,
        }
    }
}

/// RP2040 real-time clock
pub struct PicoRtc<'d> {
    rtc: Rtc<'d, RTC>,
}

impl<'d> PicoRtc<'d> {
    /// Take ownership of the RTC peripheral
    pub fn new(rtc: Peri<'d, RTC>) -> Self {
        Self { rtc: Rtc::new(rtc) }
    }

    /// Check whether the RTC has been started since power-on
    pub fn is_running(&self) -> bool {
        self.rtc.is_running()
    }

    /// Start the RTC with `initial` if it is not already running
    ///
    /// Returns `true` if the RTC was (re)seeded.
    pub fn start_if_stopped(&mut self, initial: &DateTime) -> Result<bool, RtcFault> {
        if self.is_running() {
            return Ok(false);
        }
        self.write(initial)?;
        Ok(true)
    }
}

impl RealTimeClock for PicoRtc<'_> {
    type Error = RtcFault;

    fn read_now(&mut self) -> Result<DateTime, Self::Error> {
        let now = self.rtc.now()?;
        Ok(from_rp(&now))
    }

    fn write(&mut self, datetime: &DateTime) -> Result<(), Self::Error> {
        self.rtc.set_datetime(to_rp(datetime))?;
        Ok(())
    }
}

fn from_rp(dt: &RpDateTime) -> DateTime {
    DateTime {
        year: dt.year,
        month: dt.month,
        day: dt.day,
        weekday: weekday_from_rp(dt.day_of_week),
        hour: dt.hour,
        minute: dt.minute,
        second: dt.second,
    }
}

fn to_rp(dt: &DateTime) -> RpDateTime {
    RpDateTime {
        year: dt.year,
        month: dt.month,
        day: dt.day,
        day_of_week: weekday_to_rp(dt.weekday),
        hour: dt.hour,
        minute: dt.minute,
        second: dt.second,
    }
}

fn weekday_from_rp(day: DayOfWeek) -> Weekday {
    match day {
        DayOfWeek::Sunday => Weekday::Sunday,
        DayOfWeek::Monday => Weekday::Monday,
        DayOfWeek::Tuesday => Weekday::Tuesday,
        DayOfWeek::Wednesday => Weekday::Wednesday,
        DayOfWeek::Thursday => Weekday::Thursday,
        DayOfWeek::Friday => Weekday::Friday,
        DayOfWeek::Saturday => Weekday::Saturday,
    }
}

fn weekday_to_rp(day: Weekday) -> DayOfWeek {
    match day {
        Weekday::Sunday => DayOfWeek::Sunday,
        Weekday::Monday => DayOfWeek::Monday,
        Weekday::Tuesday => DayOfWeek::Tuesday,
        Weekday::Wednesday => DayOfWeek::Wednesday,
        Weekday::Thursday => DayOfWeek::Thursday,
        Weekday::Friday => DayOfWeek::Friday,
        Weekday::Saturday => DayOfWeek::Saturday,
    }
}
