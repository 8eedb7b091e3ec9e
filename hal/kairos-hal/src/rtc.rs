//! Real-time clock abstractions
//!
//! The RTC is the only place the edited date/time is persisted. Writes
//! always carry the complete field set so the hardware is updated in a
//! single call.

/// Day of the week in the RP2040 RTC encoding (`DOTW` register)
///
/// `Sunday = 0` through `Saturday = 6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// All weekdays in encoding order
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Encoded register value (0-6)
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Decode a register value, wrapping values above 6
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index % 7) as usize]
    }

    /// Short English name
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sun",
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
        }
    }
}

/// Calendar date and wall-clock time as held by the RTC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    /// Full year, e.g. 2023
    pub year: u16,
    /// 1-12
    pub month: u8,
    /// 1-31
    pub day: u8,
    pub weekday: Weekday,
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    /// 0-59
    pub second: u8,
}

impl DateTime {
    /// Basic range check of every field
    ///
    /// Does not check the day against the month length; the RTC hardware
    /// rejects impossible dates on its own.
    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month)
            && (1..=31).contains(&self.day)
            && self.hour < 24
            && self.minute < 60
            && self.second < 60
    }
}

/// Real-time clock peripheral
pub trait RealTimeClock {
    /// Error type for RTC operations
    type Error;

    /// Read the current date and time
    fn read_now(&mut self) -> Result<DateTime, Self::Error>;

    /// Write a complete date and time (including weekday)
    ///
    /// Sub-second state is reset by the write.
    fn write(&mut self, datetime: &DateTime) -> Result<(), Self::Error>;
}
