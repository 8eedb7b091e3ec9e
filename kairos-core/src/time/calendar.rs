//! Calendar helpers
//!
//! Two calendars live here on purpose. The editing UI uses a fixed month
//! table with February always 28 days; unix conversion for the elapsed
//! display uses the full proleptic Gregorian rules.

use kairos_hal::{DateTime, Weekday};

use super::SECONDS_PER_DAY;

/// Days per month, January first. February is always 28.
pub const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Length of `month` (1-12) from the fixed table
///
/// Out-of-range months fall back to 31.
pub fn days_in_month(month: u8) -> u8 {
    match month {
        1..=12 => DAYS_IN_MONTH[usize::from(month - 1)],
        _ => 31,
    }
}

/// Zeller's congruence
///
/// Returns `0 = Saturday, 1 = Sunday, ..., 6 = Friday`.
pub fn day_of_week(year: i32, month: u8, day: u8) -> u8 {
    let (year, month) = if month < 3 {
        (year - 1, i32::from(month) + 12)
    } else {
        (year, i32::from(month))
    };
    let k = year.rem_euclid(100);
    let j = year.div_euclid(100);
    let f = i32::from(day) + (13 * (month + 1)) / 5 + k + k / 4 + j / 4 - 2 * j;
    f.rem_euclid(7) as u8
}

/// Convert a Zeller index into the RTC weekday encoding
///
/// Zeller counts from Saturday, the RTC from Sunday: `(h + 6) mod 7`.
pub fn weekday_from_zeller(h: u8) -> Weekday {
    Weekday::from_index((h % 7 + 6) % 7)
}

/// Weekday of a calendar date in the RTC encoding
pub fn weekday(year: u16, month: u8, day: u8) -> Weekday {
    weekday_from_zeller(day_of_week(i32::from(year), month, day))
}

/// Days since 1970-01-01 (negative before)
pub fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let (y, m) = if month <= 2 {
        (i64::from(year) - 1, i64::from(month) + 12)
    } else {
        (i64::from(year), i64::from(month))
    };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    // Days since March 1st
    let doy = (153 * (m - 3) + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Seconds since the unix epoch for an RTC reading
pub fn unix_timestamp(datetime: &DateTime) -> i64 {
    days_from_civil(i32::from(datetime.year), datetime.month, datetime.day)
        * SECONDS_PER_DAY as i64
        + i64::from(datetime.hour) * 3_600
        + i64::from(datetime.minute) * 60
        + i64::from(datetime.second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_table() {
        assert_eq!(days_in_month(1), 31);
        assert_eq!(days_in_month(2), 28);
        assert_eq!(days_in_month(4), 30);
        assert_eq!(days_in_month(12), 31);
        assert_eq!(days_in_month(0), 31);
        assert_eq!(days_in_month(13), 31);
    }

    #[test]
    fn test_zeller_reference_date() {
        // 2023-09-16 was a Saturday
        assert_eq!(day_of_week(2023, 9, 16), 0);
        assert_eq!(weekday(2023, 9, 16), Weekday::Saturday);
    }

    #[test]
    fn test_zeller_january_and_february() {
        // 2024-01-01 Monday, 2024-02-29 Thursday, 2000-01-01 Saturday
        assert_eq!(weekday(2024, 1, 1), Weekday::Monday);
        assert_eq!(weekday(2024, 2, 29), Weekday::Thursday);
        assert_eq!(weekday(2000, 1, 1), Weekday::Saturday);
    }

    #[test]
    fn test_zeller_to_rtc_mapping() {
        assert_eq!(weekday_from_zeller(0), Weekday::Saturday);
        assert_eq!(weekday_from_zeller(1), Weekday::Sunday);
        assert_eq!(weekday_from_zeller(6), Weekday::Friday);
    }

    #[test]
    fn test_days_from_civil() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(days_from_civil(1969, 12, 31), -1);
        assert_eq!(days_from_civil(2000, 3, 1), 11_017);
        assert_eq!(days_from_civil(2023, 9, 16), 19_616);
    }

    #[test]
    fn test_unix_timestamp_reference() {
        let dt = DateTime {
            year: 2023,
            month: 9,
            day: 16,
            weekday: Weekday::Saturday,
            hour: 15,
            minute: 44,
            second: 49,
        };
        assert_eq!(unix_timestamp(&dt), 1_694_879_089);
    }
}
