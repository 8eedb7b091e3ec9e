//! Text formatting for the screen

use core::fmt::Write;

use heapless::String;
use kairos_hal::DateTime;

use super::Elapsed;

/// `MM/DD/YYYY HH:MM:SS`
pub const DATETIME_LEN: usize = 19;

/// Longest elapsed string: sign, 20-digit days and the h/m/s parts
pub const ELAPSED_LEN: usize = 36;

fn write_to<const N: usize>(s: &mut String<N>, args: core::fmt::Arguments<'_>) {
    // Capacities are sized for the widest value; a miss only truncates text
    let _ = s.write_fmt(args);
}

/// Live clock line, zero-padded `MM/DD/YYYY HH:MM:SS`
pub fn format_datetime(dt: &DateTime) -> String<DATETIME_LEN> {
    let mut s = String::new();
    write_to(
        &mut s,
        format_args!(
            "{:02}/{:02}/{:04} {:02}:{:02}:{:02}",
            dt.month, dt.day, dt.year, dt.hour, dt.minute, dt.second
        ),
    );
    s
}

/// `{d}d {h}h {m}m {s}s`, prefixed with `-` before the anchor
pub fn format_elapsed(elapsed: &Elapsed) -> String<ELAPSED_LEN> {
    let mut s = String::new();
    let sign = if elapsed.negative { "-" } else { "" };
    write_to(
        &mut s,
        format_args!(
            "{}{}d {}h {}m {}s",
            sign, elapsed.days, elapsed.hours, elapsed.minutes, elapsed.seconds
        ),
    );
    s
}

/// `HH:MM`
pub fn format_time(hour: u8, minute: u8) -> String<5> {
    let mut s = String::new();
    write_to(&mut s, format_args!("{:02}:{:02}", hour, minute));
    s
}

/// `MM/DD`
pub fn format_date(month: u8, day: u8) -> String<5> {
    let mut s = String::new();
    write_to(&mut s, format_args!("{:02}/{:02}", month, day));
    s
}

/// `YYYY`
pub fn format_year(year: u16) -> String<5> {
    let mut s = String::new();
    write_to(&mut s, format_args!("{:04}", year));
    s
}
