//! Time math
//!
//! Pure functions only: elapsed-time decomposition, the fixed calendar
//! table, day-of-week and unix conversion, and text formatting.

pub mod calendar;
pub mod elapsed;
pub mod format;

pub use calendar::{day_of_week, days_in_month, unix_timestamp, weekday};
pub use elapsed::{decompose, Elapsed};
pub use format::{format_date, format_datetime, format_elapsed, format_time, format_year};

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 3_600;
pub const SECONDS_PER_DAY: u64 = 86_400;
