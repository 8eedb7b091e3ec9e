//! Hardware fault reporting

/// Hardware failures observed during a tick
///
/// None of these stop the loop. A display fault drops the frame; a clock
/// fault skips the read or the commit and is retried on a later tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HardwareFault {
    /// Drawing or flushing the display failed
    DisplayWrite,
    /// The RTC could not be read
    ClockRead,
    /// The RTC rejected the committed value
    ClockWrite,
}
