//! Events that trigger mode transitions

/// Events that can trigger mode transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Long press on the time button
    EditTime,
    /// Long press on the date button
    EditDate,
    /// Long press on the year button
    EditYear,
    /// Confirm button; ends the edit session and commits the clock
    Confirm,
}
