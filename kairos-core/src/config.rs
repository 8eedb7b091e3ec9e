//! Runtime configuration
//!
//! Values are fixed at build time (see the firmware's `kairos.toml`); this
//! type only carries and validates them.

use core::ops::RangeInclusive;

use crate::state::fields::ClockFields;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2023-09-16 15:44:49 UTC
pub const DEFAULT_EPOCH_ANCHOR: i64 = 1_694_879_089;

pub const DEFAULT_HOLD_THRESHOLD_MS: u64 = 1_000;

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 50;

/// Accepted long-press thresholds
pub const HOLD_THRESHOLD_RANGE_MS: RangeInclusive<u64> = 1..=10_000;

/// Accepted loop periods
pub const TICK_INTERVAL_RANGE_MS: RangeInclusive<u64> = 1..=1_000;

/// How a held button steps a field in the adjust modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RepeatMode {
    /// One step on every tick the button is down
    #[default]
    EveryTick,
    /// One step per press
    OnPress,
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Hold threshold outside [`HOLD_THRESHOLD_RANGE_MS`]
    HoldThresholdOutOfRange,
    /// Tick interval outside [`TICK_INTERVAL_RANGE_MS`]
    TickIntervalOutOfRange,
    /// Initial clock field out of range (year outside 1970-4095, impossible day)
    InvalidInitialClock,
}

/// Timer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimerConfig {
    /// Unix time the elapsed display counts from
    pub epoch_anchor: i64,
    /// Press duration that enters an adjust mode
    pub hold_threshold_ms: u64,
    /// Main loop period
    pub tick_interval_ms: u64,
    pub repeat: RepeatMode,
    /// Clock value used when the RTC is not running at boot
    pub initial_clock: ClockFields,
}

impl TimerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !HOLD_THRESHOLD_RANGE_MS.contains(&self.hold_threshold_ms) {
            return Err(ConfigError::HoldThresholdOutOfRange);
        }
        if !TICK_INTERVAL_RANGE_MS.contains(&self.tick_interval_ms) {
            return Err(ConfigError::TickIntervalOutOfRange);
        }
        // Every field already in range means clamping changes nothing
        let clock = self.initial_clock;
        let clamped = ClockFields::new(
            clock.year,
            clock.month,
            clock.day,
            clock.hour,
            clock.minute,
            clock.second,
        );
        if clock != clamped {
            return Err(ConfigError::InvalidInitialClock);
        }
        Ok(())
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            epoch_anchor: DEFAULT_EPOCH_ANCHOR,
            hold_threshold_ms: DEFAULT_HOLD_THRESHOLD_MS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            repeat: RepeatMode::EveryTick,
            initial_clock: ClockFields::default(),
        }
    }
}
