//! Build-time configuration
//!
//! `build.rs` validates `kairos.toml` and emits the constants included here.

use kairos_core::state::ClockFields;
use kairos_core::TimerConfig;

include!(concat!(env!("OUT_DIR"), "/kairos_config.rs"));

/// Controller configuration from the compiled-in constants
pub fn timer_config() -> TimerConfig {
    let (year, month, day, hour, minute, second) = INITIAL_CLOCK;
    TimerConfig {
        epoch_anchor: EPOCH_ANCHOR,
        hold_threshold_ms: HOLD_THRESHOLD_MS,
        tick_interval_ms: TICK_INTERVAL_MS,
        repeat: REPEAT,
        initial_clock: ClockFields::new(year, month, day, hour, minute, second),
    }
}
