//! RP2040-specific HAL for the Kairos firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `kairos-hal` traits:
//!
//! - Button inputs (implements `kairos_hal::InputPin`)
//! - On-chip RTC (implements `kairos_hal::RealTimeClock`)
//! - Pico Display pin assignments

#![no_std]

pub mod gpio;
pub mod pins;
pub mod rtc;

// Re-export shared traits from kairos-hal for convenience
pub use kairos_hal::{DateTime, InputPin, RealTimeClock, Weekday};
