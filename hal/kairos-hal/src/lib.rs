//! Kairos Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs (currently RP2040). The application core only
//! talks to these traits, so it can be exercised on the host with fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (kairos-core, firmware)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  kairos-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  kairos-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital input (buttons)
//! - [`rtc::RealTimeClock`] - Battery/board real-time clock

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod rtc;

// Re-export key traits at crate root for convenience
pub use gpio::InputPin;
pub use rtc::{DateTime, RealTimeClock, Weekday};
