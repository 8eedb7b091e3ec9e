//! Board-agnostic core logic for the Kairos timer & clock
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Time math (elapsed-time decomposition, calendar, formatting)
//! - Clock fields being edited and the adjust-mode state machine
//! - Button tracking (edge detection, non-blocking long press)
//! - Screen rendering through the `DrawSurface` trait
//! - The per-tick controller tying it all together
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod render;
pub mod state;
pub mod time;

pub use config::{ConfigError, RepeatMode, TimerConfig};
pub use controller::{Controller, TickReport};
pub use error::HardwareFault;
