//! Display abstraction traits and shared components for Kairos
//!
//! This crate provides:
//! - `DrawSurface` trait: the handful of drawing operations the UI needs
//!   (clear, pen color, scaled text, flush)
//! - `FrameSurface`: a RAM frame buffer in front of any `embedded-graphics`
//!   draw target, pushed to the panel in one transfer on `flush`
//! - Integer-scaled text rendering on top of a small mono font
//! - The UI palette
//!
//! # Architecture
//!
//! The application core renders through `DrawSurface` only. On hardware
//! the surface wraps a `mipidsi` ST7789 panel; in tests any `DrawTarget`
//! (or a recording fake) can stand in for it.

#![no_std]

pub mod backend;
pub mod frame;
pub mod palette;
pub mod text;

// Re-export key types
pub use backend::{DisplayError, DrawSurface};
pub use frame::{Frame, FrameSurface};
pub use palette::Color;
