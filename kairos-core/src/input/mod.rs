//! Button input
//!
//! Pins are sampled once per tick by [`InputPoller`]; [`Buttons`] turns the
//! samples into held / just-pressed / long-press answers without ever
//! blocking the loop.

pub mod button;
pub mod poller;

pub use button::{ButtonId, ButtonTracker, Buttons};
pub use poller::InputPoller;
