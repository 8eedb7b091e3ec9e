//! GPIO inputs
//!
//! Wraps embassy-rp inputs so they can be handed to board-agnostic code.

use embassy_rp::gpio::{Input, Pin, Pull};
use embassy_rp::Peri;

/// A GPIO configured as a digital input
pub struct GpioInput<'d> {
    pin: Input<'d>,
}

impl<'d> GpioInput<'d> {
    /// Wrap an already configured input
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }

    /// Configure a pin as an input with the internal pull-up enabled
    ///
    /// The Pico Display buttons short to ground when pressed.
    pub fn pull_up(pin: Peri<'d, impl Pin>) -> Self {
        Self::new(Input::new(pin, Pull::Up))
    }
}

impl kairos_hal::InputPin for GpioInput<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
