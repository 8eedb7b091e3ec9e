//! Pin sampling

use kairos_hal::InputPin;

use super::button::BUTTON_COUNT;

/// Reads the four button pins once per tick
///
/// Pins are ordered A, B, X, Y. The Pico Display buttons pull to ground
/// when pressed, so pins are active-low unless built with
/// [`InputPoller::active_high`].
pub struct InputPoller<P> {
    pins: [P; BUTTON_COUNT],
    active_low: bool,
}

impl<P: InputPin> InputPoller<P> {
    pub fn new(pins: [P; BUTTON_COUNT]) -> Self {
        Self {
            pins,
            active_low: true,
        }
    }

    pub fn active_high(pins: [P; BUTTON_COUNT]) -> Self {
        Self {
            pins,
            active_low: false,
        }
    }

    /// Pressed state of every button
    pub fn poll(&self) -> [bool; BUTTON_COUNT] {
        let mut levels = [false; BUTTON_COUNT];
        for (level, pin) in levels.iter_mut().zip(self.pins.iter()) {
            *level = pin.is_high() != self.active_low;
        }
        levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct FakePin(Cell<bool>);

    impl InputPin for FakePin {
        fn is_high(&self) -> bool {
            self.0.get()
        }
    }

    fn pins(levels: [bool; 4]) -> [FakePin; 4] {
        levels.map(|level| FakePin(Cell::new(level)))
    }

    #[test]
    fn test_active_low_inverts() {
        let poller = InputPoller::new(pins([true, false, true, true]));
        assert_eq!(poller.poll(), [false, true, false, false]);
    }

    #[test]
    fn test_active_high_passes_through() {
        let poller = InputPoller::active_high(pins([true, false, true, true]));
        assert_eq!(poller.poll(), [true, false, true, true]);
    }

    #[test]
    fn test_poll_sees_level_changes() {
        let poller = InputPoller::new(pins([true; 4]));
        assert_eq!(poller.poll(), [false; 4]);
        poller.pins[2].0.set(false);
        assert_eq!(poller.poll(), [false, false, true, false]);
    }
}
