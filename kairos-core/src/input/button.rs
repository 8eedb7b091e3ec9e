//! Per-button press tracking

use crate::config::RepeatMode;

/// Number of buttons on the board
pub const BUTTON_COUNT: usize = 4;

/// Front-panel buttons
///
/// - A: enter AdjustTime (hold) / first field step
/// - B: enter AdjustDate (hold) / second field step
/// - X: confirm
/// - Y: enter AdjustYear (hold)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    A,
    B,
    X,
    Y,
}

impl ButtonId {
    /// All buttons in sampling order
    pub const ALL: [ButtonId; BUTTON_COUNT] = [ButtonId::A, ButtonId::B, ButtonId::X, ButtonId::Y];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Press state of a single button
///
/// Fed one sample per tick. A long press fires once per physical press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonTracker {
    pressed: bool,
    previous: bool,
    pressed_at_ms: Option<u64>,
    long_press_fired: bool,
    suppressed: bool,
}

impl ButtonTracker {
    pub const fn new() -> Self {
        Self {
            pressed: false,
            previous: false,
            pressed_at_ms: None,
            long_press_fired: false,
            suppressed: false,
        }
    }

    /// Record this tick's sample
    pub fn update(&mut self, pressed: bool, now_ms: u64) {
        self.previous = self.pressed;
        self.pressed = pressed;

        if pressed && !self.previous {
            self.pressed_at_ms = Some(now_ms);
            self.long_press_fired = false;
        } else if !pressed {
            self.pressed_at_ms = None;
            self.long_press_fired = false;
            self.suppressed = false;
        }
    }

    /// Down this tick (and not suppressed)
    pub fn is_held(&self) -> bool {
        self.pressed && !self.suppressed
    }

    /// Went down this tick
    pub fn just_pressed(&self) -> bool {
        self.pressed && !self.previous && !self.suppressed
    }

    /// How long the current press has lasted
    pub fn held_for(&self, now_ms: u64) -> Option<u64> {
        self.pressed_at_ms.map(|start| now_ms.saturating_sub(start))
    }

    /// Returns true once when the press has lasted longer than `threshold_ms`
    pub fn take_long_press(&mut self, now_ms: u64, threshold_ms: u64) -> bool {
        if self.suppressed || self.long_press_fired {
            return false;
        }
        match self.held_for(now_ms) {
            Some(held) if held > threshold_ms => {
                self.long_press_fired = true;
                true
            }
            _ => false,
        }
    }

    /// Ignore the current press until the button is released
    pub fn suppress_until_release(&mut self) {
        if self.pressed {
            self.suppressed = true;
        }
    }

    /// Whether this tick counts as a step under `repeat`
    pub fn is_active(&self, repeat: RepeatMode) -> bool {
        match repeat {
            RepeatMode::EveryTick => self.is_held(),
            RepeatMode::OnPress => self.just_pressed(),
        }
    }
}

/// Trackers for all four buttons
#[derive(Debug, Clone, Default)]
pub struct Buttons {
    trackers: [ButtonTracker; BUTTON_COUNT],
}

impl Buttons {
    pub const fn new() -> Self {
        Self {
            trackers: [ButtonTracker::new(); BUTTON_COUNT],
        }
    }

    /// Feed one sample per button, indexed by [`ButtonId::index`]
    pub fn update(&mut self, levels: [bool; BUTTON_COUNT], now_ms: u64) {
        for (tracker, pressed) in self.trackers.iter_mut().zip(levels) {
            tracker.update(pressed, now_ms);
        }
    }

    pub fn get(&self, id: ButtonId) -> &ButtonTracker {
        &self.trackers[id.index()]
    }

    pub fn get_mut(&mut self, id: ButtonId) -> &mut ButtonTracker {
        &mut self.trackers[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_detection() {
        let mut button = ButtonTracker::new();
        button.update(true, 0);
        assert!(button.just_pressed());
        assert!(button.is_held());

        button.update(true, 50);
        assert!(!button.just_pressed());
        assert!(button.is_held());

        button.update(false, 100);
        assert!(!button.is_held());
        assert!(!button.just_pressed());
    }

    #[test]
    fn test_long_press_fires_once_past_threshold() {
        let mut button = ButtonTracker::new();
        button.update(true, 1_000);
        assert!(!button.take_long_press(1_000, 1_000));

        button.update(true, 1_950);
        assert!(!button.take_long_press(1_950, 1_000));

        // Exactly at the threshold is not yet a long press
        button.update(true, 2_000);
        assert!(!button.take_long_press(2_000, 1_000));

        button.update(true, 2_050);
        assert!(button.take_long_press(2_050, 1_000));

        button.update(true, 3_500);
        assert!(!button.take_long_press(3_500, 1_000));
    }

    #[test]
    fn test_release_rearms_long_press() {
        let mut button = ButtonTracker::new();
        button.update(true, 0);
        assert!(button.take_long_press(11, 10));

        button.update(false, 20);
        assert_eq!(button.held_for(20), None);

        button.update(true, 30);
        assert!(!button.take_long_press(40, 10));
        assert!(button.take_long_press(41, 10));
    }

    #[test]
    fn test_short_tap_never_long_presses() {
        let mut button = ButtonTracker::new();
        button.update(true, 0);
        button.update(false, 200);
        assert!(!button.take_long_press(5_000, 1_000));
    }

    #[test]
    fn test_suppressed_until_release() {
        let mut button = ButtonTracker::new();
        button.update(true, 0);
        button.suppress_until_release();
        assert!(!button.is_held());
        assert!(!button.is_active(RepeatMode::EveryTick));

        button.update(true, 50);
        assert!(!button.is_held());

        button.update(false, 100);
        button.update(true, 150);
        assert!(button.is_held());
        assert!(button.just_pressed());
    }

    #[test]
    fn test_suppress_when_released_is_noop() {
        let mut button = ButtonTracker::new();
        button.suppress_until_release();
        button.update(true, 0);
        assert!(button.is_held());
    }

    #[test]
    fn test_repeat_modes() {
        let mut button = ButtonTracker::new();
        button.update(true, 0);
        assert!(button.is_active(RepeatMode::EveryTick));
        assert!(button.is_active(RepeatMode::OnPress));

        button.update(true, 50);
        assert!(button.is_active(RepeatMode::EveryTick));
        assert!(!button.is_active(RepeatMode::OnPress));
    }

    #[test]
    fn test_buttons_route_by_id() {
        let mut buttons = Buttons::new();
        buttons.update([false, true, false, true], 0);
        assert!(!buttons.get(ButtonId::A).is_held());
        assert!(buttons.get(ButtonId::B).is_held());
        assert!(!buttons.get(ButtonId::X).is_held());
        assert!(buttons.get(ButtonId::Y).is_held());
    }
}
