//! Per-tick controller
//!
//! Owns the mode, the clock fields and the button trackers. The firmware
//! calls [`Controller::tick`] once per loop iteration with fresh button
//! samples; the controller reads the RTC, renders one frame and commits
//! edits. It never blocks and never gives up on a hardware error.

use heapless::Vec;
use kairos_display::DrawSurface;
use kairos_hal::{DateTime, RealTimeClock};

use crate::config::{ConfigError, TimerConfig};
use crate::error::HardwareFault;
use crate::input::button::BUTTON_COUNT;
use crate::input::{ButtonId, Buttons};
use crate::render::{render, View};
use crate::state::{ClockFields, Event, Mode};

/// Outcome of one tick
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Mode after the tick
    pub mode: Mode,
    /// Event applied this tick
    pub event: Option<Event>,
    /// Value written to the RTC this tick
    pub committed: Option<DateTime>,
    pub faults: Vec<HardwareFault, 3>,
}

impl TickReport {
    fn fault(&mut self, fault: HardwareFault) {
        // At most one fault of each kind per tick
        if !self.faults.contains(&fault) {
            let _ = self.faults.push(fault);
        }
    }
}

/// Buttons that enter an adjust mode on a long press, in priority order
const ENTRY_BUTTONS: [(ButtonId, Event); 3] = [
    (ButtonId::A, Event::EditTime),
    (ButtonId::B, Event::EditDate),
    (ButtonId::Y, Event::EditYear),
];

pub struct Controller {
    config: TimerConfig,
    mode: Mode,
    fields: ClockFields,
    buttons: Buttons,
}

impl Controller {
    /// Create a controller in Normal mode
    pub fn new(config: TimerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            mode: Mode::Normal,
            fields: config.initial_clock,
            buttons: Buttons::new(),
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Fields of the current (or last) edit session
    pub fn fields(&self) -> &ClockFields {
        &self.fields
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Run one loop iteration
    ///
    /// `levels` holds the pressed state of A, B, X, Y in that order.
    pub fn tick<R, S>(
        &mut self,
        now_ms: u64,
        levels: [bool; BUTTON_COUNT],
        rtc: &mut R,
        surface: &mut S,
    ) -> TickReport
    where
        R: RealTimeClock,
        S: DrawSurface,
    {
        self.buttons.update(levels, now_ms);

        let mut report = TickReport {
            mode: self.mode,
            event: None,
            committed: None,
            faults: Vec::new(),
        };

        if self.mode.is_adjusting() {
            self.adjust_step(rtc, surface, &mut report);
        } else {
            self.normal_step(now_ms, rtc, surface, &mut report);
        }

        report.mode = self.mode;
        report
    }

    fn normal_step<R, S>(
        &mut self,
        now_ms: u64,
        rtc: &mut R,
        surface: &mut S,
        report: &mut TickReport,
    ) where
        R: RealTimeClock,
        S: DrawSurface,
    {
        let now = rtc.read_now().ok();
        let view = match &now {
            Some(now) => View::live(now, self.config.epoch_anchor),
            None => {
                report.fault(HardwareFault::ClockRead);
                View::ClockUnavailable
            }
        };
        self.draw(&view, surface, report);

        let threshold = self.config.hold_threshold_ms;
        for (id, event) in ENTRY_BUTTONS {
            if !self.buttons.get_mut(id).take_long_press(now_ms, threshold) {
                continue;
            }
            if let Some(now) = &now {
                self.fields = ClockFields::from_datetime(now);
            }
            // The entry hold must not leak into field steps
            self.buttons.get_mut(id).suppress_until_release();
            self.apply(event, report);
            break;
        }
    }

    fn adjust_step<R, S>(&mut self, rtc: &mut R, surface: &mut S, report: &mut TickReport)
    where
        R: RealTimeClock,
        S: DrawSurface,
    {
        let repeat = self.config.repeat;
        let first = self.buttons.get(ButtonId::A).is_active(repeat);
        let second = self.buttons.get(ButtonId::B).is_active(repeat);

        match self.mode {
            Mode::AdjustTime => {
                if first {
                    self.fields.increment_hour();
                }
                if second {
                    self.fields.increment_minute();
                }
            }
            Mode::AdjustDate => {
                if first {
                    self.fields.increment_day();
                }
                if second {
                    self.fields.increment_month();
                }
            }
            Mode::AdjustYear => {
                if first {
                    self.fields.increment_year();
                }
                if second {
                    self.fields.decrement_year();
                }
            }
            Mode::Normal => {}
        }

        if let Some(view) = View::adjust(self.mode, &self.fields) {
            self.draw(&view, surface, report);
        }

        if !self.buttons.get(ButtonId::X).is_active(repeat) {
            return;
        }
        // Fields are the snapshot from entry, so the seconds written are the
        // entry seconds and time spent editing is dropped
        let datetime = self.fields.to_datetime();
        match rtc.write(&datetime) {
            Ok(()) => {
                report.committed = Some(datetime);
                // Buttons still down from the session must not re-enter a mode
                for id in ButtonId::ALL {
                    self.buttons.get_mut(id).suppress_until_release();
                }
                self.apply(Event::Confirm, report);
            }
            // Stay in the adjust mode so the edit survives; X retries
            Err(_) => report.fault(HardwareFault::ClockWrite),
        }
    }

    fn apply(&mut self, event: Event, report: &mut TickReport) {
        let next = self.mode.transition(event);
        if next != self.mode {
            self.mode = next;
            report.event = Some(event);
        }
    }

    fn draw<S: DrawSurface>(&self, view: &View, surface: &mut S, report: &mut TickReport) {
        if render(view, surface).is_err() {
            report.fault(HardwareFault::DisplayWrite);
        }
    }
}
