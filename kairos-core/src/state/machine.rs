//! Mode machine

use super::events::Event;

/// UI modes; exactly one is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Live clock and elapsed duration
    #[default]
    Normal,
    /// Editing hour and minute
    AdjustTime,
    /// Editing month and day
    AdjustDate,
    /// Editing year
    AdjustYear,
}

impl Mode {
    /// Check if an edit session is active
    pub fn is_adjusting(&self) -> bool {
        !matches!(self, Mode::Normal)
    }

    /// Header shown while adjusting
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Mode::Normal => None,
            Mode::AdjustTime => Some("Adjusting Time"),
            Mode::AdjustDate => Some("Adjusting Date"),
            Mode::AdjustYear => Some("Adjusting Year"),
        }
    }

    /// Process an event and return the next mode
    ///
    /// Edit events are only honoured from `Normal` and `Confirm` only from
    /// an adjust mode. There are no direct adjust-to-adjust transitions.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Mode::*;

        match (self, event) {
            (Normal, EditTime) => AdjustTime,
            (Normal, EditDate) => AdjustDate,
            (Normal, EditYear) => AdjustYear,

            (AdjustTime | AdjustDate | AdjustYear, Confirm) => Normal,

            // Default: stay in current mode
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_enters_each_adjust_mode() {
        assert_eq!(Mode::Normal.transition(Event::EditTime), Mode::AdjustTime);
        assert_eq!(Mode::Normal.transition(Event::EditDate), Mode::AdjustDate);
        assert_eq!(Mode::Normal.transition(Event::EditYear), Mode::AdjustYear);
    }

    #[test]
    fn test_confirm_returns_to_normal() {
        for mode in [Mode::AdjustTime, Mode::AdjustDate, Mode::AdjustYear] {
            assert_eq!(mode.transition(Event::Confirm), Mode::Normal);
        }
    }

    #[test]
    fn test_confirm_ignored_in_normal() {
        assert_eq!(Mode::Normal.transition(Event::Confirm), Mode::Normal);
    }

    #[test]
    fn test_no_adjust_to_adjust_transitions() {
        let edits = [Event::EditTime, Event::EditDate, Event::EditYear];
        for mode in [Mode::AdjustTime, Mode::AdjustDate, Mode::AdjustYear] {
            for event in edits {
                assert_eq!(mode.transition(event), mode);
            }
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Mode::Normal.label(), None);
        assert_eq!(Mode::AdjustTime.label(), Some("Adjusting Time"));
        assert_eq!(Mode::AdjustDate.label(), Some("Adjusting Date"));
        assert_eq!(Mode::AdjustYear.label(), Some("Adjusting Year"));
        assert!(!Mode::Normal.is_adjusting());
        assert!(Mode::AdjustYear.is_adjusting());
    }
}
