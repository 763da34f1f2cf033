//! Mode-button state machine.
//!
//! The button line is active-low with a pull-up. The hardware edge only
//! records that a press may have started; debounce timing, the confirming
//! re-sample, and release tracking all happen in a scheduled task outside
//! the time-critical path. This keeps the handler attached to the edge
//! short and leaves the periodic display scan's latency budget intact.

/// Debounce window after a falling edge, in milliseconds
pub const DEBOUNCE_MS: u64 = 20;

/// Poll interval while waiting for the button to be released
pub const RELEASE_POLL_MS: u64 = 1;

/// Sampled level of the button line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineLevel {
    /// Line pulled to ground (button held)
    Low,
    /// Line at the pull-up level (button released)
    High,
}

/// Button handler states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Waiting for a falling edge
    Idle,
    /// Edge observed, debounce window running
    Debouncing,
    /// Press confirmed and acted on, waiting for release
    WaitRelease,
}

/// Action produced by a confirmed press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonAction {
    /// Advance the measurement mode to its cyclic successor
    AdvanceMode,
}

/// Debounced, edge-triggered mode button
#[derive(Debug, Clone)]
pub struct ModeButton {
    state: ButtonState,
}

impl ModeButton {
    /// Create a button handler in the idle state
    pub const fn new() -> Self {
        Self {
            state: ButtonState::Idle,
        }
    }

    /// Current handler state
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// A falling edge was observed
    ///
    /// Returns true when the edge arms the debounce window. Edges arriving
    /// while a press is already being handled are ignored.
    pub fn edge(&mut self) -> bool {
        match self.state {
            ButtonState::Idle => {
                self.state = ButtonState::Debouncing;
                true
            }
            ButtonState::Debouncing | ButtonState::WaitRelease => false,
        }
    }

    /// The line level re-sampled at the end of the debounce window
    ///
    /// A line still low confirms the press; a line back high was noise and
    /// the handler returns to idle with no state change anywhere.
    pub fn debounce_sample(&mut self, level: LineLevel) -> Option<ButtonAction> {
        if self.state != ButtonState::Debouncing {
            return None;
        }

        match level {
            LineLevel::Low => {
                self.state = ButtonState::WaitRelease;
                Some(ButtonAction::AdvanceMode)
            }
            LineLevel::High => {
                self.state = ButtonState::Idle;
                None
            }
        }
    }

    /// The line level sampled while waiting for release
    ///
    /// Returns true once the handler is back in the idle state.
    pub fn release_sample(&mut self, level: LineLevel) -> bool {
        if self.state == ButtonState::WaitRelease && level == LineLevel::High {
            self.state = ButtonState::Idle;
        }
        self.state == ButtonState::Idle
    }
}

impl Default for ModeButton {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmed_press() {
        let mut button = ModeButton::new();

        assert!(button.edge());
        assert_eq!(button.state(), ButtonState::Debouncing);

        // Still held at the end of the debounce window
        assert_eq!(
            button.debounce_sample(LineLevel::Low),
            Some(ButtonAction::AdvanceMode)
        );
        assert_eq!(button.state(), ButtonState::WaitRelease);

        // Held for a few more polls, then released
        assert!(!button.release_sample(LineLevel::Low));
        assert!(!button.release_sample(LineLevel::Low));
        assert!(button.release_sample(LineLevel::High));
        assert_eq!(button.state(), ButtonState::Idle);
    }

    #[test]
    fn test_pulse_shorter_than_debounce_is_ignored() {
        let mut button = ModeButton::new();

        // Edge fires, but the line is back high by the debounce sample
        assert!(button.edge());
        assert_eq!(button.debounce_sample(LineLevel::High), None);

        // No action was produced and the handler is idle again
        assert_eq!(button.state(), ButtonState::Idle);
    }

    #[test]
    fn test_edges_ignored_while_handling() {
        let mut button = ModeButton::new();

        assert!(button.edge());
        // Chatter during the debounce window does not re-arm anything
        assert!(!button.edge());

        button.debounce_sample(LineLevel::Low);
        // Nor do edges while waiting for release
        assert!(!button.edge());
    }

    #[test]
    fn test_samples_outside_their_state_are_inert() {
        let mut button = ModeButton::new();

        assert_eq!(button.debounce_sample(LineLevel::Low), None);
        assert!(button.release_sample(LineLevel::High));
        assert_eq!(button.state(), ButtonState::Idle);
    }
}
