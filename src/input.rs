//! Press gesture tracking
//!
//! Disambiguates short presses from long presses. Every screen shares this
//! one state machine instead of re-implementing the timer dance. The caller
//! owns the actual timer: start it when `press_down` asks for it, cancel it
//! when `release` fires the short action.

/// Gesture tracker state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PressState {
    #[default]
    Idle,
    /// Finger down, long-press timer running
    Pressing,
    /// Timer elapsed and the long action already fired
    LongFired,
}

/// Action to dispatch for a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressAction {
    Short,
    Long,
}

/// Short/long press state machine
#[derive(Debug, Default)]
pub struct PressTracker {
    state: PressState,
}

impl PressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PressState {
        self.state
    }

    /// Finger down. Returns true when the caller must start the long-press
    /// timer; a press while already tracking is ignored.
    pub fn press_down(&mut self) -> bool {
        match self.state {
            PressState::Idle => {
                self.state = PressState::Pressing;
                true
            }
            _ => false,
        }
    }

    /// Long-press timer elapsed. Fires the long action exactly once.
    pub fn timer_elapsed(&mut self) -> Option<PressAction> {
        match self.state {
            PressState::Pressing => {
                self.state = PressState::LongFired;
                Some(PressAction::Long)
            }
            _ => None,
        }
    }

    /// Finger up. A release before the timer fires is a short press and the
    /// caller cancels the timer; after the long action it is a no-op.
    pub fn release(&mut self) -> Option<PressAction> {
        match self.state {
            PressState::Pressing => {
                self.state = PressState::Idle;
                Some(PressAction::Short)
            }
            PressState::LongFired => {
                self.state = PressState::Idle;
                None
            }
            PressState::Idle => None,
        }
    }
}
