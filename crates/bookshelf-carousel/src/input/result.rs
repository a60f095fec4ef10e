//! Input result type

use serde::Serialize;
use crate::motion::TimerCommand;

/// Result of pointer handling
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input was consumed by the carousel
    Handled {
        /// What the host must do with its auto-advance task
        timer: TimerCommand,
    },
    /// Input was ignored
    Unhandled,
}

impl InputResult {
    /// Handled without touching the timer
    pub const HANDLED: InputResult = InputResult::Handled {
        timer: TimerCommand::Keep,
    };

    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled { .. })
    }

    /// Timer command carried by this result (`Keep` when unhandled)
    #[inline]
    pub fn timer(&self) -> TimerCommand {
        match self {
            InputResult::Handled { timer } => *timer,
            InputResult::Unhandled => TimerCommand::Keep,
        }
    }
}
