//! Motion state machine

use serde::Serialize;
use crate::input::{DragAnchor, DragSource};
use super::TimerCommand;

/// Which driver currently owns the offset
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum MotionState {
    /// Nothing drives the offset (empty shelf)
    #[default]
    Idle,
    /// The periodic timer advances the offset
    AutoAdvancing,
    /// A pointer drag owns the offset
    ManualDragging(DragAnchor),
}

/// State discriminant without drag details, for reporting
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MotionDriver {
    /// Nothing drives the offset
    Idle,
    /// Timer driven
    AutoAdvancing,
    /// Pointer driven
    ManualDragging,
}

impl MotionDriver {
    /// Stable name used in JSON and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            MotionDriver::Idle => "idle",
            MotionDriver::AutoAdvancing => "autoAdvancing",
            MotionDriver::ManualDragging => "manualDragging",
        }
    }
}

impl MotionState {
    /// Current driver
    pub fn driver(&self) -> MotionDriver {
        match self {
            MotionState::Idle => MotionDriver::Idle,
            MotionState::AutoAdvancing => MotionDriver::AutoAdvancing,
            MotionState::ManualDragging(_) => MotionDriver::ManualDragging,
        }
    }

    /// Check if a drag owns the offset
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, MotionState::ManualDragging(_))
    }

    /// Check if the timer owns the offset
    #[inline]
    pub fn is_auto_advancing(&self) -> bool {
        matches!(self, MotionState::AutoAdvancing)
    }

    /// Active drag anchor, if any
    pub fn anchor(&self) -> Option<&DragAnchor> {
        match self {
            MotionState::ManualDragging(anchor) => Some(anchor),
            _ => None,
        }
    }

    /// Shelf became non-empty
    pub fn on_shelf_filled(&mut self) -> TimerCommand {
        match self {
            MotionState::Idle => {
                *self = MotionState::AutoAdvancing;
                TimerCommand::Start
            }
            _ => TimerCommand::Keep,
        }
    }

    /// Pointer pressed on the strip or thumb
    ///
    /// Leaving auto-advance cancels the timer before the drag can write.
    pub fn begin_drag(&mut self, source: DragSource, x: f32, offset: f32) -> TimerCommand {
        let command = match self {
            MotionState::ManualDragging(_) => TimerCommand::Keep,
            _ => TimerCommand::Cancel,
        };
        *self = MotionState::ManualDragging(DragAnchor::new(source, x, offset));
        command
    }

    /// Pointer released; hand the offset back to the timer
    pub fn end_drag(&mut self) -> Option<TimerCommand> {
        if !self.is_dragging() {
            return None;
        }
        *self = MotionState::AutoAdvancing;
        Some(TimerCommand::Start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_fills_into_auto_advance() {
        let mut state = MotionState::default();
        assert_eq!(state.driver(), MotionDriver::Idle);
        assert_eq!(state.on_shelf_filled(), TimerCommand::Start);
        assert!(state.is_auto_advancing());
        assert_eq!(state.on_shelf_filled(), TimerCommand::Keep);
    }

    #[test]
    fn test_drag_cancels_timer() {
        let mut state = MotionState::AutoAdvancing;
        let command = state.begin_drag(DragSource::Surface, 120.0, 0.4);
        assert_eq!(command, TimerCommand::Cancel);
        assert!(state.is_dragging());

        let anchor = state.anchor().copied().unwrap();
        assert!((anchor.start_x - 120.0).abs() < 0.001);
        assert!((anchor.start_offset - 0.4).abs() < 0.001);
    }

    #[test]
    fn test_redrag_keeps_timer_cancelled() {
        let mut state = MotionState::AutoAdvancing;
        state.begin_drag(DragSource::Surface, 0.0, 0.0);
        let command = state.begin_drag(DragSource::Thumb, 50.0, 1.0);
        assert_eq!(command, TimerCommand::Keep);
        assert_eq!(state.anchor().map(|a| a.source), Some(DragSource::Thumb));
    }

    #[test]
    fn test_end_drag_resumes_auto_advance() {
        let mut state = MotionState::AutoAdvancing;
        state.begin_drag(DragSource::Thumb, 0.0, 0.0);
        assert_eq!(state.end_drag(), Some(TimerCommand::Start));
        assert!(state.is_auto_advancing());
        assert_eq!(state.end_drag(), None);
    }

    #[test]
    fn test_driver_names() {
        assert_eq!(MotionDriver::Idle.as_str(), "idle");
        assert_eq!(MotionDriver::ManualDragging.as_str(), "manualDragging");
        let json = serde_json::to_string(&MotionDriver::AutoAdvancing).unwrap();
        assert_eq!(json, "\"autoAdvancing\"");
    }
}
