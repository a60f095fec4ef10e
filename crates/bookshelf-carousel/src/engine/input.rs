//! Pointer handling for manual drag

use crate::input::{drag_delta, DragSource, InputResult};
use crate::motion::TimerCommand;
use super::CarouselEngine;

impl CarouselEngine {
    /// Handle pointer down on the carousel strip or the axis thumb
    ///
    /// Ignored while the shelf is empty. Otherwise the drag takes ownership of
    /// the offset and the result asks the host to cancel auto-advance.
    pub fn pointer_down(&mut self, source: DragSource, x: f32) -> InputResult {
        if self.shelf.is_empty() {
            return InputResult::Unhandled;
        }

        let timer = self.state.begin_drag(source, x, self.offset.get());
        InputResult::Handled { timer }
    }

    /// Handle pointer move anywhere while dragging
    pub fn pointer_move(&mut self, x: f32) -> InputResult {
        let anchor = match self.state.anchor() {
            Some(anchor) => *anchor,
            None => return InputResult::Unhandled,
        };

        let delta = drag_delta(anchor.travel(x), self.config.drag_sensitivity);
        self.offset.set(anchor.start_offset + delta, self.shelf.len());
        InputResult::HANDLED
    }

    /// Handle pointer up anywhere; resumes auto-advance after a drag
    pub fn pointer_up(&mut self) -> InputResult {
        match self.state.end_drag() {
            Some(timer) => InputResult::Handled { timer },
            None => InputResult::Unhandled,
        }
    }

    /// Abort a drag without moving the offset (browser `pointercancel`)
    ///
    /// Auto-advance resumes from where the drag stopped.
    pub fn cancel_drag(&mut self) -> TimerCommand {
        self.pointer_up().timer()
    }
}
