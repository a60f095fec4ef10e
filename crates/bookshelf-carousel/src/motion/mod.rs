//! Carousel motion model
//!
//! The carousel position is a single fractional index (the offset). Two
//! drivers may write it: the auto-advance timer and a manual pointer drag.
//! [`MotionState`] decides which one currently owns the offset, and every
//! transition reports a [`TimerCommand`] so the host can start or cancel its
//! periodic task before the other driver writes.

mod auto;
mod offset;
mod state;

pub use auto::advance;
pub use offset::{max_offset, CarouselOffset};
pub use state::{MotionDriver, MotionState};

use serde::Serialize;

/// Side effect a motion transition requests on the auto-advance task
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerCommand {
    /// Leave the task as it is
    Keep,
    /// Start the periodic task (no-op if already running)
    Start,
    /// Cancel the periodic task
    Cancel,
}
