//! Carousel engine coordinating shelf, offset and drivers
//!
//! This module is split into focused submodules:
//! - `input`: Pointer handling and drag transitions
//! - `ticks`: Auto-advance driver
//! - `rendering`: Frame projection

mod input;
mod rendering;
mod ticks;

use crate::config::CarouselConfig;
use crate::motion::{CarouselOffset, MotionDriver, MotionState, TimerCommand};
use crate::shelf::{BookEntry, Shelf};
use crate::viewport::Viewport;

/// Carousel engine owning the shelf and the single carousel offset
///
/// This is the main entry point for carousel operations, managing:
/// - Shelf store (append-only book list)
/// - Carousel offset (clamped fractional index)
/// - Motion state (which driver may write the offset)
/// - Viewport measurements for the axis thumb
///
/// Methods that change the motion state return a [`TimerCommand`] (directly
/// or inside an [`InputResult`](crate::InputResult)); the host applies it to
/// its periodic task.
#[derive(Clone, Debug)]
pub struct CarouselEngine {
    /// Tuning constants
    config: CarouselConfig,
    /// Book list
    shelf: Shelf,
    /// Current position
    offset: CarouselOffset,
    /// Offset ownership
    state: MotionState,
    /// Measured sizes
    viewport: Viewport,
}

impl Default for CarouselEngine {
    fn default() -> Self {
        Self::new(CarouselConfig::default())
    }
}

impl CarouselEngine {
    /// Create an engine with an empty shelf
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            shelf: Shelf::new(),
            offset: CarouselOffset::ZERO,
            state: MotionState::Idle,
            viewport: Viewport::default(),
        }
    }

    /// Configuration in use
    #[inline]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Read-only shelf
    #[inline]
    pub fn shelf(&self) -> &Shelf {
        &self.shelf
    }

    /// Current offset
    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset.get()
    }

    /// Current driver
    #[inline]
    pub fn driver(&self) -> MotionDriver {
        self.state.driver()
    }

    /// Current viewport
    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Append an entry to the shelf
    ///
    /// Re-clamps the offset against the new size. The first entry moves an
    /// idle engine into auto-advance.
    pub fn append(&mut self, entry: BookEntry) -> TimerCommand {
        self.shelf.append(entry);
        self.after_shelf_change()
    }

    /// Append entries in order
    pub fn extend<I>(&mut self, entries: I) -> TimerCommand
    where
        I: IntoIterator<Item = BookEntry>,
    {
        self.shelf.extend(entries);
        self.after_shelf_change()
    }

    /// Record a new axis track width
    ///
    /// Affects projection only; offset and state are untouched.
    pub fn resize(&mut self, track_width: f32) {
        self.viewport.resize(track_width);
    }

    fn after_shelf_change(&mut self) -> TimerCommand {
        let count = self.shelf.len();
        self.offset.clamp_to(count);
        if count == 0 {
            return TimerCommand::Keep;
        }
        self.state.on_shelf_filled()
    }
}
