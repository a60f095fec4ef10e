//! Carousel core for the Bookshelf widget
//!
//! This crate provides the state behind the shelf carousel:
//! - Shelf store (append-only list of book entries)
//! - Continuous carousel offset with clamping
//! - Motion state machine (idle, auto-advance, manual drag)
//! - Per-card layout projection and axis-thumb mapping
//!
//! ## Architecture
//!
//! - [`shelf`]: Book entries and the shelf store
//! - [`motion`]: Offset model, motion state machine, auto-advance step
//! - [`input`]: Drag anchors and input results
//! - [`layout`]: Card transforms and axis-thumb projection
//! - [`config`]: Tunable constants
//!
//! ## Example
//!
//! ```rust
//! use bookshelf_carousel::{BookEntry, CarouselEngine, DragSource, TimerCommand};
//!
//! let mut engine = CarouselEngine::default();
//! let command = engine.append(BookEntry::new("活着", "余华", ""));
//! assert_eq!(command, TimerCommand::Start);
//!
//! engine.append(BookEntry::new("小王子", "圣埃克苏佩里", ""));
//! engine.pointer_down(DragSource::Surface, 400.0);
//! engine.pointer_move(300.0);
//! assert!((engine.offset() - 0.5).abs() < 0.001);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: no browser dependency; the host applies timer commands
//! 2. **Explicit Guards**: only the driver that owns the offset may write it
//! 3. **Pure Layout**: card transforms are a function of offset and count

pub mod config;
pub mod input;
pub mod layout;
pub mod motion;
pub mod shelf;

mod engine;
mod viewport;

pub use config::CarouselConfig;
pub use input::{DragAnchor, DragSource, InputResult};
pub use layout::{project_cards, thumb_position, CardLayout, Frame};
pub use motion::{CarouselOffset, MotionDriver, MotionState, TimerCommand};
pub use shelf::{BookEntry, Shelf};

pub use engine::CarouselEngine;
pub use viewport::Viewport;

/// Auto-advance tick interval in milliseconds
pub use config::AUTO_ADVANCE_INTERVAL_MS;

/// Pixels of horizontal pointer travel per index unit
pub use config::DRAG_SENSITIVITY_PX;
