//! Frame projection

use crate::layout::{project_cards, thumb_position, CardLayout, Frame};
use super::CarouselEngine;

impl CarouselEngine {
    /// Per-card layout for the current offset
    pub fn card_layouts(&self) -> Vec<CardLayout> {
        project_cards(self.offset.get(), self.shelf.len(), &self.config)
    }

    /// Axis thumb position for the current offset and track width
    pub fn thumb_position(&self) -> f32 {
        thumb_position(self.offset.get(), self.shelf.len(), self.viewport.track_width)
    }

    /// Full frame for the renderer
    pub fn frame(&self) -> Frame {
        Frame {
            offset: self.offset.get(),
            cards: self.card_layouts(),
            thumb_position: self.thumb_position(),
        }
    }
}
