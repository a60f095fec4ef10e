//! Layout projection
//!
//! Converts the offset and shelf size into per-card visual attributes and an
//! axis-thumb position. Nothing here touches a rendering target.

mod axis;
mod card;

pub use axis::thumb_position;
pub use card::CardLayout;

use card::{project_card, stack_by_distance};

use serde::Serialize;
use crate::config::CarouselConfig;

/// Everything a renderer needs for one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// Offset the frame was projected from
    pub offset: f32,
    /// One layout per shelf entry, in shelf order
    pub cards: Vec<CardLayout>,
    /// Axis thumb left position (px)
    pub thumb_position: f32,
}

impl Frame {
    /// Index of the centered card, if one is within half a slot
    pub fn centered_index(&self) -> Option<usize> {
        self.cards.iter().find(|c| c.centered).map(|c| c.index)
    }
}

/// Project every card for the given offset
pub fn project_cards(offset: f32, count: usize, config: &CarouselConfig) -> Vec<CardLayout> {
    let mut cards: Vec<CardLayout> = (0..count)
        .map(|index| project_card(index, offset, config))
        .collect();
    stack_by_distance(&mut cards);
    cards
}
