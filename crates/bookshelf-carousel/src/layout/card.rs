//! Per-card transform

use serde::Serialize;
use crate::config::CarouselConfig;

/// Distance below which a card counts as centered
const CENTER_RADIUS: f32 = 0.5;

/// Visual attributes of one card
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardLayout {
    /// Shelf index
    pub index: usize,
    /// Signed distance from the offset (index - offset)
    pub distance: f32,
    /// Horizontal translation (px)
    pub translate_x: f32,
    /// Vertical translation (px)
    pub translate_y: f32,
    /// Uniform scale
    pub scale: f32,
    /// Opacity
    pub opacity: f32,
    /// Stacking order (higher is on top); ranks cards by distance
    pub z_index: i32,
    /// Whether this is the centered card
    pub centered: bool,
}

impl CardLayout {
    /// CSS `transform` value for this card
    pub fn css_transform(&self) -> String {
        format!(
            "translateX({}px) translateY({}px) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}

/// Project one card at `index` for the given offset
///
/// Stacking is relative to the other cards and is filled in by
/// [`stack_by_distance`].
pub(super) fn project_card(index: usize, offset: f32, config: &CarouselConfig) -> CardLayout {
    let distance = index as f32 - offset;
    let reach = distance.abs();

    CardLayout {
        index,
        distance,
        translate_x: distance * config.spacing,
        translate_y: reach * config.lift,
        scale: (1.0 - reach * config.scale_step).max(config.min_scale),
        opacity: (1.0 - reach * config.opacity_step).max(config.min_opacity),
        z_index: 0,
        centered: reach < CENTER_RADIUS,
    }
}

/// Assign stacking order by rank of |distance|
///
/// The nearest card gets `cards.len()`, the farthest gets at least 1. Cards
/// share a value only at exactly equal distance.
pub(super) fn stack_by_distance(cards: &mut [CardLayout]) {
    let mut order: Vec<usize> = (0..cards.len()).collect();
    order.sort_by(|&a, &b| cards[a].distance.abs().total_cmp(&cards[b].distance.abs()));

    let mut z_index = i32::try_from(cards.len()).unwrap_or(i32::MAX);
    let mut previous: Option<f32> = None;
    for (rank, &i) in order.iter().enumerate() {
        let reach = cards[i].distance.abs();
        if previous.map_or(false, |p| p != reach) {
            z_index = i32::try_from(cards.len() - rank).unwrap_or(i32::MAX);
        }
        cards[i].z_index = z_index;
        previous = Some(reach);
    }
}
