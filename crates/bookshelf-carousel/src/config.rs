//! Carousel tuning constants and configuration

use serde::{Deserialize, Serialize};

/// Horizontal distance between adjacent cards (px)
pub const CARD_SPACING_PX: f32 = 200.0;

/// Vertical drop per index unit away from center (px)
pub const CARD_LIFT_PX: f32 = 12.0;

/// Scale lost per index unit away from center
pub const SCALE_STEP: f32 = 0.15;

/// Smallest card scale
pub const MIN_SCALE: f32 = 0.6;

/// Opacity lost per index unit away from center
pub const OPACITY_STEP: f32 = 0.25;

/// Smallest card opacity
pub const MIN_OPACITY: f32 = 0.3;

/// Pixels of horizontal pointer travel per index unit
pub const DRAG_SENSITIVITY_PX: f32 = 200.0;

/// Auto-advance tick interval in milliseconds
pub const AUTO_ADVANCE_INTERVAL_MS: u32 = 30;

/// Offset added on each auto-advance tick
pub const AUTO_ADVANCE_STEP: f32 = 0.015;

/// Carousel configuration
///
/// Every field falls back to its constant when omitted from JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    /// Horizontal distance between adjacent cards (px)
    pub spacing: f32,
    /// Vertical drop per index unit away from center (px)
    pub lift: f32,
    /// Scale lost per index unit away from center
    pub scale_step: f32,
    /// Smallest card scale
    pub min_scale: f32,
    /// Opacity lost per index unit away from center
    pub opacity_step: f32,
    /// Smallest card opacity
    pub min_opacity: f32,
    /// Pointer pixels per index unit while dragging
    pub drag_sensitivity: f32,
    /// Auto-advance tick interval (ms)
    pub tick_interval_ms: u32,
    /// Offset added per auto-advance tick
    pub auto_step: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            spacing: CARD_SPACING_PX,
            lift: CARD_LIFT_PX,
            scale_step: SCALE_STEP,
            min_scale: MIN_SCALE,
            opacity_step: OPACITY_STEP,
            min_opacity: MIN_OPACITY,
            drag_sensitivity: DRAG_SENSITIVITY_PX,
            tick_interval_ms: AUTO_ADVANCE_INTERVAL_MS,
            auto_step: AUTO_ADVANCE_STEP,
        }
    }
}
