//! Drag anchor captured at pointer-down

use serde::Serialize;

/// Element the drag started on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DragSource {
    /// The carousel strip itself
    Surface,
    /// The axis thumb below the strip
    Thumb,
}

/// Pointer position and offset recorded when a drag starts
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragAnchor {
    /// Where the drag started
    pub source: DragSource,
    /// Pointer x at drag start (client px)
    pub start_x: f32,
    /// Carousel offset at drag start
    pub start_offset: f32,
}

impl DragAnchor {
    /// Create a new anchor
    pub fn new(source: DragSource, start_x: f32, start_offset: f32) -> Self {
        Self {
            source,
            start_x,
            start_offset,
        }
    }

    /// Horizontal travel since drag start
    #[inline]
    pub fn travel(&self, x: f32) -> f32 {
        x - self.start_x
    }
}
