//! Pointer input types
//!
//! Drag anchors and the result type returned by pointer handlers.

mod drag;
mod result;

pub use drag::{DragAnchor, DragSource};
pub use result::InputResult;

/// Map horizontal pointer travel to an offset delta.
///
/// Dragging the strip to the left (negative `dx`) advances the index.
#[inline]
pub fn drag_delta(dx: f32, sensitivity: f32) -> f32 {
    if sensitivity <= 0.0 {
        return 0.0;
    }
    -dx / sensitivity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_left_advances() {
        assert!((drag_delta(-200.0, 200.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_drag_right_rewinds() {
        assert!((drag_delta(100.0, 200.0) - (-0.5)).abs() < 0.001);
    }

    #[test]
    fn test_zero_sensitivity_is_inert() {
        assert_eq!(drag_delta(-500.0, 0.0), 0.0);
    }
}
