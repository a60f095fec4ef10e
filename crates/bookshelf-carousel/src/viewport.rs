//! Viewport measurements used for projection

/// Measured sizes the layout depends on
///
/// Resizing only changes what the next projection uses; it never moves the
/// offset or changes the motion state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Width of the axis track in pixels
    pub track_width: f32,
}

impl Viewport {
    /// Create a viewport with the given track width
    pub fn new(track_width: f32) -> Self {
        let mut viewport = Self::default();
        viewport.resize(track_width);
        viewport
    }

    /// Record a new track width (negative or NaN widths clamp to 0)
    pub fn resize(&mut self, track_width: f32) {
        self.track_width = if track_width.is_nan() {
            0.0
        } else {
            track_width.max(0.0)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_is_idempotent() {
        let mut viewport = Viewport::new(320.0);
        viewport.resize(480.0);
        let once = viewport;
        viewport.resize(480.0);
        assert_eq!(viewport, once);
    }

    #[test]
    fn test_negative_width_clamps() {
        let viewport = Viewport::new(-10.0);
        assert_eq!(viewport.track_width, 0.0);
    }
}
