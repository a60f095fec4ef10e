//! Axis thumb projection

use crate::motion::max_offset;

/// Left position of the axis thumb for the given offset.
///
/// Maps `[0, N - 1]` linearly onto `[0, track_width]`; shelves with one entry
/// or fewer keep the thumb at 0.
pub fn thumb_position(offset: f32, count: usize, track_width: f32) -> f32 {
    if count <= 1 {
        return 0.0;
    }
    offset / max_offset(count).max(1.0) * track_width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumb_at_ends() {
        assert_eq!(thumb_position(0.0, 5, 400.0), 0.0);
        assert!((thumb_position(4.0, 5, 400.0) - 400.0).abs() < 0.001);
    }

    #[test]
    fn test_thumb_midway() {
        assert!((thumb_position(1.0, 3, 300.0) - 150.0).abs() < 0.001);
    }

    #[test]
    fn test_single_entry_has_no_travel() {
        assert_eq!(thumb_position(0.0, 1, 300.0), 0.0);
        assert_eq!(thumb_position(0.0, 0, 300.0), 0.0);
    }

    #[test]
    fn test_thumb_monotonic() {
        let mut last = -1.0;
        for step in 0..=60 {
            let offset = step as f32 * 0.1;
            let position = thumb_position(offset, 7, 512.0);
            assert!(position >= last);
            last = position;
        }
    }
}
