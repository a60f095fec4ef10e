//! Clamped carousel offset

/// Largest valid offset for a shelf of `count` entries
#[inline]
pub fn max_offset(count: usize) -> f32 {
    count.saturating_sub(1) as f32
}

/// Fractional index into the shelf
///
/// Always within `[0, max(0, N - 1)]` after any write through [`set`](Self::set)
/// or [`clamp_to`](Self::clamp_to).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CarouselOffset {
    value: f32,
}

impl CarouselOffset {
    /// Offset at the first entry
    pub const ZERO: CarouselOffset = CarouselOffset { value: 0.0 };

    /// Current value
    #[inline]
    pub fn get(&self) -> f32 {
        self.value
    }

    /// Write a new value clamped to the shelf range
    pub fn set(&mut self, value: f32, count: usize) {
        self.value = Self::clamped(value, count);
    }

    /// Re-clamp the current value after the shelf size changed
    pub fn clamp_to(&mut self, count: usize) {
        self.value = Self::clamped(self.value, count);
    }

    fn clamped(value: f32, count: usize) -> f32 {
        if value.is_nan() {
            return 0.0;
        }
        value.clamp(0.0, max_offset(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_offset() {
        assert_eq!(max_offset(0), 0.0);
        assert_eq!(max_offset(1), 0.0);
        assert_eq!(max_offset(5), 4.0);
    }

    #[test]
    fn test_set_clamps_both_ends() {
        let mut offset = CarouselOffset::ZERO;
        offset.set(-3.0, 4);
        assert_eq!(offset.get(), 0.0);
        offset.set(9.5, 4);
        assert_eq!(offset.get(), 3.0);
        offset.set(1.75, 4);
        assert!((offset.get() - 1.75).abs() < 0.001);
    }

    #[test]
    fn test_empty_shelf_pins_to_zero() {
        let mut offset = CarouselOffset::ZERO;
        offset.set(2.0, 0);
        assert_eq!(offset.get(), 0.0);
    }

    #[test]
    fn test_growing_shelf_does_not_move_offset() {
        let mut offset = CarouselOffset::ZERO;
        offset.set(1.5, 3);
        offset.clamp_to(10);
        assert!((offset.get() - 1.5).abs() < 0.001);
    }

    #[test]
    fn test_nan_collapses_to_zero() {
        let mut offset = CarouselOffset::ZERO;
        offset.set(f32::NAN, 3);
        assert_eq!(offset.get(), 0.0);
    }
}
