//! Auto-advance step

use super::offset::max_offset;

/// Compute the offset after one auto-advance tick.
///
/// The offset moves forward by `step`, clamped to the shelf range. Reaching
/// the last entry resets to 0 rather than looping smoothly. Shelves with one
/// entry or fewer never move.
pub fn advance(offset: f32, count: usize, step: f32) -> f32 {
    if count <= 1 {
        return offset;
    }

    let last = max_offset(count);
    let next = (offset + step).clamp(0.0, last);
    if next >= last {
        0.0
    } else {
        next
    }
}
