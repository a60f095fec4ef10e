//! Auto-advance driver

use crate::motion::advance;
use super::CarouselEngine;

impl CarouselEngine {
    /// Apply one auto-advance tick
    ///
    /// Only the auto-advance driver may write here: ticks that arrive while
    /// idle or dragging are dropped. Returns true if the tick was applied.
    pub fn tick(&mut self) -> bool {
        if !self.state.is_auto_advancing() {
            return false;
        }

        let count = self.shelf.len();
        let next = advance(self.offset.get(), count, self.config.auto_step);
        self.offset.set(next, count);
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::input::DragSource;
    use crate::shelf::BookEntry;
    use super::*;

    fn engine_with(count: usize) -> CarouselEngine {
        let mut engine = CarouselEngine::default();
        engine.extend((0..count).map(|i| BookEntry::new(format!("book {}", i), "author", "")));
        engine
    }

    #[test]
    fn test_tick_advances() {
        let mut engine = engine_with(3);
        assert!(engine.tick());
        assert!((engine.offset() - 0.015).abs() < 0.0001);
    }

    #[test]
    fn test_tick_ignored_while_dragging() {
        let mut engine = engine_with(3);
        engine.pointer_down(DragSource::Surface, 0.0);
        engine.pointer_move(-100.0);
        let offset = engine.offset();
        assert!(!engine.tick());
        assert!((engine.offset() - offset).abs() < f32::EPSILON);
    }

    #[test]
    fn test_tick_ignored_while_idle() {
        let mut engine = CarouselEngine::default();
        assert!(!engine.tick());
    }

    #[test]
    fn test_single_entry_never_moves() {
        let mut engine = engine_with(1);
        for _ in 0..100 {
            engine.tick();
        }
        assert_eq!(engine.offset(), 0.0);
    }
}
