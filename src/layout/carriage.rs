//! Carriage and paper positioning
//!
//! The carriage slides left as the column grows and snaps back on a
//! return; the paper climbs one line height per line. Both are derived
//! from the caret rather than accumulated per keystroke, so they can
//! never drift from the buffer.

use serde::{Deserialize, Serialize};

use super::config::LayoutConfig;
use crate::models::Pos;

/// Scroll range limit in pixels, either direction.
const SCROLL_LIMIT: f32 = 500.0;

/// Wheel delta damping factor.
const SCROLL_FACTOR: f32 = 0.5;

/// Pixel offsets for the carriage/paper animation layer.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CarriagePosition {
    /// Horizontal carriage offset: rest position minus one character
    /// width per column typed.
    pub carriage_x: f32,

    /// Vertical paper offset: one line height per line.
    pub paper_y: f32,
}

/// Compute carriage and paper offsets for a caret position.
pub fn carriage_position(caret: Pos, config: &LayoutConfig) -> CarriagePosition {
    CarriagePosition {
        carriage_x: config.initial_carriage_offset - caret.col as f32 * config.char_width,
        paper_y: caret.line as f32 * config.line_height,
    }
}

/// Bounded paper-scroll state for the read-back gesture.
///
/// Scrolling is independent of the buffer: the user may wheel up to read
/// the top of the page, and the offset snaps back to zero on the next
/// buffer mutation.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct PaperScroll {
    offset: f32,
}

impl PaperScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a wheel delta, damped and clamped to the scroll range.
    /// Returns the new offset.
    pub fn apply_wheel(&mut self, delta_y: f32) -> f32 {
        self.offset = (self.offset + delta_y * SCROLL_FACTOR).clamp(-SCROLL_LIMIT, SCROLL_LIMIT);
        self.offset
    }

    /// Snap back to the typing position.
    pub fn reset(&mut self) {
        self.offset = 0.0;
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carriage_slides_left_per_column() {
        let config = LayoutConfig::default();

        let rest = carriage_position(Pos::zero(), &config);
        assert_eq!(rest.carriage_x, 100.0);
        assert_eq!(rest.paper_y, 0.0);

        let typed = carriage_position(Pos::new(0, 3), &config);
        assert_eq!(typed.carriage_x, 100.0 - 3.0 * 12.0);
    }

    #[test]
    fn test_paper_climbs_per_line() {
        let config = LayoutConfig::default();
        let pos = carriage_position(Pos::new(2, 0), &config);
        assert_eq!(pos.paper_y, 48.0);
        // carriage snapped back to rest after the return
        assert_eq!(pos.carriage_x, 100.0);
    }

    #[test]
    fn test_scroll_damped_and_clamped() {
        let mut scroll = PaperScroll::new();
        assert_eq!(scroll.apply_wheel(100.0), 50.0);
        assert_eq!(scroll.apply_wheel(-300.0), -100.0);

        for _ in 0..20 {
            scroll.apply_wheel(-200.0);
        }
        assert_eq!(scroll.offset(), -500.0);

        for _ in 0..50 {
            scroll.apply_wheel(400.0);
        }
        assert_eq!(scroll.offset(), 500.0);
    }

    #[test]
    fn test_scroll_reset() {
        let mut scroll = PaperScroll::new();
        scroll.apply_wheel(80.0);
        scroll.reset();
        assert_eq!(scroll.offset(), 0.0);
    }
}
