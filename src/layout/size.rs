//! Grid extent measurement
//!
//! Pure reduction over the resolved glyph sequence: the extent is one
//! past the maximum occupied coordinate on each axis, never smaller than
//! one cell. The renderer multiplies this by its stride to size the
//! drawing surface.

use crate::models::{Glyph, GridSize};

/// Compute the bounding extent of a glyph sequence
pub fn measure(glyphs: &[Glyph]) -> GridSize {
    let mut size = GridSize { x: 1, y: 1 };
    for glyph in glyphs {
        size.x = size.x.max(glyph.x + 1);
        size.y = size.y.max(glyph.y + 1);
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph_at(x: usize, y: usize) -> Glyph {
        Glyph {
            x,
            y,
            center: None,
            strokes: Vec::new(),
            errors: Vec::new(),
        }
    }

    #[test]
    fn test_empty_sequence_is_one_by_one() {
        assert_eq!(measure(&[]), GridSize { x: 1, y: 1 });
    }

    #[test]
    fn test_extent_is_one_past_maximum() {
        let glyphs = vec![glyph_at(0, 0), glyph_at(2, 1), glyph_at(1, 3)];
        assert_eq!(measure(&glyphs), GridSize { x: 3, y: 4 });
    }
}
