//! Transcription façade
//!
//! Orchestrates the pipeline: lex the characters into phonemes, align the
//! phonemes into grid slots, embellish the slots into resolved glyphs,
//! and measure the extent. Each call builds fresh lexer and aligner state
//! and returns an independent `GlyphModel`; nothing is shared between
//! calls except the read-only stroke tables.

use crate::layout::{align, embellish, measure};
use crate::models::GlyphModel;
use crate::parse::lex;

/// Transcribe lowercase text into the renderer-facing glyph model.
///
/// The caller is responsible for case normalization and trimming.
/// Malformed input never fails: unexpected characters surface as
/// diagnostic messages on the glyph that was open when they appeared.
pub fn transcribe(text: &str) -> GlyphModel {
    let phonemes = lex(text);
    let slots = align(&phonemes);
    let glyphs = embellish(slots);
    let size = measure(&glyphs);
    log::debug!(
        "transcribe: {} glyphs, {}x{} grid",
        glyphs.len(),
        size.x,
        size.y
    );
    GlyphModel { glyphs, size }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_only_is_empty_unit_model() {
        let model = transcribe(" \n \t ");
        assert!(model.glyphs.is_empty());
        assert_eq!((model.size.x, model.size.y), (1, 1));
    }

    #[test]
    fn test_size_tracks_emitted_glyphs() {
        let model = transcribe("manam");
        let max_x = model.glyphs.iter().map(|g| g.x).max().unwrap();
        let max_y = model.glyphs.iter().map(|g| g.y).max().unwrap();
        assert_eq!(model.size.x, max_x + 1);
        assert_eq!(model.size.y, max_y + 1);
    }
}
