//! Renderer-facing output model
//!
//! This module defines the display list handed to the JavaScript renderer:
//! one `GlyphModel` per transcription call, owned exclusively by the caller.
//! The renderer maps each stroke name to a visual template keyed by that
//! exact string and positions it at `(x, y)` scaled by a fixed stride.

use serde::{Deserialize, Serialize};

use super::phoneme::Consonant;
use super::slot::Slot;

/// A fully resolved glyph: a non-empty slot plus its resolved stroke names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    /// Column index on the zig-zag grid
    pub x: usize,

    /// Row index on the zig-zag grid
    pub y: usize,

    /// The hub consonant this glyph was resolved from, if any
    pub center: Option<Consonant>,

    /// Resolved stroke names: the hub's feature strokes followed by one
    /// name per populated vowel attachment
    pub strokes: Vec<String>,

    /// Diagnostic messages carried over from the slot
    pub errors: Vec<String>,
}

impl Glyph {
    /// Start a glyph from a finalized slot, strokes still unresolved
    pub fn from_slot(slot: &Slot) -> Self {
        Self {
            x: slot.x,
            y: slot.y,
            center: slot.center,
            strokes: Vec::new(),
            errors: slot.errors.clone(),
        }
    }
}

/// Bounding extent of a glyph sequence, in grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    /// Columns: `max(x) + 1` over all glyphs, minimum 1
    pub x: usize,

    /// Rows: `max(y) + 1` over all glyphs, minimum 1
    pub y: usize,
}

/// The complete handoff surface to the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphModel {
    /// Resolved glyphs in emission order
    pub glyphs: Vec<Glyph>,

    /// Grid extent of the layout
    pub size: GridSize,
}
