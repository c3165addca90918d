//! Models module for the script transcriber
//!
//! This module contains the data model threaded through the pipeline:
//! phoneme events, grid slots, and the renderer-facing glyph model.

pub mod glyph;
pub mod phoneme;
pub mod slot;

// Re-export commonly used types
pub use glyph::{Glyph, GlyphModel, GridSize};
pub use phoneme::{Consonant, Phoneme, Vowel};
pub use slot::{Direction, Slot};
