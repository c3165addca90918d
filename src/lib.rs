//! Zig-Zag Script Transcriber WASM Module
//!
//! Transliterates lowercase Latin text into a constructed script whose
//! glyphs sit on a two-dimensional zig-zag grid. The crate owns the full
//! transcription pipeline (lexer, aligner, embellisher, measurement); the
//! JavaScript side loads the visual templates and draws the returned
//! glyph model.

pub mod api;
pub mod error;
pub mod layout;
pub mod models;
pub mod parse;
pub mod strokes;
pub mod transcribe;

// Re-export commonly used types
pub use models::{Consonant, Direction, Glyph, GlyphModel, GridSize, Phoneme, Slot, Vowel};
pub use transcribe::transcribe;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Script transcriber WASM module initialized");
}
