//! Static stroke tables for the script
//!
//! Read-only constants shared by every transcription call: the consonant
//! feature table and the vowel stroke-name vocabulary the templates were
//! authored against.

pub mod features;
pub mod vocabulary;

// Re-export commonly used items
pub use features::{is_dental, is_palatal, strokes_for, Stroke};
pub use vocabulary::{
    combined_name, is_structural_name, knows, openness, simple_name, Openness,
    STRUCTURAL_NAMES, VOWEL_STROKE_NAMES,
};
