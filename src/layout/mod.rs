//! Layout engine for the zig-zag grid
//!
//! This module turns the phoneme stream into positioned, fully resolved
//! glyphs: the aligner places slots on the grid, the embellisher resolves
//! stroke names, and the size pass measures the result.

pub mod aligner;
pub mod embellish;
pub mod size;

// Re-export commonly used items
pub use aligner::{align, Aligner, PLACEHOLDER_CONSONANT, PLACEHOLDER_VOWEL};
pub use embellish::embellish;
pub use size::measure;
