//! Parsing module for the script transcriber
//!
//! This module contains the character-level phoneme lexer that turns the
//! input text into the phoneme event stream.

pub mod lexer;

// Re-export commonly used types
pub use lexer::{lex, Lexer};
