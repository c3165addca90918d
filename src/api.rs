//! WASM API for the transcriber
//!
//! The JavaScript-facing surface: transcription entry points plus the
//! stroke-name vocabulary export the renderer keys its templates on.
//! Everything crossing the boundary is a serialized value; the renderer
//! owns the returned model outright.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::error::TranscribeError;
use crate::strokes::{strokes_for, Stroke, STRUCTURAL_NAMES, VOWEL_STROKE_NAMES};
use crate::transcribe;

/// Transcribe text and return the full glyph model (glyphs + grid size)
#[wasm_bindgen(js_name = transcribe)]
pub fn transcribe_js(text: &str) -> Result<JsValue, JsValue> {
    log::debug!("api: transcribe, {} chars", text.chars().count());
    let model = transcribe::transcribe(text);
    serde_wasm_bindgen::to_value(&model)
        .map_err(|e| TranscribeError::Serialization(e.to_string()).into())
}

/// Transcribe text and return just the glyph array
#[wasm_bindgen(js_name = transcribeToGlyphs)]
pub fn transcribe_to_glyphs(text: &str) -> Result<js_sys::Array, JsValue> {
    let model = transcribe::transcribe(text);

    let result = js_sys::Array::new();
    for glyph in &model.glyphs {
        let glyph_js = serde_wasm_bindgen::to_value(glyph)
            .map_err(|e| TranscribeError::Serialization(e.to_string()))?;
        result.push(&glyph_js);
    }

    Ok(result)
}

/// Stroke-name configuration exported to the renderer
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StrokeVocabulary {
    /// Every consonant feature stroke name a hub can resolve to
    pub features: Vec<String>,

    /// Every vowel stroke name the template set defines
    pub vowels: Vec<String>,

    /// Structural field names to skip silently when no template matches
    pub structural: Vec<String>,
}

/// Export the complete stroke-name vocabulary.
///
/// This is the single source of truth for the renderer's template keys: a
/// resolved stroke name outside `features` and `vowels` is worth a
/// warning, unless it appears in `structural`.
#[wasm_bindgen(js_name = strokeVocabulary)]
pub fn stroke_vocabulary() -> Result<JsValue, JsValue> {
    let features = [
        Stroke::Labial,
        Stroke::Dental,
        Stroke::Alveolar,
        Stroke::Palatal,
        Stroke::Plosive,
        Stroke::PlosiveUnvoiced,
        Stroke::Fricative,
        Stroke::FricativeUnvoiced,
        Stroke::L,
        Stroke::R,
        Stroke::W,
        Stroke::Y,
    ]
    .iter()
    .map(|s| s.name().to_string())
    .collect();

    let mut vowels: Vec<String> = VOWEL_STROKE_NAMES.iter().cloned().collect();
    vowels.sort();

    let vocabulary = StrokeVocabulary {
        features,
        vowels,
        structural: STRUCTURAL_NAMES.iter().map(|s| s.to_string()).collect(),
    };
    serde_wasm_bindgen::to_value(&vocabulary)
        .map_err(|e| TranscribeError::Serialization(e.to_string()).into())
}

/// Feature stroke names for a hub consonant, exactly as the renderer
/// will receive them
pub fn feature_names_for(center: crate::models::Consonant) -> Vec<&'static str> {
    strokes_for(center).iter().map(|s| s.name()).collect()
}
