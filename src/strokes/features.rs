//! Consonant feature strokes
//!
//! Every consonant hub is drawn as a combination of named feature strokes:
//! a place stroke (labial, dental, alveolar, palatal), a manner stroke
//! (plosive/fricative, with unvoiced variants), or a bespoke stroke for the
//! liquids and glides. The renderer keys its visual templates on these
//! exact names, so the table here is the single source of truth.

use serde::{Deserialize, Serialize};

use crate::models::Consonant;

/// A named feature stroke of a consonant hub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stroke {
    Labial,
    Dental,
    Alveolar,
    Palatal,
    Plosive,
    PlosiveUnvoiced,
    Fricative,
    FricativeUnvoiced,
    L,
    R,
    W,
    Y,
}

impl Stroke {
    /// Template key for this stroke
    pub fn name(&self) -> &'static str {
        match self {
            Stroke::Labial => "labial",
            Stroke::Dental => "dental",
            Stroke::Alveolar => "alveolar",
            Stroke::Palatal => "palatal",
            Stroke::Plosive => "plosive",
            Stroke::PlosiveUnvoiced => "plosive-unvoiced",
            Stroke::Fricative => "fricative",
            Stroke::FricativeUnvoiced => "fricative-unvoiced",
            Stroke::L => "l",
            Stroke::R => "r",
            Stroke::W => "w",
            Stroke::Y => "y",
        }
    }
}

/// Feature decomposition of a consonant hub.
///
/// Affricates carry both a place stroke and the plosive manner; the
/// palato-alveolars (`dj`, `ch`, `j`, `sh`) carry two place strokes.
pub fn strokes_for(c: Consonant) -> &'static [Stroke] {
    use Stroke::*;
    match c {
        Consonant::M => &[Labial],
        Consonant::N => &[Dental],
        Consonant::Ng => &[Palatal],
        Consonant::B => &[Labial, Plosive],
        Consonant::P => &[Labial, PlosiveUnvoiced],
        Consonant::V => &[Labial, Fricative],
        Consonant::F => &[Labial, FricativeUnvoiced],
        Consonant::D => &[Dental, Plosive],
        Consonant::T => &[Dental, PlosiveUnvoiced],
        Consonant::Dh => &[Dental, Fricative],
        Consonant::Th => &[Dental, FricativeUnvoiced],
        Consonant::G => &[Palatal, Plosive],
        Consonant::K => &[Palatal, PlosiveUnvoiced],
        Consonant::Gh => &[Palatal, Fricative],
        Consonant::Kh => &[Palatal, FricativeUnvoiced],
        Consonant::Z => &[Alveolar, Fricative],
        Consonant::S => &[Alveolar, FricativeUnvoiced],
        Consonant::Dz => &[Alveolar, Plosive],
        Consonant::Ts => &[Alveolar, PlosiveUnvoiced],
        Consonant::Dj => &[Alveolar, Palatal, Plosive],
        Consonant::Ch => &[Alveolar, Palatal, PlosiveUnvoiced],
        Consonant::J => &[Alveolar, Palatal, Fricative],
        Consonant::Sh => &[Alveolar, Palatal, FricativeUnvoiced],
        Consonant::L => &[L],
        Consonant::R => &[R],
        Consonant::W => &[W],
        Consonant::Y => &[Y],
    }
}

/// Whether the consonant carries the dental place stroke.
/// Drives the left-side (west/north) openness of its vowel attachments.
pub fn is_dental(c: Consonant) -> bool {
    strokes_for(c).contains(&Stroke::Dental)
}

/// Whether the consonant carries the palatal place stroke.
/// Drives the right-side (east/south) openness of its vowel attachments.
pub fn is_palatal(c: Consonant) -> bool {
    strokes_for(c).contains(&Stroke::Palatal)
}
