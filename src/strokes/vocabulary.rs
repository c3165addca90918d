//! Vowel stroke-name vocabulary
//!
//! Vowel attachments resolve to stroke names of the form
//! `<vowel>-<direction>-<openness>` with an optional second openness
//! qualifier when one stroke serves two neighboring hubs
//! (`<vowel>-<direction>-<openness>-<openness>`). The vocabulary below
//! enumerates every name the template set was authored with; the
//! embellisher only emits a combined name when it appears here, otherwise
//! it falls back to the simple form and lets the neighbor resolve its own
//! attachment.

use std::collections::HashSet;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::models::{Consonant, Direction, Vowel};

use super::features::{is_dental, is_palatal};

/// Openness qualifier on a vowel stroke, derived from the owning hub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Openness {
    Inner,
    Outer,
}

impl Openness {
    /// Stroke-name segment for this qualifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Openness::Inner => "inner",
            Openness::Outer => "outer",
        }
    }
}

/// Openness of an attachment as seen from its owning hub.
///
/// West and north resolve from the dental feature, east and south from the
/// palatal feature. The template vocabulary was authored against this exact
/// left/right pairing, so it is preserved as-is rather than split four ways.
pub fn openness(center: Option<Consonant>, dir: Direction) -> Openness {
    let outer = match (center, dir) {
        (Some(c), Direction::West) | (Some(c), Direction::North) => is_dental(c),
        (Some(c), Direction::East) | (Some(c), Direction::South) => is_palatal(c),
        (None, _) => false,
    };
    if outer {
        Openness::Outer
    } else {
        Openness::Inner
    }
}

/// Simple stroke name: `<vowel>-<direction>-<openness>`
pub fn simple_name(v: Vowel, dir: Direction, o: Openness) -> String {
    format!("{}-{}-{}", v.as_str(), dir.as_str(), o.as_str())
}

/// Combined stroke name serving two neighboring hubs:
/// `<vowel>-<direction>-<openness>-<nextOpenness>`
pub fn combined_name(v: Vowel, dir: Direction, o: Openness, next: Openness) -> String {
    format!(
        "{}-{}-{}-{}",
        v.as_str(),
        dir.as_str(),
        o.as_str(),
        next.as_str()
    )
}

/// Structural field names the renderer must skip without warning when it
/// finds no template for them
pub const STRUCTURAL_NAMES: &[&str] = &["north", "south", "east", "west", "center", "empty"];

/// True for names the renderer's missing-template diagnostics should
/// suppress
pub fn is_structural_name(name: &str) -> bool {
    STRUCTURAL_NAMES.contains(&name)
}

const ALL_VOWELS: &[Vowel] = &[
    Vowel::E,
    Vowel::I,
    Vowel::Y,
    Vowel::A,
    Vowel::O,
    Vowel::U,
    Vowel::W,
];

// Glides never fuse with a neighbor's attachment; only the plain vowels
// have combined template variants.
const COMBINING_VOWELS: &[Vowel] = &[Vowel::E, Vowel::I, Vowel::A, Vowel::O, Vowel::U];

const ALL_DIRECTIONS: &[Direction] = &[
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

const OPENNESS: &[Openness] = &[Openness::Inner, Openness::Outer];

lazy_static! {
    /// Every vowel stroke name the template set defines
    pub static ref VOWEL_STROKE_NAMES: HashSet<String> = {
        let mut names = HashSet::new();
        for &v in ALL_VOWELS {
            for &dir in ALL_DIRECTIONS {
                for &o in OPENNESS {
                    names.insert(simple_name(v, dir, o));
                }
            }
        }
        // Combined forms only exist on the trailing sides, where a stroke
        // can reach across to the next hub.
        for &v in COMBINING_VOWELS {
            for &dir in [Direction::South, Direction::East].iter() {
                for &o in OPENNESS {
                    for &next in OPENNESS {
                        names.insert(combined_name(v, dir, o, next));
                    }
                }
            }
        }
        names
    };
}

/// Whether a stroke name exists in the template vocabulary
pub fn knows(name: &str) -> bool {
    VOWEL_STROKE_NAMES.contains(name)
}
