//! Phoneme events emitted by the lexer
//!
//! This module defines the symbol inventories of the script (consonants,
//! vowels) and the Phoneme event stream that connects the lexer to the
//! aligner. Phonemes are ephemeral: the aligner consumes each one the
//! instant it is produced.

use serde::{Deserialize, Serialize};

/// The consonant inventory of the script.
///
/// Single letters and digraphs share one enum; spelling variants are
/// normalized by the lexer before a `Consonant` is ever emitted
/// (`c` → `K`, `bh` → `V`, `ph` → `F`, `sch` → `Sh`, `x` → `K`+`S`,
/// `q` → `K`+`W`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Consonant {
    M,
    N,
    Ng,
    B,
    P,
    V,
    F,
    D,
    T,
    Dh,
    Th,
    G,
    K,
    Gh,
    Kh,
    Z,
    S,
    Dz,
    Ts,
    Dj,
    Ch,
    J,
    Sh,
    L,
    R,
    W,
    Y,
}

impl Consonant {
    /// Canonical lowercase spelling of this consonant
    pub fn as_str(&self) -> &'static str {
        match self {
            Consonant::M => "m",
            Consonant::N => "n",
            Consonant::Ng => "ng",
            Consonant::B => "b",
            Consonant::P => "p",
            Consonant::V => "v",
            Consonant::F => "f",
            Consonant::D => "d",
            Consonant::T => "t",
            Consonant::Dh => "dh",
            Consonant::Th => "th",
            Consonant::G => "g",
            Consonant::K => "k",
            Consonant::Gh => "gh",
            Consonant::Kh => "kh",
            Consonant::Z => "z",
            Consonant::S => "s",
            Consonant::Dz => "dz",
            Consonant::Ts => "ts",
            Consonant::Dj => "dj",
            Consonant::Ch => "ch",
            Consonant::J => "j",
            Consonant::Sh => "sh",
            Consonant::L => "l",
            Consonant::R => "r",
            Consonant::W => "w",
            Consonant::Y => "y",
        }
    }
}

/// The vowel inventory of the script.
///
/// `W` and `Y` are glides: the lexer treats them as consonants or vowels
/// depending on context (consonant-favoring vs vowel-favoring states).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vowel {
    E,
    I,
    Y,
    A,
    O,
    U,
    W,
}

impl Vowel {
    /// Canonical lowercase spelling of this vowel
    pub fn as_str(&self) -> &'static str {
        match self {
            Vowel::E => "e",
            Vowel::I => "i",
            Vowel::Y => "y",
            Vowel::A => "a",
            Vowel::O => "o",
            Vowel::U => "u",
            Vowel::W => "w",
        }
    }

    /// Map a character to its vowel, if it is one.
    ///
    /// `include_glides` controls whether `w`/`y` count as vowels; the
    /// consonant-favoring lexer state passes `false` for `y`-as-consonant
    /// handling, the diphthong and vowel-favoring states pass `true`.
    pub fn from_char(c: char, include_glides: bool) -> Option<Vowel> {
        match c {
            'e' => Some(Vowel::E),
            'i' => Some(Vowel::I),
            'a' => Some(Vowel::A),
            'o' => Some(Vowel::O),
            'u' => Some(Vowel::U),
            'y' if include_glides => Some(Vowel::Y),
            'w' if include_glides => Some(Vowel::W),
            _ => None,
        }
    }
}

/// One event in the phoneme stream between lexer and aligner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Phoneme {
    /// A consonant unit (single letter or digraph)
    Consonant(Consonant),

    /// A lone vowel
    Vowel(Vowel),

    /// Two adjacent vowels fused into one event
    Diphthong(Vowel, Vowel),

    /// Word separator
    Space,

    /// Line separator
    Newline,

    /// An unparseable character; carries a description and never aborts
    /// the pipeline
    Error(String),
}
