//! Character-level phoneme lexer
//!
//! A finite state machine over lowercase characters plus an explicit
//! end-of-input marker. Digraphs are resolved eagerly with at most one
//! character of lookahead (two for the `sch` trigraph); an unconsumed
//! lookahead character is re-dispatched through the machine rather than
//! re-read, so the lexer never backtracks.
//!
//! The machine is context-sensitive in one way: after a consonant the
//! glides `w`/`y` are read as vowels (so a word can end cleanly on a
//! glide), everywhere else they are consonants.

use crate::models::{Consonant, Phoneme, Vowel};

/// Lexer states. Each state is a function from "next character" to
/// "next state", with emitted phonemes pushed to the output sink.
#[derive(Debug, Clone, Copy, PartialEq)]
enum LexState {
    /// Initial state, and after whitespace or a resolved vowel boundary:
    /// `w`/`y` read as consonants
    FavorConsonant,

    /// After any consonant: `w`/`y` read as vowels
    FavorVowel,

    /// Holding one vowel, awaiting a possible second half of a diphthong
    MaybeDiphthong(Vowel),

    /// Holding a digraph-capable first character, awaiting the lookahead
    Digraph(char),

    /// Holding `sc`, awaiting a possible `h`
    Trigraph,

    /// Absorbing a run of whitespace without emitting duplicates
    Space,
}

/// The phoneme lexer. One instance per input; no state survives a call.
pub struct Lexer {
    state: LexState,
}

impl Lexer {
    pub fn new() -> Self {
        Self {
            state: LexState::FavorConsonant,
        }
    }

    /// Feed one character (`Some`) or the end-of-input marker (`None`),
    /// appending any emitted phonemes to `out`.
    pub fn step(&mut self, input: Option<char>, out: &mut Vec<Phoneme>) {
        match self.state {
            LexState::FavorConsonant => self.favor(input, false, out),
            LexState::FavorVowel => self.favor(input, true, out),
            LexState::MaybeDiphthong(first) => self.maybe_diphthong(first, input, out),
            LexState::Digraph(first) => self.digraph(first, input, out),
            LexState::Trigraph => self.trigraph(input, out),
            LexState::Space => self.space(input, out),
        }
    }

    /// FavorConsonant / FavorVowel, which differ only in how the glides
    /// `w`/`y` are read.
    fn favor(&mut self, input: Option<char>, glides_are_vowels: bool, out: &mut Vec<Phoneme>) {
        let c = match input {
            Some(c) => c,
            None => return,
        };
        match c {
            '\n' | '\r' => {
                out.push(Phoneme::Newline);
                self.state = LexState::Space;
            }
            ' ' | '\t' => {
                out.push(Phoneme::Space);
                self.state = LexState::Space;
            }
            _ => {
                if let Some(v) = Vowel::from_char(c, glides_are_vowels) {
                    self.state = LexState::MaybeDiphthong(v);
                    return;
                }
                match c {
                    // glides as consonants (consonant-favoring state only)
                    'w' => {
                        out.push(Phoneme::Consonant(Consonant::W));
                        self.state = LexState::FavorVowel;
                    }
                    'y' => {
                        out.push(Phoneme::Consonant(Consonant::Y));
                        self.state = LexState::FavorVowel;
                    }
                    // x expands to a cluster and keeps the current bias
                    'x' => {
                        out.push(Phoneme::Consonant(Consonant::K));
                        out.push(Phoneme::Consonant(Consonant::S));
                    }
                    // single consonants with no digraph
                    'r' => self.emit_plain(Consonant::R, out),
                    'l' => self.emit_plain(Consonant::L, out),
                    'm' => self.emit_plain(Consonant::M, out),
                    'v' => self.emit_plain(Consonant::V, out),
                    'f' => self.emit_plain(Consonant::F, out),
                    'j' => self.emit_plain(Consonant::J, out),
                    'z' => self.emit_plain(Consonant::Z, out),
                    // digraph-capable consonants wait for the lookahead
                    'g' | 'k' | 'c' | 'n' | 'b' | 'p' | 't' | 'd' | 's' | 'q' => {
                        self.state = LexState::Digraph(c);
                    }
                    _ => {
                        log::debug!("lexer: unexpected character '{}'", c);
                        out.push(Phoneme::Error(format!("unexpected '{}'", c)));
                        self.state = LexState::FavorVowel;
                    }
                }
            }
        }
    }

    fn emit_plain(&mut self, c: Consonant, out: &mut Vec<Phoneme>) {
        out.push(Phoneme::Consonant(c));
        self.state = LexState::FavorVowel;
    }

    fn maybe_diphthong(&mut self, first: Vowel, input: Option<char>, out: &mut Vec<Phoneme>) {
        let c = match input {
            Some(c) => c,
            None => {
                out.push(Phoneme::Vowel(first));
                self.state = LexState::FavorConsonant;
                return;
            }
        };
        match c {
            '\n' | '\r' => {
                out.push(Phoneme::Vowel(first));
                out.push(Phoneme::Newline);
                self.state = LexState::Space;
            }
            ' ' | '\t' => {
                out.push(Phoneme::Vowel(first));
                out.push(Phoneme::Space);
                self.state = LexState::Space;
            }
            _ => {
                // glides always qualify as the second half
                if let Some(second) = Vowel::from_char(c, true) {
                    out.push(Phoneme::Diphthong(first, second));
                    self.state = LexState::FavorConsonant;
                } else {
                    out.push(Phoneme::Vowel(first));
                    self.state = LexState::FavorConsonant;
                    self.step(Some(c), out);
                }
            }
        }
    }

    /// Resolve a held digraph-capable character against the lookahead.
    /// An unconsumed lookahead character is re-dispatched in FavorVowel.
    fn digraph(&mut self, first: char, input: Option<char>, out: &mut Vec<Phoneme>) {
        // `sc` needs one more character of lookahead for `sch`
        if first == 's' && input == Some('c') {
            self.state = LexState::Trigraph;
            return;
        }

        let (emitted, consumed): (&[Consonant], bool) = match (first, input) {
            ('g', Some('h')) => (&[Consonant::Gh], true),
            ('g', _) => (&[Consonant::G], false),
            ('k', Some('h')) => (&[Consonant::Kh], true),
            ('k', _) => (&[Consonant::K], false),
            // c alone hardens to k
            ('c', Some('h')) => (&[Consonant::Ch], true),
            ('c', _) => (&[Consonant::K], false),
            ('n', Some('g')) => (&[Consonant::Ng], true),
            ('n', _) => (&[Consonant::N], false),
            // bh and ph are spelling variants, not digraph symbols
            ('b', Some('h')) => (&[Consonant::V], true),
            ('b', _) => (&[Consonant::B], false),
            ('p', Some('h')) => (&[Consonant::F], true),
            ('p', _) => (&[Consonant::P], false),
            ('t', Some('h')) => (&[Consonant::Th], true),
            ('t', Some('s')) => (&[Consonant::Ts], true),
            ('t', _) => (&[Consonant::T], false),
            ('d', Some('h')) => (&[Consonant::Dh], true),
            ('d', Some('j')) => (&[Consonant::Dj], true),
            ('d', Some('z')) => (&[Consonant::Dz], true),
            ('d', _) => (&[Consonant::D], false),
            ('s', _) => (&[Consonant::S], false),
            ('q', Some('u')) | ('q', Some('w')) => (&[Consonant::K, Consonant::W], true),
            ('q', _) => (&[Consonant::K, Consonant::W], false),
            _ => unreachable!("non-digraph character held in Digraph state"),
        };

        for &c in emitted {
            out.push(Phoneme::Consonant(c));
        }
        self.state = LexState::FavorVowel;
        if !consumed {
            if let Some(c) = input {
                self.step(Some(c), out);
            }
        }
    }

    /// Held `sc`: `h` completes the trigraph, anything else splits it.
    fn trigraph(&mut self, input: Option<char>, out: &mut Vec<Phoneme>) {
        if input == Some('h') {
            out.push(Phoneme::Consonant(Consonant::Sh));
            self.state = LexState::FavorVowel;
            return;
        }
        out.push(Phoneme::Consonant(Consonant::S));
        out.push(Phoneme::Consonant(Consonant::K));
        self.state = LexState::FavorVowel;
        if let Some(c) = input {
            self.step(Some(c), out);
        }
    }

    fn space(&mut self, input: Option<char>, out: &mut Vec<Phoneme>) {
        match input {
            None => {}
            Some(c) if c.is_whitespace() => {
                // absorbed: runs of whitespace emit no duplicates
            }
            Some(c) => {
                self.state = LexState::FavorConsonant;
                self.step(Some(c), out);
            }
        }
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

/// Lex a full input string into its phoneme sequence
pub fn lex(input: &str) -> Vec<Phoneme> {
    let mut lexer = Lexer::new();
    let mut out = Vec::new();
    for c in input.chars() {
        lexer.step(Some(c), &mut out);
    }
    lexer.step(None, &mut out);
    log::debug!("lexer: {} chars -> {} phonemes", input.chars().count(), out.len());
    out
}
