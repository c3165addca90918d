//! Zig-zag glyph aligner
//!
//! Consumes the phoneme stream and produces the slot sequence. Consonant
//! hubs land alternately on a high row and a low row: a high hub advances
//! one row down, a low hub advances one column right and one row up, so a
//! consonant-vowel pair moves the baseline one column along. A vowel
//! between two hubs is written on both of them (trailing side of the
//! first, leading side of the next) so the embellisher can later fuse the
//! pair into one shared stroke.
//!
//! The machine's five natural states (before a high slot, vowel held,
//! hub set, and their low-row mirrors) collapse into a phase
//! (`Fresh`/`Lead`/`Hub`) crossed with a row parity, which lets the zig
//! and the zag share one transition routine.

use crate::models::{Consonant, Direction, Phoneme, Slot, Vowel};

/// Filler hub inserted between two vowels with no consonant between them
pub const PLACEHOLDER_CONSONANT: Consonant = Consonant::M;

/// Filler vowel inserted between two consonants with no vowel between them
pub const PLACEHOLDER_VOWEL: Vowel = Vowel::E;

/// Rows a newline advances the baseline by (one grid line plus spacing)
pub const LINE_ROW_ADVANCE: usize = 2;

/// Which of the two baseline rows the open slot sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parity {
    High,
    Low,
}

/// Progress through the current slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Start of a word; nothing written yet
    Fresh,

    /// A vowel is held on the slot's leading side (written, or still a
    /// pending connector), hub not yet set
    Lead,

    /// Hub consonant is set; awaiting the trailing vowel
    Hub,
}

/// The glyph aligner. One instance per transcription; no state is shared
/// between calls.
pub struct Aligner {
    /// Position of the open slot
    x: usize,
    y: usize,

    /// High row of the current line
    base_y: usize,

    parity: Parity,
    phase: Phase,

    /// The open slot, mutated in place until emitted
    term: Slot,

    /// Vowel waiting to be written on the open slot's leading side if a
    /// consonant claims the hub; dropped at a word boundary because the
    /// previous hub already carries it
    pending: Option<(Direction, Vowel)>,

    slots: Vec<Slot>,
}

impl Aligner {
    pub fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            base_y: 0,
            parity: Parity::High,
            phase: Phase::Fresh,
            term: Slot::new(0, 0),
            pending: None,
            slots: Vec::new(),
        }
    }

    /// Consume one phoneme
    pub fn feed(&mut self, phoneme: &Phoneme) {
        match phoneme {
            Phoneme::Consonant(c) => self.consonant(*c),
            Phoneme::Vowel(v) => self.vowel(*v),
            Phoneme::Diphthong(first, second) => self.diphthong(*first, *second),
            Phoneme::Space => self.boundary(false),
            Phoneme::Newline => self.boundary(true),
            // parse errors never abort alignment; they ride along on
            // whichever slot is open
            Phoneme::Error(message) => self.term.push_error(message.clone()),
        }
    }

    /// Flush the open slot and return the finished sequence
    pub fn finish(mut self) -> Vec<Slot> {
        self.boundary(false);
        log::debug!("aligner: emitted {} slots", self.slots.len());
        self.slots
    }

    /// Trailing attachment side of a slot at the given parity: a high hub
    /// hands its vowel down (south), a low hub hands it right (east).
    fn trail_dir(parity: Parity) -> Direction {
        match parity {
            Parity::High => Direction::South,
            Parity::Low => Direction::East,
        }
    }

    /// Leading attachment side of a slot at the given parity, i.e. the
    /// mirror of the previous slot's trailing side.
    fn lead_dir(parity: Parity) -> Direction {
        match parity {
            Parity::High => Direction::West,
            Parity::Low => Direction::North,
        }
    }

    /// Emit the open slot and open the next one along the zig-zag:
    /// down from a high slot, right-and-up from a low slot.
    fn emit_and_advance(&mut self) {
        let (nx, ny, nparity) = match self.parity {
            Parity::High => (self.x, self.y + 1, Parity::Low),
            Parity::Low => (self.x + 1, self.y - 1, Parity::High),
        };
        let finished = std::mem::replace(&mut self.term, Slot::new(nx, ny));
        self.slots.push(finished);
        self.x = nx;
        self.y = ny;
        self.parity = nparity;
    }

    fn consonant(&mut self, c: Consonant) {
        match self.phase {
            Phase::Fresh => {
                self.term.set_center(c);
                self.phase = Phase::Hub;
            }
            Phase::Lead => {
                if let Some((dir, v)) = self.pending.take() {
                    self.term.attach(dir, v);
                }
                self.term.set_center(c);
                self.phase = Phase::Hub;
            }
            Phase::Hub => {
                // two consonants with no vowel between them: force the
                // placeholder vowel onto both sides of the gap
                self.term.attach(Self::trail_dir(self.parity), PLACEHOLDER_VOWEL);
                self.emit_and_advance();
                self.term.attach(Self::lead_dir(self.parity), PLACEHOLDER_VOWEL);
                self.term.set_center(c);
            }
        }
    }

    /// Spatially a diphthong is vowel, placeholder hub, vowel, and it
    /// always spans two grid rows. At the start of a word it splits
    /// across the row boundary immediately: the first half hangs south
    /// of the opening slot, the second half opens the next row north.
    /// Mid-word the two halves ride the ordinary vowel transitions,
    /// which insert the placeholder hub on the way.
    fn diphthong(&mut self, first: Vowel, second: Vowel) {
        if self.phase == Phase::Fresh {
            self.term.attach(Direction::South, first);
            self.emit_and_advance();
            self.term.attach(Direction::North, second);
            self.phase = Phase::Lead;
            return;
        }
        self.vowel(first);
        self.vowel(second);
    }

    fn vowel(&mut self, v: Vowel) {
        match self.phase {
            Phase::Fresh => {
                // no preceding hub: the vowel opens the slot itself
                self.term.attach(Direction::North, v);
                self.phase = Phase::Lead;
            }
            Phase::Lead => {
                // two vowels with no consonant between them: force the
                // placeholder hub, then fall through to the trailing write
                if let Some((dir, held)) = self.pending.take() {
                    self.term.attach(dir, held);
                }
                self.term.set_center(PLACEHOLDER_CONSONANT);
                self.phase = Phase::Hub;
                self.vowel(v);
            }
            Phase::Hub => {
                self.term.attach(Self::trail_dir(self.parity), v);
                self.emit_and_advance();
                self.pending = Some((Self::lead_dir(self.parity), v));
                self.phase = Phase::Lead;
            }
        }
    }

    /// Word or line boundary: flush the open slot, then reseat on the
    /// high row for the next word.
    fn boundary(&mut self, newline: bool) {
        self.pending = None;
        match self.phase {
            Phase::Fresh => {
                // only lexical errors can have touched the slot
                if !self.term.empty {
                    self.emit_and_advance();
                }
            }
            Phase::Lead => {
                if self.term.has_attachment() {
                    // a written leading vowel would be stranded: give it
                    // a placeholder hub and let it occupy the column
                    self.term.set_center(PLACEHOLDER_CONSONANT);
                    self.emit_and_advance();
                } else if !self.term.empty {
                    self.emit_and_advance();
                }
                // an untouched slot whose connector was only pending is
                // discarded: the previous hub already carries the vowel
            }
            Phase::Hub => self.emit_and_advance(),
        }

        if newline {
            self.base_y += LINE_ROW_ADVANCE;
            self.x = 0;
        } else if self.parity == Parity::Low {
            // the high cell of this column is taken; start one further
            self.x += 1;
        }
        self.y = self.base_y;
        self.parity = Parity::High;
        self.phase = Phase::Fresh;
        self.term = Slot::new(self.x, self.y);
    }
}

impl Default for Aligner {
    fn default() -> Self {
        Self::new()
    }
}

/// Align a full phoneme sequence into slots
pub fn align(phonemes: &[Phoneme]) -> Vec<Slot> {
    let mut aligner = Aligner::new();
    for phoneme in phonemes {
        aligner.feed(phoneme);
    }
    aligner.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::lex;

    fn align_text(text: &str) -> Vec<Slot> {
        align(&lex(text))
    }

    #[test]
    fn test_whitespace_only_produces_nothing() {
        assert!(align_text("   ").is_empty());
        assert!(align_text("").is_empty());
    }

    #[test]
    fn test_single_consonant_is_one_bare_hub() {
        let slots = align_text("m");
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].center, Some(Consonant::M));
        assert!(!slots[0].has_attachment());
        assert_eq!((slots[0].x, slots[0].y), (0, 0));
    }

    #[test]
    fn test_bare_vowel_gets_placeholder_hub() {
        let slots = align_text("a");
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].center, Some(PLACEHOLDER_CONSONANT));
        assert_eq!(slots[0].north, Some(Vowel::A));
    }

    #[test]
    fn test_consonant_vowel_shares_across_boundary() {
        // hub on the high row, vowel on its south; the low slot that the
        // vowel would lead into stays pending and is dropped at the end
        let slots = align_text("ma");
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].center, Some(Consonant::M));
        assert_eq!(slots[0].south, Some(Vowel::A));
    }

    #[test]
    fn test_vowel_between_hubs_written_on_both() {
        let slots = align_text("mam");
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].south, Some(Vowel::A));
        assert_eq!(slots[1].north, Some(Vowel::A));
        assert_eq!(slots[1].center, Some(Consonant::M));
        assert_eq!((slots[1].x, slots[1].y), (0, 1));
    }

    #[test]
    fn test_two_consonants_force_placeholder_vowel() {
        let slots = align_text("mn");
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].south, Some(PLACEHOLDER_VOWEL));
        assert_eq!(slots[1].north, Some(PLACEHOLDER_VOWEL));
        assert_eq!(slots[1].center, Some(Consonant::N));
    }

    #[test]
    fn test_diphthong_spans_two_rows_around_placeholder() {
        let slots = align_text("aa");
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].south, Some(Vowel::A));
        assert_eq!(slots[0].center, None);
        assert_eq!(slots[1].north, Some(Vowel::A));
        assert_eq!(slots[1].center, Some(PLACEHOLDER_CONSONANT));
        assert_eq!((slots[1].x, slots[1].y), (0, 1));
    }

    #[test]
    fn test_word_initial_diphthong_splits_at_row_boundary() {
        // first half hangs south of the opening slot, second half opens
        // the next row north
        let slots = align_text("ao");
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].south, Some(Vowel::A));
        assert_eq!((slots[0].x, slots[0].y), (0, 0));
        assert_eq!(slots[1].north, Some(Vowel::O));
        assert_eq!((slots[1].x, slots[1].y), (0, 1));
    }

    #[test]
    fn test_zig_zag_alternates_rows_and_columns() {
        // three hubs: high, low, high
        let slots = align_text("manam");
        let coords: Vec<(usize, usize)> = slots.iter().map(|s| (s.x, s.y)).collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (1, 0)]);
        assert_eq!(slots[1].center, Some(Consonant::N));
        assert_eq!(slots[2].center, Some(Consonant::M));
    }

    #[test]
    fn test_word_boundary_starts_next_column() {
        let slots = align_text("m n");
        assert_eq!(slots.len(), 2);
        assert_eq!((slots[0].x, slots[0].y), (0, 0));
        assert_eq!((slots[1].x, slots[1].y), (1, 0));
    }

    #[test]
    fn test_stranded_vowel_keeps_its_column() {
        // "a" flushes into a placeholder hub occupying column 0, so the
        // second word starts in column 1
        let slots = align_text("a m");
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].center, Some(PLACEHOLDER_CONSONANT));
        assert_eq!((slots[1].x, slots[1].y), (1, 0));
    }

    #[test]
    fn test_newline_resets_column_and_skips_a_row() {
        let slots = align_text("m\nn");
        assert_eq!(slots.len(), 2);
        assert_eq!((slots[0].x, slots[0].y), (0, 0));
        assert_eq!((slots[1].x, slots[1].y), (0, 2));
    }

    #[test]
    fn test_newline_from_low_row_advances_one() {
        // "man" ends with the hub on the low row (0,1); the next line's
        // high row is still base + 2
        let slots = align_text("man\nm");
        let last = slots.last().unwrap();
        assert_eq!((last.x, last.y), (0, 2));
    }

    #[test]
    fn test_error_rides_on_open_slot() {
        let slots = align_text("a1b");
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].center, Some(Consonant::B));
        assert_eq!(slots[0].errors.len(), 1);
        assert!(slots[0].errors[0].contains('1'));
    }

    #[test]
    fn test_error_only_slot_survives() {
        let slots = align_text("#");
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].center, None);
        assert!(!slots[0].errors.is_empty());
    }
}
