//! Grid slots produced by the aligner
//!
//! A Slot is one cell of the zig-zag grid: a consonant hub plus up to four
//! directional vowel attachments. Slots are mutated in place while the
//! aligner still has them open and become plain values once emitted
//! downstream (the embellisher may still clear a *neighbor's* attachment
//! when it re-expresses it as a combined stroke).

use serde::{Deserialize, Serialize};

use super::phoneme::{Consonant, Vowel};

/// The four compass points a vowel can attach to around a hub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Stroke-name segment for this direction
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// The matching attachment on the following slot: a vowel written east
    /// of one hub is mirrored west of the next, and south mirrors north.
    pub fn mirror(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// A grid cell in the output model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// Column index (0-based). Gaps between emitted slots are allowed.
    pub x: usize,

    /// Row index (0-based)
    pub y: usize,

    /// True until something is written into the slot; empty slots are
    /// structural placeholders and are dropped by the embellisher
    pub empty: bool,

    /// Consonant occupying the slot's hub
    pub center: Option<Consonant>,

    /// Vowel attached above the hub
    pub north: Option<Vowel>,

    /// Vowel attached below the hub
    pub south: Option<Vowel>,

    /// Vowel attached right of the hub
    pub east: Option<Vowel>,

    /// Vowel attached left of the hub
    pub west: Option<Vowel>,

    /// Lexical error messages accumulated while this slot was open
    pub errors: Vec<String>,
}

impl Slot {
    /// Create a fresh structural placeholder at a grid position
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            empty: true,
            center: None,
            north: None,
            south: None,
            east: None,
            west: None,
            errors: Vec::new(),
        }
    }

    /// Write the hub consonant
    pub fn set_center(&mut self, c: Consonant) {
        self.center = Some(c);
        self.empty = false;
    }

    /// Write a vowel attachment on one compass point
    pub fn attach(&mut self, dir: Direction, v: Vowel) {
        match dir {
            Direction::North => self.north = Some(v),
            Direction::South => self.south = Some(v),
            Direction::East => self.east = Some(v),
            Direction::West => self.west = Some(v),
        }
        self.empty = false;
    }

    /// Read a vowel attachment
    pub fn attachment(&self, dir: Direction) -> Option<Vowel> {
        match dir {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    /// Remove a vowel attachment (used when a neighbor's combined stroke
    /// has re-expressed it)
    pub fn clear_attachment(&mut self, dir: Direction) {
        match dir {
            Direction::North => self.north = None,
            Direction::South => self.south = None,
            Direction::East => self.east = None,
            Direction::West => self.west = None,
        }
    }

    /// Record a lexical error against this slot. Error-carrying slots are
    /// never dropped as empty: the diagnostics must reach the caller.
    pub fn push_error(&mut self, message: String) {
        self.errors.push(message);
        self.empty = false;
    }

    /// True if any compass attachment is populated
    pub fn has_attachment(&self) -> bool {
        self.north.is_some() || self.south.is_some() || self.east.is_some() || self.west.is_some()
    }
}
