//! The `(pegs, history)` value type shared by every other module.

use crate::geometry::NUM_CELLS;
use serde::{Deserialize, Serialize};

/// A board position together with the append-only event history that
/// produced it.
///
/// `history` entries are event codes `0..=83`: `0..76` are jump indices,
/// `76..84` are transform indices (see [`crate::geometry`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// `true` = occupied, indexed by cell (see [`crate::geometry::geometry`]).
    pub pegs: [bool; NUM_CELLS],
    /// Append-only event codes that produced this position.
    pub history: Vec<u8>,
}

impl Position {
    /// Constructs a position from raw pegs and history, with no validation.
    #[must_use]
    pub fn new(pegs: [bool; NUM_CELLS], history: Vec<u8>) -> Self {
        Self { pegs, history }
    }

    /// The standard English peg solitaire starting position: every cell
    /// filled except the center (cell index 16), with empty history.
    #[must_use]
    pub fn start() -> Self {
        let mut pegs = [true; NUM_CELLS];
        pegs[16] = false;
        Self {
            pegs,
            history: Vec::new(),
        }
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn peg_count(&self) -> usize {
        self.pegs.iter().filter(|&&p| p).count()
    }
}
