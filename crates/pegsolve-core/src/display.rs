//! Human-readable rendering of a decoded position.
//!
//! This is read-only tooling grounded in the original `treestep.py`
//! prototype's `history_string`/`peg_display_string`/`show` methods. It does
//! not participate in the wire format or any ply-advance semantics.

use crate::geometry::geometry;
use crate::position::Position;

/// Renders `p.history` as a comma-joined sequence of event labels, e.g.
/// `"A1u,C3r,R0n"`.
#[must_use]
pub fn history_string(p: &Position) -> String {
    let geo = geometry();
    p.history
        .iter()
        .map(|&code| geo.labels[code as usize].as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// Renders `p.pegs` as a 7x7 ASCII board: `+` for an occupied playable cell,
/// `.` for an empty playable cell, a blank for a non-playable cell. Rows are
/// newline-separated.
#[must_use]
pub fn board_string(p: &Position) -> String {
    let geo = geometry();
    let mut out = String::with_capacity(7 * 8);
    let mut next = 0usize;

    for row in &geo.board_rows {
        for &playable in row {
            if playable {
                out.push(if p.pegs[next] { '+' } else { '.' });
                next += 1;
            } else {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}

/// Renders both the history string and the board, newline-separated —
/// mirroring the original prototype's `show()`.
#[must_use]
pub fn show(p: &Position) -> String {
    format!("{}\n{}", history_string(p), board_string(p))
}
