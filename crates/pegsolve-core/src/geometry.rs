//! Board geometry: cell coordinates, legal jumps, and the symmetry group.
//!
//! Everything here is derived once, at first use, from the board shape
//! constant below — there is nothing to configure. The tables are exposed
//! through [`geometry()`], a `OnceLock`-backed accessor, so the derivation
//! runs exactly once per process regardless of how many callers need it.

use crate::error::InvariantError;
use std::sync::OnceLock;

/// Number of playable cells on the 7x7 cross-shaped board.
pub const NUM_CELLS: usize = 33;
/// Number of legal jumps (38 forward + 38 backward).
pub const NUM_JUMPS: usize = 76;
/// Number of forward jumps (the first half of `jumps`; the second half is
/// their reverses, in the same order).
pub const NUM_FORWARD_JUMPS: usize = 38;
/// Number of symmetry transforms (4 rotations x 2 reflection states).
pub const NUM_TRANSFORMS: usize = 8;
/// Number of human-readable event labels (76 jumps + 8 transforms).
pub const NUM_LABELS: usize = 84;

/// A single legal jump: peg moves from `start`, over `middle`, into `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jump {
    /// Cell index the jumping peg starts on (must be occupied).
    pub start: u8,
    /// Cell index jumped over (must be occupied).
    pub middle: u8,
    /// Cell index the jumping peg lands on (must be empty).
    pub end: u8,
}

/// All tables derived from the board shape.
#[derive(Debug)]
pub struct Geometry {
    /// The 76 legal jumps, first 38 forward then their 38 reverses.
    pub jumps: [Jump; NUM_JUMPS],
    /// The 8 symmetry permutations: `transforms[t][i]` is the source cell
    /// whose content lands at cell `i` after applying transform `t`.
    pub transforms: [[u8; NUM_CELLS]; NUM_TRANSFORMS],
    /// `reverse_transforms[t]` undoes `transforms[t]`.
    pub reverse_transforms: [u8; NUM_TRANSFORMS],
    /// Human-readable labels: 76 jump names followed by 8 transform names.
    pub labels: [String; NUM_LABELS],
    /// Row-major playable mask of the 7x7 board, for display purposes only.
    pub board_rows: [[bool; 7]; 7],
}

static GEOMETRY: OnceLock<Geometry> = OnceLock::new();

/// Returns the process-wide geometry tables, building them on first call.
#[must_use]
pub fn geometry() -> &'static Geometry {
    GEOMETRY.get_or_init(build)
}

/// Composes two index permutations the way the reference board encodes
/// rotation/reflection products: `compose(a, b)[i] == a[b[i]]`.
fn compose(a: &[u8; NUM_CELLS], b: &[u8; NUM_CELLS]) -> [u8; NUM_CELLS] {
    let mut out = [0u8; NUM_CELLS];
    for i in 0..NUM_CELLS {
        out[i] = a[b[i] as usize];
    }
    out
}

fn is_playable(row: i32, col: i32) -> bool {
    if !(0..7).contains(&row) || !(0..7).contains(&col) {
        return false;
    }
    if (0..2).contains(&row) || (5..7).contains(&row) {
        (2..=4).contains(&col)
    } else {
        true
    }
}

fn find_cell(locs: &[(i32, i32)], target: (i32, i32)) -> usize {
    locs.iter()
        .position(|&l| l == target)
        .expect("target location is always a playable cell by construction")
}

#[derive(Clone, Copy)]
enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    const fn delta(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }

    const fn reverse(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }

    const fn letter(self) -> char {
        match self {
            Dir::Up => 'u',
            Dir::Down => 'd',
            Dir::Left => 'l',
            Dir::Right => 'r',
        }
    }
}

fn neighbor(locs: &[(i32, i32)], from: usize, dir: Dir) -> Option<usize> {
    let (r, c) = locs[from];
    let (dr, dc) = dir.delta();
    let target = (r + dr, c + dc);
    locs.iter().position(|&l| l == target)
}

fn build() -> Geometry {
    // --- Cell coordinates, in reading order over playable cells. ---
    let mut locs: Vec<(i32, i32)> = Vec::with_capacity(NUM_CELLS);
    for row in 0..7 {
        for col in 0..7 {
            if is_playable(row, col) {
                locs.push((row, col));
            }
        }
    }

    let row_names = ['A', 'B', 'C', 'D', 'E', 'F', 'G'];
    let cell_name = |idx: usize| -> String {
        let (row, col) = locs[idx];
        format!("{}{}", row_names[row as usize], col + 1)
    };

    // --- Jumps: iterate each cell as the middle, directions (up, right). ---
    let mut forward: Vec<Jump> = Vec::with_capacity(38);
    let mut names_forward: Vec<String> = Vec::with_capacity(38);
    let mut names_backward: Vec<String> = Vec::with_capacity(38);

    for middle in 0..NUM_CELLS {
        for dir in [Dir::Up, Dir::Right] {
            if let Some(end) = neighbor(&locs, middle, dir) {
                let rev = dir.reverse();
                if let Some(start) = neighbor(&locs, middle, rev) {
                    forward.push(Jump {
                        start: start as u8,
                        middle: middle as u8,
                        end: end as u8,
                    });
                    names_forward.push(format!("{}{}", cell_name(start), dir.letter()));
                    names_backward.push(format!("{}{}", cell_name(end), rev.letter()));
                }
            }
        }
    }

    let backward: Vec<Jump> = forward
        .iter()
        .map(|j| Jump {
            start: j.end,
            middle: j.middle,
            end: j.start,
        })
        .collect();

    let mut jumps_vec = forward;
    jumps_vec.extend(backward);
    let mut jumps = [Jump {
        start: 0,
        middle: 0,
        end: 0,
    }; NUM_JUMPS];
    jumps.copy_from_slice(&jumps_vec);

    let mut jump_names = names_forward;
    jump_names.extend(names_backward);

    // --- Symmetry transforms. ---
    let mut r0n = [0u8; NUM_CELLS];
    for (i, v) in r0n.iter_mut().enumerate() {
        *v = i as u8;
    }

    let mut r1n = [0u8; NUM_CELLS];
    for i in 0..NUM_CELLS {
        let (row, col) = locs[i];
        r1n[i] = find_cell(&locs, (col, 6 - row)) as u8;
    }

    let mut r0f = [0u8; NUM_CELLS];
    for i in 0..NUM_CELLS {
        let (row, col) = locs[i];
        r0f[i] = find_cell(&locs, (row, 6 - col)) as u8;
    }

    let r2n = compose(&r1n, &r1n);
    let r3n = compose(&r2n, &r1n);
    let r1f = compose(&r1n, &r0f);
    let r2f = compose(&r2n, &r0f);
    let r3f = compose(&r3n, &r0f);

    let transforms = [r0n, r1n, r2n, r3n, r0f, r1f, r2f, r3f];
    let transform_names = ["R0n", "R1n", "R2n", "R3n", "R0f", "R1f", "R2f", "R3f"];
    let reverse_transforms: [u8; NUM_TRANSFORMS] = [0, 3, 2, 1, 4, 5, 6, 7];

    // --- Labels: 76 jump names followed by 8 transform names. ---
    let mut labels_vec = jump_names;
    labels_vec.extend(transform_names.iter().map(|s| (*s).to_string()));
    let labels: [String; NUM_LABELS] = labels_vec
        .try_into()
        .unwrap_or_else(|v: Vec<String>| panic!("expected {NUM_LABELS} labels, got {}", v.len()));

    // --- Board rows, for display. ---
    let mut board_rows = [[false; 7]; 7];
    for (row, cols) in board_rows.iter_mut().enumerate() {
        for (col, slot) in cols.iter_mut().enumerate() {
            *slot = is_playable(row as i32, col as i32);
        }
    }

    Geometry {
        jumps,
        transforms,
        reverse_transforms,
        labels,
        board_rows,
    }
}

/// Checks the cardinalities and self-consistency of the geometry tables.
///
/// Run once at process startup; a failure here is a build-time defect, not a
/// recoverable runtime condition.
///
/// # Errors
/// Returns [`InvariantError`] if any table has the wrong size (including the
/// 33 playable cells and 38 forward jumps the other tables are derived
/// from), if `reverse_transforms` fails to invert some transform, or if the
/// backward jump list is not the reverse of the forward list.
pub fn validate() -> Result<(), InvariantError> {
    let geo = geometry();

    let cell_count = geo
        .board_rows
        .iter()
        .flat_map(|row| row.iter())
        .filter(|&&playable| playable)
        .count();
    if cell_count != NUM_CELLS {
        return Err(InvariantError::WrongCardinality {
            name: "cells",
            got: cell_count,
            expected: NUM_CELLS,
        });
    }
    if geo.jumps.len() != NUM_JUMPS {
        return Err(InvariantError::WrongCardinality {
            name: "jumps",
            got: geo.jumps.len(),
            expected: NUM_JUMPS,
        });
    }
    if geo.transforms.len() != NUM_TRANSFORMS {
        return Err(InvariantError::WrongCardinality {
            name: "transforms",
            got: geo.transforms.len(),
            expected: NUM_TRANSFORMS,
        });
    }
    if geo.labels.len() != NUM_LABELS {
        return Err(InvariantError::WrongCardinality {
            name: "labels",
            got: geo.labels.len(),
            expected: NUM_LABELS,
        });
    }

    let identity: [u8; NUM_CELLS] = {
        let mut id = [0u8; NUM_CELLS];
        for (i, v) in id.iter_mut().enumerate() {
            *v = i as u8;
        }
        id
    };

    for t in 0..NUM_TRANSFORMS {
        let rt = geo.reverse_transforms[t] as usize;
        let composed = compose(&geo.transforms[t], &geo.transforms[rt]);
        if composed != identity {
            return Err(InvariantError::ReverseTransformMismatch { t, rev_t: rt });
        }
    }

    // Pairing every one of the first NUM_FORWARD_JUMPS entries against its
    // mirror at `j + NUM_FORWARD_JUMPS`, combined with the `NUM_JUMPS` total
    // checked above (`2 * NUM_FORWARD_JUMPS == NUM_JUMPS`), pins the forward
    // list to exactly 38 entries with no unaccounted-for jumps.
    for j in 0..NUM_FORWARD_JUMPS {
        let fwd = geo.jumps[j];
        let bwd = geo.jumps[j + NUM_FORWARD_JUMPS];
        if bwd.start != fwd.end || bwd.middle != fwd.middle || bwd.end != fwd.start {
            return Err(InvariantError::JumpNotReversed { j });
        }
    }

    Ok(())
}
