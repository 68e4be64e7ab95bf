//! Encode/decode a [`Position`] to/from its packed on-disk byte record.
//!
//! Record layout (see module-level docs in the workspace `DESIGN.md` for the
//! full rationale): 5 peg bytes (each `>= 0x80`), one byte per history event
//! (`33 + code`), then a trailing `\n` record terminator.

use crate::error::CodecError;
use crate::geometry::NUM_CELLS;
use crate::position::Position;

/// Number of bytes used to pack the 33 peg bits.
pub const PEG_BYTES: usize = 5;

/// Computes just the 5-byte packed peg key for a peg array, without
/// allocating a full record. Used heavily by canonicalization and sorting,
/// which only ever compare/store this key.
#[must_use]
pub fn peg_key(pegs: &[bool; NUM_CELLS]) -> [u8; PEG_BYTES] {
    let mut bytes = [0u8; PEG_BYTES];
    for (p, &occupied) in pegs.iter().enumerate() {
        if occupied {
            let byte_idx = p / 7;
            let bit = 6 - (p % 7);
            bytes[byte_idx] |= 1 << bit;
        }
    }
    for b in &mut bytes {
        *b |= 0x80;
    }
    bytes
}

/// Encodes a position to its byte record, including the trailing `\n`.
///
/// # Errors
/// Returns [`CodecError::HistoryEventOutOfRange`] if any history event code
/// exceeds 83.
pub fn encode(position: &Position) -> Result<Vec<u8>, CodecError> {
    for &code in &position.history {
        if u16::from(code) > 83 {
            return Err(CodecError::HistoryEventOutOfRange {
                code: u16::from(code),
            });
        }
    }

    let mut out = Vec::with_capacity(PEG_BYTES + position.history.len() + 1);
    out.extend_from_slice(&peg_key(&position.pegs));
    out.extend(position.history.iter().map(|&code| 33 + code));
    out.push(b'\n');
    Ok(out)
}

/// Decodes a position from a byte record (the trailing `\n`, if present, is
/// tolerated and ignored — callers may pass the line with or without it).
///
/// # Errors
/// Returns [`CodecError::Truncated`] if fewer than 5 peg bytes are present,
/// [`CodecError::PegByteOutOfRange`] if one of the first 5 bytes does not
/// have its high bit set, or [`CodecError::HistoryEventOutOfRange`] if a
/// history byte decodes to a code outside `0..=83`.
pub fn decode(bytes: &[u8]) -> Result<Position, CodecError> {
    if bytes.len() < PEG_BYTES {
        return Err(CodecError::Truncated { got: bytes.len() });
    }

    for (index, &value) in bytes[..PEG_BYTES].iter().enumerate() {
        if value < 0x80 {
            return Err(CodecError::PegByteOutOfRange { index, value });
        }
    }

    let mut pegs = [false; NUM_CELLS];
    for (p, slot) in pegs.iter_mut().enumerate() {
        let byte_idx = p / 7;
        let bit = 6 - (p % 7);
        *slot = (bytes[byte_idx] >> bit) & 1 == 1;
    }

    let mut history = Vec::new();
    for &b in &bytes[PEG_BYTES..] {
        if b <= 32 {
            continue; // stray whitespace/CR/LF tolerated in the history tail
        }
        let code = b - 33;
        if code > 83 {
            return Err(CodecError::HistoryEventOutOfRange {
                code: u16::from(code),
            });
        }
        history.push(code);
    }

    Ok(Position { pegs, history })
}
