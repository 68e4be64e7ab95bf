//! Typed error kinds for the peg-solitaire core.
//!
//! `pegsolve-core` never touches the filesystem, so there is no `IoError`
//! here — callers that do I/O (`pegsolve-ply`, `pegsolve-cli`) wrap
//! `std::io::Error` with `anyhow::Context` at their own boundary instead of
//! funneling it through a bespoke variant.

use thiserror::Error;

/// Failures while encoding or decoding a packed position record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Fewer than 5 peg bytes were present in the input.
    #[error("truncated record: expected at least 5 peg bytes, got {got}")]
    Truncated {
        /// Number of bytes actually available.
        got: usize,
    },

    /// A peg byte did not have its high bit set (not a valid packed peg byte).
    #[error("peg byte {index} out of range: {value:#x} (expected >= 0x80)")]
    PegByteOutOfRange {
        /// Index of the offending byte (0..=4).
        index: usize,
        /// The raw byte value encountered.
        value: u8,
    },

    /// A history event code exceeded the valid range `0..=83`.
    #[error("history event out of range: {code} (expected 0..=83)")]
    HistoryEventOutOfRange {
        /// The offending event code.
        code: u16,
    },
}

/// Failures from state transitions that require a specific history shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// `un_canonicalize` was called on a position whose history is empty or
    /// whose trailing event is a jump rather than a transform.
    #[error("position is not standardized: history is empty or does not end in a transform")]
    NotStandardized,
}

/// Failures detected by one-time startup validation of the geometry tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A table did not have the expected cardinality.
    #[error("geometry table {name} has {got} entries, expected {expected}")]
    WrongCardinality {
        /// Name of the table (e.g. "cells", "jumps", "transforms", "labels").
        name: &'static str,
        /// Observed length.
        got: usize,
        /// Required length.
        expected: usize,
    },

    /// `reverse_transforms` does not actually invert `transforms`.
    #[error("reverse_transforms[{t}] = {rev_t} does not invert transform {t}")]
    ReverseTransformMismatch {
        /// The transform index that failed to invert.
        t: usize,
        /// The candidate reverse recorded for it.
        rev_t: usize,
    },

    /// The backward jump list is not the reverse of the forward jump list.
    #[error("jump {j} is not the reverse of forward jump {j}")]
    JumpNotReversed {
        /// Index within the forward jump list (0..38).
        j: usize,
    },
}
