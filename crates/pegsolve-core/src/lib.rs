// crates/pegsolve-core/src/lib.rs

//! Geometry, codec, canonicalization, and child-move generation for 33-hole
//! English peg solitaire.
//!
//! This crate is deliberately filesystem-free: it decodes and encodes
//! records, canonicalizes positions, and enumerates single-jump children. It
//! knows nothing about bucket files, ply drivers, or CLI argument parsing —
//! those live in `pegsolve-sort`, `pegsolve-ply`, and `pegsolve-cli`
//! respectively.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod canonical;
pub mod children;
pub mod codec;
pub mod display;
pub mod error;
pub mod geometry;
pub mod position;

pub use canonical::{canonicalize, un_canonicalize};
pub use children::children;
pub use codec::{decode, encode, peg_key};
pub use error::{CodecError, InvariantError, StateError};
pub use geometry::{
    geometry, validate, Geometry, Jump, NUM_CELLS, NUM_FORWARD_JUMPS, NUM_JUMPS, NUM_LABELS,
    NUM_TRANSFORMS,
};
pub use position::Position;
