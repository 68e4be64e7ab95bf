#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod driver;
pub mod paths;
pub mod stats;
pub mod store;

pub use driver::{run_bootstrap, run_ply};
pub use stats::PlyStats;
pub use store::{FileBucketStore, DEFAULT_BUFFER_BYTES};
