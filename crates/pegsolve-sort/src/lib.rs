#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod sort;
pub mod stats;
pub mod store;

pub use sort::{advance, cascade_pass, filter_pass, generate_pass};
pub use stats::AdvanceStats;
pub use store::{bucket_ids, BucketId, BucketStore, Pass};
