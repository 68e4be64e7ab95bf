//! Path templates for the three on-disk directories a ply run touches:
//! `data/` (ply board files), `tmp/` (radix bucket files), and `stats/`
//! (per-ply YAML statistics).

use std::path::PathBuf;

/// `data/move_<k>.boards`, `<k>` zero-padded to 2 digits.
#[must_use]
pub fn board_path(base_dir: &std::path::Path, k: u32) -> PathBuf {
    base_dir.join("data").join(format!("move_{k:02}.boards"))
}

/// `tmp/byte_<position>_<bucket>.boards`, `<bucket>` zero-padded to 3 digits.
#[must_use]
pub fn bucket_path(base_dir: &std::path::Path, position: u8, bucket: u8) -> PathBuf {
    base_dir
        .join("tmp")
        .join(format!("byte_{position}_{bucket:03}.boards"))
}

/// `stats/move_<k>.yaml`, `<k>` zero-padded to 2 digits.
#[must_use]
pub fn stats_path(base_dir: &std::path::Path, k: u32) -> PathBuf {
    base_dir.join("stats").join(format!("move_{k:02}.yaml"))
}
