//! Environment-driven configuration, assembled once in `main`.

use std::path::PathBuf;

use pegsolve_ply::DEFAULT_BUFFER_BYTES;

/// The base directory under which `data/`, `tmp/`, `stats/`, and `logs/`
/// live, and the per-bucket-file I/O buffer size.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory containing `data/`, `tmp/`, `stats/`, `logs/`.
    pub base_dir: PathBuf,
    /// Per-bucket-file buffer size in bytes, used only during ply advance.
    pub buffer_bytes: usize,
}

impl Config {
    /// Reads `PEGSOLVE_BASE_DIR` (default `.`) and `PEGSOLVE_BUFFER_BYTES`
    /// (default [`DEFAULT_BUFFER_BYTES`]) from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        let base_dir = std::env::var("PEGSOLVE_BASE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        let buffer_bytes = std::env::var("PEGSOLVE_BUFFER_BYTES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_BUFFER_BYTES);

        Self {
            base_dir,
            buffer_bytes,
        }
    }
}
