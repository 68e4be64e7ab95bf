//! [`pegsolve_sort::BucketStore`] backed by real files under `tmp/`.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use pegsolve_sort::{BucketId, BucketStore, Pass};

use crate::paths::bucket_path;

/// Reference per-file buffer size from the problem's memory budget:
/// `⌊½ GiB / 256⌋` bytes, sized so two full banks of 128 files fit in RAM
/// during a cascade pass.
pub const DEFAULT_BUFFER_BYTES: usize = (512 * 1024 * 1024) / 256;

/// A [`BucketStore`] whose buckets are files under `<base_dir>/tmp/`.
pub struct FileBucketStore {
    base_dir: PathBuf,
    buffer_bytes: usize,
}

impl FileBucketStore {
    /// Creates a store rooted at `base_dir`, using [`DEFAULT_BUFFER_BYTES`]
    /// as the per-file I/O buffer size.
    ///
    /// # Errors
    /// Returns an error if `<base_dir>/tmp` cannot be created.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::with_buffer_bytes(base_dir, DEFAULT_BUFFER_BYTES)
    }

    /// Creates a store rooted at `base_dir` with an explicit per-file
    /// buffer size, overriding [`DEFAULT_BUFFER_BYTES`].
    ///
    /// # Errors
    /// Returns an error if `<base_dir>/tmp` cannot be created.
    pub fn with_buffer_bytes(base_dir: impl Into<PathBuf>, buffer_bytes: usize) -> Result<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(base_dir.join("tmp"))
            .with_context(|| format!("creating {}", base_dir.join("tmp").display()))?;
        Ok(Self {
            base_dir,
            buffer_bytes,
        })
    }
}

impl BucketStore for FileBucketStore {
    fn writer(&mut self, pass: Pass, bucket: BucketId) -> std::io::Result<Box<dyn Write>> {
        let path = bucket_path(&self.base_dir, pass, bucket);
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::with_capacity(self.buffer_bytes, file)))
    }

    fn reader(&mut self, pass: Pass, bucket: BucketId) -> std::io::Result<Box<dyn BufRead>> {
        let path = bucket_path(&self.base_dir, pass, bucket);
        let file = File::open(path)?;
        Ok(Box::new(BufReader::with_capacity(self.buffer_bytes, file)))
    }

    fn remove(&mut self, pass: Pass, bucket: BucketId) -> std::io::Result<()> {
        let path = bucket_path(&self.base_dir, pass, bucket);
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}
