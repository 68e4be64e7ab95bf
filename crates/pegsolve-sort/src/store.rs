//! The bucket store abstraction the sorter reads and writes through.
//!
//! This crate never opens a file itself. Callers (in practice
//! `pegsolve-ply`'s `FileBucketStore`) provide an implementation of
//! [`BucketStore`] backed by real files under `tmp/`; tests here use an
//! in-memory implementation instead, so the sort/dedup logic can be
//! exercised without touching disk.
//!
//! The whole system is single-threaded and synchronous (see `DESIGN.md`), so
//! the trait objects below are plain `Box<dyn Write>` / `Box<dyn BufRead>`
//! with no `Send` bound to satisfy.

use std::io::{self, BufRead, Write};

/// The radix pass a bucket belongs to: `4` is the generating pass's output,
/// `3..=0` are the cascading passes, and the position-0 buckets are what the
/// filter pass reads.
pub type Pass = u8;

/// A bucket's key byte value, always in `128..=255`.
pub type BucketId = u8;

/// A factory for the 128 bucket writers/readers used by one radix pass.
///
/// Implementations own the lifecycle of each bucket's backing storage:
/// `writer` must create (or truncate) it, `reader` must open it for
/// sequential reading, and `remove` must discard it once drained.
pub trait BucketStore {
    /// Opens (creating/truncating) the writer for `(pass, bucket)`.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be opened for writing.
    fn writer(&mut self, pass: Pass, bucket: BucketId) -> io::Result<Box<dyn Write>>;

    /// Opens the reader for `(pass, bucket)` for sequential line-at-a-time
    /// consumption.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be opened for reading.
    fn reader(&mut self, pass: Pass, bucket: BucketId) -> io::Result<Box<dyn BufRead>>;

    /// Discards the backing storage for `(pass, bucket)`. Called once a
    /// reader for it has been fully drained.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be removed.
    fn remove(&mut self, pass: Pass, bucket: BucketId) -> io::Result<()>;
}

/// The 128 bucket byte values, `128..=255`, in ascending order — the order
/// every pass must iterate buckets in, per the stability guarantees this
/// crate relies on.
#[must_use]
pub fn bucket_ids() -> impl Iterator<Item = BucketId> {
    128u8..=255u8
}

/// An in-memory [`BucketStore`] for tests: each `(pass, bucket)` is a
/// growable byte buffer shared via `Rc<RefCell<_>>` so a writer handle can
/// append to it after `writer()` returns.
#[cfg(test)]
pub(crate) mod mem {
    use super::{BucketId, BucketStore, Pass};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io::{self, BufRead, Cursor, Write};
    use std::rc::Rc;

    #[derive(Default)]
    pub struct MemBucketStore {
        buckets: HashMap<(Pass, BucketId), Rc<RefCell<Vec<u8>>>>,
    }

    struct SharedWriter(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedWriter {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(data);
            Ok(data.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl BucketStore for MemBucketStore {
        fn writer(&mut self, pass: Pass, bucket: BucketId) -> io::Result<Box<dyn Write>> {
            let cell = Rc::new(RefCell::new(Vec::new()));
            self.buckets.insert((pass, bucket), cell.clone());
            Ok(Box::new(SharedWriter(cell)))
        }

        fn reader(&mut self, pass: Pass, bucket: BucketId) -> io::Result<Box<dyn BufRead>> {
            let data = self
                .buckets
                .get(&(pass, bucket))
                .map(|cell| cell.borrow().clone())
                .unwrap_or_default();
            Ok(Box::new(Cursor::new(data)))
        }

        fn remove(&mut self, pass: Pass, bucket: BucketId) -> io::Result<()> {
            self.buckets.remove(&(pass, bucket));
            Ok(())
        }
    }
}
