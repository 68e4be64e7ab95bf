//! Statistics accumulated while advancing one ply.

use std::collections::BTreeMap;

/// Counts produced by [`crate::advance`]: how many boards went in, how many
/// (possibly-duplicate) children came out of expansion, and how many
/// survived deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvanceStats {
    /// Number of canonical boards read from the input ply.
    pub inboards: u64,
    /// Histogram of how many legal single jumps each input board had,
    /// keyed by child count.
    pub inboards_childcounts: BTreeMap<u32, u64>,
    /// Total children produced by expansion, before deduplication.
    pub outboards_unfiltered: u64,
    /// Number of distinct canonical children after deduplication.
    pub outboards_filtered: u64,
}

impl AdvanceStats {
    pub(crate) fn record_children(&mut self, count: u32) {
        self.inboards += 1;
        *self.inboards_childcounts.entry(count).or_insert(0) += 1;
        self.outboards_unfiltered += u64::from(count);
    }
}
