//! The YAML-serializable statistics written to `stats/move_<k>.yaml`.

use std::collections::BTreeMap;

use pegsolve_sort::AdvanceStats;
use serde::Serialize;

/// One ply's statistics, in the field names and shapes `stats/move_<k>.yaml`
/// is specified to carry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlyStats {
    /// Number of canonical boards read from the input ply.
    pub inboards: u64,
    /// Child-count histogram: number of input boards with each child count.
    pub inboards_childcounts: BTreeMap<u32, u64>,
    /// Total children produced by expansion, before deduplication.
    pub outboards_unfil: u64,
    /// Number of distinct canonical children after deduplication.
    pub outboards_fil: u64,
    /// Wall-clock seconds spent on the pass pipeline.
    #[serde(rename = "runtime")]
    pub runtime_secs: f64,
}

impl PlyStats {
    pub(crate) fn new(advance: AdvanceStats, runtime_secs: f64) -> Self {
        Self {
            inboards: advance.inboards,
            inboards_childcounts: advance.inboards_childcounts,
            outboards_unfil: advance.outboards_unfiltered,
            outboards_fil: advance.outboards_filtered,
            runtime_secs,
        }
    }
}
