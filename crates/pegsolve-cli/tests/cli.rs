//! End-to-end coverage of the bootstrap and first-ply flow the binary's
//! `main` drives, exercised by calling straight into `pegsolve_ply` against
//! a temp directory rather than spawning the compiled binary.

use std::fs;

use pegsolve_core::decode;
use pegsolve_ply::{run_bootstrap, run_ply};

/// Scenario A: bootstrapping writes exactly one record.
#[test]
fn bootstrap_then_stats_layout() {
    let dir = tempfile::tempdir().unwrap();
    run_bootstrap(dir.path()).unwrap();

    let board_bytes = fs::read(dir.path().join("data/move_00.boards")).unwrap();
    let lines: Vec<&[u8]> = board_bytes
        .split(|&b| b == b'\n')
        .filter(|l| !l.is_empty())
        .collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(decode(lines[0]).unwrap().history, vec![76]);
}

/// Scenario B: advancing ply 0 to 1 yields the YAML-serializable stats a
/// real invocation would write to `stats/move_00.yaml`.
#[test]
fn ply_zero_to_one_stats_match_known_counts() {
    let dir = tempfile::tempdir().unwrap();
    run_bootstrap(dir.path()).unwrap();
    let stats = run_ply(dir.path(), 0, None).unwrap();

    assert_eq!(stats.inboards, 1);
    assert_eq!(stats.outboards_unfil, 4);
    assert_eq!(stats.outboards_fil, 1);
    assert_eq!(stats.inboards_childcounts.get(&4), Some(&1));

    let yaml = serde_yaml::to_string(&stats).unwrap();
    assert!(yaml.contains("inboards: 1"));
    assert!(yaml.contains("outboards_fil: 1"));
}
