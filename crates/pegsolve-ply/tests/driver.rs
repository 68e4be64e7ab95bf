//! Bootstrap and first-ply end-to-end tests against real temp-directory
//! files, exercising `FileBucketStore` rather than the in-memory test
//! double used inside `pegsolve-sort`.

use std::collections::BTreeSet;
use std::fs;

use pegsolve_core::geometry::{geometry, NUM_CELLS, NUM_TRANSFORMS};
use pegsolve_core::{canonicalize, decode, peg_key, Position};
use pegsolve_ply::{run_bootstrap, run_ply};

/// Scenario A: bootstrap produces exactly one record, the start position
/// canonicalized under the identity transform.
#[test]
fn bootstrap_writes_single_start_record() {
    let dir = tempfile::tempdir().unwrap();
    run_bootstrap(dir.path()).unwrap();

    let bytes = fs::read(dir.path().join("data/move_00.boards")).unwrap();
    let lines: Vec<&[u8]> = bytes.split(|&b| b == b'\n').filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 1);

    let position = decode(lines[0]).unwrap();
    for i in 0..NUM_CELLS {
        assert_eq!(position.pegs[i], i != 16, "cell {i}");
    }
    assert_eq!(position.history, vec![76]);
}

/// Scenario B: ply 0 to 1 collapses the four legal opening jumps to one
/// canonical equivalence class.
#[test]
fn ply_zero_to_one_has_one_record() {
    let dir = tempfile::tempdir().unwrap();
    run_bootstrap(dir.path()).unwrap();

    let stats = run_ply(dir.path(), 0, None).unwrap();

    assert_eq!(stats.inboards, 1);
    assert_eq!(stats.outboards_unfil, 4);
    assert_eq!(stats.outboards_fil, 1);

    let bytes = fs::read(dir.path().join("data/move_01.boards")).unwrap();
    let lines: Vec<&[u8]> = bytes.split(|&b| b == b'\n').filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 1);

    let position = decode(lines[0]).unwrap();
    assert_eq!(position.peg_count(), 31);
    assert_eq!(position.history.len(), 2); // one jump + one re-canonicalization transform
}

/// Scenario E: symmetry closure over a whole ply file. Applying any single
/// transform to every record's pegs and re-canonicalizing must reproduce
/// exactly the same multiset of peg keys the file started with — every
/// record already names the minimal representative of its equivalence
/// class, so no transform can move it to a different class.
#[test]
fn ply_file_peg_keys_are_closed_under_any_transform() {
    let dir = tempfile::tempdir().unwrap();
    run_bootstrap(dir.path()).unwrap();
    run_ply(dir.path(), 0, None).unwrap();
    run_ply(dir.path(), 1, None).unwrap();

    let bytes = fs::read(dir.path().join("data/move_02.boards")).unwrap();
    let records: Vec<_> = bytes
        .split(|&b| b == b'\n')
        .filter(|l| !l.is_empty())
        .map(|line| decode(line).unwrap())
        .collect();
    assert_eq!(records.len(), 2); // known canonical count at ply 2

    let original_keys: BTreeSet<[u8; 5]> = records.iter().map(|p| peg_key(&p.pegs)).collect();

    let geo = geometry();
    for t in 0..NUM_TRANSFORMS {
        let sigma = &geo.transforms[t];
        let recanon_keys: BTreeSet<[u8; 5]> = records
            .iter()
            .map(|p| {
                let mut image = [false; NUM_CELLS];
                for (i, slot) in image.iter_mut().enumerate() {
                    *slot = p.pegs[sigma[i] as usize];
                }
                peg_key(&canonicalize(&Position::new(image, vec![])).pegs)
            })
            .collect();
        assert_eq!(recanon_keys, original_keys, "transform {t} broke closure");
    }
}
