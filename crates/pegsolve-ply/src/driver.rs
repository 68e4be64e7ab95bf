//! Orchestrates one bootstrap or one ply advance against `data/`, `tmp/`,
//! and `stats/` under a base directory.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::time::Instant;

use anyhow::{Context, Result};
use pegsolve_core::{canonicalize, encode, Position};
use pegsolve_sort::{cascade_pass, filter_pass, generate_pass, AdvanceStats};
use tracing::info;

use crate::paths::board_path;
use crate::stats::PlyStats;
use crate::store::FileBucketStore;

fn ensure_data_dir(base_dir: &std::path::Path) -> Result<()> {
    fs::create_dir_all(base_dir.join("data"))
        .with_context(|| format!("creating {}", base_dir.join("data").display()))
}

/// Writes `data/move_00.boards`: a single record encoding the canonicalized
/// standard start position with empty history.
///
/// # Errors
/// Returns an error if the output directory or file cannot be created or
/// written to.
pub fn run_bootstrap(base_dir: &std::path::Path) -> Result<()> {
    ensure_data_dir(base_dir)?;

    let start = canonicalize(&Position::start());
    let bytes = encode(&start).context("encode start position")?;

    let out_path = board_path(base_dir, 0);
    info!(path = %out_path.display(), "writing bootstrap ply");
    let file = File::create(&out_path)
        .with_context(|| format!("create {}", out_path.display()))?;
    let mut writer = BufWriter::new(file);
    std::io::Write::write_all(&mut writer, &bytes)
        .with_context(|| format!("write {}", out_path.display()))?;

    Ok(())
}

/// Advances ply `k` to `k + 1`: reads `data/move_<k>.boards`, runs the
/// generate/cascade/filter pipeline through a file-backed [`FileBucketStore`]
/// rooted at `base_dir`, and writes `data/move_<k+1>.boards`.
///
/// `buffer_bytes` overrides the per-bucket-file I/O buffer size; `None`
/// uses [`crate::store::DEFAULT_BUFFER_BYTES`].
///
/// # Errors
/// Returns an error if any input/output file cannot be opened, read, or
/// written, or if a record fails to decode, un-canonicalize, or encode.
pub fn run_ply(
    base_dir: &std::path::Path,
    k: u32,
    buffer_bytes: Option<usize>,
) -> Result<PlyStats> {
    ensure_data_dir(base_dir)?;

    let in_path = board_path(base_dir, k);
    let out_path = board_path(base_dir, k + 1);

    let in_file =
        File::open(&in_path).with_context(|| format!("open {}", in_path.display()))?;
    let mut reader = BufReader::new(in_file);

    let out_file = File::create(&out_path)
        .with_context(|| format!("create {}", out_path.display()))?;
    let mut writer = BufWriter::new(out_file);

    let mut store = match buffer_bytes {
        Some(n) => FileBucketStore::with_buffer_bytes(base_dir, n)?,
        None => FileBucketStore::new(base_dir)?,
    };

    info!(k, from = %in_path.display(), to = %out_path.display(), "advancing ply");
    let started = Instant::now();

    let mut stats = AdvanceStats::default();

    info!(k, pass = "generate", "starting pass");
    generate_pass(&mut reader, &mut store, &mut stats)
        .with_context(|| format!("generate pass for ply {k}"))?;
    info!(
        k,
        pass = "generate",
        records = stats.outboards_unfiltered,
        "pass complete"
    );

    for pos in (0..=3u8).rev() {
        info!(k, pass = pos, "starting pass");
        cascade_pass(&mut store, pos)
            .with_context(|| format!("cascade pass {pos} for ply {k}"))?;
        info!(
            k,
            pass = pos,
            records = stats.outboards_unfiltered,
            "pass complete"
        );
    }

    info!(k, pass = "filter", "starting pass");
    filter_pass(&mut store, &mut writer, &mut stats)
        .with_context(|| format!("filter pass for ply {k}"))?;
    info!(
        k,
        pass = "filter",
        records = stats.outboards_filtered,
        "pass complete"
    );

    let runtime = started.elapsed().as_secs_f64();

    info!(
        k,
        inboards = stats.inboards,
        outboards_unfil = stats.outboards_unfiltered,
        outboards_fil = stats.outboards_filtered,
        runtime,
        "ply advance complete"
    );

    Ok(PlyStats::new(stats, runtime))
}
