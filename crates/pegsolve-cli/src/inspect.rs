//! The read-only `inspect` subcommand: decode one record of a ply file and
//! print its move history and board.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context, Result};
use pegsolve_core::{decode, display};

/// Decodes the `line`-th (0-based) record of `file` and prints its history
/// string followed by its ASCII board.
///
/// # Errors
/// Returns an error if `file` cannot be opened or read, if `line` is past
/// the end of the file, or if the record fails to decode.
pub fn run(file: &Path, line: usize) -> Result<()> {
    let f = File::open(file).with_context(|| format!("open {}", file.display()))?;
    let reader = BufReader::new(f);

    for (i, raw) in reader.split(b'\n').enumerate() {
        let raw = raw.with_context(|| format!("read {} line {i}", file.display()))?;
        if i != line {
            continue;
        }
        let position = decode(&raw).with_context(|| format!("decode {} line {i}", file.display()))?;
        println!("{}", display::show(&position));
        return Ok(());
    }

    bail!(
        "{} has fewer than {} lines; line {line} does not exist",
        file.display(),
        line + 1
    );
}
