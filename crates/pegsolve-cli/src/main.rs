#![forbid(unsafe_code)]
#![deny(
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo
)]

mod config;
mod inspect;
mod logging;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use config::Config;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "pegsolve-cli",
    about = "33-hole peg solitaire canonical-ply enumerator",
    long_about = "Advances the canonical-equivalence-class frontier of 33-hole English \
peg solitaire one ply at a time, or bootstraps ply 0 from the standard start position.",
    version = env!("CARGO_PKG_VERSION"),
    disable_help_subcommand = true
)]
struct Cli {
    /// Ply to advance from: -1 bootstraps `data/move_00.boards`, k >= 0
    /// advances `data/move_<k>.boards` to `data/move_<k+1>.boards`.
    #[arg(allow_hyphen_values = true, required_unless_present = "command")]
    startmove: Option<i64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode one record of a ply file and print its history and board.
    Inspect {
        /// Path to a `data/move_<NN>.boards` file.
        #[arg(long)]
        file: PathBuf,
        /// 0-based line number of the record to decode.
        #[arg(long)]
        line: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    pegsolve_core::validate().context("geometry table invariants failed at startup")?;

    if let Some(Command::Inspect { file, line }) = cli.command {
        let _guard = logging::init(&PathBuf::from("."), "inspect");
        return inspect::run(&file, line);
    }

    let startmove = cli
        .startmove
        .context("startmove is required when no subcommand is given")?;

    let config = Config::from_env();

    let log_stem = if startmove < 0 {
        "bootstrap".to_string()
    } else {
        format!("from_{startmove:02}")
    };
    let _guard = logging::init(&config.base_dir, &log_stem);

    if startmove < -1 {
        bail!("startmove must be -1 (bootstrap) or >= 0 (advance), got {startmove}");
    }

    if startmove == -1 {
        info!("bootstrapping ply 0");
        pegsolve_ply::run_bootstrap(&config.base_dir)?;
        return Ok(());
    }

    let k = u32::try_from(startmove).context("startmove out of range for a ply number")?;
    info!(k, "advancing ply");
    let stats = pegsolve_ply::run_ply(&config.base_dir, k, Some(config.buffer_bytes))?;

    let stats_dir = config.base_dir.join("stats");
    std::fs::create_dir_all(&stats_dir)
        .with_context(|| format!("creating {}", stats_dir.display()))?;
    let stats_path = stats_dir.join(format!("move_{k:02}.yaml"));
    let yaml = serde_yaml::to_string(&stats).context("serialize ply statistics to YAML")?;
    std::fs::write(&stats_path, yaml)
        .with_context(|| format!("write {}", stats_path.display()))?;

    info!(path = %stats_path.display(), "wrote ply statistics");
    Ok(())
}
