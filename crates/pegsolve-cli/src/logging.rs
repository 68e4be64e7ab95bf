//! Dual-layer `tracing` setup: a compact stderr layer for interactive
//! progress, plus a file layer appending to `logs/<name>.txt`.
//!
//! Generalizes the reference CLI's single-layer `init_tracing` to two
//! layers so the human log stream (`logs/from_<NN>.txt`, `logs/bootstrap.txt`)
//! survives even when stderr is not captured.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber, appending formatted events to
/// `<base_dir>/logs/<log_file_stem>.txt` in addition to stderr.
///
/// Returns a [`WorkerGuard`] that must be kept alive for the duration of
/// `main` — dropping it flushes and closes the file appender.
#[must_use]
pub fn init(base_dir: &Path, log_file_stem: &str) -> WorkerGuard {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let logs_dir = base_dir.join("logs");
    let _ = std::fs::create_dir_all(&logs_dir);
    let file_appender =
        tracing_appender::rolling::never(&logs_dir, format!("{log_file_stem}.txt"));
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer().with_target(false).with_level(true).compact();
    let file_layer = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(non_blocking);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    guard
}
