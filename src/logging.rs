//! Tracing subscriber setup.

use std::path::Path;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file name inside the log directory; rotated daily.
pub const LOG_FILE_NAME: &str = "employee-manager.log";

/// Install the global subscriber.
///
/// Console output goes to stderr at `console_level` unless `RUST_LOG` says
/// otherwise. With a `log_dir`, INFO and above are also written to a daily
/// rolling file. Keep the returned guard alive until exit so buffered lines flush.
pub fn init(console_level: Level, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_default_env().add_directive(console_level.into()));

    let (file, guard) = match log_dir.map(open_file_writer) {
        Some(Ok((writer, guard))) => {
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(EnvFilter::new("info"));
            (Some(layer), Some(guard))
        }
        Some(Err(e)) => {
            eprintln!("File logging disabled: {e}");
            (None, None)
        }
        None => (None, None),
    };

    if let Err(e) = tracing_subscriber::registry().with(console).with(file).try_init() {
        eprintln!("Logging already initialized: {e}");
    }

    guard
}

fn open_file_writer(
    dir: &Path,
) -> std::io::Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
    Ok(tracing_appender::non_blocking(appender))
}
