use std::fs;
use std::path::Path;

use anyhow::anyhow;
use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_FILTER_ENV: &str = "CARFINDER_LOG";

fn filter() -> EnvFilter {
    return EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new("carfinder_term=info,carfinder=info"));
}

/// Logs to `log_file`, since the terminal UI owns stdout. Keep the guard
/// alive for the lifetime of the process so buffered lines get flushed.
pub fn init_file(log_file: &str) -> Result<WorkerGuard> {
    let path = Path::new(log_file);
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Log file '{log_file}' has no file name"))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("Failed to initialize logging: {err}"))?;

    return Ok(guard);
}

/// Logs to stderr for the non-interactive commands.
pub fn init_stderr() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!("Failed to initialize logging: {err}"))?;

    return Ok(());
}
