//! File-based logging setup. The terminal belongs to ratatui, so all
//! tracing output goes through a non-blocking daily-rolling file in the
//! user's state directory.

use std::env;
use std::path::PathBuf;

use fs_err as fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes tracing. Returns the appender guard, which must stay alive
/// for the process lifetime, or `None` when no writable log directory
/// exists (the clock still runs, just unlogged).
pub fn init() -> Option<WorkerGuard> {
    let dir = log_dir()?;
    fs::create_dir_all(&dir).ok()?;

    let file = tracing_appender::rolling::daily(&dir, "clock-tui.log");
    let (writer, guard) = tracing_appender::non_blocking(file);

    let debug_enabled = env::var("CLOCK_DEBUG_LOG")
        .map(|value| matches!(value.as_str(), "1" | "true" | "TRUE" | "yes" | "YES"))
        .unwrap_or(false);
    let filter = if debug_enabled {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}

fn log_dir() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|d| d.join("clock-tui"))
}
