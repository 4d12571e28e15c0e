//! Logging setup
//!
//! The TUI owns stdout and stderr while it runs, so log output goes to a file
//! chosen on the command line. Without one, no subscriber is installed and
//! every `tracing` event is a no-op.

use crate::errors::{AppError, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, util::SubscriberInitExt, EnvFilter};

/// Install a fmt subscriber writing to `path`.
///
/// `RUST_LOG` takes precedence over `level` when it is set. The file is
/// appended to, never truncated.
pub fn init_file_logging(path: &Path, level: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = resolve_filter(rust_log.as_deref(), level);

    fmt::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .finish()
        .try_init()?;
    Ok(())
}

/// Directives from `RUST_LOG` when present and valid, else `level`
fn resolve_filter(rust_log: Option<&str>, level: &str) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level))
}
