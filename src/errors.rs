//! Application error type
//!
//! The session itself never fails: out-of-range input is clamped and a wrong
//! answer is an ordinary [`Grade`](crate::session::Grade). What can fail is
//! the plumbing around it, the terminal and the log sink.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal setup, drawing or event reading failed
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),

    /// The log file could not be opened
    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tracing subscriber could not be installed
    #[error("failed to initialise logging")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

pub type Result<T> = std::result::Result<T, AppError>;
