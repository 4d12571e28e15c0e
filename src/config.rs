//! Command-line configuration

use crate::session::{Factor, Symbol, VisualizationSession};
use clap::Parser;
use std::path::PathBuf;

/// Multiplication practice with pictures, in your terminal
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// First factor (rows), clamped to 0..=12
    #[arg(short, long, default_value_t = 3, allow_negative_numbers = true)]
    pub rows: i64,

    /// Second factor (columns), clamped to 0..=12
    #[arg(short, long, default_value_t = 4, allow_negative_numbers = true)]
    pub cols: i64,

    /// Picture used to draw the grid
    #[arg(short, long, value_enum, default_value_t = Symbol::Apple)]
    pub symbol: Symbol,

    /// Write logs to this file. Logging is off when omitted.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level, overridden by `RUST_LOG` when set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Resolved starting values for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub rows: Factor,
    pub cols: Factor,
    pub symbol: Symbol,
}

impl SessionConfig {
    pub fn new_session(&self) -> VisualizationSession {
        VisualizationSession::new(self.rows, self.cols, self.symbol)
    }
}

impl From<&Args> for SessionConfig {
    fn from(args: &Args) -> Self {
        SessionConfig {
            rows: Factor::clamped(args.rows),
            cols: Factor::clamped(args.cols),
            symbol: args.symbol,
        }
    }
}
