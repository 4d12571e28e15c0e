// Timestiles: multiplication practice with pictures

use clap::Parser;
use tracing::info;

use timestiles::config::{Args, SessionConfig};
use timestiles::errors::{AppError, Result};
use timestiles::telemetry;
use timestiles::ui::{terminal, App};

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        telemetry::init_file_logging(path, &args.log_level)?;
    }

    let config = SessionConfig::from(&args);
    info!(
        rows = config.rows.get(),
        cols = config.cols.get(),
        symbol = config.symbol.name(),
        "starting session"
    );

    let mut tui = terminal::init()?;

    let mut app = App::new(config.new_session());
    let res = app.run(&mut tui).map_err(AppError::from);

    // Always restore, then report the run error before any restore error
    let restored = terminal::restore();
    info!("session ended");
    terminal::finish(res, restored)
}
