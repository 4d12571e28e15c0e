//! Terminal setup and teardown
//!
//! [`init`] leaves the terminal untouched when it fails part way, and
//! [`restore`] attempts every teardown step even when an earlier one fails.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use tracing::warn;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen.
///
/// If anything after raw mode fails, the terminal is restored before the
/// error is returned.
pub fn init() -> io::Result<Tui> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    let setup = execute!(stdout, EnterAlternateScreen)
        .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)));

    setup.map_err(|err| {
        if let Err(restore_err) = restore() {
            warn!(error = %restore_err, "terminal restore after failed setup also failed");
        }
        err
    })
}

/// Leave the alternate screen, show the cursor and disable raw mode.
///
/// All steps run; the first failure is returned.
pub fn restore() -> io::Result<()> {
    let mut stdout = io::stdout();
    first_error([
        disable_raw_mode(),
        execute!(stdout, LeaveAlternateScreen),
        execute!(stdout, Show),
    ])
}

/// Outcome of a session followed by teardown: the session's own error wins
/// over a teardown error.
pub fn finish<T, E>(run: Result<T, E>, restored: io::Result<()>) -> Result<T, E>
where
    E: From<io::Error>,
{
    let value = run?;
    restored?;
    Ok(value)
}

fn first_error<const N: usize>(results: [io::Result<()>; N]) -> io::Result<()> {
    results.into_iter().collect()
}
