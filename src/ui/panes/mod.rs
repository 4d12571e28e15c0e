//! TUI pane rendering modules
//!
//! Every pane is a stateless render function: it receives the values it
//! shows and draws them, nothing more. [`App`](crate::ui::App) decides what
//! goes where.
//!
//! # Pane Modules
//!
//! - [`inputs`]: the two factor fields and the picture selector
//! - [`picture`]: the multiplication grid, or a prompt while nothing is shown
//! - [`answer`]: the answer field and grading feedback
//! - [`hint`]: instructor hint panel
//! - [`status`]: title line and status bar with keybindings

pub mod answer;
pub mod hint;
pub mod inputs;
pub mod picture;
pub mod status;

// Re-export render functions for convenience
pub use answer::render_answer_pane;
pub use hint::render_hint_pane;
pub use inputs::render_inputs_pane;
pub use picture::render_picture_pane;
pub use status::{render_status_bar, render_title};

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block with the focus-dependent border style shared by all panes
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}
