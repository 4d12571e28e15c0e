//! Instructor hint panel

use super::pane_block;
use crate::ui::app::Reveal;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Padding, Paragraph, Wrap},
    Frame,
};

/// Render the hint panel: collapsed, open, or open with a revealed product
pub fn render_hint_pane(frame: &mut Frame, area: Rect, is_open: bool, revealed: Option<Reveal>) {
    let block = pane_block(" Teacher Hint ", false).padding(Padding::new(1, 1, 0, 0));

    let mut lines = Vec::new();
    if !is_open {
        lines.push(Line::from(Span::styled(
            "Press h to open",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Press a to show the answer",
            Style::default().fg(DEFAULT_THEME.fg),
        )));
        if let Some(reveal) = revealed {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Showing the answer:",
                Style::default().fg(DEFAULT_THEME.warning),
            )));
            lines.push(Line::from(Span::styled(
                format!("{} x {} = {}", reveal.a, reveal.b, reveal.product),
                Style::default()
                    .fg(DEFAULT_THEME.warning)
                    .add_modifier(Modifier::BOLD),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
