//! Picture pane: the multiplication drawn as a grid of symbols

use super::pane_block;
use crate::session::Grid;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Padding, Paragraph},
    Frame,
};

pub const IDLE_MESSAGE: &str = "Press v to see the answer drawn with your picture.";

/// Render the picture pane.
///
/// `grid` is `None` while the session is not visualized. The heading is
/// taken from the grid's own dimensions.
pub fn render_picture_pane(frame: &mut Frame, area: Rect, grid: Option<&Grid>) {
    let block = pane_block(" Picture ", false).padding(Padding::new(1, 1, 0, 0));

    let Some(grid) = grid else {
        let paragraph = Paragraph::new(IDLE_MESSAGE)
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "{} x {} = ? (count the pictures!)",
                grid.rows(),
                grid.cols()
            ),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(
        grid.to_lines()
            .into_iter()
            .map(|row| Line::from(Span::styled(row, Style::default().fg(DEFAULT_THEME.fg)))),
    );

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}
