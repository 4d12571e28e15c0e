//! Answer field and grading feedback

use super::pane_block;
use crate::session::Grade;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Padding, Paragraph},
    Frame,
};

/// Render the answer pane. Nothing is drawn inside the border until the
/// picture is shown.
pub fn render_answer_pane(
    frame: &mut Frame,
    area: Rect,
    visible: bool,
    answer: u16,
    is_focused: bool,
    grade: Option<&Grade>,
) {
    let block = pane_block(" Your Answer ", is_focused).padding(Padding::new(1, 1, 0, 0));

    if !visible {
        frame.render_widget(block, area);
        return;
    }

    let value_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .bg(DEFAULT_THEME.highlight_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            "Type the product and press Enter: ",
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(format!("[ {:>3} ]", answer), value_style),
    ])];

    if let Some(grade) = grade {
        let color = if grade.is_correct() {
            DEFAULT_THEME.success
        } else {
            DEFAULT_THEME.error
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            grade.message(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
