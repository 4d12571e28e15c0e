//! Factor fields and picture selector

use super::pane_block;
use crate::session::{Factor, Symbol};
use crate::ui::app::Field;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Padding, Paragraph},
    Frame,
};

/// Render the inputs pane.
///
/// Each factor shows as `label  [ n ]`; the symbol list marks the pending
/// choice with `>`.
pub fn render_inputs_pane(
    frame: &mut Frame,
    area: Rect,
    factor_a: Factor,
    factor_b: Factor,
    symbol: Symbol,
    focused: Field,
) {
    let block = pane_block(" Numbers ", focused != Field::Answer).padding(Padding::new(1, 1, 0, 0));

    let mut lines = vec![
        number_line("First number (rows)", factor_a, focused == Field::FactorA),
        number_line("Second number (cols)", factor_b, focused == Field::FactorB),
        Line::from(""),
        Line::from(Span::styled(
            "Picture",
            label_style(focused == Field::Symbol),
        )),
    ];

    for choice in Symbol::ALL {
        let selected = choice == symbol;
        let marker = if selected { "> " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        lines.push(Line::from(Span::styled(
            format!("{}{}", marker, choice),
            style,
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn number_line(label: &str, value: Factor, is_focused: bool) -> Line<'static> {
    let value_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .bg(DEFAULT_THEME.highlight_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };

    Line::from(vec![
        Span::styled(format!("{:<21}", label), label_style(is_focused)),
        Span::styled(format!("[ {:>2} ]", value.get()), value_style),
    ])
}

fn label_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.comment)
    }
}
