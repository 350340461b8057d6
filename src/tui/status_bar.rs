//! Status bar widget for status messages and contextual key help.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, FocusPane, Theme};

/// Render the status bar: message line on top, key hints underneath.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let mut lines: Vec<Line> = Vec::new();

    if let Some(error) = &state.error_message {
        lines.push(Line::from(vec![
            Span::styled(
                "ERROR: ",
                Style::default()
                    .fg(theme.error)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(error.clone(), Style::default().fg(theme.error)),
        ]));
    } else if !state.status_message.is_empty() {
        lines.push(Line::from(Span::styled(
            state.status_message.clone(),
            Style::default().fg(theme.text),
        )));
    } else {
        lines.push(Line::from(""));
    }

    lines.push(contextual_help_line(state, theme));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.primary)),
    );
    f.render_widget(paragraph, area);
}

/// Key hints for the focused pane.
fn contextual_help_line(state: &AppState, theme: &Theme) -> Line<'static> {
    let key = |k: &str| Span::styled(k.to_string(), Style::default().fg(theme.accent));
    let text = |t: &str| Span::styled(t.to_string(), Style::default().fg(theme.text_muted));

    if state.hex_entry.is_some() {
        return Line::from(vec![
            key("0-9 a-f"),
            text(" type  "),
            key("Enter"),
            text(" apply  "),
            key("Esc"),
            text(" cancel"),
        ]);
    }

    let mut spans = vec![
        key("Tab"),
        text(" pane  "),
        key("i"),
        text(" hex  "),
        key("r"),
        text(" random  "),
        key("u/y"),
        text(" undo/redo  "),
        key("c"),
        text(" copy  "),
        key("s"),
        text(" save  "),
    ];

    match state.focus {
        FocusPane::Sliders => {
            spans.extend([
                key("Up/Down"),
                text(" channel  "),
                key("Left/Right"),
                text(" adjust  "),
                key("PgUp/PgDn"),
                text(" adjust x10  "),
            ]);
        }
        FocusPane::Presets => {
            spans.extend([key("Arrows"), text(" navigate  "), key("Enter"), text(" apply  ")]);
        }
        FocusPane::Customs => {
            spans.extend([
                key("Arrows"),
                text(" navigate  "),
                key("Enter"),
                text(" apply  "),
                key("d"),
                text(" delete  "),
            ]);
        }
    }

    spans.extend([key("m"), text(" copy mode  "), key("t"), text(" theme  "), key("q"), text(" quit")]);
    Line::from(spans)
}
