//! Color panel: preview block, code readouts, and channel sliders.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use super::{AppState, FocusPane, RgbChannel};

/// Render the whole color panel into `area`.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let focused = state.focus == FocusPane::Sliders;

    let border_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.primary)
    };
    let block = Block::default()
        .title(" Color ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4), // Preview
            Constraint::Length(2), // Hex + RGB readouts
            Constraint::Length(1), // Red slider
            Constraint::Length(1), // Green slider
            Constraint::Length(1), // Blue slider
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Undo/redo hints
            Constraint::Min(0),
        ])
        .split(inner);

    render_preview(f, chunks[0], state);
    render_readouts(f, chunks[1], state);

    let color = state.picker.current();
    render_channel_slider(
        f,
        chunks[2],
        "R",
        color.r,
        Color::Red,
        focused && state.active_channel == RgbChannel::Red,
        theme.text_muted,
    );
    render_channel_slider(
        f,
        chunks[3],
        "G",
        color.g,
        Color::Green,
        focused && state.active_channel == RgbChannel::Green,
        theme.text_muted,
    );
    render_channel_slider(
        f,
        chunks[4],
        "B",
        color.b,
        Color::Blue,
        focused && state.active_channel == RgbChannel::Blue,
        theme.text_muted,
    );

    render_history_hints(f, chunks[6], state);
}

/// Render the color preview block.
fn render_preview(f: &mut Frame, area: Rect, state: &AppState) {
    let preview = Block::default()
        .title(" Preview ")
        .borders(Borders::ALL)
        .style(Style::default().bg(state.picker.current().to_ratatui_color()));
    f.render_widget(preview, area);
}

/// Render the hex and rgb code lines.
fn render_readouts(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let codes = state.picker.current_codes();

    let lines = vec![
        Line::from(vec![
            Span::styled("Hex: ", Style::default().fg(theme.text_muted)),
            Span::styled(
                format!("#{}", codes.hex),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("RGB: ", Style::default().fg(theme.text_muted)),
            Span::styled(codes.rgb, Style::default().fg(theme.text)),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

/// Render a single channel slider.
fn render_channel_slider(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: u8,
    color: Color,
    is_active: bool,
    inactive_color: Color,
) {
    let percentage = (f64::from(value) / 255.0 * 100.0) as u16;
    let label_text = format!("{label}: {value:3}");

    let style = if is_active {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(inactive_color)
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::NONE))
        .gauge_style(style)
        .label(label_text)
        .percent(percentage);

    f.render_widget(gauge, area);
}

/// Render undo/redo availability, dimmed when the stacks are exhausted.
fn render_history_hints(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let hint = |label: &str, enabled: bool| -> Span<'static> {
        let style = if enabled {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.inactive)
        };
        Span::styled(label.to_string(), style)
    };

    let line = Line::from(vec![
        hint("u Undo", state.picker.can_undo()),
        Span::raw("   "),
        hint("y Redo", state.picker.can_redo()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
