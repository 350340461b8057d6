//! Swatch grids for preset and custom colors.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::RgbColor;

use super::Theme;

/// Swatches per grid row. Matches the preset palette's display width.
const COLUMNS: usize = 8;

/// Render a titled grid of color swatches into `area`.
///
/// The selected cell gets a marker row underneath when `focused`; an empty
/// grid renders a hint instead.
pub fn render_grid(
    f: &mut Frame,
    area: Rect,
    title: &str,
    colors: &[RgbColor],
    selected: usize,
    focused: bool,
    theme: &Theme,
) {
    let border_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.primary)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if colors.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Nothing saved yet - press s to save the current color",
            Style::default().fg(theme.text_muted),
        )));
        f.render_widget(hint, inner);
        return;
    }

    let rows = colors.len().div_ceil(COLUMNS);
    // Each swatch row is a block of color plus a marker/label line
    let row_constraints: Vec<Constraint> = (0..rows).map(|_| Constraint::Length(3)).collect();
    let row_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(inner);

    for row in 0..rows {
        let Some(row_area) = row_chunks.get(row) else {
            break;
        };
        let col_constraints: Vec<Constraint> = (0..COLUMNS)
            .map(|_| Constraint::Ratio(1, COLUMNS as u32))
            .collect();
        let col_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(col_constraints)
            .split(*row_area);

        for col in 0..COLUMNS {
            let idx = row * COLUMNS + col;
            let Some(color) = colors.get(idx) else {
                break;
            };
            render_swatch(
                f,
                col_chunks[col],
                *color,
                focused && idx == selected,
                theme,
            );
        }
    }
}

/// Render one swatch cell: a filled color block with a selection marker.
fn render_swatch(f: &mut Frame, area: Rect, color: RgbColor, is_selected: bool, theme: &Theme) {
    if area.height == 0 {
        return;
    }

    let fill = Rect {
        height: area.height.saturating_sub(1).max(1),
        ..area
    };
    f.render_widget(
        Block::default().style(Style::default().bg(color.to_ratatui_color())),
        fill,
    );

    if area.height >= 2 {
        let marker_area = Rect {
            y: area.y + area.height - 1,
            height: 1,
            ..area
        };
        let marker = if is_selected {
            Line::from(Span::styled(
                format!("▲{}", color.to_hex_prefixed()),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::raw(""))
        };
        f.render_widget(Paragraph::new(marker), marker_area);
    }
}
