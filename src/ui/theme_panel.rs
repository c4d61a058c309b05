//! Theme customizer rows

use super::widgets::{highlight_style, render_scrollable_list};
use crate::app::App;
use crate::state::editor::ThemeRow;
use crate::state::form::parse_hex_color;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.state.store.form().theme.clone().unwrap_or_default();
    let active = app.state.theme_panel.active_row_index;

    let items: Vec<ListItem> = ThemeRow::ALL
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans = vec![Span::styled(
                format!(" {:<17}", row.label()),
                Style::default().fg(Color::Gray),
            )];
            if row.is_color() {
                // invalid hex shows no swatch
                let swatch = parse_hex_color(row.value(&theme)).map_or_else(
                    || Span::raw("   "),
                    |c| Span::styled("██ ", Style::default().fg(c)),
                );
                spans.push(swatch);
                spans.push(Span::raw(row.display(&theme)));
                if i == active {
                    spans.push(Span::raw("▌"));
                }
            } else {
                spans.push(Span::raw(format!("◂ {} ▸", row.display(&theme))));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let block = Block::default()
        .title(" Theme ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style(true));

    render_scrollable_list(frame, area, list, active);
}
