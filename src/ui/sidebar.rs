//! Edit-mode sidebar: form settings above the field palette

use super::field_renderer::draw_field_with_value;
use super::widgets::{highlight_style, render_scrollable_list};
use crate::app::App;
use crate::state::editor::{EditorFocus, SettingsRow};
use crate::state::FieldType;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Settings block: three boxed inputs plus the surrounding border
const SETTINGS_HEIGHT: u16 = 11;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(SETTINGS_HEIGHT), Constraint::Min(0)])
        .split(area);

    draw_settings(frame, chunks[0], app);
    draw_palette(frame, chunks[1], app);
}

fn panel_block(title: &str, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_style)
}

fn draw_settings(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.focus == EditorFocus::Settings;
    let block = panel_block(EditorFocus::Settings.label(), is_focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 3])
        .split(inner);

    let form = app.state.store.form();
    let active = app.state.settings.active();
    for (row, rect) in SettingsRow::ALL.iter().zip(rows.iter()) {
        draw_field_with_value(
            frame,
            *rect,
            row.label(),
            &row.value(form),
            is_focused && *row == active,
        );
    }
}

fn draw_palette(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.focus == EditorFocus::Palette;
    let items: Vec<ListItem> = FieldType::ALL
        .iter()
        .map(|t| {
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", t.icon()), Style::default().fg(Color::Cyan)),
                Span::raw(t.palette_label()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(panel_block(EditorFocus::Palette.label(), is_focused))
        .highlight_style(highlight_style(is_focused));

    render_scrollable_list(frame, area, list, app.state.palette.active_row_index);
}
