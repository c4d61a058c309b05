//! Field property editor for the selected field

use super::widgets::{highlight_style, render_scrollable_list};
use crate::app::App;
use crate::state::editor::{EditorFocus, PropertyRow};
use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.focus == EditorFocus::Properties;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let Some(field) = app.state.store.selected_field() else {
        let block = Block::default()
            .title(format!(" {} ", EditorFocus::Properties.label()))
            .borders(Borders::ALL)
            .border_style(border_style);
        let hint = Paragraph::new("Select a field on the canvas to edit its properties.")
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let mut block = Block::default()
        .title(format!(
            " {} · {} ",
            EditorFocus::Properties.label(),
            field.field_type().palette_label()
        ))
        .borders(Borders::ALL)
        .border_style(border_style);
    if !field.rules().is_empty() {
        let kinds: Vec<&str> = field.rules().iter().map(|r| r.kind.as_str()).collect();
        block = block.title_bottom(Line::from(Span::styled(
            format!(" rules: {} ", kinds.join(", ")),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let active = app.state.properties.active_row_index;
    let items: Vec<ListItem> = app
        .state
        .properties
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| ListItem::new(row_line(field, *row, is_focused && i == active)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style(is_focused));

    render_scrollable_list(frame, area, list, active);
}

fn row_line(field: &FormField, row: PropertyRow, is_editing: bool) -> Line<'static> {
    match row {
        PropertyRow::Required => {
            let mark = if field.is_required() { "[x]" } else { "[ ]" };
            Line::from(format!(" {mark} {}", row.label()))
        }
        PropertyRow::AddOption => Line::from(Span::styled(
            format!(" + {}", row.label()),
            Style::default().fg(Color::Green),
        )),
        PropertyRow::DeleteField => Line::from(Span::styled(
            format!(" ✕ {}", row.label()),
            Style::default().fg(Color::Red),
        )),
        _ => {
            let value = row.text_value(field).unwrap_or_default();
            let mut spans = vec![
                Span::styled(
                    format!(" {}: ", row.label()),
                    Style::default().add_modifier(Modifier::DIM),
                ),
                Span::raw(value),
            ];
            if is_editing {
                spans.push(Span::raw("▌"));
            }
            Line::from(spans)
        }
    }
}
