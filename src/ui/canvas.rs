//! Form canvas
//!
//! Renders the form the way respondents see it, styled by the form theme.
//! In edit mode the selected field is highlighted; in preview mode answers
//! from `PreviewState` are filled in and the active field takes input.

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::editor::{display_value, masked, EditorFocus};
use crate::state::preview::PreviewState;
use crate::state::{BuilderMode, FieldType, FormData, FormField, FormTheme};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Upper bound on blank rows between fields
const MAX_GAP: u16 = 4;

/// How a field is being shown
struct FieldContext<'a> {
    theme: &'a FormTheme,
    /// Answers when previewing, `None` while editing
    preview: Option<&'a PreviewState>,
    is_active: bool,
}

/// A vertical slot on the canvas
enum CanvasItem<'a> {
    Header,
    Empty,
    Field(&'a FormField),
    Submit,
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.state.store.form();
    let theme = form.theme.clone().unwrap_or_default();
    let mode = app.state.store.mode();
    let preview = (mode == BuilderMode::Preview).then_some(&app.state.preview);
    let is_focused = mode != BuilderMode::Edit || app.state.focus == EditorFocus::Canvas;

    let title = match mode {
        BuilderMode::Preview => " Preview ".to_string(),
        _ => format!(" Canvas · {} fields ", form.fields.len()),
    };
    let outer = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(border_type(&theme))
        .border_style(if is_focused {
            Style::default().fg(theme.primary())
        } else {
            Style::default().fg(Color::DarkGray)
        })
        .style(Style::default().bg(theme.background()).fg(theme.text()));
    let inner = outer.inner(area).inner(Margin {
        horizontal: 1,
        vertical: 0,
    });
    frame.render_widget(outer, area);

    let mut items = vec![CanvasItem::Header];
    if form.fields.is_empty() {
        items.push(CanvasItem::Empty);
    } else {
        items.extend(form.fields.iter().map(CanvasItem::Field));
        items.push(CanvasItem::Submit);
    }

    // item index that must stay visible
    let focus_item = match mode {
        BuilderMode::Preview if form.fields.is_empty() => items.len() - 1,
        BuilderMode::Preview => 1 + app.state.preview.active_row_index.min(form.fields.len()),
        _ => app.state.store.selected_index().map_or(0, |i| i + 1),
    };

    let gap = theme.spacing_rows().min(MAX_GAP);
    let heights: Vec<u16> = items
        .iter()
        .map(|item| item_height(item, form, preview, &theme))
        .collect();
    let mut tops = Vec::with_capacity(heights.len());
    let mut y = 0u16;
    for h in &heights {
        tops.push(y);
        y = y.saturating_add(*h).saturating_add(gap);
    }

    let offset = scroll_offset(tops[focus_item], heights[focus_item], inner.height);
    let view_bottom = offset.saturating_add(inner.height);

    for (i, item) in items.iter().enumerate() {
        let top = tops[i];
        if top < offset || top >= view_bottom {
            continue;
        }
        // clip at the bottom edge of the viewport
        let rect = Rect {
            x: inner.x,
            y: inner.y + (top - offset),
            width: inner.width,
            height: heights[i].min(view_bottom - top),
        };
        let is_active = i == focus_item && (mode != BuilderMode::Theme);
        match item {
            CanvasItem::Header => {
                frame.render_widget(Paragraph::new(header_lines(form, &theme)), rect)
            }
            CanvasItem::Empty => frame.render_widget(
                Paragraph::new("No fields yet. Pick one from Available Fields and press Enter.")
                    .style(Style::default().add_modifier(Modifier::DIM)),
                rect,
            ),
            CanvasItem::Field(field) => {
                let ctx = FieldContext {
                    theme: &theme,
                    preview,
                    is_active,
                };
                draw_field(frame, rect, field, &ctx);
            }
            CanvasItem::Submit => {
                let label = form.submit_label();
                let label_width = u16::try_from(label.chars().count()).unwrap_or(u16::MAX);
                let width = label_width.saturating_add(6).min(rect.width);
                render_button(
                    frame,
                    Rect { width, ..rect },
                    label,
                    is_active && mode == BuilderMode::Preview,
                    theme.primary(),
                    theme.is_rounded(),
                );
            }
        }
    }
}

/// First visible row so the item at `top` stays in view. Items taller than
/// the viewport scroll to their top.
fn scroll_offset(top: u16, height: u16, view_height: u16) -> u16 {
    if height > view_height {
        top
    } else {
        top.saturating_add(height).saturating_sub(view_height)
    }
}

fn border_type(theme: &FormTheme) -> BorderType {
    if theme.is_rounded() {
        BorderType::Rounded
    } else {
        BorderType::Plain
    }
}

fn item_height(
    item: &CanvasItem,
    form: &FormData,
    preview: Option<&PreviewState>,
    theme: &FormTheme,
) -> u16 {
    match item {
        CanvasItem::Header => header_lines(form, theme).len() as u16,
        CanvasItem::Empty => 1,
        CanvasItem::Field(field) => {
            let ctx = FieldContext {
                theme,
                preview,
                // a select only expands while previewed and active
                is_active: preview.is_some_and(|p| {
                    p.active_field(form).is_some_and(|f| f.id == field.id)
                }),
            };
            field_height(field, &ctx)
        }
        CanvasItem::Submit => BUTTON_HEIGHT,
    }
}

fn header_lines(form: &FormData, theme: &FormTheme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        form.title.clone(),
        Style::default()
            .fg(theme.primary())
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(description) = form.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(Line::from(description.to_string()));
    }
    lines
}

fn field_height(field: &FormField, ctx: &FieldContext) -> u16 {
    let body = u16::try_from(field_body(field, ctx).len()).unwrap_or(u16::MAX);
    if field.field_type().is_static() {
        body
    } else {
        body.saturating_add(2)
    }
}

fn label_style(ctx: &FieldContext) -> Style {
    let style = Style::default().fg(ctx.theme.text());
    if ctx.theme.is_large_text() {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, ctx: &FieldContext) {
    let body = field_body(field, ctx);

    if field.field_type().is_static() {
        let mut lines = body;
        if ctx.is_active && ctx.preview.is_none() {
            if let Some(first) = lines.first_mut() {
                first.spans.insert(
                    0,
                    Span::styled("▶ ", Style::default().fg(ctx.theme.primary())),
                );
            }
        }
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    let mut title = vec![Span::styled(format!(" {}", field.label()), label_style(ctx))];
    if field.is_required() {
        title.push(Span::styled(
            " *",
            Style::default().fg(ctx.theme.secondary()),
        ));
    }
    title.push(Span::raw(" "));

    let border_style = if ctx.is_active {
        Style::default()
            .fg(ctx.theme.primary())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_type(border_type(ctx.theme))
        .border_style(border_style);

    frame.render_widget(Paragraph::new(body).block(block), area);
}

/// Content lines of a field (inside its box for input types)
fn field_body(field: &FormField, ctx: &FieldContext) -> Vec<Line<'static>> {
    let dim = Style::default().add_modifier(Modifier::DIM);
    let mut lines = Vec::new();

    match field.field_type() {
        FieldType::Heading => {
            lines.push(Line::from(Span::styled(
                field.label().to_string(),
                Style::default()
                    .fg(ctx.theme.primary())
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )));
            if let Some(d) = field.body.description.as_deref() {
                lines.push(Line::from(Span::styled(d.to_string(), dim)));
            }
            return lines;
        }
        FieldType::Paragraph => {
            lines.push(Line::from(Span::styled(
                field.label().to_string(),
                label_style(ctx),
            )));
            if let Some(d) = field.body.description.as_deref() {
                lines.push(Line::from(d.to_string()));
            }
            return lines;
        }
        _ => {}
    }

    if let Some(d) = field.body.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(Line::from(Span::styled(
            d.to_string(),
            dim.add_modifier(Modifier::ITALIC),
        )));
    }

    let field_type = field.field_type();
    if field_type.has_options() {
        lines.extend(option_lines(field, ctx));
    } else {
        lines.push(input_line(field, ctx));
        if field_type == FieldType::Textarea {
            lines.push(Line::default());
            lines.push(Line::default());
        }
    }
    lines
}

fn input_line(field: &FormField, ctx: &FieldContext) -> Line<'static> {
    let answer = ctx.preview.map(|p| p.text(&field.id)).unwrap_or_default();
    let prefix = match field.field_type() {
        FieldType::File => "⇪ ",
        FieldType::Date => "📅 ",
        FieldType::Time => "⏱ ",
        _ => "",
    };

    let mut spans = vec![Span::raw(prefix)];
    if answer.is_empty() {
        let placeholder = display_value(field.body.placeholder.as_deref());
        spans.push(Span::styled(
            placeholder,
            Style::default().add_modifier(Modifier::DIM),
        ));
    } else if field.field_type() == FieldType::Password {
        spans.push(Span::raw(masked(answer)));
    } else {
        spans.push(Span::raw(answer.to_string()));
    }

    if ctx.is_active && ctx.preview.is_some() {
        spans.push(Span::styled("▌", Style::default().fg(ctx.theme.primary())));
    }
    Line::from(spans)
}

fn option_lines(field: &FormField, ctx: &FieldContext) -> Vec<Line<'static>> {
    let cursor = ctx
        .preview
        .filter(|_| ctx.is_active)
        .map(|p| p.option_cursor);
    let chosen = |value: &str| ctx.preview.is_some_and(|p| p.is_chosen(&field.id, value));

    if field.field_type() == FieldType::Select && cursor.is_none() {
        let picked = field
            .options()
            .iter()
            .find(|o| chosen(&o.value))
            .map(|o| Span::raw(o.label.clone()))
            .unwrap_or_else(|| {
                Span::styled(
                    display_value(field.body.placeholder.as_deref()),
                    Style::default().add_modifier(Modifier::DIM),
                )
            });
        return vec![Line::from(vec![picked, Span::raw("  ▾")])];
    }

    field
        .options()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let is_chosen = chosen(&option.value);
            let mark = match (field.field_type(), is_chosen) {
                (FieldType::Checkbox, true) => "☑",
                (FieldType::Checkbox, false) => "☐",
                (FieldType::Radio, true) => "◉",
                (FieldType::Radio, false) => "○",
                (_, true) => "›",
                (_, false) => " ",
            };
            let style = if cursor == Some(i) {
                Style::default()
                    .fg(ctx.theme.secondary())
                    .add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{mark} {}", option.label), style))
        })
        .collect()
}
