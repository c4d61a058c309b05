//! Layout components (header, body split, status bar)

use super::components::{render_tab_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SHARE_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::editor::EditorFocus;
use crate::state::{BuilderMode, Notice, NoticeLevel};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of each mode tab in the header
const TAB_WIDTH: u16 = 14;

/// Width of the edit-mode side panels
const SIDE_PANEL_WIDTH: u16 = 34;

/// Split the screen into header and body; the bottom line is the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Header
            Constraint::Min(0),                // Body
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Edit mode: settings and palette | canvas | properties
pub fn split_edit(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDE_PANEL_WIDTH),
            Constraint::Min(30),
            Constraint::Length(SIDE_PANEL_WIDTH),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Theme mode: theme rows | canvas
pub fn split_theme(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDE_PANEL_WIDTH + 6), Constraint::Min(30)])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw mode tabs and the form title
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints: Vec<Constraint> = BuilderMode::ALL
        .iter()
        .map(|_| Constraint::Length(TAB_WIDTH))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let current = app.state.store.mode();
    for (idx, mode) in BuilderMode::ALL.iter().enumerate() {
        let key = format!("F{}", idx + 1);
        render_tab_button(frame, chunks[idx], &key, mode.label(), *mode == current);
    }

    let title_area = chunks[BuilderMode::ALL.len()];
    let title = Paragraph::new(vec![
        Line::default(),
        Line::from(vec![
            Span::styled(" Form Canvas ", Style::default().fg(Color::Cyan)),
            Span::styled(
                app.state.store.form().title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
    ]);
    frame.render_widget(title, title_area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::raw(" ")];

    // Latest notice wins over hints
    match app.state.store.notices.latest() {
        Some(notice) => spans.push(notice_span(notice)),
        None => spans.push(Span::styled(
            get_mode_hints(app.state.store.mode(), app.state.focus),
            Style::default().fg(Color::Gray),
        )),
    }

    if app.state.store.mode() == BuilderMode::Preview {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{} answered", app.state.preview.answered_count()),
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(url) = &app.state.last_share_url {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("🔗 {url}"),
            Style::default().fg(Color::Blue),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

fn notice_span(notice: &Notice) -> Span<'_> {
    let (icon, color) = match notice.level {
        NoticeLevel::Success => ("✓", Color::Green),
        NoticeLevel::Error => ("✗", Color::Red),
    };
    Span::styled(
        format!("{icon} {}", notice.message),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// Get keyboard hints for the current mode and focus
fn get_mode_hints(mode: BuilderMode, focus: EditorFocus) -> String {
    match mode {
        BuilderMode::Edit => {
            let pane = match focus {
                EditorFocus::Settings => "↑/↓:row  type:edit  Del:clear",
                EditorFocus::Palette => "↑/↓:nav  Enter:add field",
                EditorFocus::Canvas => "↑/↓:select  Shift+↑/↓:move  d:delete  Enter:edit",
                EditorFocus::Properties => "↑/↓:row  type:edit  Space:toggle  Del:remove option",
            };
            format!("Tab:panel  {pane}  {SHARE_SHORTCUT}:share  {RESET_SHORTCUT}:reset")
        }
        BuilderMode::Preview => format!(
            "↑/↓:field  ←/→:option  Space:choose  {SUBMIT_SHORTCUT}:submit  {SHARE_SHORTCUT}:share"
        ),
        BuilderMode::Theme => {
            format!("↑/↓:row  type:hex colour  ←/→:preset  {SHARE_SHORTCUT}:share")
        }
    }
}
