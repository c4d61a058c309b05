//! UI module for rendering the TUI

mod canvas;
mod components;
mod field_renderer;
mod layout;
mod properties;
mod sidebar;
mod theme_panel;
mod widgets;

use crate::app::App;
use crate::state::BuilderMode;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, body_area) = layout::create_layout(area);
    layout::draw_header(frame, header_area, app);

    // Draw main content based on current mode
    match app.state.store.mode() {
        BuilderMode::Edit => {
            let (sidebar_area, canvas_area, properties_area) = layout::split_edit(body_area);
            sidebar::draw(frame, sidebar_area, app);
            canvas::draw(frame, canvas_area, app);
            properties::draw(frame, properties_area, app);
        }
        BuilderMode::Preview => canvas::draw(frame, body_area, app),
        BuilderMode::Theme => {
            let (theme_area, canvas_area) = layout::split_theme(body_area);
            theme_panel::draw(frame, theme_area, app);
            canvas::draw(frame, canvas_area, app);
        }
    }

    layout::draw_status_bar(frame, app);
}
