//! Application state and core logic

use crate::backend::{FormBackend, NewResponse, NewShare, RestBackend};
use crate::config::BuilderConfig;
use crate::platform::is_shortcut;
use crate::state::editor::{
    add_option, remove_option, set_option_label, set_option_value, EditorFocus, Panel,
    PropertyRow, TextEdit,
};
use crate::state::form::{FieldPatch, FieldType};
use crate::state::templates::template_for;
use crate::state::{AppState, BuilderMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Backend for responses and share links
    backend: Box<dyn FormBackend>,
    /// Origin used to build share URLs
    share_origin: String,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from configuration
    pub fn new(config: &BuilderConfig) -> Self {
        tracing::info!(backend = config.backend_url(), "starting form builder");
        Self::with_backend(Box::new(RestBackend::new(config)), config.share_origin())
    }

    /// Create an App with an explicit backend
    pub fn with_backend(backend: Box<dyn FormBackend>, share_origin: &str) -> Self {
        let mut state = AppState::default();
        state.sync_panels();
        Self {
            state,
            backend,
            share_origin: share_origin.to_string(),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Drop expired notices; called once per frame
    pub fn tick(&mut self) {
        self.state.store.notices.prune();
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.handle_global_key(key).await? {
            self.state.sync_panels();
            return Ok(());
        }

        match self.state.store.mode() {
            BuilderMode::Edit => self.handle_edit_key(key),
            BuilderMode::Preview => self.handle_preview_key(key).await?,
            BuilderMode::Theme => self.handle_theme_key(key),
        }

        self.state.sync_panels();
        Ok(())
    }

    /// Mode switching, reset, share, quit. Returns true when consumed.
    async fn handle_global_key(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::F(1) => self.state.store.set_mode(BuilderMode::Edit),
            KeyCode::F(2) => self.state.store.set_mode(BuilderMode::Preview),
            KeyCode::F(3) => self.state.store.set_mode(BuilderMode::Theme),
            KeyCode::F(10) => self.quit = true,
            KeyCode::Char('r') if is_shortcut(key.modifiers) => {
                self.state.store.reset_form();
                self.state.preview.clear();
            }
            KeyCode::Char('l') if is_shortcut(key.modifiers) => self.share().await?,
            KeyCode::Char('s')
                if is_shortcut(key.modifiers)
                    && self.state.store.mode() == BuilderMode::Preview =>
            {
                self.submit().await?
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    // Edit mode

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => {
                self.state.focus = self.state.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.state.focus = self.state.focus.prev();
                return;
            }
            _ => {}
        }

        match self.state.focus {
            EditorFocus::Settings => self.handle_settings_key(key),
            EditorFocus::Palette => self.handle_palette_key(key),
            EditorFocus::Canvas => self.handle_canvas_key(key),
            EditorFocus::Properties => self.handle_properties_key(key),
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.state.settings.prev_row(),
            KeyCode::Down | KeyCode::Enter => self.state.settings.next_row(),
            _ => {
                let Some(edit) = text_edit_for(key) else {
                    return;
                };
                let row = self.state.settings.active();
                if let Some(value) = edit.apply(&row.value(self.state.store.form())) {
                    self.state.store.update_form_settings(row.patch(value));
                }
            }
        }
    }

    fn handle_palette_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.state.palette.prev_row(),
            KeyCode::Down => self.state.palette.next_row(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let field_type = self.state.palette.active();
                self.add_field(field_type);
            }
            _ => {}
        }
    }

    /// Add a field of `field_type` from its template
    pub fn add_field(&mut self, field_type: FieldType) -> String {
        self.state.store.add_field(template_for(field_type))
    }

    fn handle_canvas_key(&mut self, key: KeyEvent) {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Up if shift => {
                self.state.shift_selected_field(false);
            }
            KeyCode::Down if shift => {
                self.state.shift_selected_field(true);
            }
            KeyCode::Char('K') => {
                self.state.shift_selected_field(false);
            }
            KeyCode::Char('J') => {
                self.state.shift_selected_field(true);
            }
            KeyCode::Up | KeyCode::Char('k') => self.state.select_prev_field(),
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next_field(),
            KeyCode::Enter => {
                if self.state.store.selected_field().is_some() {
                    self.state.focus = EditorFocus::Properties;
                }
            }
            KeyCode::Delete | KeyCode::Char('d') => self.delete_selected_field(),
            KeyCode::Esc => {
                if self.state.store.selected_field_id().is_some() {
                    self.state.store.set_selected_field_id(None);
                } else {
                    self.state.focus = EditorFocus::Palette;
                }
            }
            _ => {}
        }
    }

    fn delete_selected_field(&mut self) {
        if let Some(id) = self.state.store.selected_field().map(|f| f.id.clone()) {
            self.state.store.remove_field(&id);
        }
    }

    fn handle_properties_key(&mut self, key: KeyEvent) {
        self.state.properties.sync(self.state.store.selected_field());
        let Some(field) = self.state.store.selected_field().cloned() else {
            if key.code == KeyCode::Esc {
                self.state.focus = EditorFocus::Canvas;
            }
            return;
        };
        let Some(row) = self.state.properties.active() else {
            return;
        };

        match key.code {
            KeyCode::Up => return self.state.properties.prev_row(),
            KeyCode::Down => return self.state.properties.next_row(),
            KeyCode::Esc => {
                self.state.focus = EditorFocus::Canvas;
                return;
            }
            _ => {}
        }

        let option_id = row
            .option_index()
            .and_then(|i| field.options().get(i))
            .map(|o| o.id.clone());

        let result = match row {
            PropertyRow::Required => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => Ok(Some(FieldPatch {
                    required: Some(!field.is_required()),
                    ..Default::default()
                })),
                _ => Ok(None),
            },
            PropertyRow::AddOption => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => add_option(&field).map(Some),
                _ => Ok(None),
            },
            PropertyRow::DeleteField => {
                if key.code == KeyCode::Enter {
                    self.state.store.remove_field(&field.id);
                    self.state.focus = EditorFocus::Canvas;
                }
                return;
            }
            PropertyRow::OptionLabel(_) | PropertyRow::OptionValue(_)
                if key.code == KeyCode::Delete =>
            {
                match option_id.as_deref() {
                    Some(option_id) => remove_option(&field, option_id).map(Some),
                    None => Ok(None),
                }
            }
            _ => {
                let Some(edit) = text_edit_for(key) else {
                    return;
                };
                let Some(current) = row.text_value(&field) else {
                    return;
                };
                let Some(value) = edit.apply(&current) else {
                    return;
                };
                match (row, option_id.as_deref()) {
                    (PropertyRow::Label, _) => Ok(Some(FieldPatch {
                        label: Some(value),
                        ..Default::default()
                    })),
                    (PropertyRow::Placeholder, _) => Ok(Some(FieldPatch {
                        placeholder: Some(value),
                        ..Default::default()
                    })),
                    (PropertyRow::Description, _) => Ok(Some(FieldPatch {
                        description: Some(value),
                        ..Default::default()
                    })),
                    (PropertyRow::OptionLabel(_), Some(option_id)) => {
                        set_option_label(&field, option_id, value).map(Some)
                    }
                    (PropertyRow::OptionValue(_), Some(option_id)) => {
                        set_option_value(&field, option_id, value).map(Some)
                    }
                    _ => Ok(None),
                }
            }
        };

        match result {
            Ok(Some(patch)) => self.state.store.update_field(&field.id, patch),
            Ok(None) => {}
            Err(e) => self.state.store.notices.error(e.to_string()),
        }
    }

    // Theme mode

    fn handle_theme_key(&mut self, key: KeyEvent) {
        let row = self.state.theme_panel.active();
        let theme = self.state.store.form().theme.clone().unwrap_or_default();
        match key.code {
            KeyCode::Up => self.state.theme_panel.prev_row(),
            KeyCode::Down | KeyCode::Tab => self.state.theme_panel.next_row(),
            KeyCode::BackTab => self.state.theme_panel.prev_row(),
            KeyCode::Left | KeyCode::Right if !row.is_color() => {
                if let Some(value) = row.cycle(&theme, key.code == KeyCode::Right) {
                    self.state.store.update_theme(row.patch(value));
                }
            }
            _ if row.is_color() => {
                let Some(edit) = text_edit_for(key) else {
                    return;
                };
                if let Some(value) = edit.apply(row.value(&theme)) {
                    self.state.store.update_theme(row.patch(value));
                }
            }
            _ => {}
        }
    }

    // Preview mode

    async fn handle_preview_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Up | KeyCode::BackTab => {
                self.state.preview.prev_row(self.state.store.form());
                return Ok(());
            }
            KeyCode::Down | KeyCode::Tab => {
                self.state.preview.next_row(self.state.store.form());
                return Ok(());
            }
            _ => {}
        }

        if self.state.preview.is_submit_active(self.state.store.form()) {
            if key.code == KeyCode::Enter {
                self.submit().await?;
            }
            return Ok(());
        }

        let Some(field) = self
            .state
            .preview
            .active_field(self.state.store.form())
            .cloned()
        else {
            return Ok(());
        };
        if field.field_type().has_options() {
            match key.code {
                KeyCode::Left => self.state.preview.prev_option(&field),
                KeyCode::Right => self.state.preview.next_option(&field),
                KeyCode::Char(' ') | KeyCode::Enter => self.state.preview.choose(&field),
                _ => {}
            }
        } else if key.code == KeyCode::Enter {
            self.state.preview.next_row(self.state.store.form());
        } else if let Some(edit) = text_edit_for(key) {
            self.state.preview.edit_text(&field, edit);
        }
        Ok(())
    }

    /// Send the preview answers as a response record
    pub async fn submit(&mut self) -> Result<()> {
        let form = self.state.store.form();
        if form.fields.is_empty() {
            tracing::debug!("submit ignored: form has no fields");
            return Ok(());
        }
        let response = NewResponse {
            form_id: form.id.clone(),
            responses: self.state.preview.responses(form),
        };
        tracing::info!(form_id = %response.form_id, answers = response.responses.len(), "submitting form");

        match self.backend.insert_response(response).await {
            Ok(()) => {
                self.state.preview.clear();
                self.state
                    .store
                    .notices
                    .success("Form submitted successfully!");
            }
            Err(e) => {
                tracing::warn!("submit failed: {e}");
                self.state
                    .store
                    .notices
                    .error(format!("Failed to submit form: {e}"));
            }
        }
        Ok(())
    }

    /// Create a share record and copy its URL to the clipboard
    pub async fn share(&mut self) -> Result<()> {
        let share = NewShare {
            form_id: self.state.store.form().id.clone(),
        };

        let record = match self.backend.insert_share(share).await {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("share failed: {e}");
                self.state
                    .store
                    .notices
                    .error(format!("Failed to create share link: {e}"));
                return Ok(());
            }
        };

        let url = record.url(&self.share_origin);
        tracing::info!(%url, created_at = ?record.created_at, expires_at = ?record.expires_at, "share link created");
        match self.copy_to_clipboard(&url) {
            Ok(()) => self
                .state
                .store
                .notices
                .success("Share link copied to clipboard"),
            Err(e) => {
                tracing::warn!("clipboard unavailable: {e}");
                self.state
                    .store
                    .notices
                    .error(format!("Share link created but not copied: {e}"));
            }
        }
        self.state.last_share_url = Some(url);
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

/// Map a key to a text edit; control/alt chords are not text
fn text_edit_for(key: KeyEvent) -> Option<TextEdit> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
        {
            Some(TextEdit::Insert(c))
        }
        KeyCode::Backspace => Some(TextEdit::Backspace),
        KeyCode::Delete => Some(TextEdit::Clear),
        _ => None,
    }
}
