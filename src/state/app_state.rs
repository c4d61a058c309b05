//! Application state definitions

use super::editor::{EditorFocus, PalettePanel, PropertiesPanel, SettingsPanel, ThemePanel};
use super::preview::PreviewState;
use super::store::FormStore;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The form being built, plus mode and selection
    pub store: FormStore,

    // Edit mode
    pub focus: EditorFocus,
    pub settings: SettingsPanel,
    pub palette: PalettePanel,
    pub properties: PropertiesPanel,

    // Theme mode
    pub theme_panel: ThemePanel,

    // Preview mode
    pub preview: PreviewState,

    /// Last share URL handed out, shown in the status bar
    pub last_share_url: Option<String>,
}

impl AppState {
    /// Re-derive panel rows from the store after any mutation
    pub fn sync_panels(&mut self) {
        self.properties.sync(self.store.selected_field());
        self.preview.retain_valid(self.store.form());
        self.store.notices.prune();
    }

    /// Move canvas selection down
    pub fn select_next_field(&mut self) {
        let fields = &self.store.form().fields;
        if fields.is_empty() {
            return;
        }
        let next = match self.store.selected_index() {
            Some(i) if i + 1 < fields.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        let id = fields[next].id.clone();
        self.store.set_selected_field_id(Some(id));
    }

    /// Move canvas selection up
    pub fn select_prev_field(&mut self) {
        let fields = &self.store.form().fields;
        if fields.is_empty() {
            return;
        }
        let prev = match self.store.selected_index() {
            Some(i) => i.saturating_sub(1),
            None => fields.len() - 1,
        };
        let id = fields[prev].id.clone();
        self.store.set_selected_field_id(Some(id));
    }

    /// Move the selected field one slot up or down
    pub fn shift_selected_field(&mut self, down: bool) -> bool {
        let Some(from) = self.store.selected_index() else {
            return false;
        };
        let to = if down {
            from + 1
        } else {
            match from.checked_sub(1) {
                Some(to) => to,
                None => return false,
            }
        };
        self.store.move_field(from, to)
    }
}
