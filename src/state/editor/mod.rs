//! Editor panel layer
//!
//! Navigation state for the sidebar panels plus the option actions of the
//! property editor.

mod options;
mod panels;
mod text;

pub use options::{add_option, remove_option, set_option_label, set_option_value, OptionError};
pub use panels::{
    EditorFocus, PalettePanel, Panel, PropertiesPanel, PropertyRow, SettingsPanel, SettingsRow,
    ThemePanel, ThemeRow,
};
pub use text::{display_value, masked, TextEdit};
