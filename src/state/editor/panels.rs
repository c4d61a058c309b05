//! Cursor state for the editing panels
//!
//! Panels only remember which row is active. Values are always read from
//! and written to the `FormStore`.

use crate::state::form::{
    FieldType, FormData, FormField, FormSettingsPatch, FormTheme, ThemePatch,
};

/// Trait for common panel navigation
pub trait Panel {
    fn row_count(&self) -> usize;
    fn active_row(&self) -> usize;
    fn set_active_row(&mut self, index: usize);
    fn next_row(&mut self) {
        let count = self.row_count();
        if count == 0 {
            return;
        }
        let current = self.active_row();
        self.set_active_row((current + 1) % count);
    }
    fn prev_row(&mut self) {
        let count = self.row_count();
        if count == 0 {
            return;
        }
        let current = self.active_row();
        if current == 0 {
            self.set_active_row(count - 1);
        } else {
            self.set_active_row(current - 1);
        }
    }
}

/// Which pane receives keys in edit mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorFocus {
    Settings,
    #[default]
    Palette,
    Canvas,
    Properties,
}

impl EditorFocus {
    pub fn next(&self) -> Self {
        match self {
            Self::Settings => Self::Palette,
            Self::Palette => Self::Canvas,
            Self::Canvas => Self::Properties,
            Self::Properties => Self::Settings,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Settings => Self::Properties,
            Self::Palette => Self::Settings,
            Self::Canvas => Self::Palette,
            Self::Properties => Self::Canvas,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Settings => "Form Settings",
            Self::Palette => "Available Fields",
            Self::Canvas => "Canvas",
            Self::Properties => "Field Properties",
        }
    }
}

// Form settings

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Title,
    Description,
    SubmitText,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 3] = [Self::Title, Self::Description, Self::SubmitText];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Form Title",
            Self::Description => "Form Description",
            Self::SubmitText => "Submit Button Text",
        }
    }

    pub fn value(&self, form: &FormData) -> String {
        match self {
            Self::Title => form.title.clone(),
            Self::Description => form.description.clone().unwrap_or_default(),
            Self::SubmitText => form.submit_label().to_string(),
        }
    }

    pub fn patch(&self, value: String) -> FormSettingsPatch {
        match self {
            Self::Title => FormSettingsPatch {
                title: Some(value),
                ..Default::default()
            },
            Self::Description => FormSettingsPatch {
                description: Some(value),
                ..Default::default()
            },
            Self::SubmitText => FormSettingsPatch {
                submit_text: Some(value),
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SettingsPanel {
    pub active_row_index: usize,
}

impl SettingsPanel {
    pub fn active(&self) -> SettingsRow {
        SettingsRow::ALL[self.active_row_index.min(SettingsRow::ALL.len() - 1)]
    }
}

impl Panel for SettingsPanel {
    fn row_count(&self) -> usize {
        SettingsRow::ALL.len()
    }
    fn active_row(&self) -> usize {
        self.active_row_index
    }
    fn set_active_row(&mut self, index: usize) {
        self.active_row_index = index.min(SettingsRow::ALL.len() - 1);
    }
}

// Field palette

#[derive(Debug, Clone, Default)]
pub struct PalettePanel {
    pub active_row_index: usize,
}

impl PalettePanel {
    pub fn active(&self) -> FieldType {
        FieldType::ALL[self.active_row_index.min(FieldType::ALL.len() - 1)]
    }
}

impl Panel for PalettePanel {
    fn row_count(&self) -> usize {
        FieldType::ALL.len()
    }
    fn active_row(&self) -> usize {
        self.active_row_index
    }
    fn set_active_row(&mut self, index: usize) {
        self.active_row_index = index.min(FieldType::ALL.len() - 1);
    }
}

// Field properties

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyRow {
    Label,
    Placeholder,
    Description,
    Required,
    OptionLabel(usize),
    OptionValue(usize),
    AddOption,
    DeleteField,
}

impl PropertyRow {
    /// Rows the property panel shows for `field`
    pub fn rows_for(field: &FormField) -> Vec<PropertyRow> {
        let field_type = field.field_type();
        let mut rows = vec![PropertyRow::Label];
        if field_type.has_placeholder() {
            rows.push(PropertyRow::Placeholder);
        }
        rows.push(PropertyRow::Description);
        if !field_type.is_static() {
            rows.push(PropertyRow::Required);
        }
        if field_type.has_options() && field.body.options.is_some() {
            for i in 0..field.options().len() {
                rows.push(PropertyRow::OptionLabel(i));
                rows.push(PropertyRow::OptionValue(i));
            }
            rows.push(PropertyRow::AddOption);
        }
        rows.push(PropertyRow::DeleteField);
        rows
    }

    pub fn label(&self) -> String {
        match self {
            Self::Label => "Label".to_string(),
            Self::Placeholder => "Placeholder".to_string(),
            Self::Description => "Description".to_string(),
            Self::Required => "Required".to_string(),
            Self::OptionLabel(i) => format!("Option {} label", i + 1),
            Self::OptionValue(i) => format!("Option {} value", i + 1),
            Self::AddOption => "Add Option".to_string(),
            Self::DeleteField => "Delete Field".to_string(),
        }
    }

    /// Text value of an editable row, `None` for toggles and buttons
    pub fn text_value(&self, field: &FormField) -> Option<String> {
        match self {
            Self::Label => Some(field.body.label.clone()),
            Self::Placeholder => Some(field.body.placeholder.clone().unwrap_or_default()),
            Self::Description => Some(field.body.description.clone().unwrap_or_default()),
            Self::OptionLabel(i) => field.options().get(*i).map(|o| o.label.clone()),
            Self::OptionValue(i) => field.options().get(*i).map(|o| o.value.clone()),
            Self::Required | Self::AddOption | Self::DeleteField => None,
        }
    }

    /// Option index the row belongs to
    pub fn option_index(&self) -> Option<usize> {
        match self {
            Self::OptionLabel(i) | Self::OptionValue(i) => Some(*i),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PropertiesPanel {
    pub rows: Vec<PropertyRow>,
    pub active_row_index: usize,
    field_id: Option<String>,
}

impl PropertiesPanel {
    /// Rebuild rows for the current selection; a new field starts at the top
    pub fn sync(&mut self, field: Option<&FormField>) {
        let id = field.map(|f| f.id.clone());
        if id != self.field_id {
            self.active_row_index = 0;
            self.field_id = id;
        }
        self.rows = field.map(PropertyRow::rows_for).unwrap_or_default();
        if self.active_row_index >= self.rows.len() {
            self.active_row_index = self.rows.len().saturating_sub(1);
        }
    }

    pub fn active(&self) -> Option<PropertyRow> {
        self.rows.get(self.active_row_index).copied()
    }
}

impl Panel for PropertiesPanel {
    fn row_count(&self) -> usize {
        self.rows.len()
    }
    fn active_row(&self) -> usize {
        self.active_row_index
    }
    fn set_active_row(&mut self, index: usize) {
        self.active_row_index = index.min(self.rows.len().saturating_sub(1));
    }
}

// Theme

pub const FONT_FAMILIES: &[(&str, &str)] = &[
    ("Inter, sans-serif", "Inter"),
    ("Arial, sans-serif", "Arial"),
    ("Georgia, serif", "Georgia"),
    ("\"Times New Roman\", serif", "Times New Roman"),
    ("Verdana, sans-serif", "Verdana"),
    ("Roboto, sans-serif", "Roboto"),
    ("monospace", "Monospace"),
];

pub const FONT_SIZES: &[(&str, &str)] = &[
    ("12px", "Small (12px)"),
    ("14px", "Medium (14px)"),
    ("16px", "Default (16px)"),
    ("18px", "Large (18px)"),
    ("20px", "Extra Large (20px)"),
];

pub const BORDER_RADII: &[(&str, &str)] = &[
    ("0", "None"),
    ("4px", "Small"),
    ("8px", "Medium"),
    ("12px", "Large"),
    ("16px", "Extra Large"),
    ("24px", "Rounded"),
];

pub const SPACINGS: &[(&str, &str)] = &[
    ("8px", "Tight"),
    ("12px", "Compact"),
    ("16px", "Default"),
    ("20px", "Comfortable"),
    ("24px", "Spacious"),
    ("32px", "Very Spacious"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeRow {
    PrimaryColor,
    SecondaryColor,
    BackgroundColor,
    TextColor,
    FontFamily,
    FontSize,
    BorderRadius,
    Spacing,
}

impl ThemeRow {
    pub const ALL: [ThemeRow; 8] = [
        Self::PrimaryColor,
        Self::SecondaryColor,
        Self::BackgroundColor,
        Self::TextColor,
        Self::FontFamily,
        Self::FontSize,
        Self::BorderRadius,
        Self::Spacing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::PrimaryColor => "Primary Color",
            Self::SecondaryColor => "Secondary Color",
            Self::BackgroundColor => "Background Color",
            Self::TextColor => "Text Color",
            Self::FontFamily => "Font Family",
            Self::FontSize => "Font Size",
            Self::BorderRadius => "Border Radius",
            Self::Spacing => "Field Spacing",
        }
    }

    /// Preset choices for select rows; colour rows are free text
    pub fn presets(&self) -> Option<&'static [(&'static str, &'static str)]> {
        match self {
            Self::FontFamily => Some(FONT_FAMILIES),
            Self::FontSize => Some(FONT_SIZES),
            Self::BorderRadius => Some(BORDER_RADII),
            Self::Spacing => Some(SPACINGS),
            _ => None,
        }
    }

    pub fn is_color(&self) -> bool {
        self.presets().is_none()
    }

    pub fn value<'a>(&self, theme: &'a FormTheme) -> &'a str {
        match self {
            Self::PrimaryColor => &theme.primary_color,
            Self::SecondaryColor => &theme.secondary_color,
            Self::BackgroundColor => &theme.background_color,
            Self::TextColor => &theme.text_color,
            Self::FontFamily => &theme.font_family,
            Self::FontSize => &theme.font_size,
            Self::BorderRadius => &theme.border_radius,
            Self::Spacing => &theme.spacing,
        }
    }

    /// Human label for the current value of a preset row
    pub fn display(&self, theme: &FormTheme) -> String {
        let value = self.value(theme);
        self.presets()
            .and_then(|p| p.iter().find(|(v, _)| *v == value))
            .map(|(_, label)| label.to_string())
            .unwrap_or_else(|| value.to_string())
    }

    /// Next (or previous) preset after the current value. Unknown values
    /// start from the first preset.
    pub fn cycle(&self, theme: &FormTheme, forward: bool) -> Option<String> {
        let presets = self.presets()?;
        let current = self.value(theme);
        let next = match presets.iter().position(|(v, _)| *v == current) {
            Some(i) if forward => (i + 1) % presets.len(),
            Some(0) => presets.len() - 1,
            Some(i) => i - 1,
            None => 0,
        };
        Some(presets[next].0.to_string())
    }

    pub fn patch(&self, value: String) -> ThemePatch {
        let mut patch = ThemePatch::default();
        let slot = match self {
            Self::PrimaryColor => &mut patch.primary_color,
            Self::SecondaryColor => &mut patch.secondary_color,
            Self::BackgroundColor => &mut patch.background_color,
            Self::TextColor => &mut patch.text_color,
            Self::FontFamily => &mut patch.font_family,
            Self::FontSize => &mut patch.font_size,
            Self::BorderRadius => &mut patch.border_radius,
            Self::Spacing => &mut patch.spacing,
        };
        *slot = Some(value);
        patch
    }
}

#[derive(Debug, Clone, Default)]
pub struct ThemePanel {
    pub active_row_index: usize,
}

impl ThemePanel {
    pub fn active(&self) -> ThemeRow {
        ThemeRow::ALL[self.active_row_index.min(ThemeRow::ALL.len() - 1)]
    }
}

impl Panel for ThemePanel {
    fn row_count(&self) -> usize {
        ThemeRow::ALL.len()
    }
    fn active_row(&self) -> usize {
        self.active_row_index
    }
    fn set_active_row(&mut self, index: usize) {
        self.active_row_index = index.min(ThemeRow::ALL.len() - 1);
    }
}
