//! Form aggregate definitions

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Generate a fresh identifier for forms, fields and options
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// The closed set of field types a form can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Textarea,
    Number,
    Email,
    Password,
    Checkbox,
    Radio,
    Select,
    Date,
    Time,
    File,
    Heading,
    Paragraph,
}

impl FieldType {
    /// Palette order
    pub const ALL: [FieldType; 13] = [
        FieldType::Text,
        FieldType::Textarea,
        FieldType::Number,
        FieldType::Email,
        FieldType::Password,
        FieldType::Checkbox,
        FieldType::Radio,
        FieldType::Select,
        FieldType::Date,
        FieldType::Time,
        FieldType::File,
        FieldType::Heading,
        FieldType::Paragraph,
    ];

    /// Wire name, as stored in `type`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Email => "email",
            Self::Password => "password",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Select => "select",
            Self::Date => "date",
            Self::Time => "time",
            Self::File => "file",
            Self::Heading => "heading",
            Self::Paragraph => "paragraph",
        }
    }

    /// Label shown in the field palette
    pub fn palette_label(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Textarea => "Textarea",
            Self::Number => "Number",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::Checkbox => "Checkbox",
            Self::Radio => "Radio",
            Self::Select => "Dropdown",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::File => "File Upload",
            Self::Heading => "Heading",
            Self::Paragraph => "Paragraph",
        }
    }

    /// Single-glyph icon for lists
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Text => "T",
            Self::Textarea => "¶",
            Self::Number => "#",
            Self::Email => "@",
            Self::Password => "*",
            Self::Checkbox => "☑",
            Self::Radio => "◉",
            Self::Select => "▾",
            Self::Date => "D",
            Self::Time => "⏱",
            Self::File => "⇪",
            Self::Heading => "H",
            Self::Paragraph => "≡",
        }
    }

    /// Checkbox, radio and select carry an option list
    pub fn has_options(&self) -> bool {
        matches!(self, Self::Checkbox | Self::Radio | Self::Select)
    }

    /// Heading and paragraph are static content, not inputs
    pub fn is_static(&self) -> bool {
        matches!(self, Self::Heading | Self::Paragraph)
    }

    /// Types whose placeholder is editable in the property panel
    pub fn has_placeholder(&self) -> bool {
        matches!(
            self,
            Self::Text
                | Self::Textarea
                | Self::Email
                | Self::Password
                | Self::Number
                | Self::Date
                | Self::Time
                | Self::Select
        )
    }
}

/// One selectable choice of a checkbox, radio or select field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub id: String,
    pub label: String,
    pub value: String,
}

impl FieldOption {
    /// Placeholder option `Option N` / `optionN` with a fresh id
    pub fn numbered(n: usize) -> Self {
        Self {
            id: new_id(),
            label: format!("Option {n}"),
            value: format!("option{n}"),
        }
    }
}

/// Kind of a declarative validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleKind {
    Required,
    Min,
    Max,
    MinLength,
    MaxLength,
    Pattern,
    Email,
}

impl RuleKind {
    /// Wire name, as stored in `type`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Min => "min",
            Self::Max => "max",
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
            Self::Pattern => "pattern",
            Self::Email => "email",
        }
    }
}

/// Scalar carried by rules and default values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    /// Kept as written, so `8` stays an integer on the wire
    Number(serde_json::Number),
    Text(String),
}

/// Declarative validation metadata. Never enforced by the builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRule {
    #[serde(rename = "type")]
    pub kind: RuleKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Scalar>,
    pub message: String,
}

impl ValidationRule {
    pub fn new(kind: RuleKind, message: &str) -> Self {
        Self {
            kind,
            value: None,
            message: message.to_string(),
        }
    }

    pub fn with_value(kind: RuleKind, value: Scalar, message: &str) -> Self {
        Self {
            kind,
            value: Some(value),
            message: message.to_string(),
        }
    }
}

/// Passthrough default value of a field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    List(Vec<String>),
}

/// Field body shared by stored fields and templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldTemplate {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DefaultValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<Vec<ValidationRule>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<HashMap<String, String>>,
}

/// One element of a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub id: String,
    #[serde(flatten)]
    pub body: FieldTemplate,
}

impl FormField {
    pub fn field_type(&self) -> FieldType {
        self.body.field_type
    }

    pub fn label(&self) -> &str {
        &self.body.label
    }

    pub fn is_required(&self) -> bool {
        self.body.required.unwrap_or(false)
    }

    pub fn options(&self) -> &[FieldOption] {
        self.body.options.as_deref().unwrap_or(&[])
    }

    pub fn rules(&self) -> &[ValidationRule] {
        self.body.validation.as_deref().unwrap_or(&[])
    }
}

/// Partial update for a field. `id` is deliberately absent.
///
/// `None` leaves a key unchanged, so a patch cannot unset an optional key.
/// Set it to an empty value instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldPatch {
    pub field_type: Option<FieldType>,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub description: Option<String>,
    pub required: Option<bool>,
    pub options: Option<Vec<FieldOption>>,
    pub default_value: Option<DefaultValue>,
    pub validation: Option<Vec<ValidationRule>>,
    pub class_name: Option<String>,
    pub style: Option<HashMap<String, String>>,
}

impl FieldPatch {
    /// Shallow merge: every key present in the patch replaces the field's key
    pub fn apply_to(self, body: &mut FieldTemplate) {
        if let Some(field_type) = self.field_type {
            body.field_type = field_type;
        }
        if let Some(label) = self.label {
            body.label = label;
        }
        if self.placeholder.is_some() {
            body.placeholder = self.placeholder;
        }
        if self.description.is_some() {
            body.description = self.description;
        }
        if self.required.is_some() {
            body.required = self.required;
        }
        if self.options.is_some() {
            body.options = self.options;
        }
        if self.default_value.is_some() {
            body.default_value = self.default_value;
        }
        if self.validation.is_some() {
            body.validation = self.validation;
        }
        if self.class_name.is_some() {
            body.class_name = self.class_name;
        }
        if self.style.is_some() {
            body.style = self.style;
        }
    }
}

/// Presentational parameters applied to the rendered form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormTheme {
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub text_color: String,
    pub font_family: String,
    pub font_size: String,
    pub border_radius: String,
    pub spacing: String,
}

impl Default for FormTheme {
    fn default() -> Self {
        Self {
            primary_color: "#6750A4".to_string(),
            secondary_color: "#00A3A1".to_string(),
            background_color: "#F8FAFC".to_string(),
            text_color: "#1E293B".to_string(),
            font_family: "Inter, sans-serif".to_string(),
            font_size: "16px".to_string(),
            border_radius: "8px".to_string(),
            spacing: "16px".to_string(),
        }
    }
}

impl FormTheme {
    pub fn primary(&self) -> Color {
        parse_hex_color(&self.primary_color).unwrap_or(Color::Magenta)
    }

    pub fn secondary(&self) -> Color {
        parse_hex_color(&self.secondary_color).unwrap_or(Color::Cyan)
    }

    pub fn background(&self) -> Color {
        parse_hex_color(&self.background_color).unwrap_or(Color::Reset)
    }

    pub fn text(&self) -> Color {
        parse_hex_color(&self.text_color).unwrap_or(Color::Reset)
    }

    /// Blank rows between fields: one row per 8px of spacing
    pub fn spacing_rows(&self) -> u16 {
        px_value(&self.spacing).map(|px| px / 8).unwrap_or(2)
    }

    /// Any non-zero radius renders rounded borders
    pub fn is_rounded(&self) -> bool {
        px_value(&self.border_radius).is_some_and(|px| px > 0)
    }

    /// Large font sizes render labels bold
    pub fn is_large_text(&self) -> bool {
        px_value(&self.font_size).is_some_and(|px| px >= 18)
    }
}

/// Partial update for a theme
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemePatch {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<String>,
    pub border_radius: Option<String>,
    pub spacing: Option<String>,
}

impl ThemePatch {
    pub fn apply_to(self, theme: &mut FormTheme) {
        let slots = [
            (self.primary_color, &mut theme.primary_color),
            (self.secondary_color, &mut theme.secondary_color),
            (self.background_color, &mut theme.background_color),
            (self.text_color, &mut theme.text_color),
            (self.font_family, &mut theme.font_family),
            (self.font_size, &mut theme.font_size),
            (self.border_radius, &mut theme.border_radius),
            (self.spacing, &mut theme.spacing),
        ];
        for (value, slot) in slots {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

/// The form aggregate root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fields: Vec<FormField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<FormTheme>,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            id: new_id(),
            title: "Untitled Form".to_string(),
            description: Some("This is a sample form. Start adding fields!".to_string()),
            fields: Vec::new(),
            submit_text: Some("Submit".to_string()),
            theme: Some(FormTheme::default()),
        }
    }
}

impl FormData {
    pub fn submit_label(&self) -> &str {
        self.submit_text.as_deref().unwrap_or("Submit")
    }

    pub fn field(&self, id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn field_index(&self, id: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.id == id)
    }
}

/// Partial update for form-level settings. `id` and `fields` are absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSettingsPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub submit_text: Option<String>,
    pub theme: Option<FormTheme>,
}

impl FormSettingsPatch {
    pub fn apply_to(self, form: &mut FormData) {
        if let Some(title) = self.title {
            form.title = title;
        }
        if self.description.is_some() {
            form.description = self.description;
        }
        if self.submit_text.is_some() {
            form.submit_text = self.submit_text;
        }
        if self.theme.is_some() {
            form.theme = self.theme;
        }
    }
}

/// Builder top-level view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuilderMode {
    #[default]
    Edit,
    Preview,
    Theme,
}

impl BuilderMode {
    pub const ALL: [BuilderMode; 3] = [BuilderMode::Edit, BuilderMode::Preview, BuilderMode::Theme];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Preview => "Preview",
            Self::Theme => "Theme",
        }
    }
}

/// Parse `#RRGGBB` or `#RGB`
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#').filter(|h| h.is_ascii())?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let expand = |s: &str| channel(s).map(|v| v * 17);
            Some(Color::Rgb(
                expand(&hex[0..1])?,
                expand(&hex[1..2])?,
                expand(&hex[2..3])?,
            ))
        }
        _ => None,
    }
}

/// Numeric part of a `Npx` (or bare `N`) length
fn px_value(value: &str) -> Option<u16> {
    value.trim().trim_end_matches("px").trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod field_type {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_wire_name_matches_serde() {
            for t in FieldType::ALL {
                let json = serde_json::to_string(&t).unwrap();
                assert_eq!(json, format!("\"{}\"", t.as_str()));
            }
        }

        #[test]
        fn test_rule_wire_names_match_serde() {
            for kind in [RuleKind::Required, RuleKind::MinLength, RuleKind::Email] {
                let json = serde_json::to_string(&kind).unwrap();
                assert_eq!(json, format!("\"{}\"", kind.as_str()));
            }
        }

        #[test]
        fn test_unknown_wire_name_is_rejected() {
            assert!(serde_json::from_str::<FieldType>("\"signature\"").is_err());
        }

        #[test]
        fn test_option_types() {
            let with_options: Vec<_> = FieldType::ALL
                .into_iter()
                .filter(|t| t.has_options())
                .collect();
            assert_eq!(
                with_options,
                vec![FieldType::Checkbox, FieldType::Radio, FieldType::Select]
            );
        }

        #[test]
        fn test_placeholder_types_exclude_choices_and_static() {
            assert!(FieldType::Select.has_placeholder());
            assert!(!FieldType::Radio.has_placeholder());
            assert!(!FieldType::Checkbox.has_placeholder());
            assert!(!FieldType::File.has_placeholder());
            assert!(!FieldType::Heading.has_placeholder());
        }
    }

    mod serialization {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_field_serializes_with_wire_names() {
            let field = FormField {
                id: "f1".to_string(),
                body: FieldTemplate {
                    field_type: FieldType::Password,
                    label: "Secret".to_string(),
                    placeholder: None,
                    description: None,
                    required: Some(true),
                    options: None,
                    default_value: None,
                    validation: Some(vec![ValidationRule::with_value(
                        RuleKind::MinLength,
                        Scalar::Number(8.into()),
                        "too short",
                    )]),
                    class_name: Some("wide".to_string()),
                    style: None,
                },
            };
            let json = serde_json::to_value(&field).unwrap();
            assert_eq!(
                json,
                serde_json::json!({
                    "id": "f1",
                    "type": "password",
                    "label": "Secret",
                    "required": true,
                    "validation": [{"type": "minLength", "value": 8, "message": "too short"}],
                    "className": "wide"
                })
            );
        }

        #[test]
        fn test_rule_numbers_keep_their_written_form() {
            let json = r#"[{"type":"minLength","value":8,"message":"m"},{"type":"max","value":2.5,"message":"m"}]"#;
            let rules: Vec<ValidationRule> = serde_json::from_str(json).unwrap();
            assert_eq!(serde_json::to_string(&rules).unwrap(), json);
        }

        #[test]
        fn test_form_deserializes_without_optional_keys() {
            let json = r#"{"id": "x", "title": "T", "fields": []}"#;
            let form: FormData = serde_json::from_str(json).unwrap();
            assert!(form.theme.is_none());
            assert_eq!(form.submit_label(), "Submit");
        }

        #[test]
        fn test_theme_uses_camel_case() {
            let json = serde_json::to_value(FormTheme::default()).unwrap();
            assert_eq!(json["primaryColor"], "#6750A4");
            assert_eq!(json["borderRadius"], "8px");
        }
    }

    mod patches {
        use super::*;
        use pretty_assertions::assert_eq;

        fn body() -> FieldTemplate {
            FieldTemplate {
                field_type: FieldType::Text,
                label: "Name".to_string(),
                placeholder: Some("type".to_string()),
                description: None,
                required: Some(false),
                options: None,
                default_value: None,
                validation: None,
                class_name: None,
                style: None,
            }
        }

        #[test]
        fn test_field_patch_only_touches_present_keys() {
            let mut b = body();
            FieldPatch {
                label: Some("Full name".to_string()),
                ..Default::default()
            }
            .apply_to(&mut b);
            assert_eq!(b.label, "Full name");
            assert_eq!(b.placeholder.as_deref(), Some("type"));
            assert_eq!(b.required, Some(false));
        }

        #[test]
        fn test_theme_patch_preserves_other_keys() {
            let mut theme = FormTheme::default();
            ThemePatch {
                spacing: Some("24px".to_string()),
                ..Default::default()
            }
            .apply_to(&mut theme);
            assert_eq!(theme.spacing, "24px");
            assert_eq!(theme.primary_color, "#6750A4");
        }

        #[test]
        fn test_settings_patch_replaces_theme_wholesale() {
            let mut form = FormData::default();
            let theme = FormTheme {
                font_size: "20px".to_string(),
                ..Default::default()
            };
            FormSettingsPatch {
                theme: Some(theme.clone()),
                ..Default::default()
            }
            .apply_to(&mut form);
            assert_eq!(form.theme, Some(theme));
            assert_eq!(form.title, "Untitled Form");
        }
    }

    mod theme {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_parse_hex_color() {
            assert_eq!(parse_hex_color("#6750A4"), Some(Color::Rgb(0x67, 0x50, 0xA4)));
            assert_eq!(parse_hex_color("#fff"), Some(Color::Rgb(255, 255, 255)));
            assert_eq!(parse_hex_color("6750A4"), None);
            assert_eq!(parse_hex_color("#zzzzzz"), None);
            assert_eq!(parse_hex_color("#aéabc"), None);
        }

        #[test]
        fn test_spacing_and_radius() {
            let mut theme = FormTheme::default();
            assert_eq!(theme.spacing_rows(), 2);
            assert!(theme.is_rounded());
            theme.border_radius = "0".to_string();
            theme.spacing = "8px".to_string();
            assert!(!theme.is_rounded());
            assert_eq!(theme.spacing_rows(), 1);
        }

        #[test]
        fn test_large_text_threshold() {
            let mut theme = FormTheme::default();
            assert!(!theme.is_large_text());
            theme.font_size = "18px".to_string();
            assert!(theme.is_large_text());
        }

        #[test]
        fn test_invalid_color_falls_back() {
            let theme = FormTheme {
                primary_color: "not a color".to_string(),
                ..Default::default()
            };
            assert_eq!(theme.primary(), Color::Magenta);
        }
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&BuilderMode::Preview).unwrap(), "\"preview\"");
        assert_eq!(BuilderMode::default(), BuilderMode::Edit);
    }
}
