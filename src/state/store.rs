//! Form state store: single source of truth for the form being built
//!
//! Every mutation either fully applies or leaves the store untouched.

use super::form::{
    new_id, BuilderMode, FieldPatch, FieldTemplate, FormData, FormField, FormSettingsPatch,
    ThemePatch,
};
use super::notice::NoticeQueue;

/// Owns the form aggregate and the builder session state
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    form: FormData,
    mode: BuilderMode,
    selected_field_id: Option<String>,
    pub notices: NoticeQueue,
}

impl FormStore {
    /// Current form snapshot
    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn mode(&self) -> BuilderMode {
        self.mode
    }

    /// Raw selection pointer, possibly dangling
    pub fn selected_field_id(&self) -> Option<&str> {
        self.selected_field_id.as_deref()
    }

    /// The selected field, or `None` when nothing (or a removed field) is selected
    pub fn selected_field(&self) -> Option<&FormField> {
        self.selected_field_id
            .as_deref()
            .and_then(|id| self.form.field(id))
    }

    /// Index of the selected field, if it still exists
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_field_id
            .as_deref()
            .and_then(|id| self.form.field_index(id))
    }

    pub fn set_mode(&mut self, mode: BuilderMode) {
        self.mode = mode;
    }

    /// Existence is not checked
    pub fn set_selected_field_id(&mut self, id: Option<String>) {
        self.selected_field_id = id;
    }

    /// Append a field built from `template`, select it and return its id
    pub fn add_field(&mut self, template: FieldTemplate) -> String {
        let id = new_id();
        let field_type = template.field_type;
        self.form.fields.push(FormField {
            id: id.clone(),
            body: template,
        });
        self.selected_field_id = Some(id.clone());
        tracing::info!(field_id = %id, field_type = field_type.as_str(), "field added");
        self.notices
            .success(format!("Added {} field", field_type.as_str()));
        id
    }

    /// Shallow-merge `patch` onto the field `id`. Unknown ids are ignored.
    pub fn update_field(&mut self, id: &str, patch: FieldPatch) {
        if let Some(field) = self.form.fields.iter_mut().find(|f| f.id == id) {
            patch.apply_to(&mut field.body);
        }
    }

    /// Remove the field `id`. Selection is cleared even when `id` is unknown
    /// or not the selected field.
    pub fn remove_field(&mut self, id: &str) {
        self.form.fields.retain(|f| f.id != id);
        self.selected_field_id = None;
        tracing::info!(field_id = %id, "field removed");
        self.notices.success("Field removed");
    }

    /// Move the field at `from` to position `to`.
    ///
    /// Out-of-range indices are rejected and leave the order unchanged.
    pub fn move_field(&mut self, from: usize, to: usize) -> bool {
        let len = self.form.fields.len();
        if from >= len || to >= len {
            tracing::warn!(from, to, len, "rejected out-of-range field move");
            return false;
        }
        let field = self.form.fields.remove(from);
        self.form.fields.insert(to, field);
        true
    }

    /// Shallow-merge form-level settings (title, description, submit text, theme)
    pub fn update_form_settings(&mut self, patch: FormSettingsPatch) {
        patch.apply_to(&mut self.form);
        self.notices.success("Form settings updated");
    }

    /// Shallow-merge onto the current theme, starting from defaults if unset
    pub fn update_theme(&mut self, patch: ThemePatch) {
        let theme = self.form.theme.get_or_insert_with(Default::default);
        patch.apply_to(theme);
        self.notices.success("Theme updated");
    }

    /// Replace the form with a fresh default and clear selection
    pub fn reset_form(&mut self) {
        self.form = FormData::default();
        self.selected_field_id = None;
        tracing::info!(form_id = %self.form.id, "form reset");
        self.notices.success("Form reset to default");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::form::{FieldType, FormTheme};
    use crate::state::templates::template_for;

    fn store_with(types: &[FieldType]) -> (FormStore, Vec<String>) {
        let mut store = FormStore::default();
        let ids = types
            .iter()
            .map(|t| store.add_field(template_for(*t)))
            .collect();
        (store, ids)
    }

    fn order(store: &FormStore) -> Vec<String> {
        store.form().fields.iter().map(|f| f.id.clone()).collect()
    }

    mod defaults {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_store_has_default_form() {
            let store = FormStore::default();
            assert_eq!(store.form().title, "Untitled Form");
            assert!(store.form().fields.is_empty());
            assert_eq!(store.form().theme, Some(FormTheme::default()));
            assert_eq!(store.mode(), BuilderMode::Edit);
            assert!(store.selected_field_id().is_none());
        }

        #[test]
        fn test_two_stores_have_distinct_form_ids() {
            assert_ne!(FormStore::default().form().id, FormStore::default().form().id);
        }
    }

    mod mode_and_selection {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_mode_any_to_any() {
            let mut store = FormStore::default();
            for mode in [BuilderMode::Theme, BuilderMode::Edit, BuilderMode::Preview] {
                store.set_mode(mode);
                assert_eq!(store.mode(), mode);
            }
        }

        #[test]
        fn test_set_mode_leaves_form_untouched() {
            let (mut store, _) = store_with(&[FieldType::Text]);
            let before = store.form().clone();
            store.set_mode(BuilderMode::Preview);
            assert_eq!(store.form(), &before);
        }

        #[test]
        fn test_dangling_selection_reads_as_none() {
            let mut store = FormStore::default();
            store.set_selected_field_id(Some("missing".to_string()));
            assert_eq!(store.selected_field_id(), Some("missing"));
            assert!(store.selected_field().is_none());
            assert!(store.selected_index().is_none());
        }
    }

    mod add_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_add_appends_and_selects() {
            let (store, ids) = store_with(&[FieldType::Text, FieldType::Email]);
            assert_eq!(store.form().fields.len(), 2);
            assert_eq!(order(&store), ids);
            assert_eq!(store.selected_field_id(), Some(ids[1].as_str()));
        }

        #[test]
        fn test_add_email_example() {
            let mut store = FormStore::default();
            let id = store.add_field(template_for(FieldType::Email));
            let field = store.form().fields.last().unwrap();
            assert_eq!(field.id, id);
            assert_eq!(field.field_type(), FieldType::Email);
            assert_eq!(field.rules().len(), 2);
            assert_eq!(field.body.placeholder.as_deref(), Some("Enter your email"));
            assert_eq!(store.form().fields.len(), 1);
            assert_eq!(store.selected_field_id(), Some(id.as_str()));
        }

        #[test]
        fn test_add_emits_confirmation_naming_type() {
            let mut store = FormStore::default();
            store.add_field(template_for(FieldType::Radio));
            assert_eq!(store.notices.latest().unwrap().message, "Added radio field");
        }

        #[test]
        fn test_ids_unique_and_never_reused_after_removal() {
            let mut store = FormStore::default();
            let mut seen = Vec::new();
            for i in 0..20 {
                let id = store.add_field(template_for(FieldType::ALL[i % 13]));
                assert!(!seen.contains(&id));
                seen.push(id.clone());
                if i % 3 == 0 {
                    store.remove_field(&id);
                }
            }
            assert_eq!(store.form().fields.len(), 20 - 7);
        }
    }

    mod update_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_update_merges_only_given_keys() {
            let (mut store, ids) = store_with(&[FieldType::Text, FieldType::Number]);
            store.update_field(
                &ids[0],
                FieldPatch {
                    label: Some("Name".to_string()),
                    ..Default::default()
                },
            );
            let field = &store.form().fields[0];
            assert_eq!(field.label(), "Name");
            assert_eq!(field.body.placeholder.as_deref(), Some("Enter text here"));
            assert_eq!(store.form().fields[1].label(), "Number field");
            assert_eq!(order(&store), ids);
        }

        #[test]
        fn test_update_unknown_id_is_silent_noop() {
            let (mut store, _) = store_with(&[FieldType::Text]);
            let before = store.form().clone();
            store.update_field(
                "nope",
                FieldPatch {
                    label: Some("x".to_string()),
                    ..Default::default()
                },
            );
            assert_eq!(store.form(), &before);
        }

        #[test]
        fn test_update_does_not_change_selection() {
            let (mut store, ids) = store_with(&[FieldType::Text, FieldType::Date]);
            store.update_field(
                &ids[0],
                FieldPatch {
                    required: Some(true),
                    ..Default::default()
                },
            );
            assert_eq!(store.selected_field_id(), Some(ids[1].as_str()));
        }

        #[test]
        fn test_disjoint_patches_compose() {
            let (mut a, ids) = store_with(&[FieldType::Text]);
            let mut b = a.clone();
            let p1 = FieldPatch {
                label: Some("Name".to_string()),
                ..Default::default()
            };
            let p2 = FieldPatch {
                required: Some(true),
                description: Some("Your full name".to_string()),
                ..Default::default()
            };
            a.update_field(&ids[0], p1.clone());
            a.update_field(&ids[0], p2.clone());
            b.update_field(
                &ids[0],
                FieldPatch {
                    label: p1.label,
                    required: p2.required,
                    description: p2.description,
                    ..Default::default()
                },
            );
            assert_eq!(a.form().fields, b.form().fields);
        }
    }

    mod remove_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_remove_preserves_relative_order() {
            let (mut store, ids) =
                store_with(&[FieldType::Text, FieldType::Email, FieldType::Date]);
            store.remove_field(&ids[1]);
            assert_eq!(order(&store), vec![ids[0].clone(), ids[2].clone()]);
        }

        #[test]
        fn test_remove_clears_selection_even_for_unrelated_field() {
            // Observed behavior kept as-is: removing any field drops the selection.
            let (mut store, ids) = store_with(&[FieldType::Text, FieldType::Email]);
            assert_eq!(store.selected_field_id(), Some(ids[1].as_str()));
            store.remove_field(&ids[0]);
            assert!(store.selected_field_id().is_none());
        }

        #[test]
        fn test_remove_unknown_id_still_clears_selection() {
            let (mut store, ids) = store_with(&[FieldType::Text]);
            store.remove_field("unknown");
            assert_eq!(order(&store), ids);
            assert!(store.selected_field_id().is_none());
        }
    }

    mod move_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_move_forward_shifts_intervening() {
            let (mut store, ids) = store_with(&[
                FieldType::Text,
                FieldType::Email,
                FieldType::Date,
                FieldType::Time,
            ]);
            assert!(store.move_field(0, 2));
            assert_eq!(
                order(&store),
                vec![ids[1].clone(), ids[2].clone(), ids[0].clone(), ids[3].clone()]
            );
        }

        #[test]
        fn test_move_round_trip_restores_order() {
            let types = [
                FieldType::Text,
                FieldType::Email,
                FieldType::Date,
                FieldType::Time,
                FieldType::File,
            ];
            let (mut store, ids) = store_with(&types);
            for i in 0..types.len() {
                for j in 0..types.len() {
                    if i == j {
                        continue;
                    }
                    store.move_field(i, j);
                    store.move_field(j, i);
                    assert_eq!(order(&store), ids, "round trip {i} -> {j}");
                }
            }
        }

        #[test]
        fn test_move_out_of_range_is_rejected() {
            let (mut store, ids) = store_with(&[FieldType::Text, FieldType::Email]);
            assert!(!store.move_field(0, 2));
            assert!(!store.move_field(5, 0));
            assert_eq!(order(&store), ids);
        }

        #[test]
        fn test_move_keeps_selection() {
            let (mut store, ids) = store_with(&[FieldType::Text, FieldType::Email]);
            store.move_field(1, 0);
            assert_eq!(store.selected_field_id(), Some(ids[1].as_str()));
            assert_eq!(store.selected_index(), Some(0));
        }
    }

    mod settings_and_theme {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_update_form_settings_merges() {
            let (mut store, ids) = store_with(&[FieldType::Text]);
            let form_id = store.form().id.clone();
            store.update_form_settings(FormSettingsPatch {
                title: Some("Signup".to_string()),
                submit_text: Some("Join".to_string()),
                ..Default::default()
            });
            assert_eq!(store.form().title, "Signup");
            assert_eq!(store.form().submit_label(), "Join");
            assert_eq!(
                store.form().description.as_deref(),
                Some("This is a sample form. Start adding fields!")
            );
            assert_eq!(store.form().id, form_id);
            assert_eq!(order(&store), ids);
        }

        #[test]
        fn test_update_theme_preserves_unspecified_keys() {
            let mut store = FormStore::default();
            store.update_theme(ThemePatch {
                primary_color: Some("#FF0000".to_string()),
                ..Default::default()
            });
            let theme = store.form().theme.as_ref().unwrap();
            assert_eq!(theme.primary_color, "#FF0000");
            assert_eq!(theme.secondary_color, "#00A3A1");
            assert_eq!(theme.spacing, "16px");
        }

        #[test]
        fn test_update_theme_without_theme_starts_from_defaults() {
            let mut store = FormStore::default();
            store.form.theme = None;
            store.update_theme(ThemePatch {
                font_size: Some("20px".to_string()),
                ..Default::default()
            });
            let expected = FormTheme {
                font_size: "20px".to_string(),
                ..Default::default()
            };
            assert_eq!(store.form().theme, Some(expected));
        }
    }

    mod reset {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_reset_yields_fresh_default_form() {
            let (mut store, _) = store_with(&[FieldType::Text, FieldType::Select]);
            store.update_theme(ThemePatch {
                text_color: Some("#000000".to_string()),
                ..Default::default()
            });
            let old_id = store.form().id.clone();
            store.reset_form();
            assert!(store.form().fields.is_empty());
            assert_ne!(store.form().id, old_id);
            assert_eq!(store.form().theme, Some(FormTheme::default()));
            assert!(store.selected_field_id().is_none());
            assert_eq!(
                store.notices.latest().unwrap().message,
                "Form reset to default"
            );
        }

        #[test]
        fn test_reset_keeps_mode() {
            let mut store = FormStore::default();
            store.set_mode(BuilderMode::Theme);
            store.reset_form();
            assert_eq!(store.mode(), BuilderMode::Theme);
        }
    }
}
