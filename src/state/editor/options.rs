//! Choice option editing for the property panel
//!
//! These actions compute a new option list for the selected field and hand it
//! to `FormStore::update_field`. The last-option guard lives here, not in the
//! store.

use crate::state::form::{FieldOption, FieldPatch, FormField};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionError {
    #[error("Field has no options")]
    NoOptions,
    #[error("Option not found")]
    NotFound,
    #[error("A field needs at least one option")]
    LastOption,
}

fn options_of(field: &FormField) -> Result<&Vec<FieldOption>, OptionError> {
    field.body.options.as_ref().ok_or(OptionError::NoOptions)
}

/// Append `Option N` / `optionN`, N being the new option count
pub fn add_option(field: &FormField) -> Result<FieldPatch, OptionError> {
    let mut options = options_of(field)?.clone();
    options.push(FieldOption::numbered(options.len() + 1));
    Ok(FieldPatch {
        options: Some(options),
        ..Default::default()
    })
}

pub fn set_option_label(
    field: &FormField,
    option_id: &str,
    label: String,
) -> Result<FieldPatch, OptionError> {
    edit_option(field, option_id, |o| o.label = label)
}

pub fn set_option_value(
    field: &FormField,
    option_id: &str,
    value: String,
) -> Result<FieldPatch, OptionError> {
    edit_option(field, option_id, |o| o.value = value)
}

/// Remove an option, refusing to remove the last one
pub fn remove_option(field: &FormField, option_id: &str) -> Result<FieldPatch, OptionError> {
    let options = options_of(field)?;
    if !options.iter().any(|o| o.id == option_id) {
        return Err(OptionError::NotFound);
    }
    if options.len() <= 1 {
        return Err(OptionError::LastOption);
    }
    let options = options
        .iter()
        .filter(|o| o.id != option_id)
        .cloned()
        .collect();
    Ok(FieldPatch {
        options: Some(options),
        ..Default::default()
    })
}

fn edit_option(
    field: &FormField,
    option_id: &str,
    edit: impl FnOnce(&mut FieldOption),
) -> Result<FieldPatch, OptionError> {
    let mut options = options_of(field)?.clone();
    let option = options
        .iter_mut()
        .find(|o| o.id == option_id)
        .ok_or(OptionError::NotFound)?;
    edit(option);
    Ok(FieldPatch {
        options: Some(options),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::form::FieldType;
    use crate::state::store::FormStore;
    use crate::state::templates::template_for;
    use pretty_assertions::assert_eq;

    fn store_with_select() -> (FormStore, String) {
        let mut store = FormStore::default();
        let id = store.add_field(template_for(FieldType::Select));
        (store, id)
    }

    fn field(store: &FormStore, id: &str) -> FormField {
        store.form().field(id).cloned().unwrap()
    }

    #[test]
    fn test_remove_down_to_one_then_refuse() {
        let (mut store, id) = store_with_select();
        assert_eq!(field(&store, &id).options().len(), 3);

        for _ in 0..2 {
            let f = field(&store, &id);
            let first = f.options()[0].id.clone();
            let patch = remove_option(&f, &first).unwrap();
            store.update_field(&id, patch);
        }

        let f = field(&store, &id);
        assert_eq!(f.options().len(), 1);
        assert_eq!(f.options()[0].value, "option3");
        let last = f.options()[0].id.clone();
        assert_eq!(remove_option(&f, &last), Err(OptionError::LastOption));
        assert_eq!(field(&store, &id).options().len(), 1);
    }

    #[test]
    fn test_remove_unknown_option() {
        let (store, id) = store_with_select();
        assert_eq!(
            remove_option(&field(&store, &id), "missing"),
            Err(OptionError::NotFound)
        );
    }

    #[test]
    fn test_add_option_numbers_by_count() {
        let (mut store, id) = store_with_select();
        let patch = add_option(&field(&store, &id)).unwrap();
        store.update_field(&id, patch);
        let f = field(&store, &id);
        let last = f.options().last().unwrap();
        assert_eq!(last.label, "Option 4");
        assert_eq!(last.value, "option4");
    }

    #[test]
    fn test_relabel_and_revalue() {
        let (mut store, id) = store_with_select();
        let option_id = field(&store, &id).options()[1].id.clone();
        let patch = set_option_label(&field(&store, &id), &option_id, "Blue".to_string()).unwrap();
        store.update_field(&id, patch);
        let patch = set_option_value(&field(&store, &id), &option_id, "blue".to_string()).unwrap();
        store.update_field(&id, patch);

        let f = field(&store, &id);
        assert_eq!(f.options()[1].label, "Blue");
        assert_eq!(f.options()[1].value, "blue");
        assert_eq!(f.options()[0].label, "Option 1");
    }

    #[test]
    fn test_non_choice_field_has_no_options() {
        let mut store = FormStore::default();
        let id = store.add_field(template_for(FieldType::Text));
        assert_eq!(add_option(&field(&store, &id)), Err(OptionError::NoOptions));
    }
}
