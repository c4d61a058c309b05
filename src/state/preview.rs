//! Answers entered while previewing a form

use super::editor::TextEdit;
use super::form::{FieldType, FormData, FormField};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Value entered for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    /// Checked checkbox values, in option order
    Choices(Vec<String>),
    /// Picked radio / select value
    Choice(String),
}

impl Answer {
    pub fn to_json(&self) -> Value {
        match self {
            Answer::Text(s) | Answer::Choice(s) => Value::String(s.clone()),
            Answer::Choices(values) => {
                Value::Array(values.iter().cloned().map(Value::String).collect())
            }
        }
    }
}

/// Preview session: answers keyed by field id plus the cursor
#[derive(Debug, Clone, Default)]
pub struct PreviewState {
    answers: HashMap<String, Answer>,
    /// Index into the form's fields; `fields.len()` is the submit button
    pub active_row_index: usize,
    /// Highlighted option within the active choice field
    pub option_cursor: usize,
}

impl PreviewState {
    pub fn answer(&self, field_id: &str) -> Option<&Answer> {
        self.answers.get(field_id)
    }

    pub fn text(&self, field_id: &str) -> &str {
        match self.answer(field_id) {
            Some(Answer::Text(s)) => s,
            _ => "",
        }
    }

    /// Whether `value` is checked / picked for `field_id`
    pub fn is_chosen(&self, field_id: &str, value: &str) -> bool {
        match self.answer(field_id) {
            Some(Answer::Choices(values)) => values.iter().any(|v| v == value),
            Some(Answer::Choice(v)) => v == value,
            _ => false,
        }
    }

    /// True when the cursor sits on the submit button. Empty forms have none.
    pub fn is_submit_active(&self, form: &FormData) -> bool {
        !form.fields.is_empty() && self.active_row_index >= form.fields.len()
    }

    pub fn active_field<'a>(&self, form: &'a FormData) -> Option<&'a FormField> {
        form.fields.get(self.active_row_index)
    }

    pub fn next_row(&mut self, form: &FormData) {
        let count = form.fields.len() + 1;
        self.active_row_index = (self.active_row_index.min(count - 1) + 1) % count;
        self.option_cursor = 0;
    }

    pub fn prev_row(&mut self, form: &FormData) {
        let count = form.fields.len() + 1;
        let current = self.active_row_index.min(count - 1);
        self.active_row_index = if current == 0 { count - 1 } else { current - 1 };
        self.option_cursor = 0;
    }

    pub fn next_option(&mut self, field: &FormField) {
        let count = field.options().len();
        if count > 0 {
            self.option_cursor = (self.option_cursor + 1) % count;
        }
    }

    pub fn prev_option(&mut self, field: &FormField) {
        let count = field.options().len();
        if count > 0 {
            self.option_cursor = if self.option_cursor == 0 {
                count - 1
            } else {
                (self.option_cursor - 1).min(count - 1)
            };
        }
    }

    /// Type into a text-like field. Choice and static fields ignore text.
    pub fn edit_text(&mut self, field: &FormField, edit: TextEdit) {
        if field.field_type().has_options() || field.field_type().is_static() {
            return;
        }
        if let Some(value) = edit.apply(self.text(&field.id)) {
            self.answers.insert(field.id.clone(), Answer::Text(value));
        }
    }

    /// Toggle (checkbox) or pick (radio, select) the option under the cursor
    pub fn choose(&mut self, field: &FormField) {
        let Some(option) = field.options().get(self.option_cursor) else {
            return;
        };
        let value = option.value.clone();
        match field.field_type() {
            FieldType::Checkbox => {
                let mut checked: Vec<String> = match self.answers.get(&field.id) {
                    Some(Answer::Choices(values)) => values.clone(),
                    _ => Vec::new(),
                };
                if let Some(pos) = checked.iter().position(|v| *v == value) {
                    checked.remove(pos);
                } else {
                    checked.push(value);
                }
                // keep option order so payloads are stable
                let order: Vec<&str> = field.options().iter().map(|o| o.value.as_str()).collect();
                checked.sort_by_key(|v| order.iter().position(|o| *o == v.as_str()));
                self.answers
                    .insert(field.id.clone(), Answer::Choices(checked));
            }
            FieldType::Radio | FieldType::Select => {
                self.answers.insert(field.id.clone(), Answer::Choice(value));
            }
            _ => {}
        }
    }

    /// Response map for submission, in form order, answered fields only.
    /// Answers for fields no longer in the form are dropped.
    pub fn responses(&self, form: &FormData) -> Map<String, Value> {
        form.fields
            .iter()
            .filter_map(|f| self.answers.get(&f.id).map(|a| (f.id.clone(), a.to_json())))
            .collect()
    }

    /// Drop answers whose field is gone or whose choice no longer exists
    pub fn retain_valid(&mut self, form: &FormData) {
        self.answers.retain(|id, answer| {
            let Some(field) = form.field(id) else {
                return false;
            };
            let has_option = |v: &str| field.options().iter().any(|o| o.value == v);
            match (answer, field.field_type()) {
                (Answer::Choices(values), FieldType::Checkbox) => {
                    values.retain(|v| has_option(v));
                    !values.is_empty()
                }
                (Answer::Choice(v), FieldType::Radio | FieldType::Select) => has_option(v),
                (Answer::Text(_), t) => !t.has_options() && !t.is_static(),
                _ => false,
            }
        });
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
        self.active_row_index = 0;
        self.option_cursor = 0;
    }
}
