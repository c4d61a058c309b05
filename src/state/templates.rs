//! Default field construction per field type

use super::form::{FieldOption, FieldTemplate, FieldType, RuleKind, Scalar, ValidationRule};

/// Build the default descriptor for a newly added field of `field_type`
pub fn template_for(field_type: FieldType) -> FieldTemplate {
    let mut field = base_template(field_type);

    match field_type {
        FieldType::Text => {
            field.placeholder = Some("Enter text here".to_string());
            field.validation = Some(vec![required("This field is required")]);
        }
        FieldType::Textarea => {
            field.placeholder = Some("Enter long text here".to_string());
        }
        FieldType::Number => {
            field.placeholder = Some("Enter a number".to_string());
            field.validation = Some(vec![required("This field is required")]);
        }
        FieldType::Email => {
            field.placeholder = Some("Enter your email".to_string());
            field.validation = Some(vec![
                required("Email is required"),
                ValidationRule::new(RuleKind::Email, "Please enter a valid email address"),
            ]);
        }
        FieldType::Password => {
            field.placeholder = Some("Enter password".to_string());
            field.validation = Some(vec![
                required("Password is required"),
                ValidationRule::with_value(
                    RuleKind::MinLength,
                    Scalar::Number(8.into()),
                    "Password must be at least 8 characters",
                ),
            ]);
        }
        FieldType::Checkbox | FieldType::Radio => {
            field.options = Some(seed_options());
        }
        FieldType::Select => {
            field.placeholder = Some("Select an option".to_string());
            field.options = Some(seed_options());
        }
        FieldType::Date => {
            field.placeholder = Some("Select a date".to_string());
        }
        FieldType::Time => {
            field.placeholder = Some("Select a time".to_string());
        }
        FieldType::File => {
            field.placeholder = Some("Upload a file".to_string());
        }
        FieldType::Heading => {
            field.label = "Heading".to_string();
        }
        FieldType::Paragraph => {
            field.label = "Paragraph".to_string();
            field.description = Some(
                "This is a paragraph field. You can use it to add descriptive text to your form."
                    .to_string(),
            );
        }
    }

    field
}

/// Generic descriptor: `<Type> field`, not required, no extras
fn base_template(field_type: FieldType) -> FieldTemplate {
    FieldTemplate {
        field_type,
        label: format!("{} field", capitalize(field_type.as_str())),
        placeholder: None,
        description: None,
        required: Some(false),
        options: None,
        default_value: None,
        validation: None,
        class_name: None,
        style: None,
    }
}

fn required(message: &str) -> ValidationRule {
    ValidationRule::new(RuleKind::Required, message)
}

fn seed_options() -> Vec<FieldOption> {
    (1..=3).map(FieldOption::numbered).collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rule_kinds(t: &FieldTemplate) -> Vec<RuleKind> {
        t.validation
            .iter()
            .flatten()
            .map(|r| r.kind)
            .collect()
    }

    #[test]
    fn test_email_template() {
        let t = template_for(FieldType::Email);
        assert_eq!(t.field_type, FieldType::Email);
        assert_eq!(t.label, "Email field");
        assert_eq!(t.placeholder.as_deref(), Some("Enter your email"));
        assert_eq!(rule_kinds(&t), vec![RuleKind::Required, RuleKind::Email]);
        assert_eq!(t.required, Some(false));
    }

    #[test]
    fn test_text_and_number_seed_required_rule() {
        for ft in [FieldType::Text, FieldType::Number] {
            let t = template_for(ft);
            assert_eq!(rule_kinds(&t), vec![RuleKind::Required]);
        }
    }

    #[test]
    fn test_password_seeds_min_length_eight() {
        let t = template_for(FieldType::Password);
        let rules = t.validation.unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[1].kind, RuleKind::MinLength);
        assert_eq!(rules[1].value, Some(Scalar::Number(8.into())));
    }

    #[test]
    fn test_choice_types_seed_three_options() {
        for ft in [FieldType::Checkbox, FieldType::Radio, FieldType::Select] {
            let t = template_for(ft);
            let options = t.options.unwrap();
            let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
            let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
            assert_eq!(values, vec!["option1", "option2", "option3"]);
            assert_eq!(labels, vec!["Option 1", "Option 2", "Option 3"]);
        }
    }

    #[test]
    fn test_option_ids_are_distinct_across_templates() {
        let a = template_for(FieldType::Select).options.unwrap();
        let b = template_for(FieldType::Select).options.unwrap();
        let mut ids: Vec<_> = a.iter().chain(b.iter()).map(|o| o.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_select_has_placeholder_but_radio_does_not() {
        assert_eq!(
            template_for(FieldType::Select).placeholder.as_deref(),
            Some("Select an option")
        );
        assert!(template_for(FieldType::Radio).placeholder.is_none());
    }

    #[test]
    fn test_static_types_override_label() {
        let heading = template_for(FieldType::Heading);
        assert_eq!(heading.label, "Heading");
        assert!(heading.description.is_none());

        let paragraph = template_for(FieldType::Paragraph);
        assert_eq!(paragraph.label, "Paragraph");
        assert!(paragraph
            .description
            .unwrap()
            .starts_with("This is a paragraph field."));
    }

    #[test]
    fn test_plain_types_have_no_rules_or_options() {
        for ft in [FieldType::Textarea, FieldType::Date, FieldType::Time, FieldType::File] {
            let t = template_for(ft);
            assert!(t.validation.is_none());
            assert!(t.options.is_none());
            assert!(t.placeholder.is_some());
        }
    }

    #[test]
    fn test_every_type_builds_its_own_kind() {
        for ft in FieldType::ALL {
            assert_eq!(template_for(ft).field_type, ft);
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("textarea"), "Textarea");
        assert_eq!(capitalize(""), "");
    }
}
