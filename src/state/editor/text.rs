//! Text editing on live store values

/// A single edit to a text value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Backspace,
    Clear,
}

impl TextEdit {
    /// Apply the edit, returning the new value, or `None` when nothing changed
    pub fn apply(self, current: &str) -> Option<String> {
        match self {
            TextEdit::Insert(c) => {
                let mut value = current.to_string();
                value.push(c);
                Some(value)
            }
            TextEdit::Backspace => {
                let mut value = current.to_string();
                value.pop()?;
                Some(value)
            }
            TextEdit::Clear => {
                if current.is_empty() {
                    None
                } else {
                    Some(String::new())
                }
            }
        }
    }
}

/// Display helper for optional values
pub fn display_value(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Mask a secret for display
pub fn masked(value: &str) -> String {
    "•".repeat(value.chars().count())
}
