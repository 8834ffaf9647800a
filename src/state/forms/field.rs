//! Form field value objects

use super::values::FieldName;

/// Mask character used for secret fields
const MASK_CHAR: char = '•';

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub value: String,
    pub is_multiline: bool,
    pub is_secret: bool,
    /// Set once the user has left the field (or tried to submit)
    pub touched: bool,
}

impl FormField {
    /// Create an empty field configured from its name
    pub fn new(name: FieldName) -> Self {
        Self {
            label: name.label().to_string(),
            value: String::new(),
            is_multiline: name.is_multiline(),
            is_secret: name.is_secret(),
            touched: false,
        }
    }

    /// Create a field with an initial value
    pub fn with_value(name: FieldName, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::new(name)
        }
    }

    /// Get the text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if c == '\n' && !self.is_multiline {
            return;
        }
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the value and forget that the field was visited
    pub fn clear(&mut self) {
        self.value.clear();
        self.touched = false;
    }

    pub fn mark_touched(&mut self) {
        self.touched = true;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.is_secret {
            std::iter::repeat(MASK_CHAR)
                .take(self.value.chars().count())
                .collect()
        } else {
            self.value.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_uses_field_configuration() {
        let field = FormField::new(FieldName::Comment);
        assert_eq!(field.label, "Your message");
        assert!(field.is_multiline);
        assert!(!field.is_secret);
        assert!(!field.touched);
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_push_and_pop() {
        let mut field = FormField::new(FieldName::Name);
        field.push_char('A');
        field.push_char('l');
        assert_eq!(field.as_text(), "Al");
        field.pop_char();
        assert_eq!(field.as_text(), "A");
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut field = FormField::new(FieldName::Name);
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_newline_ignored_on_single_line_field() {
        let mut field = FormField::new(FieldName::Address);
        field.push_char('\n');
        assert_eq!(field.as_text(), "");

        let mut comment = FormField::new(FieldName::Comment);
        comment.push_char('a');
        comment.push_char('\n');
        assert_eq!(comment.as_text(), "a\n");
    }

    #[test]
    fn test_password_display_is_masked() {
        let field = FormField::with_value(FieldName::Password, "Abcdef1!");
        assert_eq!(field.display_value(), "••••••••");
        assert_eq!(field.as_text(), "Abcdef1!");
    }

    #[test]
    fn test_clear_resets_touched() {
        let mut field = FormField::with_value(FieldName::Email, "a@b.com");
        field.mark_touched();
        field.clear();
        assert_eq!(field.as_text(), "");
        assert!(!field.touched);
    }
}
