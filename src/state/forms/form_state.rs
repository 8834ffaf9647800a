//! Form state management for the contact form

use super::field::FormField;
use super::values::{FieldName, FormValues};
use crate::validation::{validate, FieldError, ValidationResult};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// Index of the submit button row, after the six input fields
pub const SUBMIT_BUTTON_INDEX: usize = 6;

/// Contact form: six input fields, a submit button row, and the
/// validation result for the current values.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub address: FormField,
    pub password: FormField,
    pub comment: FormField,
    pub active_field_index: usize,
    errors: ValidationResult,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::from_values(&FormValues::default())
    }

    /// Build a form pre-filled with values
    pub fn from_values(values: &FormValues) -> Self {
        let field = |name: FieldName| FormField::with_value(name, values.get(name));
        let mut form = Self {
            name: field(FieldName::Name),
            email: field(FieldName::Email),
            phone: field(FieldName::Phone),
            address: field(FieldName::Address),
            password: field(FieldName::Password),
            comment: field(FieldName::Comment),
            active_field_index: 0,
            errors: ValidationResult::default(),
        };
        form.revalidate();
        form
    }

    /// Snapshot of the current values
    pub fn values(&self) -> FormValues {
        FormValues {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            phone: self.phone.as_text().to_string(),
            address: self.address.as_text().to_string(),
            password: self.password.as_text().to_string(),
            comment: self.comment.as_text().to_string(),
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::Address => &self.address,
            FieldName::Password => &self.password,
            FieldName::Comment => &self.comment,
        }
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Phone => &mut self.phone,
            FieldName::Address => &mut self.address,
            FieldName::Password => &mut self.password,
            FieldName::Comment => &mut self.comment,
        }
    }

    /// Field under the cursor, `None` when the submit button is focused
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_button_active(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }

    /// Validation result for the current values
    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    /// Error to show under a field: only once the field has been touched
    pub fn visible_error(&self, name: FieldName) -> Option<&FieldError> {
        if self.field(name).touched {
            self.errors.get(name)
        } else {
            None
        }
    }

    /// Recompute the validation result from the current values
    pub fn revalidate(&mut self) -> &ValidationResult {
        self.errors = validate(&self.values());
        &self.errors
    }

    /// Type a character into the active field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.get_active_field_mut() {
            field.push_char(c);
            self.revalidate();
        }
    }

    /// Delete the last character of the active field
    pub fn backspace(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.pop_char();
            self.revalidate();
        }
    }

    /// Leave the active field (marks it touched) and move to the next one
    pub fn focus_next(&mut self) {
        self.blur_active();
        self.next_field();
    }

    /// Leave the active field (marks it touched) and move to the previous one
    pub fn focus_prev(&mut self) {
        self.blur_active();
        self.prev_field();
    }

    /// Move the cursor to a specific field
    pub fn focus(&mut self, name: FieldName) {
        self.blur_active();
        if let Some(index) = FieldName::ALL.iter().position(|f| *f == name) {
            self.set_active_field(index);
        }
    }

    fn blur_active(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.mark_touched();
            self.revalidate();
        }
    }

    /// Mark every field touched, as a submit attempt does
    pub fn touch_all(&mut self) {
        for name in FieldName::ALL {
            self.field_mut(name).mark_touched();
        }
        self.revalidate();
    }

    /// Back to empty, untouched defaults with the cursor on the first field
    pub fn reset(&mut self) {
        for name in FieldName::ALL {
            self.field_mut(name).clear();
        }
        self.active_field_index = 0;
        self.revalidate();
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        SUBMIT_BUTTON_INDEX + 1 // six fields, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_BUTTON_INDEX);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let name = self.active_field_name()?;
        Some(self.field_mut(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldErrorKind;
    use pretty_assertions::assert_eq;

    fn type_str(form: &mut ContactForm, text: &str) {
        for c in text.chars() {
            form.input_char(c);
        }
    }

    fn filled_form() -> ContactForm {
        ContactForm::from_values(&FormValues {
            name: "Alice1".to_string(),
            email: "a@b.com".to_string(),
            phone: "+12345678901".to_string(),
            address: "1 Rd".to_string(),
            password: "Abcdef1!".to_string(),
            comment: "Hello".to_string(),
        })
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = ContactForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.active_field_name(), Some(FieldName::Name));
            assert_eq!(form.values(), FormValues::default());
        }

        #[test]
        fn test_field_count() {
            let form = ContactForm::new();
            assert_eq!(form.field_count(), 7);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = ContactForm::new();
            for _ in 0..7 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_submit_button() {
            let mut form = ContactForm::new();
            form.prev_field();
            assert!(form.is_submit_button_active());
            assert!(form.active_field_name().is_none());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = ContactForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, SUBMIT_BUTTON_INDEX);
        }

        #[test]
        fn test_focus_moves_to_named_field() {
            let mut form = ContactForm::new();
            form.focus(FieldName::Password);
            assert_eq!(form.active_field_name(), Some(FieldName::Password));
            assert!(form.name.touched);
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_input_goes_to_active_field() {
            let mut form = ContactForm::new();
            form.next_field();
            type_str(&mut form, "a@b.com");
            assert_eq!(form.email.as_text(), "a@b.com");
            assert_eq!(form.name.as_text(), "");
        }

        #[test]
        fn test_input_on_submit_button_is_ignored() {
            let mut form = ContactForm::new();
            form.set_active_field(SUBMIT_BUTTON_INDEX);
            form.input_char('x');
            form.backspace();
            assert_eq!(form.values(), FormValues::default());
        }

        #[test]
        fn test_every_change_revalidates() {
            let mut form = ContactForm::new();
            type_str(&mut form, "Alic");
            assert_eq!(
                form.errors().get(FieldName::Name).map(|e| e.kind),
                Some(FieldErrorKind::TooShort)
            );
            type_str(&mut form, "e1");
            assert!(form.errors().get(FieldName::Name).is_none());
            form.backspace();
            assert_eq!(
                form.errors().get(FieldName::Name).map(|e| e.kind),
                Some(FieldErrorKind::TooShort)
            );
        }
    }

    mod touched {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_errors_hidden_until_touched() {
            let form = ContactForm::new();
            assert!(!form.errors().is_valid());
            for name in FieldName::ALL {
                assert!(form.visible_error(name).is_none());
            }
        }

        #[test]
        fn test_blur_marks_field_touched() {
            let mut form = ContactForm::new();
            form.focus_next();
            assert!(form.name.touched);
            assert!(!form.email.touched);
            assert_eq!(
                form.visible_error(FieldName::Name).map(|e| e.message),
                Some("Name is required!")
            );
            assert!(form.visible_error(FieldName::Email).is_none());
        }

        #[test]
        fn test_focus_prev_also_blurs() {
            let mut form = ContactForm::new();
            form.set_active_field(2);
            form.focus_prev();
            assert!(form.phone.touched);
            assert_eq!(form.active_field_name(), Some(FieldName::Email));
        }

        #[test]
        fn test_touch_all_reveals_every_error() {
            let mut form = ContactForm::new();
            form.touch_all();
            let visible = FieldName::ALL
                .into_iter()
                .filter(|name| form.visible_error(*name).is_some())
                .count();
            assert_eq!(visible, 5);
        }
    }

    #[test]
    fn test_filled_form_is_valid() {
        let form = filled_form();
        assert!(form.errors().is_valid());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = filled_form();
        form.touch_all();
        form.set_active_field(4);
        form.reset();
        assert_eq!(form.values(), FormValues::default());
        assert_eq!(form.active_field_index, 0);
        assert!(FieldName::ALL.iter().all(|name| !form.field(*name).touched));
    }
}
