//! Validation result types

use crate::state::FieldName;
use std::collections::BTreeMap;
use std::fmt;

/// Category of a field validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldErrorKind {
    EmptyField,
    TooShort,
    InvalidFormat,
    MissingDigit,
    MissingLowercase,
    MissingUppercase,
    MissingSymbol,
}

/// A single failed rule, with the message shown under the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

/// Errors for every invalid field of a form snapshot.
///
/// A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<FieldName, FieldError>,
}

impl ValidationResult {
    pub(super) fn insert(&mut self, field: FieldName, error: FieldError) {
        self.errors.insert(field, error);
    }

    /// Check if all fields passed validation
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the error for a field, if it failed
    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Number of invalid fields
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over invalid fields in layout order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    /// First invalid field in layout order (for focusing)
    pub fn first_invalid(&self) -> Option<FieldName> {
        self.iter().next().map(|(field, _)| field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn error(kind: FieldErrorKind, message: &'static str) -> FieldError {
        FieldError { kind, message }
    }

    #[test]
    fn test_default_is_valid() {
        let result = ValidationResult::default();
        assert!(result.is_valid());
        assert_eq!(result.len(), 0);
        assert!(result.first_invalid().is_none());
    }

    #[test]
    fn test_first_invalid_follows_layout_order() {
        let mut result = ValidationResult::default();
        result.insert(
            FieldName::Password,
            error(FieldErrorKind::TooShort, "too short"),
        );
        result.insert(FieldName::Email, error(FieldErrorKind::EmptyField, "empty"));

        assert!(!result.is_valid());
        assert_eq!(result.first_invalid(), Some(FieldName::Email));
        let fields: Vec<_> = result.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![FieldName::Email, FieldName::Password]);
    }

    #[test]
    fn test_display_is_message() {
        let err = error(FieldErrorKind::InvalidFormat, "Invalid phone!");
        assert_eq!(err.to_string(), "Invalid phone!");
    }
}
