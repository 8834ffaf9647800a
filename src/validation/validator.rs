//! Contact form schema evaluation

use super::result::{FieldError, ValidationResult};
use super::rules::rules_for;
use crate::state::{FieldName, FormValues};

/// Validate a single field value, returning the first failing rule
pub fn validate_field(field: FieldName, value: &str) -> Option<FieldError> {
    rules_for(field).iter().find_map(|rule| rule.apply(value))
}

/// Validate every field of a form snapshot.
///
/// Pure: the same values always produce the same result.
pub fn validate(values: &FormValues) -> ValidationResult {
    let mut result = ValidationResult::default();
    for field in FieldName::ALL {
        if let Some(error) = validate_field(field, values.get(field)) {
            result.insert(field, error);
        }
    }
    result
}

/// Check whether a form snapshot passes every rule
pub fn is_valid(values: &FormValues) -> bool {
    validate(values).is_valid()
}
