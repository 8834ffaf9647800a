//! Contact form validation
//!
//! - `rules`: ordered rule chains per field
//! - `validator`: evaluates the chains against a form snapshot
//! - `result`: per-field error map

mod result;
mod rules;
mod validator;

pub use result::{FieldError, ValidationResult};
pub use validator::{is_valid, validate};

#[cfg(test)]
pub use result::FieldErrorKind;
#[cfg(test)]
pub use validator::validate_field;
