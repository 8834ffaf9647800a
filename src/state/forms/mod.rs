//! Form domain layer
//!
//! Type-safe values, fields and cursor state for the contact form.

mod field;
mod form_state;
mod values;

pub use field::FormField;
pub use form_state::ContactForm;
pub use values::{FieldName, FormValues};

#[cfg(test)]
pub use form_state::SUBMIT_BUTTON_INDEX;
