//! Contact form value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one field of the contact form.
///
/// Ordering follows the on-screen layout, so collections keyed by
/// `FieldName` iterate top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Address,
    Password,
    Comment,
}

impl FieldName {
    /// All fields in layout order
    pub const ALL: [FieldName; 6] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Address,
        FieldName::Password,
        FieldName::Comment,
    ];

    /// Stable key used in logs and serialized values
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::Address => "address",
            FieldName::Password => "password",
            FieldName::Comment => "comment",
        }
    }

    /// Label shown on the field border
    pub fn label(self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::Email => "Email Address",
            FieldName::Phone => "Phone number",
            FieldName::Address => "Address",
            FieldName::Password => "Password",
            FieldName::Comment => "Your message",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, FieldName::Comment)
    }

    /// Whether the value must be masked when rendered
    pub fn is_secret(self) -> bool {
        matches!(self, FieldName::Password)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of everything the user typed into the form
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub password: String,
    #[serde(default)]
    pub comment: String,
}

impl FormValues {
    /// Get the value of a single field
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::Address => &self.address,
            FieldName::Password => &self.password,
            FieldName::Comment => &self.comment,
        }
    }
}

// Password stays out of logs and panic messages.
impl fmt::Debug for FormValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormValues")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("address", &self.address)
            .field("password", &"<redacted>")
            .field("comment", &self.comment)
            .finish()
    }
}
