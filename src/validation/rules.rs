//! Per-field rule chains
//!
//! Each field owns an ordered list of predicate + message pairs. A rule
//! passes when its predicate returns `true`; the first failing rule of a
//! field is the one reported.

use super::result::{FieldError, FieldErrorKind};
use crate::state::FieldName;
use email_address::EmailAddress;
use regex::Regex;
use std::sync::LazyLock;

/// Phone numbers: `+` and 10-16 digits, bare 10-16 digits, or `+NN(N)` and
/// 10-16 digits. Only the first alternative carries `^` and only the last
/// carries `$`, so matching is effectively "contains 10+ consecutive digits".
const PHONE_PATTERN: &str = r"^[+][0-9]{10,16}|[0-9]{10,16}|[+][0-9]{2}[(][0-9]{1}[)][0-9]{10,16}$";

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern is a valid regex"));

pub const NAME_MIN_CHARS: usize = 6;
pub const PASSWORD_MIN_CHARS: usize = 8;

/// One link in a field's validation chain
#[derive(Clone, Copy)]
pub struct Rule {
    pub kind: FieldErrorKind,
    pub message: &'static str,
    check: fn(&str) -> bool,
}

impl Rule {
    const fn new(kind: FieldErrorKind, message: &'static str, check: fn(&str) -> bool) -> Self {
        Self {
            kind,
            message,
            check,
        }
    }

    /// Run the predicate, returning the error when it fails
    pub fn apply(&self, value: &str) -> Option<FieldError> {
        if (self.check)(value) {
            None
        } else {
            Some(FieldError {
                kind: self.kind,
                message: self.message,
            })
        }
    }
}

const NAME_RULES: &[Rule] = &[
    Rule::new(FieldErrorKind::EmptyField, "Name is required!", is_present),
    Rule::new(
        FieldErrorKind::TooShort,
        "Username is too short!",
        has_min_chars::<NAME_MIN_CHARS>,
    ),
];

const EMAIL_RULES: &[Rule] = &[
    Rule::new(
        FieldErrorKind::InvalidFormat,
        "Invalid email address!",
        is_email_or_empty,
    ),
    Rule::new(FieldErrorKind::EmptyField, "Email is required!", is_present),
];

const PHONE_RULES: &[Rule] = &[
    Rule::new(FieldErrorKind::EmptyField, "Phone is required!", is_present),
    Rule::new(FieldErrorKind::InvalidFormat, "Invalid phone!", is_phone),
];

const ADDRESS_RULES: &[Rule] = &[Rule::new(
    FieldErrorKind::EmptyField,
    "Address is required!",
    is_present,
)];

const PASSWORD_RULES: &[Rule] = &[
    Rule::new(
        FieldErrorKind::EmptyField,
        "Password is required!",
        is_present,
    ),
    Rule::new(
        FieldErrorKind::TooShort,
        "Password must be 8 characters long!",
        has_min_chars::<PASSWORD_MIN_CHARS>,
    ),
    Rule::new(
        FieldErrorKind::MissingDigit,
        "Password requires a number!",
        has_digit,
    ),
    Rule::new(
        FieldErrorKind::MissingLowercase,
        "Password requires a lowercase letter!",
        has_lowercase,
    ),
    Rule::new(
        FieldErrorKind::MissingUppercase,
        "Password requires an uppercase letter!",
        has_uppercase,
    ),
    Rule::new(
        FieldErrorKind::MissingSymbol,
        "Password requires a symbol!",
        has_symbol,
    ),
];

/// Rule chain for a field, in evaluation order
pub fn rules_for(field: FieldName) -> &'static [Rule] {
    match field {
        FieldName::Name => NAME_RULES,
        FieldName::Email => EMAIL_RULES,
        FieldName::Phone => PHONE_RULES,
        FieldName::Address => ADDRESS_RULES,
        FieldName::Password => PASSWORD_RULES,
        FieldName::Comment => &[],
    }
}

// Only the empty string is blank; whitespace counts as input.
fn is_present(value: &str) -> bool {
    !value.is_empty()
}

fn has_min_chars<const N: usize>(value: &str) -> bool {
    value.chars().count() >= N
}

// Empty input is left to the required rule. Format is RFC 5322.
fn is_email_or_empty(value: &str) -> bool {
    value.is_empty() || EmailAddress::is_valid(value)
}

fn is_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

fn has_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

fn has_lowercase(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_lowercase())
}

fn has_uppercase(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_uppercase())
}

/// Anything outside the ASCII word class `[A-Za-z0-9_]`
fn has_symbol(value: &str) -> bool {
    value.chars().any(|c| !(c.is_ascii_alphanumeric() || c == '_'))
}

#[cfg(test)]
mod tests {
    use super::*;

    mod phone {
        use super::*;

        #[test]
        fn test_plus_prefixed_digits() {
            assert!(is_phone("+12345678901"));
            assert!(is_phone("+1234567890123456"));
        }

        #[test]
        fn test_bare_digits() {
            assert!(is_phone("1234567890"));
        }

        #[test]
        fn test_country_code_with_trunk_digit() {
            assert!(is_phone("+49(0)1511234567"));
        }

        #[test]
        fn test_too_few_digits() {
            assert!(!is_phone("123456789"));
            assert!(!is_phone("+123456789"));
            assert!(!is_phone("555-123-4567"));
        }

        #[test]
        fn test_unanchored_middle_alternative_accepts_surrounding_text() {
            // Kept as observed: a 10-digit run anywhere in the input matches.
            assert!(is_phone("call me at 1234567890 please"));
            assert!(is_phone("12345678901234567890"));
        }
    }

    mod password {
        use super::*;

        #[test]
        fn test_character_classes() {
            assert!(has_digit("abc1"));
            assert!(!has_digit("abc"));
            assert!(has_lowercase("ABCd"));
            assert!(!has_lowercase("ABC1"));
            assert!(has_uppercase("abcD"));
            assert!(!has_uppercase("abc1"));
        }

        #[test]
        fn test_symbol_excludes_underscore() {
            assert!(!has_symbol("Abc_def1"));
            assert!(has_symbol("Abc def1"));
            assert!(has_symbol("Abcdef1!"));
        }

        #[test]
        fn test_non_ascii_letter_counts_as_symbol() {
            assert!(has_symbol("Abcdéf1"));
        }
    }

    #[test]
    fn test_min_chars_counts_chars_not_bytes() {
        assert!(has_min_chars::<6>("éééééé"));
        assert!(!has_min_chars::<6>("ééééé"));
    }

    #[test]
    fn test_email_or_empty() {
        assert!(is_email_or_empty(""));
        assert!(is_email_or_empty("a@b.com"));
        assert!(!is_email_or_empty("not-an-email"));
        assert!(!is_email_or_empty("a@@b.com"));
    }

    #[test]
    fn test_email_accepts_rfc_5322_forms() {
        // RFC 5322 rules, wider than a plain `local@host.tld` pattern
        assert!(is_email_or_empty("\"john..doe\"@example.com"));
        assert!(is_email_or_empty("jsmith@[192.168.2.1]"));
        assert!(is_email_or_empty("pelé@example.com"));
    }

    #[test]
    fn test_min_chars_counts_scalar_values_not_utf16_units() {
        // Three astral-plane chars: six UTF-16 units, still too short
        assert!(!has_min_chars::<6>("😀😀😀"));
        assert!(has_min_chars::<6>("😀😀😀😀😀😀"));
    }

    #[test]
    fn test_whitespace_is_present() {
        assert!(is_present(" "));
        assert!(!is_present(""));
    }

    #[test]
    fn test_comment_has_no_rules() {
        assert!(rules_for(FieldName::Comment).is_empty());
    }

    #[test]
    fn test_password_chain_order() {
        let kinds: Vec<_> = rules_for(FieldName::Password)
            .iter()
            .map(|rule| rule.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                FieldErrorKind::EmptyField,
                FieldErrorKind::TooShort,
                FieldErrorKind::MissingDigit,
                FieldErrorKind::MissingLowercase,
                FieldErrorKind::MissingUppercase,
                FieldErrorKind::MissingSymbol,
            ]
        );
    }
}
