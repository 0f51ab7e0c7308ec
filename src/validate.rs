//! Client-side validation of a [`LeadInput`].

use std::{collections::BTreeMap, fmt};

use lazy_static::lazy_static;
use regex::Regex;

use crate::input::{Field, LeadInput};

lazy_static! {
    /// `local@domain.tld`, each part free of whitespace and `@`.
    static ref EMAIL: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// Empty after trimming.
    Required,
    /// Present but not shaped like an email address.
    InvalidFormat,
}

impl ValidationErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationErrorKind::Required => "required",
            ValidationErrorKind::InvalidFormat => "invalid_format",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field errors of one validation pass. Empty means the input is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<Field, ValidationErrorKind>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<ValidationErrorKind> {
        self.errors.get(&field).copied()
    }

    pub fn insert(&mut self, field: Field, kind: ValidationErrorKind) {
        self.errors.insert(field, kind);
    }

    /// Drop the error of a single field, returning it if there was one.
    pub fn clear(&mut self, field: Field) -> Option<ValidationErrorKind> {
        self.errors.remove(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationErrorKind)> + '_ {
        self.errors.iter().map(|(field, kind)| (*field, *kind))
    }

    /// Inline message shown under the field, if it has an error.
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.get(field).map(|kind| message_for(field, kind))
    }
}

impl FromIterator<(Field, ValidationErrorKind)> for ValidationResult {
    fn from_iter<T: IntoIterator<Item = (Field, ValidationErrorKind)>>(iter: T) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

/// Copy shown for a field error.
pub fn message_for(field: Field, kind: ValidationErrorKind) -> &'static str {
    match (field, kind) {
        (Field::Name, _) => "Name is required",
        (Field::Email, ValidationErrorKind::Required) => "Email is required",
        (Field::Email, ValidationErrorKind::InvalidFormat) => "Please enter a valid email address",
        (Field::Phone, _) => "Phone number is required",
        (Field::Note, _) => "Please check this field",
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Validate the three required fields. The note is never validated.
pub fn validate(input: &LeadInput) -> ValidationResult {
    let mut result = ValidationResult::default();

    if input.name.trim().is_empty() {
        result.insert(Field::Name, ValidationErrorKind::Required);
    }

    if input.email.trim().is_empty() {
        result.insert(Field::Email, ValidationErrorKind::Required);
    } else if !is_valid_email(&input.email) {
        result.insert(Field::Email, ValidationErrorKind::InvalidFormat);
    }

    if input.phone.trim().is_empty() {
        result.insert(Field::Phone, ValidationErrorKind::Required);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> LeadInput {
        LeadInput::new("Jane Doe", "jane@x.com", "9999999999")
    }

    #[test]
    fn valid_input_has_no_errors() {
        let result = validate(&valid());
        assert!(result.is_valid());
        assert_eq!(result.len(), 0);
    }

    #[test]
    fn blank_name_flags_only_name() {
        for name in ["", " ", "\t\n", "   "] {
            let mut input = valid();
            input.name = name.to_string();

            let result = validate(&input);
            assert_eq!(result.len(), 1, "name {name:?}");
            assert_eq!(result.get(Field::Name), Some(ValidationErrorKind::Required));
        }
    }

    #[test]
    fn blank_phone_is_required() {
        let mut input = valid();
        input.phone = "  ".into();
        assert_eq!(
            validate(&input).get(Field::Phone),
            Some(ValidationErrorKind::Required)
        );
    }

    #[test]
    fn any_non_blank_phone_is_accepted() {
        let mut input = valid();
        input.phone = "call me maybe".into();
        assert!(validate(&input).is_valid());
    }

    #[test]
    fn blank_email_is_required_not_invalid() {
        let mut input = valid();
        input.email = "   ".into();
        assert_eq!(
            validate(&input).get(Field::Email),
            Some(ValidationErrorKind::Required)
        );
    }

    #[test]
    fn malformed_emails_are_invalid_format() {
        for email in [
            "bad",
            "jane@",
            "@x.com",
            "jane@x",
            "jane@x.",
            "jane@.",
            "jane x@y.com",
            "jane@@x.com",
            "jane@x@y.com",
            " jane@x.com",
            "jane@x.com ",
        ] {
            let mut input = valid();
            input.email = email.to_string();
            assert_eq!(
                validate(&input).get(Field::Email),
                Some(ValidationErrorKind::InvalidFormat),
                "email {email:?}"
            );
        }
    }

    #[test]
    fn well_formed_emails_pass() {
        for email in ["jane@x.com", "a@b.c", "first.last@sub.domain.org", "j+tag@x.co.in"] {
            assert!(is_valid_email(email), "email {email:?}");
        }
    }

    #[test]
    fn all_fields_wrong() {
        let input = LeadInput::new("", "bad", "");
        let result = validate(&input);

        let expected: ValidationResult = [
            (Field::Name, ValidationErrorKind::Required),
            (Field::Email, ValidationErrorKind::InvalidFormat),
            (Field::Phone, ValidationErrorKind::Required),
        ]
        .into_iter()
        .collect();
        assert_eq!(result, expected);
        assert_eq!(result.message(Field::Name), Some("Name is required"));
        assert_eq!(
            result.message(Field::Email),
            Some("Please enter a valid email address")
        );
        assert_eq!(result.message(Field::Phone), Some("Phone number is required"));
    }

    #[test]
    fn validation_is_idempotent() {
        let input = LeadInput::new(" ", "x@", "1");
        assert_eq!(validate(&input), validate(&input));
    }

    #[test]
    fn note_is_never_validated() {
        let input = valid().with_note("");
        assert!(validate(&input).is_valid());
    }

    #[test]
    fn kinds_render_wire_names() {
        assert_eq!(ValidationErrorKind::Required.to_string(), "required");
        assert_eq!(ValidationErrorKind::InvalidFormat.to_string(), "invalid_format");
    }
}
