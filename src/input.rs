use std::{fmt, str::FromStr};

use serde::Serialize;

/// A field of the lead form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    /// Optional free text. The legacy page names this input `message`.
    Note,
}

impl Field {
    /// The required fields, in the order the form renders them.
    pub const REQUIRED: [Field; 3] = [Field::Name, Field::Email, Field::Phone];

    /// Name of the matching form input.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Note => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a form input name does not map to a [`Field`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "phone" => Ok(Field::Phone),
            "message" | "note" => Ok(Field::Note),
            other => Err(UnknownField(other.to_owned())),
        }
    }
}

/// What the visitor typed, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub note: Option<String>,
}

impl LeadInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Note => self.note.as_deref().unwrap_or_default(),
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Note => self.note = Some(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.note.as_deref().is_none_or(str::is_empty)
    }

    /// Build the request body. A missing or empty note is replaced by
    /// `default_note`; anything else is sent as typed.
    pub fn to_payload(&self, default_note: &str) -> LeadPayload {
        let company = match self.note.as_deref() {
            Some(note) if !note.is_empty() => note.to_owned(),
            _ => default_note.to_owned(),
        };

        LeadPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            company,
        }
    }
}

/// JSON body of `POST /api/leads`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Carries the visitor's note; the backend stores it as `company`.
    pub company: String,
}
