//! Toast notifications reporting the outcome of a submit attempt.

use std::borrow::Cow;

pub const INVALID_INPUT: &str = "Please fill in all required fields correctly";
pub const SUBMITTED: &str = "Thank you! Our team will contact you within 24 hours.";
pub const SUBMIT_FAILED: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationLevel {
    Success,
    Error,
}

impl NotificationLevel {
    /// CSS modifier used by the toast host.
    pub fn as_class(self) -> &'static str {
        match self {
            NotificationLevel::Success => "success",
            NotificationLevel::Error => "error",
        }
    }
}

/// A transient message for the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    level: NotificationLevel,
    message: Cow<'static, str>,
}

impl Notification {
    pub fn success(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn level(&self) -> NotificationLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}
